//! Conversion of a formula to conjunctive normal form, by distribution.
//!
//! No auxiliary variables are introduced, so the clause set is equivalent to the formula (and not only equisatisfiable).
//! The cost is that the clause set may be exponentially larger than the formula, and so distribution stops with an error after some limit on the count of clauses.
//!
//! Negations are pushed inward by tracking the polarity of each subformula, rather than by first rewriting the formula to negation normal form.
//! For a subformula of positive polarity the clauses of the subformula are built, and for a subformula of negative polarity the clauses of its negation are built.
//!
//! Clauses are tidied as they are built: repeated literals are merged, and tautologies (a clause with some literal and its negation) are dropped.
//! Once built, repeated clauses are dropped, keeping the first occurrence.

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{NamedClause, NamedClauseSet},
        formula::{Connective, Formula},
        literal::NamedLiteral,
    },
    types::err::{self},
};

struct Distributor {
    clause_limit: usize,
}

impl Distributor {
    fn check(&self, clauses: &NamedClauseSet) -> Result<(), err::ConvertError> {
        match clauses.len() > self.clause_limit {
            true => Err(err::ConvertError::ClauseLimit(self.clause_limit)),
            false => Ok(()),
        }
    }

    fn conjoin(
        &self,
        mut left: NamedClauseSet,
        right: NamedClauseSet,
    ) -> Result<NamedClauseSet, err::ConvertError> {
        left.extend(right);
        self.check(&left)?;
        Ok(left)
    }

    fn disjoin(
        &self,
        left: NamedClauseSet,
        right: NamedClauseSet,
    ) -> Result<NamedClauseSet, err::ConvertError> {
        let size = left
            .len()
            .saturating_mul(right.len())
            .min(self.clause_limit.saturating_add(1));
        let mut product = Vec::with_capacity(size);
        for left_clause in &left {
            for right_clause in &right {
                if let Some(clause) = merge(left_clause, right_clause) {
                    product.push(clause);
                    self.check(&product)?;
                }
            }
        }
        Ok(product)
    }

    /// The clauses of the formula, if positive, or of the negation of the formula, otherwise.
    fn clauses(
        &self,
        formula: &Formula,
        positive: bool,
    ) -> Result<NamedClauseSet, err::ConvertError> {
        match formula {
            Formula::Top | Formula::Bottom => {
                match positive == matches!(formula, Formula::Top) {
                    true => Ok(vec![]),
                    false => Ok(vec![vec![]]),
                }
            }

            Formula::Atom(name) => Ok(vec![vec![NamedLiteral::new(name.as_str(), positive)]]),

            Formula::Not(inner) => self.clauses(inner, !positive),

            Formula::Binary(connective, left, right) => match (connective, positive) {
                (Connective::And, true) | (Connective::Or, false) => self.conjoin(
                    self.clauses(left, positive)?,
                    self.clauses(right, positive)?,
                ),

                (Connective::Or, true) | (Connective::And, false) => self.disjoin(
                    self.clauses(left, positive)?,
                    self.clauses(right, positive)?,
                ),

                (Connective::Implies, true) => {
                    self.disjoin(self.clauses(left, false)?, self.clauses(right, true)?)
                }

                (Connective::Implies, false) => {
                    self.conjoin(self.clauses(left, true)?, self.clauses(right, false)?)
                }

                // a <-> b is (-a | b) & (a | -b), and a ^ b is the negation of a <-> b.
                (Connective::Equiv, _) | (Connective::Xor, _) => {
                    let equivalence = positive == (*connective == Connective::Equiv);

                    let left_positive = self.clauses(left, true)?;
                    let left_negative = self.clauses(left, false)?;
                    let right_positive = self.clauses(right, true)?;
                    let right_negative = self.clauses(right, false)?;

                    match equivalence {
                        true => self.conjoin(
                            self.disjoin(left_negative, right_positive)?,
                            self.disjoin(left_positive, right_negative)?,
                        ),
                        false => self.conjoin(
                            self.disjoin(left_positive, right_positive)?,
                            self.disjoin(left_negative, right_negative)?,
                        ),
                    }
                }
            },
        }
    }
}

/// The disjunction of two clauses, or nothing if the disjunction is a tautology.
fn merge(left: &NamedClause, right: &NamedClause) -> Option<NamedClause> {
    let mut clause = left.clone();
    for literal in right {
        if clause.contains(&literal.negate()) {
            return None;
        }
        if !clause.contains(literal) {
            clause.push(literal.clone());
        }
    }
    Some(clause)
}

/// Converts a formula to a clause set over the names of the formula.
pub fn formula_to_cnf(
    formula: &Formula,
    clause_limit: usize,
) -> Result<NamedClauseSet, err::ConvertError> {
    let distributor = Distributor { clause_limit };
    let clauses = distributor.clauses(formula, true)?;

    let mut seen = HashSet::new();
    let tidy = clauses
        .into_iter()
        .filter(|clause| {
            let mut key = clause.clone();
            key.sort_unstable();
            seen.insert(key)
        })
        .collect::<NamedClauseSet>();

    log::debug!(target: targets::CONVERT, "CNF of {} clauses", tidy.len());
    Ok(tidy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::formula::parse;

    fn cnf(text: &str) -> NamedClauseSet {
        formula_to_cnf(&parse(text).unwrap(), 1024).unwrap()
    }

    fn clause(literals: &[&str]) -> NamedClause {
        literals
            .iter()
            .map(|literal| match literal.strip_prefix('-') {
                Some(name) => NamedLiteral::new(name, false),
                None => NamedLiteral::new(*literal, true),
            })
            .collect()
    }

    #[test]
    fn distribution() {
        assert_eq!(
            cnf("a | b & c"),
            vec![clause(&["a", "b"]), clause(&["a", "c"])]
        );
        assert_eq!(cnf("-(a | b)"), vec![clause(&["-a"]), clause(&["-b"])]);
        assert_eq!(cnf("a -> b"), vec![clause(&["-a", "b"])]);
    }

    #[test]
    fn equivalence_and_xor() {
        assert_eq!(
            cnf("a <-> b"),
            vec![clause(&["-a", "b"]), clause(&["a", "-b"])]
        );
        assert_eq!(cnf("a ^ b"), vec![clause(&["a", "b"]), clause(&["-a", "-b"])]);
        assert_eq!(cnf("-(a ^ b)"), cnf("a <-> b"));
    }

    #[test]
    fn constants() {
        assert_eq!(cnf("true"), NamedClauseSet::new());
        assert_eq!(cnf("false"), vec![clause(&[])]);
        assert_eq!(cnf("a | false"), vec![clause(&["a"])]);
        assert_eq!(cnf("a | true"), NamedClauseSet::new());
        assert_eq!(cnf("-true & a"), vec![clause(&[]), clause(&["a"])]);
    }

    #[test]
    fn tidying() {
        assert_eq!(cnf("a | -a"), NamedClauseSet::new());
        assert_eq!(cnf("a | a | b"), vec![clause(&["a", "b"])]);
        assert_eq!(cnf("(a | b) & (b | a) & a"), vec![clause(&["a", "b"]), clause(&["a"])]);
    }

    #[test]
    fn equivalent_to_the_formula() {
        let formula = parse("(p -> q) <-> (-r ^ (p & s))").unwrap();
        let clauses = formula_to_cnf(&formula, 1024).unwrap();
        let atoms = formula.atoms();

        for row in 0..(1 << atoms.len()) {
            let value_of = |name: &str| {
                let index = atoms.iter().position(|atom| atom == name).unwrap();
                (row >> index) & 1 == 1
            };
            let cnf_value = clauses.iter().all(|clause| {
                clause
                    .iter()
                    .any(|literal| value_of(literal.name.as_str()) == literal.polarity)
            });
            assert_eq!(formula.evaluate(&value_of), cnf_value);
        }
    }

    #[test]
    fn clause_limit() {
        let formula = parse("(a & b) | (c & d) | (e & f)").unwrap();
        assert!(formula_to_cnf(&formula, 8).is_ok());
        assert_eq!(
            formula_to_cnf(&formula, 7),
            Err(err::ConvertError::ClauseLimit(7))
        );
    }

    fn conjunction(prefix: &str, count: usize) -> String {
        let atoms = (0..count).map(|index| format!("{prefix}{index}")).collect::<Vec<_>>();
        format!("({})", atoms.join(" & "))
    }

    #[test]
    fn large_products() {
        let text = format!("{} | {}", conjunction("a", 300), conjunction("b", 300));
        let formula = parse(&text).unwrap();

        assert_eq!(
            formula_to_cnf(&formula, 16),
            Err(err::ConvertError::ClauseLimit(16))
        );
        assert_eq!(
            formula_to_cnf(&formula, usize::MAX).map(|clauses| clauses.len()),
            Ok(90_000)
        );
    }

    #[test]
    fn long_chains() {
        let formula = parse(&conjunction("a", 5000)).unwrap();
        let clauses = formula_to_cnf(&formula, usize::MAX).unwrap();
        assert_eq!(clauses.len(), 5000);
        assert_eq!(clauses[4999], clause(&["a4999"]));

        let formula = parse(&format!("-{}", conjunction("a", 1000))).unwrap();
        let clauses = formula_to_cnf(&formula, usize::MAX).unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 1000);
    }
}

//! Pretty printing of clause sets and formulas.
//!
//! Clause sets print one clause to a line, with literals separated by spaces and negation written `-`.
//! The empty clause prints as `[]`.

use crate::structures::{
    clause::{Clause, NamedClause},
    formula::Formula,
    literal::label,
};

/// Something the converter knows how to print.
#[derive(Clone, Copy, Debug)]
pub enum Printable<'a> {
    /// Integer clauses, labelled with names if names are given.
    Clauses(&'a [Clause]),

    NamedClauses(&'a [NamedClause]),

    Formula(&'a Formula),
}

const EMPTY_CLAUSE: &str = "[]";

fn print_lines<I: Iterator<Item = Vec<String>>>(clauses: I) -> String {
    clauses
        .map(|literals| match literals.is_empty() {
            true => EMPTY_CLAUSE.to_string(),
            false => literals.join(" "),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn parsed_print(structure: Printable<'_>, names: &[String]) -> String {
    match structure {
        Printable::Clauses(clauses) => print_lines(clauses.iter().map(|clause| {
            clause
                .iter()
                .map(|literal| label(*literal, names))
                .collect()
        })),

        Printable::NamedClauses(clauses) => print_lines(
            clauses
                .iter()
                .map(|clause| clause.iter().map(|literal| literal.to_string()).collect()),
        ),

        Printable::Formula(formula) => formula.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::NamedLiteral;

    #[test]
    fn integer_clauses() {
        let clauses = vec![vec![1, 2], vec![-1, -2], vec![]];
        assert_eq!(
            parsed_print(Printable::Clauses(&clauses), &[]),
            "1 2\n-1 -2\n[]"
        );

        let names = vec!["p".to_string(), "q".to_string()];
        assert_eq!(
            parsed_print(Printable::Clauses(&clauses), &names),
            "p q\n-p -q\n[]"
        );
    }

    #[test]
    fn named_clauses() {
        let clauses = vec![vec![NamedLiteral::new("p", false), NamedLiteral::new("q", true)]];
        assert_eq!(parsed_print(Printable::NamedClauses(&clauses), &[]), "-p q");
        assert_eq!(parsed_print(Printable::NamedClauses(&[]), &[]), "");
    }

    #[test]
    fn formulas() {
        let formula = crate::parse::formula::parse("-(p & q) -> r").unwrap();
        assert_eq!(
            parsed_print(Printable::Formula(&formula), &[]),
            "(-(p & q) -> r)"
        );
    }
}

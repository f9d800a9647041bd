//! A recursive Davis–Putnam–Logemann–Loveland solver.
//!
//! Roughly, the search is:
//!
//! ```none
//!   +-----------+   conflict
//! ->| propagate |------------> unsatisfiable on this branch
//!   +-----------+
//!         |
//!         | no conflict
//!         ⌄
//!   +--------+   nothing to decide
//!   | choose |--------------------> satisfiable
//!   +--------+
//!         |
//!         | some variable v
//!         ⌄
//!   search with v true, and if that fails search with v false
//! ```
//!
//! Propagation applies unit clauses until no clause is unit, and with [SolverAlgorithm::Better] also settles pure literals.
//! Each branch works on its own copy of the valuation, so backtracking is a matter of dropping the copy.
//!
//! Variables left without a value once every clause is satisfied are given the value false.

use crate::{
    config::{SolverAlgorithm, TraceMethod},
    misc::log::targets::{self},
    solve::{SolveOutcome, Solver, Stats},
    structures::{
        clause::Clause,
        literal::{label, literal_of, variable_of, Literal, Variable, MAX_VARIABLE},
        problem::SolveResult,
    },
    types::err::{self},
};

/// A partial valuation, where `valuation[v - 1]` is the value of variable `v`.
type Valuation = Vec<Option<bool>>;

fn value_of(literal: Literal, valuation: &Valuation) -> Option<bool> {
    valuation[variable_of(literal) - 1].map(|value| value == (literal > 0))
}

fn assign(literal: Literal, valuation: &mut Valuation) {
    valuation[variable_of(literal) - 1] = Some(literal > 0);
}

enum ClauseStatus {
    Satisfied,
    Conflict,
    Unit(Literal),
    Open,
}

fn status(clause: &Clause, valuation: &Valuation) -> ClauseStatus {
    let mut unassigned: Option<Literal> = None;
    let mut count = 0;

    for literal in clause {
        match value_of(*literal, valuation) {
            Some(true) => return ClauseStatus::Satisfied,
            Some(false) => {}
            None => {
                if unassigned != Some(*literal) {
                    count += 1;
                    unassigned = Some(*literal);
                }
            }
        }
    }

    match (count, unassigned) {
        (0, _) => ClauseStatus::Conflict,
        (1, Some(literal)) => ClauseStatus::Unit(literal),
        _ => ClauseStatus::Open,
    }
}

struct Search<'s> {
    clauses: &'s [Clause],
    algorithm: SolverAlgorithm,
    trace_method: TraceMethod,
    names: &'s [String],
    depth: usize,
    trace: Vec<String>,
    stats: Stats,
}

impl<'s> Search<'s> {
    fn note(&mut self, least: TraceMethod, message: impl FnOnce() -> String) {
        if self.trace_method >= least {
            let line = format!("{}{}", "  ".repeat(self.depth), message());
            log::trace!(target: targets::SOLVE, "{line}");
            self.trace.push(line);
        }
    }

    /// Applies unit clauses (and pure literals, if the algorithm uses these) until there are none.
    ///
    /// Returns false on finding a clause false on the valuation.
    fn propagate(&mut self, valuation: &mut Valuation) -> bool {
        loop {
            let mut changed = false;

            for clause in self.clauses {
                match status(clause, valuation) {
                    ClauseStatus::Conflict => {
                        self.stats.conflicts += 1;
                        self.note(TraceMethod::Full, || "conflict".to_string());
                        return false;
                    }

                    ClauseStatus::Unit(literal) => {
                        assign(literal, valuation);
                        self.stats.propagations += 1;
                        let names = self.names;
                        self.note(TraceMethod::Full, || format!("unit {}", label(literal, names)));
                        changed = true;
                    }

                    ClauseStatus::Satisfied | ClauseStatus::Open => {}
                }
            }

            if self.algorithm == SolverAlgorithm::Better {
                for literal in self.pure_literals(valuation) {
                    assign(literal, valuation);
                    let names = self.names;
                    self.note(TraceMethod::Full, || format!("pure {}", label(literal, names)));
                    changed = true;
                }
            }

            if !changed {
                return true;
            }
        }
    }

    /// Unassigned variables which occur with only one polarity in clauses not yet satisfied.
    fn pure_literals(&self, valuation: &Valuation) -> Vec<Literal> {
        // (occurs positively, occurs negatively), per variable.
        let mut polarities = vec![(false, false); valuation.len()];

        for clause in self.open_clauses(valuation) {
            for literal in clause {
                if value_of(*literal, valuation).is_none() {
                    let entry = &mut polarities[variable_of(*literal) - 1];
                    match *literal > 0 {
                        true => entry.0 = true,
                        false => entry.1 = true,
                    }
                }
            }
        }

        polarities
            .iter()
            .enumerate()
            .filter_map(|(index, polarity)| match polarity {
                (true, false) => Some(literal_of(index + 1, true)),
                (false, true) => Some(literal_of(index + 1, false)),
                _ => None,
            })
            .collect()
    }

    fn open_clauses<'v>(&self, valuation: &'v Valuation) -> impl Iterator<Item = &'s Clause> + 'v
    where
        's: 'v,
    {
        let clauses = self.clauses;
        clauses
            .iter()
            .filter(move |clause| !matches!(status(clause, valuation), ClauseStatus::Satisfied))
    }

    /// A variable to decide on, or nothing if every clause is satisfied.
    fn choose(&self, valuation: &Valuation) -> Option<Variable> {
        let mut occurrences = vec![0_usize; valuation.len()];

        for clause in self.open_clauses(valuation) {
            for literal in clause {
                if value_of(*literal, valuation).is_none() {
                    occurrences[variable_of(*literal) - 1] += 1;
                }
            }
        }

        let candidates = occurrences
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, count)| (index + 1, *count));

        match self.algorithm {
            SolverAlgorithm::Naive => candidates.map(|(variable, _)| variable).next(),

            // The first of the most frequent, as max_by_key returns the last maximum.
            SolverAlgorithm::Better => candidates
                .rev()
                .max_by_key(|(_, count)| *count)
                .map(|(variable, _)| variable),
        }
    }

    fn search(&mut self, valuation: &mut Valuation) -> bool {
        if !self.propagate(valuation) {
            return false;
        }

        let Some(variable) = self.choose(valuation) else {
            return true;
        };

        for polarity in [true, false] {
            let literal = literal_of(variable, polarity);
            let names = self.names;

            let mut branch = valuation.clone();
            assign(literal, &mut branch);
            self.stats.decisions += 1;
            self.note(TraceMethod::Decisions, || format!("decide {}", label(literal, names)));

            self.depth += 1;
            let satisfiable = self.search(&mut branch);
            self.depth -= 1;

            if satisfiable {
                *valuation = branch;
                return true;
            }

            self.note(TraceMethod::Decisions, || format!("backtrack {}", label(literal, names)));
        }

        false
    }
}

/// The default solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dpll {}

impl Solver for Dpll {
    fn dpll(
        &self,
        clauses: &[Clause],
        max_variable: usize,
        algorithm: SolverAlgorithm,
        trace_method: TraceMethod,
        names: &[String],
    ) -> Result<SolveOutcome, err::SolveError> {
        if max_variable > MAX_VARIABLE {
            return Err(err::SolveError::TooManyVariables(max_variable));
        }

        for literal in clauses.iter().flatten() {
            if *literal == 0 {
                return Err(err::SolveError::ZeroLiteral);
            }
            if variable_of(*literal) > max_variable {
                return Err(err::SolveError::LiteralOutOfRange(*literal));
            }
        }

        log::debug!(target: targets::SOLVE, "{algorithm} on {} clauses over {max_variable} variables", clauses.len());

        let mut search = Search {
            clauses,
            algorithm,
            trace_method,
            names,
            depth: 0,
            trace: Vec::default(),
            stats: Stats::default(),
        };

        let mut valuation: Valuation = vec![None; max_variable];

        let result = match search.search(&mut valuation) {
            true => SolveResult::Assignment(
                valuation
                    .iter()
                    .enumerate()
                    .map(|(index, value)| literal_of(index + 1, value.unwrap_or(false)))
                    .collect(),
            ),
            false => SolveResult::Unsatisfiable,
        };

        log::info!(target: targets::SOLVE, "{}", search.stats);

        Ok(SolveOutcome {
            result,
            trace: search.trace,
            stats: search.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::satisfied_by;

    fn solve(clauses: &[Clause], max_variable: usize, algorithm: SolverAlgorithm) -> SolveResult {
        Dpll::default()
            .dpll(clauses, max_variable, algorithm, TraceMethod::None, &[])
            .unwrap()
            .result
    }

    fn check_model(clauses: &[Clause], max_variable: usize) {
        for algorithm in [SolverAlgorithm::Naive, SolverAlgorithm::Better] {
            match solve(clauses, max_variable, algorithm) {
                SolveResult::Assignment(literals) => {
                    assert_eq!(literals.len(), max_variable);
                    let valuation = literals.iter().map(|l| *l > 0).collect::<Vec<_>>();
                    assert!(satisfied_by(clauses, &valuation));
                }
                SolveResult::Unsatisfiable => panic!("{algorithm} found no model"),
            }
        }
    }

    #[test]
    fn unit_conflict() {
        for algorithm in [SolverAlgorithm::Naive, SolverAlgorithm::Better] {
            assert_eq!(
                solve(&[vec![1], vec![-1]], 1, algorithm),
                SolveResult::Unsatisfiable
            );
        }
    }

    #[test]
    fn all_four_clauses() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![-1, -2], vec![1, -2]];
        for algorithm in [SolverAlgorithm::Naive, SolverAlgorithm::Better] {
            assert_eq!(solve(&clauses, 2, algorithm), SolveResult::Unsatisfiable);
        }
    }

    #[test]
    fn models() {
        check_model(&[vec![1, 2], vec![-1, -2]], 2);
        check_model(&[vec![1, -3], vec![2, 3, -1], vec![-2]], 3);
        check_model(&[], 3);

        // pigeonhole-free chain of implications: 1 -> 2 -> 3 -> 4, with 1
        check_model(&[vec![-1, 2], vec![-2, 3], vec![-3, 4], vec![1]], 4);
    }

    #[test]
    fn empty_clause() {
        assert_eq!(
            solve(&[vec![1, 2], vec![]], 2, SolverAlgorithm::Better),
            SolveResult::Unsatisfiable
        );
    }

    #[test]
    fn pigeonhole_three_into_two() {
        // p_ij: pigeon i in hole j, as variable 2 * i + j + 1
        let p = |i: i32, j: i32| 2 * i + j + 1;
        let mut clauses = vec![];
        for i in 0..3 {
            clauses.push(vec![p(i, 0), p(i, 1)]);
        }
        for j in 0..2 {
            for i in 0..3 {
                for k in (i + 1)..3 {
                    clauses.push(vec![-p(i, j), -p(k, j)]);
                }
            }
        }
        for algorithm in [SolverAlgorithm::Naive, SolverAlgorithm::Better] {
            assert_eq!(solve(&clauses, 6, algorithm), SolveResult::Unsatisfiable);
        }
    }

    #[test]
    fn unused_variables_are_false() {
        assert_eq!(
            solve(&[vec![2]], 3, SolverAlgorithm::Naive),
            SolveResult::Assignment(vec![-1, 2, -3])
        );
    }

    #[test]
    fn trace_uses_names() {
        let names = vec!["p".to_string(), "q".to_string()];
        let outcome = Dpll::default()
            .dpll(
                &[vec![1, 2], vec![-1, 2], vec![1, -2]],
                2,
                SolverAlgorithm::Naive,
                TraceMethod::Full,
                &names,
            )
            .unwrap();

        assert_eq!(outcome.result, SolveResult::Assignment(vec![1, 2]));
        assert_eq!(outcome.trace, vec!["decide p", "  unit q"]);
        assert_eq!(outcome.stats.decisions, 1);
        assert_eq!(outcome.stats.propagations, 1);

        let outcome = Dpll::default()
            .dpll(
                &[vec![1, 2], vec![-1, 2], vec![1, -2]],
                2,
                SolverAlgorithm::Naive,
                TraceMethod::None,
                &names,
            )
            .unwrap();
        assert!(outcome.trace.is_empty());
    }

    #[test]
    fn backtracking_is_traced() {
        // 1 true forces a conflict, via 2 and -2.
        let clauses = vec![vec![-1, 2], vec![-1, -2], vec![1, 3]];
        let outcome = Dpll::default()
            .dpll(&clauses, 3, SolverAlgorithm::Naive, TraceMethod::Decisions, &[])
            .unwrap();

        assert_eq!(outcome.result, SolveResult::Assignment(vec![-1, -2, 3]));
        assert_eq!(outcome.trace, vec!["decide 1", "backtrack 1", "decide -1"]);
        assert_eq!(outcome.stats.conflicts, 1);
    }

    #[test]
    fn malformed_literals() {
        let solver = Dpll::default();
        assert_eq!(
            solver.dpll(&[vec![1, 3]], 2, SolverAlgorithm::Better, TraceMethod::None, &[]),
            Err(err::SolveError::LiteralOutOfRange(3))
        );
        assert_eq!(
            solver.dpll(&[vec![0]], 2, SolverAlgorithm::Better, TraceMethod::None, &[]),
            Err(err::SolveError::ZeroLiteral)
        );
        assert_eq!(
            solver.dpll(&[vec![1]], usize::MAX, SolverAlgorithm::Better, TraceMethod::None, &[]),
            Err(err::SolveError::TooManyVariables(usize::MAX))
        );
    }
}

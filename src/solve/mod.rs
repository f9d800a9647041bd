/*!
Solvers, which determine whether a clause set is satisfiable.

A [Solver] is given integer clauses over `1..=max_variable`, a choice of [SolverAlgorithm], a [TraceMethod], and the original names of the variables (possibly empty).
The names are used only to label the trace.

The primary result of a solve is a [SolveResult].
A trace of the search, and counts of the search, are auxiliary.

```rust
# use proplog::config::{SolverAlgorithm, TraceMethod};
# use proplog::solve::{Dpll, Solver};
# use proplog::structures::problem::SolveResult;
let solver = Dpll::default();

let outcome = solver
    .dpll(&[vec![1, 2], vec![-1]], 2, SolverAlgorithm::Better, TraceMethod::None, &[])
    .unwrap();
assert_eq!(outcome.result, SolveResult::Assignment(vec![-1, 2]));

let outcome = solver
    .dpll(&[vec![1], vec![-1]], 1, SolverAlgorithm::Naive, TraceMethod::None, &[])
    .unwrap();
assert_eq!(outcome.result, SolveResult::Unsatisfiable);
```
*/

pub mod dpll;
pub use dpll::Dpll;

use crate::{
    config::{SolverAlgorithm, TraceMethod},
    structures::{clause::Clause, problem::SolveResult},
    types::err::{self},
};

/// Counts from a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub decisions: usize,
    pub propagations: usize,
    pub conflicts: usize,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} decisions, {} propagations, {} conflicts",
            self.decisions, self.propagations, self.conflicts
        )
    }
}

/// Everything returned from a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOutcome {
    pub result: SolveResult,

    /// Lines of trace, in the order of the search.
    /// Empty unless some [TraceMethod] other than [None](TraceMethod::None) was requested.
    pub trace: Vec<String>,

    pub stats: Stats,
}

pub trait Solver {
    fn dpll(
        &self,
        clauses: &[Clause],
        max_variable: usize,
        algorithm: SolverAlgorithm,
        trace_method: TraceMethod,
        names: &[String],
    ) -> Result<SolveOutcome, err::SolveError>;
}

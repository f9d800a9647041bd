use std::str::FromStr;

use crate::types::err::{self};

/// Variant search procedures of the [DPLL solver](crate::solve::dpll).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SolverAlgorithm {
    /// Unit propagation, and branching on the lowest unassigned variable of some unsatisfied clause.
    Naive,

    /// Unit propagation and pure literal elimination, and branching on the variable with most occurrences in unsatisfied clauses.
    #[default]
    Better,
}

impl std::fmt::Display for SolverAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive => write!(f, "dpll_naive"),
            Self::Better => write!(f, "dpll_better"),
        }
    }
}

impl FromStr for SolverAlgorithm {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dpll_naive" | "dpll" => Ok(Self::Naive),

            "dpll_better" => Ok(Self::Better),

            _unknown_string => Err(err::ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

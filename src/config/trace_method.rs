use std::str::FromStr;

use crate::types::err::{self};

/// How much of a search the solver records.
///
/// Ordered, so that `method >= TraceMethod::Decisions` reads as "at least decisions".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraceMethod {
    /// Nothing is recorded.
    #[default]
    None,

    /// Decisions, and backtracks from decisions.
    Decisions,

    /// Decisions and backtracks, together with each unit propagation and pure literal.
    Full,
}

impl std::fmt::Display for TraceMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Decisions => write!(f, "decisions"),
            Self::Full => write!(f, "full"),
        }
    }
}

impl FromStr for TraceMethod {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),

            "decisions" => Ok(Self::Decisions),

            "full" => Ok(Self::Full),

            _unknown_string => Err(err::ConfigError::UnknownTraceMethod(s.to_string())),
        }
    }
}

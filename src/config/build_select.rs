use std::str::FromStr;

use crate::types::err::{self};

/// The artifact produced by the build pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildSelect {
    /// A structural dump of the parsed input.
    ParseTree,

    /// A truth table of the formula or clause set.
    TruthTable,

    /// The input in conjunctive normal form.
    Cnf,
}

impl std::fmt::Display for BuildSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseTree => write!(f, "parse_tree"),
            Self::TruthTable => write!(f, "truth_table"),
            Self::Cnf => write!(f, "cnf"),
        }
    }
}

impl FromStr for BuildSelect {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "parse_tree" => Ok(Self::ParseTree),

            "truth_table" => Ok(Self::TruthTable),

            "cnf" => Ok(Self::Cnf),

            _unknown_string => Err(err::ConfigError::UnknownBuildMode(s.to_string())),
        }
    }
}

use std::str::FromStr;

use crate::types::err::{self};

/// Whether text derived from input is escaped before it is written to a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Escape `&`, `<`, `>`, and quotes in any text originating from the parser, converter, or solver.
    #[default]
    Escape,

    /// Write all text as markup, as is.
    Raw,
}

impl std::fmt::Display for RenderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Escape => write!(f, "escape"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

impl FromStr for RenderPolicy {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "escape" => Ok(Self::Escape),

            "raw" => Ok(Self::Raw),

            _unknown_string => Err(err::ConfigError::UnknownRenderPolicy(s.to_string())),
        }
    }
}

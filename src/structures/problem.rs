//! The values passed between the stages of a pipeline.

use crate::structures::{
    clause::ClauseSet,
    formula::Formula,
    literal::{label, Literal},
};

/// The output of a [Parser](crate::parse::Parser).
///
/// The three cases are closed: a pipeline matches on these and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParserOutput {
    /// A DIMACS clause list.
    Dimacs {
        /// The declared maximum variable index.
        max_variable: usize,

        clauses: ClauseSet,
    },

    /// A syntax error, described for the user.
    Error(String),

    /// A formula.
    Formula(Formula),
}

/// A clause set over the variables `1..=max_variable`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedProblem {
    pub max_variable: usize,

    pub clauses: ClauseSet,

    /// `original_names[i]` names the variable renamed to `i + 1`.
    ///
    /// Empty when no renaming took place, i.e. for DIMACS input.
    pub original_names: Vec<String>,
}

impl NormalizedProblem {
    /// The original name of a renamed variable, if the variable was renamed.
    pub fn original_name(&self, variable: usize) -> Option<&str> {
        self.original_names
            .get(variable.wrapping_sub(1))
            .map(|name| name.as_str())
    }
}

/// The result of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveResult {
    /// A satisfying assignment, with one literal for each variable in order.
    Assignment(Vec<Literal>),

    Unsatisfiable,
}

impl SolveResult {
    /// The elements of the assignment as text, labelled by name where names are given.
    pub fn assignment_labels(&self, names: &[String]) -> Option<Vec<String>> {
        match self {
            SolveResult::Assignment(literals) => Some(
                literals
                    .iter()
                    .map(|literal| label(*literal, names))
                    .collect(),
            ),
            SolveResult::Unsatisfiable => None,
        }
    }
}

/// How a build artifact is laid out on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactStyle {
    /// As is.
    Verbatim,

    /// In a fixed-width font, with line breaks where the text has newlines.
    Typewriter,
}

/// The product of the build pipeline, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildArtifact {
    pub text: String,
    pub style: ArtifactStyle,
}

impl BuildArtifact {
    pub fn verbatim(text: String) -> Self {
        BuildArtifact {
            text,
            style: ArtifactStyle::Verbatim,
        }
    }

    pub fn typewriter(text: String) -> Self {
        BuildArtifact {
            text,
            style: ArtifactStyle::Typewriter,
        }
    }
}

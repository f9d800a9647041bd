//! Error types used in the library.
//!
//! - Syntax errors are not errors of a pipeline. A parser reports them as a [ParserOutput::Error](crate::structures::problem::ParserOutput::Error) value, and they are rendered to the user.
//!   Still, [ParseError] is used internally by the parser, and its [Display](std::fmt::Display) text is what the user sees.
//! - The remaining errors are failures of some collaborator (the converter, the solver) or of the configuration.
//!   A pipeline body returns these, and they surface only in the logs.
//!
//! Names of the error enums overlap with corresponding modules.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::Literal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Convert(ConvertError),
    Parse(ParseError),
    Scheduler(SchedulerError),
    Solve(SolveError),
}

/// Errors in configuration, e.g. an unrecognised name for some enumerated setting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A build mode other than `parse_tree`, `truth_table`, or `cnf`.
    UnknownBuildMode(String),

    /// A solver algorithm which is not implemented.
    UnknownAlgorithm(String),

    /// A trace method which is not implemented.
    UnknownTraceMethod(String),

    /// A render policy which is not implemented.
    UnknownRenderPolicy(String),

    /// A value outside the bounds of a [ConfigOption](crate::config::ConfigOption).
    OutOfRange(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBuildMode(name) => write!(f, "Unknown build mode: {name}."),
            Self::UnknownAlgorithm(name) => write!(f, "Unknown solver algorithm: {name}."),
            Self::UnknownTraceMethod(name) => write!(f, "Unknown trace method: {name}."),
            Self::UnknownRenderPolicy(name) => write!(f, "Unknown render policy: {name}."),
            Self::OutOfRange(option) => write!(f, "Value out of range for {option}."),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors of the converter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConvertError {
    /// Distribution produced more clauses than the configured limit.
    ClauseLimit(usize),

    /// A truth table was requested over more variables than the configured limit.
    TruthTableLimit { variables: usize, limit: usize },

    /// A truth table was requested for the output of a failed parse.
    NoFormula,

    /// A parse tree could not be written as JSON.
    Dump,
}

impl From<ConvertError> for ErrorKind {
    fn from(e: ConvertError) -> Self {
        ErrorKind::Convert(e)
    }
}

/// Errors during parsing.
///
/// Line and column numbers count from one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A character which begins no token.
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    /// A token out of place.
    UnexpectedToken {
        token: String,
        line: usize,
        column: usize,
    },

    /// The input ended in the middle of a formula.
    UnexpectedEnd,

    /// A parenthesis which is never closed.
    UnclosedParenthesis { line: usize, column: usize },

    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// A token in a clause line which is not an integer.
    InvalidLiteral { token: String, line: usize },

    /// A literal whose variable is larger than the count in the problem specification.
    ExceedsDeclared {
        literal: Literal,
        declared: usize,
        line: usize,
    },

    /// A variable count, or a variable, beyond the largest variable a literal can name.
    TooManyVariables { variables: usize, line: usize },

    /// Parentheses or negations nested beyond the parser's limit.
    TooDeep { line: usize, column: usize },

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),

            Self::UnexpectedCharacter {
                character,
                line,
                column,
            } => write!(
                f,
                "unexpected character '{character}' at line {line}, column {column}"
            ),

            Self::UnexpectedToken {
                token,
                line,
                column,
            } => write!(f, "unexpected '{token}' at line {line}, column {column}"),

            Self::UnexpectedEnd => write!(f, "unexpected end of input"),

            Self::UnclosedParenthesis { line, column } => write!(
                f,
                "parenthesis opened at line {line}, column {column} is never closed"
            ),

            Self::ProblemSpecification(line) => write!(f, "malformed problem line at line {line}"),

            Self::MisplacedProblem(line) => {
                write!(f, "problem line at line {line} must precede all clauses")
            }

            Self::InvalidLiteral { token, line } => {
                write!(f, "invalid literal '{token}' at line {line}")
            }

            Self::ExceedsDeclared {
                literal,
                declared,
                line,
            } => write!(
                f,
                "literal {literal} at line {line} exceeds the {declared} declared variables"
            ),

            Self::TooManyVariables { variables, line } => write!(
                f,
                "{variables} variables at line {line} exceed the limit of {}",
                crate::structures::literal::MAX_VARIABLE
            ),

            Self::TooDeep { line, column } => write!(
                f,
                "nesting at line {line}, column {column} is too deep"
            ),

            Self::Line(line) => write!(f, "unrecognised content at line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors of the scheduler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SchedulerError {
    /// The worker has stopped, and no further tasks can be deferred.
    Disconnected,
}

impl From<SchedulerError> for ErrorKind {
    fn from(e: SchedulerError) -> Self {
        ErrorKind::Scheduler(e)
    }
}

/// Errors of the solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The literal `0`, which names no variable.
    ZeroLiteral,

    /// A literal whose variable is larger than the maximum variable given to the solver.
    LiteralOutOfRange(Literal),

    /// A maximum variable which no literal can name.
    TooManyVariables(usize),
}

impl From<SolveError> for ErrorKind {
    fn from(e: SolveError) -> Self {
        ErrorKind::Solve(e)
    }
}

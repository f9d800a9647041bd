//! DIMACS clause lists.
//!
//! ```none
//! c an optional comment
//! p cnf 2 2
//!  1  2 0
//! -1 -2 0
//! ```
//!
//! The problem line is optional.
//! When present, it must precede all clauses, and its variable count is the declared maximum variable.
//! No count or literal may name a variable beyond [MAX_VARIABLE].
//! When absent, the largest variable of any literal is used instead.
//!
//! A clause ends at `0`, or at the end of input, and input ends early at a line beginning `%`, as in the SATLIB benchmarks.

use crate::{
    structures::{
        clause::Clause,
        literal::{variable_of, Literal, MAX_VARIABLE},
        problem::ParserOutput,
    },
    types::err::{self},
};

/// The kind of a line of DIMACS input.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Blank,
    Comment,
    Problem,
    Clause,
    End,
    Other,
}

fn classify(line: &str) -> Line {
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        None => Line::Blank,

        Some(token) if token.starts_with('%') => Line::End,

        Some("c") => Line::Comment,

        Some("p") => match tokens.next() {
            Some("cnf") => Line::Problem,
            _ => Line::Other,
        },

        Some(first) => match std::iter::once(first)
            .chain(tokens)
            .all(|token| token.parse::<i64>().is_ok())
        {
            true => Line::Clause,
            false => Line::Other,
        },
    }
}

/// Whether the text reads as DIMACS, rather than as a formula.
///
/// That is, whether some line is a problem line or a line of integers, and every other line is blank or a comment.
pub fn is_dimacs(text: &str) -> bool {
    let mut numeric = false;

    for line in text.lines() {
        match classify(line) {
            Line::Blank | Line::Comment => {}
            Line::Problem | Line::Clause => numeric = true,
            Line::End => break,
            Line::Other => return false,
        }
    }

    numeric
}

/// Parses DIMACS text to a [ParserOutput::Dimacs].
pub fn parse(text: &str) -> Result<ParserOutput, err::ParseError> {
    let mut declared: Option<usize> = None;
    let mut max_seen = 0;

    let mut clauses = Vec::default();
    let mut clause_buffer: Clause = Vec::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        match classify(line) {
            Line::Blank | Line::Comment => continue,

            Line::End => break,

            Line::Problem => {
                if declared.is_some() || !clauses.is_empty() || !clause_buffer.is_empty() {
                    return Err(err::ParseError::MisplacedProblem(line_number));
                }

                let mut details = line.split_whitespace().skip(2);
                let variable_count = details.next().and_then(|count| count.parse::<usize>().ok());
                let clause_count = details.next().and_then(|count| count.parse::<usize>().ok());

                match (variable_count, clause_count, details.next()) {
                    (Some(variables), Some(_), None) if variables > MAX_VARIABLE => {
                        return Err(err::ParseError::TooManyVariables {
                            variables,
                            line: line_number,
                        })
                    }
                    (Some(variables), Some(_), None) => declared = Some(variables),
                    _ => return Err(err::ParseError::ProblemSpecification(line_number)),
                }
            }

            Line::Clause => {
                for token in line.split_whitespace() {
                    let literal = match token.parse::<Literal>() {
                        Ok(literal) => literal,
                        Err(_) => {
                            return Err(err::ParseError::InvalidLiteral {
                                token: token.to_string(),
                                line: line_number,
                            })
                        }
                    };

                    if literal == 0 {
                        clauses.push(std::mem::take(&mut clause_buffer));
                        continue;
                    }

                    let variable = variable_of(literal);
                    if variable > MAX_VARIABLE {
                        return Err(err::ParseError::TooManyVariables {
                            variables: variable,
                            line: line_number,
                        });
                    }
                    if let Some(declared) = declared {
                        if variable > declared {
                            return Err(err::ParseError::ExceedsDeclared {
                                literal,
                                declared,
                                line: line_number,
                            });
                        }
                    }

                    max_seen = max_seen.max(variable);
                    clause_buffer.push(literal);
                }
            }

            Line::Other => return Err(err::ParseError::Line(line_number)),
        }
    }

    if !clause_buffer.is_empty() {
        clauses.push(clause_buffer);
    }

    log::debug!(target: crate::misc::log::targets::PARSE, "DIMACS with {} clauses over {:?} declared variables", clauses.len(), declared);

    Ok(ParserOutput::Dimacs {
        max_variable: declared.unwrap_or(max_seen),
        clauses,
    })
}

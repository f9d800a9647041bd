/*!
Parsers, from text to [ParserOutput].

A [Parser] never fails: a syntax error is itself an output, to be shown to the user.

The default parser, [Proplog], reads either [DIMACS](dimacs) or [formula](formula) syntax.
Text is read as DIMACS when each non-blank line is a comment, a problem line, or a line of integers, and at least one line is not a comment.

```rust
# use proplog::parse::{Parser, Proplog};
# use proplog::structures::problem::ParserOutput;
let parser = Proplog::default();

match parser.parse("p cnf 2 2\n1 2 0\n-1 -2 0") {
    ParserOutput::Dimacs { max_variable, clauses } => {
        assert_eq!(max_variable, 2);
        assert_eq!(clauses, vec![vec![1, 2], vec![-1, -2]]);
    }
    _ => panic!("expected DIMACS"),
}

assert!(matches!(parser.parse("p & -q"), ParserOutput::Formula(_)));
assert!(matches!(parser.parse("p & & q"), ParserOutput::Error(_)));
```
*/

pub mod dimacs;
pub mod formula;

use crate::{
    misc::log::targets::{self},
    structures::problem::ParserOutput,
    types::err::{self},
};

/// Something which turns text into a [ParserOutput].
pub trait Parser {
    fn parse(&self, text: &str) -> ParserOutput;
}

/// The default parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct Proplog {}

impl Parser for Proplog {
    fn parse(&self, text: &str) -> ParserOutput {
        let result = match text.trim().is_empty() {
            true => Err(err::ParseError::Empty),

            false => match dimacs::is_dimacs(text) {
                true => dimacs::parse(text),
                false => formula::parse(text).map(ParserOutput::Formula),
            },
        };

        match result {
            Ok(output) => output,
            Err(e) => {
                log::info!(target: targets::PARSE, "Syntax error: {e}");
                ParserOutput::Error(e.to_string())
            }
        }
    }
}

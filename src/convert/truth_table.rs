//! Truth tables of formulas and of DIMACS clause sets.
//!
//! ```none
//! p q | value
//! F F | T
//! F T | T
//! T F | F
//! T T | T
//! ```
//!
//! Rows begin with every variable false, and the first variable is the most significant.
//! Cells are padded to the width of their column header.

use crate::{
    structures::{clause::satisfied_by, problem::ParserOutput},
    types::err::{self},
};

const VALUE_HEADER: &str = "value";

fn cell(value: bool, width: usize) -> String {
    let mark = match value {
        true => "T",
        false => "F",
    };
    format!("{mark:<width$}")
}

fn table<F: Fn(&[bool]) -> bool>(headers: &[String], value_of: F) -> String {
    let count = headers.len();
    let mut lines = Vec::default();

    let mut header = headers.join(" ");
    if !header.is_empty() {
        header.push(' ');
    }
    lines.push(format!("{header}| {VALUE_HEADER}"));

    let mut valuation = vec![false; count];
    for row in 0..(1_usize << count) {
        for (index, value) in valuation.iter_mut().enumerate() {
            *value = (row >> (count - 1 - index)) & 1 == 1;
        }

        let mut line = String::default();
        for (value, name) in valuation.iter().zip(headers) {
            line.push_str(&cell(*value, name.len()));
            line.push(' ');
        }
        line.push_str("| ");
        line.push_str(cell(value_of(&valuation), VALUE_HEADER.len()).trim_end());
        lines.push(line);
    }

    lines.join("\n")
}

/// The truth table of some parser output, over at most `limit` variables.
pub fn print_truthtable(output: &ParserOutput, limit: usize) -> Result<String, err::ConvertError> {
    let limit = limit.min(usize::BITS as usize - 1);

    let headers = match output {
        ParserOutput::Formula(formula) => formula.atoms(),
        ParserOutput::Dimacs { max_variable, .. } if *max_variable > limit => {
            return Err(err::ConvertError::TruthTableLimit {
                variables: *max_variable,
                limit,
            })
        }
        ParserOutput::Dimacs { max_variable, .. } => {
            (1..=*max_variable).map(|v| v.to_string()).collect()
        }
        ParserOutput::Error(_) => return Err(err::ConvertError::NoFormula),
    };

    if headers.len() > limit {
        return Err(err::ConvertError::TruthTableLimit {
            variables: headers.len(),
            limit,
        });
    }

    let table = match output {
        ParserOutput::Formula(formula) => table(&headers, |valuation| {
            formula.evaluate(&|name: &str| {
                headers
                    .iter()
                    .position(|header| header == name)
                    .is_some_and(|index| valuation[index])
            })
        }),

        ParserOutput::Dimacs { clauses, .. } => {
            table(&headers, |valuation| satisfied_by(clauses, valuation))
        }

        ParserOutput::Error(_) => return Err(err::ConvertError::NoFormula),
    };

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::formula::parse;

    #[test]
    fn implication() {
        let output = ParserOutput::Formula(parse("p -> q").unwrap());
        let expected = "\
p q | value
F F | T
F T | T
T F | F
T T | T";
        assert_eq!(print_truthtable(&output, 4).unwrap(), expected);
    }

    #[test]
    fn padding() {
        let output = ParserOutput::Formula(parse("long & x").unwrap());
        let table = print_truthtable(&output, 4).unwrap();
        assert_eq!(table.lines().nth(1), Some("F    F | F"));
    }

    #[test]
    fn dimacs() {
        let output = ParserOutput::Dimacs {
            max_variable: 2,
            clauses: vec![vec![1, 2], vec![-1, -2]],
        };
        let expected = "\
1 2 | value
F F | F
F T | T
T F | T
T T | F";
        assert_eq!(print_truthtable(&output, 4).unwrap(), expected);
    }

    #[test]
    fn constant() {
        let output = ParserOutput::Formula(parse("true").unwrap());
        assert_eq!(print_truthtable(&output, 4).unwrap(), "| value\n| T");
    }

    #[test]
    fn limits() {
        let output = ParserOutput::Formula(parse("a & b & c").unwrap());
        assert_eq!(
            print_truthtable(&output, 2),
            Err(err::ConvertError::TruthTableLimit {
                variables: 3,
                limit: 2
            })
        );
        assert_eq!(
            print_truthtable(&ParserOutput::Error("oops".to_string()), 2),
            Err(err::ConvertError::NoFormula)
        );
    }

    #[test]
    fn limit_precedes_headers() {
        let output = ParserOutput::Dimacs {
            max_variable: usize::MAX,
            clauses: vec![],
        };
        assert_eq!(
            print_truthtable(&output, 16),
            Err(err::ConvertError::TruthTableLimit {
                variables: usize::MAX,
                limit: 16
            })
        );
        assert_eq!(
            print_truthtable(&output, usize::MAX),
            Err(err::ConvertError::TruthTableLimit {
                variables: usize::MAX,
                limit: usize::BITS as usize - 1
            })
        );

        let output = ParserOutput::Formula(parse("a").unwrap());
        assert_eq!(
            print_truthtable(&output, usize::MAX).map(|table| table.lines().count()),
            Ok(3)
        );
    }
}

/*!
Converters, from formulas to clause sets and from parser output to printable artifacts.

The [Converter] trait collects the conversions a pipeline relies on:
- [formula_to_cnf](Converter::formula_to_cnf), from a formula to named clauses.
- [rename_vars_in_clauses](Converter::rename_vars_in_clauses), from named clauses to integer clauses over `1..=max_variable`.
- [print_truthtable](Converter::print_truthtable), from parser output to a truth table.
- [parsed_print](Converter::parsed_print), from clauses or a formula to text.

Each conversion is pure.
The default converter, [Proplog], is configured with limits on the size of what it builds, as the size of a CNF (by distribution) or of a truth table may be exponential in the size of the input.

```rust
# use proplog::convert::{Converter, Printable, Proplog};
# use proplog::parse::formula::parse;
let converter = Proplog::default();
let formula = parse("p -> (q & r)").unwrap();

let named = converter.formula_to_cnf(&formula).unwrap();
assert_eq!(converter.parsed_print(Printable::NamedClauses(&named), &[]), "-p q\n-p r");

let problem = converter.rename_vars_in_clauses(&named);
assert_eq!(problem.clauses, vec![vec![-1, 2], vec![-1, 3]]);
assert_eq!(problem.original_names, vec!["p", "q", "r"]);
```
*/

pub mod cnf;
pub mod print;
pub mod rename;
pub mod truth_table;

pub use print::Printable;

use crate::{
    config::Config,
    structures::{
        clause::{NamedClause, NamedClauseSet},
        formula::Formula,
        problem::{NormalizedProblem, ParserOutput},
    },
    types::err::{self},
};

pub trait Converter {
    /// A clause set over the names of the formula, equivalent to the formula.
    fn formula_to_cnf(&self, formula: &Formula) -> Result<NamedClauseSet, err::ConvertError>;

    /// The clause set with names replaced by integers `1..=max_variable`, and a record of the replaced names.
    fn rename_vars_in_clauses(&self, clauses: &[NamedClause]) -> NormalizedProblem;

    /// A truth table of a formula or clause set.
    fn print_truthtable(&self, output: &ParserOutput) -> Result<String, err::ConvertError>;

    /// Some structure as text, with integer variables labelled by `names` where given.
    fn parsed_print(&self, structure: Printable<'_>, names: &[String]) -> String;
}

/// The default converter.
#[derive(Clone, Copy, Debug)]
pub struct Proplog {
    pub clause_limit: usize,
    pub truth_table_limit: usize,
}

impl Proplog {
    pub fn from_config(config: &Config) -> Self {
        Proplog {
            clause_limit: config.clause_limit.value,
            truth_table_limit: config.truth_table_limit.value,
        }
    }
}

impl Default for Proplog {
    fn default() -> Self {
        Proplog::from_config(&Config::default())
    }
}

impl Converter for Proplog {
    fn formula_to_cnf(&self, formula: &Formula) -> Result<NamedClauseSet, err::ConvertError> {
        cnf::formula_to_cnf(formula, self.clause_limit)
    }

    fn rename_vars_in_clauses(&self, clauses: &[NamedClause]) -> NormalizedProblem {
        rename::rename_vars_in_clauses(clauses)
    }

    fn print_truthtable(&self, output: &ParserOutput) -> Result<String, err::ConvertError> {
        truth_table::print_truthtable(output, self.truth_table_limit)
    }

    fn parsed_print(&self, structure: Printable<'_>, names: &[String]) -> String {
        print::parsed_print(structure, names)
    }
}

//! The input dispatcher and the conversion stage.

use crate::{
    misc::log::targets::{self},
    pipeline::Pipeline,
    structures::{formula::Formula, problem::NormalizedProblem, problem::ParserOutput},
    types::err::{self},
};

/// Where the parser output leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A clause set ready for the solver.
    Normalized(NormalizedProblem),

    /// A syntax error, with the parser's message.
    SyntaxError(String),
}

impl Pipeline {
    /// Parses `text` and branches on the output.
    ///
    /// - DIMACS clauses pass through, with no names.
    /// - A syntax error stops here.
    /// - A formula is [normalized](Pipeline::normalize).
    pub fn dispatch(&self, text: &str) -> Result<Dispatch, err::ErrorKind> {
        let dispatch = match self.parser.parse(text) {
            ParserOutput::Dimacs {
                max_variable,
                clauses,
            } => {
                log::debug!(target: targets::PIPELINE, "DIMACS with {} clauses", clauses.len());
                Dispatch::Normalized(NormalizedProblem {
                    max_variable,
                    clauses,
                    original_names: Vec::default(),
                })
            }

            ParserOutput::Error(message) => Dispatch::SyntaxError(message),

            ParserOutput::Formula(formula) => Dispatch::Normalized(self.normalize(&formula)?),
        };
        Ok(dispatch)
    }

    /// Converts a formula to CNF and renames the variables of the CNF.
    pub fn normalize(&self, formula: &Formula) -> Result<NormalizedProblem, err::ConvertError> {
        let named = self.converter.formula_to_cnf(formula)?;
        let problem = self.converter.rename_vars_in_clauses(&named);

        log::debug!(target: targets::PIPELINE,
            "Formula as {} clauses over {} variables",
            problem.clauses.len(),
            problem.max_variable
        );

        Ok(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn dimacs_passes_through() {
        let pipeline = Pipeline::new(Config::default());
        let dispatch = pipeline.dispatch("p cnf 3 2\n1 -2 0\n2 3 0").unwrap();
        assert_eq!(
            dispatch,
            Dispatch::Normalized(NormalizedProblem {
                max_variable: 3,
                clauses: vec![vec![1, -2], vec![2, 3]],
                original_names: vec![],
            })
        );
    }

    #[test]
    fn formulas_are_renamed() {
        let pipeline = Pipeline::new(Config::default());
        let Dispatch::Normalized(problem) = pipeline.dispatch("b | -a").unwrap() else {
            panic!("expected a problem");
        };
        assert_eq!(problem.max_variable, 2);
        assert_eq!(problem.clauses, vec![vec![1, -2]]);
        assert_eq!(problem.original_name(1), Some("b"));
        assert_eq!(problem.original_name(2), Some("a"));
    }

    #[test]
    fn syntax_errors_stop() {
        let pipeline = Pipeline::new(Config::default());
        assert!(matches!(
            pipeline.dispatch("p & (q"),
            Ok(Dispatch::SyntaxError(_))
        ));
    }
}

//! The solve pipeline.

use crate::{
    config::{SolverAlgorithm, TraceMethod},
    misc::log::targets::{self},
    pipeline::{Dispatch, Invocation, Pipeline},
    solve::SolveOutcome,
    surface::Surface,
    types::err::{self},
};

/// What the solve pipeline found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveReport {
    /// The text could not be parsed.
    SyntaxError(String),

    /// The outcome of the solver, with the names of the variables solved over (empty for DIMACS).
    Solved {
        outcome: SolveOutcome,
        names: Vec<String>,
    },
}

impl Pipeline {
    /// Dispatches `text`, and solves the resulting clause set.
    ///
    /// The solver is called exactly once, unless the text could not be parsed, in which case the solver is not called.
    pub fn solve_report(
        &self,
        text: &str,
        algorithm: SolverAlgorithm,
        trace_method: TraceMethod,
    ) -> Result<SolveReport, err::ErrorKind> {
        let problem = match self.dispatch(text)? {
            Dispatch::SyntaxError(message) => return Ok(SolveReport::SyntaxError(message)),
            Dispatch::Normalized(problem) => problem,
        };

        let outcome = self.solver.dpll(
            &problem.clauses,
            problem.max_variable,
            algorithm,
            trace_method,
            &problem.original_names,
        )?;

        Ok(SolveReport::Solved {
            outcome,
            names: problem.original_names,
        })
    }

    /// The body of the solve pipeline: solve, and show the result on `surface`.
    pub fn solve(
        &self,
        invocation: &Invocation,
        text: &str,
        algorithm: SolverAlgorithm,
        trace_method: TraceMethod,
        surface: &dyn Surface,
    ) -> Result<(), err::ErrorKind> {
        log::info!(target: targets::PIPELINE, "Solve with {algorithm}, tracing {trace_method}");

        let report = self.solve_report(text, algorithm, trace_method)?;

        let renderer = self.renderer(surface);
        renderer.solve(&report);
        if self.config.show_elapsed {
            renderer.elapsed(invocation);
        }

        log::info!(target: targets::PIPELINE, "Solve finished in {:?}", invocation.elapsed());
        Ok(())
    }
}

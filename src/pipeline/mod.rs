/*!
The solve and build pipelines.

A [Pipeline] owns the collaborators: a [Parser], a [Converter], and a [Solver].
Each pipeline runs in stages:

1. [Dispatch](dispatch): parse the text and branch on the shape of the [ParserOutput](crate::structures::problem::ParserOutput).
2. Conversion: a formula is converted to CNF, and *then* its variables are renamed to `1..=max_variable`.
3. The terminal stage, either [solve](Pipeline::solve_report) or [build](Pipeline::build_report).
4. [Rendering](render) to a [Surface].

The first three stages return a report, and only the last writes to a surface.
So, a pipeline may also be used to compute a report without rendering anything.

```rust
# use proplog::config::{Config, SolverAlgorithm, TraceMethod};
# use proplog::pipeline::{Invocation, Pipeline};
# use proplog::surface::BufferSurface;
let pipeline = Pipeline::new(Config::default());
let surface = BufferSurface::default();

pipeline
    .solve(&Invocation::start(), "p & -q", SolverAlgorithm::Better, TraceMethod::None, &surface)
    .unwrap();

assert_eq!(
    surface.contents(),
    "Clause set is <b>true</b> if we assign values to variables as: p -q "
);
```

Failures of a collaborator are returned as an [ErrorKind](crate::types::err::ErrorKind), and leave the surface untouched.
*/

use std::time::{Duration, Instant};

use crate::{
    config::Config,
    convert::{self, Converter},
    parse::{self, Parser},
    solve::{Dpll, Solver},
    surface::Surface,
};

pub mod build;
pub mod dispatch;
pub mod render;
pub mod solve;

pub use build::BuildReport;
pub use dispatch::Dispatch;
pub use render::Renderer;
pub use solve::SolveReport;

/// Collaborators, and the configuration they share.
pub struct Pipeline {
    pub parser: Box<dyn Parser + Send + Sync>,
    pub converter: Box<dyn Converter + Send + Sync>,
    pub solver: Box<dyn Solver + Send + Sync>,
    pub config: Config,
}

impl Pipeline {
    /// A pipeline with the default collaborators, configured by `config`.
    pub fn new(config: Config) -> Self {
        Pipeline {
            parser: Box::new(parse::Proplog::default()),
            converter: Box::new(convert::Proplog::from_config(&config)),
            solver: Box::new(Dpll::default()),
            config,
        }
    }

    /// A pipeline with the given collaborators.
    pub fn with_collaborators(
        parser: impl Parser + Send + Sync + 'static,
        converter: impl Converter + Send + Sync + 'static,
        solver: impl Solver + Send + Sync + 'static,
        config: Config,
    ) -> Self {
        Pipeline {
            parser: Box::new(parser),
            converter: Box::new(converter),
            solver: Box::new(solver),
            config,
        }
    }

    pub fn renderer<'r>(&self, surface: &'r dyn Surface) -> Renderer<'r> {
        Renderer::new(surface, self.config.render_policy)
    }
}

/// A single run of a pipeline, from the moment it started.
#[derive(Clone, Copy, Debug)]
pub struct Invocation {
    started: Instant,
}

impl Invocation {
    pub fn start() -> Self {
        Invocation {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Milliseconds since the start of the invocation, padded to at least three digits.
    pub fn passed_time(&self) -> String {
        format!("{:03}", self.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_time_is_padded() {
        let invocation = Invocation::start();
        let passed = invocation.passed_time();
        assert!(passed.len() >= 3);
        assert!(passed.chars().all(|c| c.is_ascii_digit()));
    }
}

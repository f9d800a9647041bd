/*!
The front end: the entry points a caller uses to solve or build.

Each entry point clears the surface on the caller's thread, and then hands the body of the pipeline to a [Scheduler], to run after the configured delay.
The clear is therefore visible before the body writes anything, and before any (perhaps slow) computation begins.

```rust
# use std::sync::Arc;
# use proplog::config::{BuildSelect, Config};
# use proplog::frontend::Frontend;
# use proplog::pipeline::Pipeline;
# use proplog::surface::BufferSurface;
let surface = Arc::new(BufferSurface::default());
let mut frontend = Frontend::new(Pipeline::new(Config::default()), surface.clone());

frontend.build("p -> q", BuildSelect::TruthTable).unwrap();
frontend.finish();

assert_eq!(
    surface.contents(),
    "<tt>p q | value<br>F F | T<br>F T | T<br>T F | F<br>T T | T</tt>"
);
```

Bodies run one at a time, in the order requested.
As nothing is cancelled, two requests in quick succession both write to the surface, the second after the first.
*/

pub mod scheduler;

use std::{str::FromStr, sync::Arc};

use crate::{
    config::{BuildSelect, SolverAlgorithm, TraceMethod},
    misc::log::targets::{self},
    pipeline::{Invocation, Pipeline},
    surface::Surface,
    types::err::{self},
};

pub use scheduler::Scheduler;

pub struct Frontend {
    pipeline: Arc<Pipeline>,
    surface: Arc<dyn Surface>,
    scheduler: Scheduler,
}

impl Frontend {
    pub fn new(pipeline: Pipeline, surface: Arc<dyn Surface>) -> Self {
        Frontend {
            pipeline: Arc::new(pipeline),
            surface,
            scheduler: Scheduler::new(),
        }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Clears the surface, and defers a solve of `text`.
    pub fn solve(
        &self,
        text: &str,
        algorithm: SolverAlgorithm,
        trace_method: TraceMethod,
    ) -> Result<usize, err::SchedulerError> {
        self.clear_output();

        let pipeline = self.pipeline.clone();
        let surface = self.surface.clone();
        let text = text.to_string();

        self.scheduler
            .defer(self.pipeline.config.delay.value, move || {
                let invocation = Invocation::start();
                pipeline.solve(&invocation, &text, algorithm, trace_method, surface.as_ref())
            })
    }

    /// Clears the surface, and defers a build of `text`.
    pub fn build(
        &self,
        text: &str,
        build_select: BuildSelect,
    ) -> Result<usize, err::SchedulerError> {
        self.clear_output();

        let pipeline = self.pipeline.clone();
        let surface = self.surface.clone();
        let text = text.to_string();

        self.scheduler
            .defer(self.pipeline.config.delay.value, move || {
                let invocation = Invocation::start();
                pipeline.build(&invocation, &text, build_select, surface.as_ref())
            })
    }

    /// As [build](Frontend::build), with the build mode given by name.
    ///
    /// An unknown name is reported on the surface, and returned as an error, and nothing is deferred.
    pub fn build_named(&self, text: &str, name: &str) -> Result<usize, err::ErrorKind> {
        match BuildSelect::from_str(name) {
            Ok(build_select) => Ok(self.build(text, build_select)?),

            Err(e) => {
                log::warn!(target: targets::PIPELINE, "Unknown build mode: {name}");
                self.clear_output();
                self.pipeline
                    .renderer(self.surface.as_ref())
                    .unknown_build_mode(name);
                Err(e.into())
            }
        }
    }

    /// Empties the surface, now.
    pub fn clear_output(&self) {
        self.surface.clear();
    }

    /// Waits for every deferred body to run.
    ///
    /// After this, requests to solve or build return [Disconnected](err::SchedulerError::Disconnected).
    pub fn finish(&mut self) {
        self.scheduler.finish();
    }
}

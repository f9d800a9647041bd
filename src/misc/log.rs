/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when following a problem through a pipeline.

Note, no log implementation is provided.
The command line interface installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [conversion](crate::convert)
    pub const CONVERT: &str = "convert";

    /// Logs related to the [solver](crate::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to the [pipelines](crate::pipeline)
    pub const PIPELINE: &str = "pipeline";

    /// Logs related to the [scheduler](crate::frontend::scheduler)
    pub const SCHEDULER: &str = "scheduler";

    /// Logs related to [surfaces](crate::surface) and rendering
    pub const RENDER: &str = "render";
}

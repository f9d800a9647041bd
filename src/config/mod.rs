/*!
Configuration of the front end.

Bounded numeric settings are held as [ConfigOption]s.
Enumerated settings implement [FromStr](std::str::FromStr) and [Display](std::fmt::Display) on the names used by the command line.

Settings which vary per invocation (the [BuildSelect], [SolverAlgorithm], and [TraceMethod]) are passed with each call, and are not part of [Config].
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

mod build_select;
pub use build_select::BuildSelect;

mod render_policy;
pub use render_policy::RenderPolicy;

mod solver_algorithm;
pub use solver_algorithm::SolverAlgorithm;

mod trace_method;
pub use trace_method::TraceMethod;

pub mod defaults {
    use std::time::Duration;

    /// The delay between clearing a surface and running a pipeline.
    pub const DELAY: Duration = Duration::from_millis(100);

    /// The most clauses distribution may produce when converting a formula to CNF.
    pub const CLAUSE_LIMIT: usize = 1 << 16;

    /// The most variables a truth table may range over.
    pub const TRUTH_TABLE_LIMIT: usize = 12;
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The delay between clearing a surface and running the deferred pipeline.
    pub delay: ConfigOption<Duration>,

    /// The most clauses distribution may produce when converting a formula to CNF.
    pub clause_limit: ConfigOption<usize>,

    /// The most variables a truth table may range over.
    pub truth_table_limit: ConfigOption<usize>,

    /// Whether input-derived text is escaped when rendered.
    pub render_policy: RenderPolicy,

    /// Append the time taken by a pipeline to its result.
    pub show_elapsed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delay: ConfigOption {
                name: "delay",
                min: Duration::ZERO,
                max: Duration::from_secs(10),
                value: defaults::DELAY,
            },

            clause_limit: ConfigOption {
                name: "clause_limit",
                min: 1,
                max: usize::MAX,
                value: defaults::CLAUSE_LIMIT,
            },

            truth_table_limit: ConfigOption {
                name: "truth_table_limit",
                min: 0,
                max: 20,
                value: defaults::TRUTH_TABLE_LIMIT,
            },

            render_policy: RenderPolicy::default(),

            show_elapsed: false,
        }
    }
}

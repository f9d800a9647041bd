use std::{path::PathBuf, str::FromStr};

use clap::{value_parser, Arg, ArgAction, Command};

use proplog::{
    config::{self, RenderPolicy, SolverAlgorithm, TraceMethod},
    types::err::{self},
};

pub fn cli() -> Command {
    Command::new("proplog")
        .about("Solves, or builds truth tables and normal forms of, propositional problems")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)

        .subcommand(with_shared_args(with_input_args(Command::new("solve")
            .about("Determine whether a clause set or formula is satisfiable, and give a satisfying assignment if so."))

            .arg(Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_name("ALGORITHM")
                .value_parser(clap::builder::ValueParser::new(algorithm_parser))
                .required(false)
                .num_args(1)
                .help(format!("The solver algorithm.
Default: {}", SolverAlgorithm::default()))
                .long_help(format!("The solver algorithm.
Default: {}

  - dpll_naive : Unit propagation, and a decision on the lowest unassigned variable.
  - dpll_better: Also pure literal elimination, and a decision on the most frequent unassigned variable.", SolverAlgorithm::default())))

            .arg(Arg::new("trace")
                .long("trace")
                .short('t')
                .value_name("METHOD")
                .value_parser(clap::builder::ValueParser::new(trace_parser))
                .required(false)
                .num_args(1)
                .help(format!("How much of the search to show.
Default: {}", TraceMethod::default()))
                .long_help(format!("How much of the search to show, before the result.
Default: {}

  - none     : Nothing.
  - decisions: Each decision, and each backtrack.
  - full     : Also each unit propagation, and each pure literal.", TraceMethod::default())))))

        .subcommand(with_shared_args(with_input_args(Command::new("build")
            .about("Build a parse tree, truth table, or CNF of a clause set or formula."))

            .arg(Arg::new("mode")
                .long("mode")
                .short('m')
                .value_name("MODE")
                .required(true)
                .num_args(1)
                .help("What to build: parse_tree, truth_table, or cnf."))))
}

fn with_input_args(command: Command) -> Command {
    command
        .arg(Arg::new("path")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("A file to read the problem from, in DIMACS or formula syntax.
Files ending .xz are decompressed.
If neither a file nor an expression is given, the problem is read from standard input."))

        .arg(Arg::new("expression")
            .long("expression")
            .short('e')
            .value_name("TEXT")
            .required(false)
            .num_args(1)
            .conflicts_with("path")
            .help("The problem, as text."))
}

fn with_shared_args(command: Command) -> Command {
    let bounds = config::Config::default();
    let (delay_min, delay_max) = bounds.delay.min_max();
    let (table_min, table_max) = bounds.truth_table_limit.min_max();

    command
        .arg(Arg::new("delay")
            .long("delay")
            .value_name("MS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("Milliseconds between clearing the output and running.
Default: {}
Range: {}..={}", config::defaults::DELAY.as_millis(), delay_min.as_millis(), delay_max.as_millis())))

        .arg(Arg::new("clause_limit")
            .long("clause-limit")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The most clauses a formula may be converted to.
Default: {}", config::defaults::CLAUSE_LIMIT)))

        .arg(Arg::new("truth_table_limit")
            .long("truth-table-limit")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The most variables a truth table may range over.
Default: {}
Range: {table_min}..={table_max}", config::defaults::TRUTH_TABLE_LIMIT)))

        .arg(Arg::new("markup")
            .long("markup")
            .value_name("POLICY")
            .value_parser(clap::builder::ValueParser::new(render_policy_parser))
            .required(false)
            .num_args(1)
            .help(format!("Whether to escape text taken from the input: escape, or raw.
Default: {}", RenderPolicy::default())))

        .arg(Arg::new("raw_markup")
            .long("raw-markup")
            .action(ArgAction::SetTrue)
            .help("Print markup as is, rather than styling it for the terminal."))

        .arg(Arg::new("elapsed")
            .long("elapsed")
            .action(ArgAction::SetTrue)
            .help("Show the time taken."))

        .arg(Arg::new("clear")
            .long("clear")
            .action(ArgAction::SetTrue)
            .help("Clear the terminal before showing output."))
}

fn as_io_error(e: err::ConfigError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string())
}

fn algorithm_parser(arg: &str) -> Result<SolverAlgorithm, std::io::Error> {
    SolverAlgorithm::from_str(arg).map_err(as_io_error)
}

fn trace_parser(arg: &str) -> Result<TraceMethod, std::io::Error> {
    TraceMethod::from_str(arg).map_err(as_io_error)
}

fn render_policy_parser(arg: &str) -> Result<RenderPolicy, std::io::Error> {
    RenderPolicy::from_str(arg).map_err(as_io_error)
}

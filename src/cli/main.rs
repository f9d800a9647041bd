#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::sync::Arc;

use proplog::{
    config::{BuildSelect, SolverAlgorithm, TraceMethod},
    frontend::Frontend,
    pipeline::Pipeline,
    surface::TerminalSurface,
    types::err::{self},
};

mod config_io;
mod misc;
mod parse;

use config_io::ConfigIO;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let Some((subcommand, args)) = matches.subcommand() else {
        std::process::exit(2);
    };

    let config = match parse::config::config_from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let config_io = ConfigIO::from_args(args);

    let text = match misc::read_problem(&config_io.source) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Could not read the problem: {e}");
            std::process::exit(1);
        }
    };

    let surface = Arc::new(TerminalSurface::new(
        config_io.clear_screen,
        config_io.raw_markup,
    ));
    let mut frontend = Frontend::new(Pipeline::new(config), surface);

    let requested: Result<usize, err::ErrorKind> = match subcommand {
        "solve" => {
            let algorithm = args
                .try_get_one::<SolverAlgorithm>("algorithm")
                .ok()
                .flatten()
                .copied()
                .unwrap_or_default();

            let trace_method = args
                .try_get_one::<TraceMethod>("trace")
                .ok()
                .flatten()
                .copied()
                .unwrap_or_default();

            frontend
                .solve(&text, algorithm, trace_method)
                .map_err(err::ErrorKind::from)
        }

        "build" => match args.try_get_one::<String>("mode") {
            Ok(Some(mode)) => frontend.build_named(&text, mode),
            _ => Err(err::ConfigError::UnknownBuildMode(String::default()).into()),
        },

        _ => {
            eprintln!("Unknown command: {subcommand}");
            std::process::exit(2);
        }
    };

    frontend.finish();
    println!();

    match requested {
        Ok(_) => {}
        Err(err::ErrorKind::Config(e)) => {
            eprintln!("{e}");
            eprintln!(
                "Build modes are: {}, {}, {}.",
                BuildSelect::ParseTree,
                BuildSelect::TruthTable,
                BuildSelect::Cnf
            );
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e:?}");
            std::process::exit(1);
        }
    }
}

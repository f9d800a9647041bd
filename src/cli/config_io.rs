use std::path::PathBuf;

use clap::ArgMatches;

/// Where the problem is read from.
#[derive(Clone, Debug, Default)]
pub enum Source {
    Expression(String),
    File(PathBuf),
    #[default]
    Stdin,
}

/// Configuration of the binary, as distinct from the library.
#[derive(Clone, Debug, Default)]
pub struct ConfigIO {
    pub source: Source,
    pub clear_screen: bool,
    pub raw_markup: bool,
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut config_io = ConfigIO::default();

        if let Ok(Some(text)) = args.try_get_one::<String>("expression") {
            config_io.source = Source::Expression(text.clone());
        } else if let Ok(Some(path)) = args.try_get_one::<PathBuf>("path") {
            config_io.source = Source::File(path.clone());
        }

        if let Ok(Some(true)) = args.try_get_one::<bool>("clear") {
            config_io.clear_screen = true
        };

        if let Ok(Some(true)) = args.try_get_one::<bool>("raw_markup") {
            config_io.raw_markup = true
        };

        config_io
    }
}

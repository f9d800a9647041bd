use std::time::Duration;

use clap::ArgMatches;

use proplog::{
    config::{Config, RenderPolicy},
    types::err::{self},
};

pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ConfigError> {
    let mut the_config = Config::default();

    if let Ok(Some(millis)) = args.try_get_one::<u64>("delay") {
        the_config.delay.set(Duration::from_millis(*millis))?
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("clause_limit") {
        the_config.clause_limit.set(*limit)?
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("truth_table_limit") {
        the_config.truth_table_limit.set(*limit)?
    };

    if let Ok(Some(policy)) = args.try_get_one::<RenderPolicy>("markup") {
        the_config.render_policy = *policy
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("elapsed") {
        the_config.show_elapsed = true
    };

    Ok(the_config)
}

use std::process;

use sourcerank_tester::config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let banner = include_str!("../banner");
    print!("{}", banner);

    let config = Config::build_config().unwrap_or_else(|err| {
        eprintln!("Error building config: {:#}", err);
        process::exit(1);
    });

    let default_level = if config.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match sourcerank_tester::exec(&config) {
        Ok(summary) => process::exit(summary.exit_code()),
        Err(err) => {
            eprintln!("Error executing test cases: {:#}", err);
            process::exit(1);
        }
    }
}

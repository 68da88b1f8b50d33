use anyhow::{anyhow, Context, Result};
use getopts::{Matches, Options};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::exit;
use std::{env, fs};

pub const DEFAULT_BASE_URL: &str = "https://recruiter-hub-48.preview.emergentagent.com/api";
pub const DEFAULT_OUTPUT_PATH: &str = "/app/backend_test_results.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub output_path: PathBuf,
    pub timeout_secs: u64, // bound on each request, body included.
    pub verbose: bool,
    pub insecure: bool, // skip tls certificate verification.
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: false,
            insecure: false,
        }
    }
}

impl Config {
    pub fn build_config() -> Result<Self> {
        let args: Vec<String> = env::args().collect();

        let opts = options();
        let matches = opts
            .parse(&args[1..])
            .map_err(|f| anyhow!("invalid arguments: {}", f))?;

        if matches.opt_present("h") {
            print_usage(&args[0], &opts);
            exit(0);
        }

        Config::from_matches(&matches)
    }

    /// Layers command line values over the optional config file, which in turn
    /// overrides the built-in defaults.
    pub fn from_matches(matches: &Matches) -> Result<Self> {
        let mut config = match matches.opt_str("c") {
            Some(path) => Config::from_file(&path)?,
            None => Config::default(),
        };

        if let Some(base_url) = matches.opt_str("b") {
            config.base_url = base_url;
        }
        if let Some(output) = matches.opt_str("o") {
            config.output_path = PathBuf::from(output);
        }
        if let Some(timeout) = matches.opt_str("t") {
            config.timeout_secs = timeout
                .parse::<u64>()
                .with_context(|| format!("timeout must be a number of seconds, got '{}'", timeout))?;
        }
        if matches.opt_present("v") {
            config.verbose = true;
        }
        if matches.opt_present("k") {
            config.insecure = true;
        }

        if config.timeout_secs == 0 {
            return Err(anyhow!("timeout must be at least 1 second"));
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading config file {}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path))?;
        Ok(config)
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("b", "base_url", "Set the base URL of the API under test", "BASE_URL");
    opts.optopt("o", "output", "Set the results file path", "OUTPUT");
    opts.optopt("t", "timeout", "Set the request timeout in seconds", "SECONDS");
    opts.optopt("c", "config", "Read settings from a YAML file", "CONFIG");
    opts.optflag("h", "help", "Print this help menu");
    opts.optflag("v", "verbose", "Print verbose information");
    opts.optflag("k", "insecure", "Accept invalid TLS certificates");
    opts
}

fn print_usage(program: &str, opts: &Options) {
    let version = env!("CARGO_PKG_VERSION");
    let program_name = program.split('/').last().unwrap_or(program);
    let description = "Smoke tests for the SourceRank backend API";
    let brief = format!(
        "{}  {} version {}\nUsage: {} [options]",
        program_name, description, version, program_name
    );

    println!("{}", opts.usage(&brief));
}

use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Set a custom configuration file. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "c", parse(from_os_str), env = "COVERAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnostic log level: off, error, warn, info, debug or trace
    #[structopt(long, short = "L", env = "LOG_LEVEL", default_value = "info")]
    pub logging: LevelFilter,

    /// File to which application will write diagnostic logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Create the summary, merged, json and log folders
    Prepare {
        /// Remove the previous coverage log first
        #[structopt(long)]
        fresh: bool,
    },
    /// Remove every file generated by the coverage tool
    Clean,
    /// Print the folder raw profiles are collected in
    RawFolder,
    /// Detect the compiler used for the configured platform
    DetectCompiler,
    /// Print the test name a profile file belongs to
    TestName { path: String },
    /// Print a path relative to a base path
    Relative { whole: String, base: String },
    /// Print a file name with its extension replaced
    Extension { filename: String, ext: String },
    /// Check whether a file belongs to one of the listed tests
    Related {
        file: String,
        /// Test list manifest
        #[structopt(long, short = "t", parse(from_os_str))]
        tests: PathBuf,
    },
    /// Validate a test list manifest and count its tests
    Tests {
        /// Test list manifest
        #[structopt(long, short = "t", parse(from_os_str))]
        tests: PathBuf,
    },
}

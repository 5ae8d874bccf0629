extern crate chrono;

#[macro_use]
extern crate log;

use coverage_kit::compiler::{detect_compiler_type, detector_for};
use coverage_kit::configuration::command_line::{Command, Opt};
use coverage_kit::configuration::manifest::{TestManifest, TestSummary};
use coverage_kit::configuration::settings::Settings;
use coverage_kit::journal::{FileLogSink, LogSink};
use coverage_kit::util::fs::{clean_up, prepare_folders, remove_file};
use coverage_kit::util::path::{
    convert_to_relative_path, get_raw_profiles_folder, get_test_name_from_whole_path,
    related_to_test_list, replace_extension,
};
use coverage_kit::Result;
use log::LevelFilter;
use std::io;
use std::path::Path;
use std::process::exit;
use std::time::Instant;
use structopt::StructOpt;

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(options.logging, options.log_output_file.as_deref()) {
        eprintln!("Failed to initialise logging {}", e);
        exit(1);
    }

    let settings = match Settings::load(options.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration {}", e);
            exit(1);
        }
    };
    debug!("Initiated configuration {:#?}", settings);

    let journal = FileLogSink::from(&settings);
    if let Err(e) = run(options.command, &settings, &journal) {
        error!("{}", e);
        if let Err(journal_err) = note_error(&settings, &journal, &e.to_string()) {
            debug!("Cannot write to {}: {}", journal.path().display(), journal_err);
        }
        exit(1);
    }
}

fn run(command: Command, settings: &Settings, journal: &dyn LogSink) -> Result<()> {
    let start = Instant::now();
    match command {
        Command::Prepare { fresh } => {
            if fresh {
                remove_file(settings.log_file())?;
            }
            prepare_folders(settings)?;
            let profile_dir = settings.profile_dir.display().to_string();
            journal.info(&["prepared profile folders under", profile_dir.as_str()])?;
            journal.timing("prepare folders", start, false)?;
        }
        Command::Clean => match clean_up(settings)? {},
        Command::RawFolder => println!("{}", get_raw_profiles_folder(settings).display()),
        Command::DetectCompiler => {
            let platform = settings.test_platform;
            let detector = detector_for(platform, settings);
            match detect_compiler_type(detector.as_ref())? {
                Some(compiler) => {
                    note(settings, journal, &["detected compiler", compiler.as_str()])?;
                    println!("{}", compiler);
                }
                None => {
                    info!("No compiler type reported for platform {}", platform);
                    println!("unknown");
                }
            }
        }
        Command::TestName { path } => println!("{}", get_test_name_from_whole_path(&path)?),
        Command::Relative { whole, base } => println!("{}", convert_to_relative_path(&whole, &base)?),
        Command::Extension { filename, ext } => println!("{}", replace_extension(&filename, &ext)),
        Command::Related { file, tests } => {
            let test_list = TestManifest::from(tests)?.into_test_list()?;
            println!("{}", related_to_test_list(&file, &test_list));
        }
        Command::Tests { tests } => {
            let test_list = TestManifest::from(tests)?.into_test_list()?;
            let summary = TestSummary::of(&test_list).ensure_not_empty(settings)?;
            let (cpp, py) = (summary.cpp.to_string(), summary.py.to_string());
            note(
                settings,
                journal,
                &["found", cpp.as_str(), "cpp and", py.as_str(), "python tests"],
            )?;
            if settings.log_dir().is_dir() {
                journal.timing("load test list", start, true)?;
            }
            println!("cpp: {}\npython: {}", cpp, py);
        }
    }
    Ok(())
}

// Commands other than `prepare` may run before the log folder exists.
fn note(settings: &Settings, journal: &dyn LogSink, args: &[&str]) -> io::Result<()> {
    if settings.log_dir().is_dir() {
        journal.info(args)
    } else {
        Ok(())
    }
}

fn note_error(settings: &Settings, journal: &dyn LogSink, message: &str) -> io::Result<()> {
    if settings.log_dir().is_dir() {
        journal.error(&[message])
    } else {
        Ok(())
    }
}

fn init_logging(level: LevelFilter, output: Option<&Path>) -> std::result::Result<(), fern::InitError> {
    let dispatcher = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    match output {
        Some(path) => dispatcher.chain(fern::log_file(path)?).apply()?,
        None => dispatcher.apply()?,
    }
    Ok(())
}

use crate::configuration::settings::Settings;
use crate::error::Result;
use std::convert::Infallible;
use std::fs;
use std::path::Path;
use std::process::exit;

pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Recursive delete. Unlike [`remove_file`] a missing folder is an error.
pub fn remove_folder<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::remove_dir_all(path)?;
    Ok(())
}

pub fn create_folder<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Lays out the folders a coverage run writes into.
pub fn prepare_folders(settings: &Settings) -> Result<()> {
    create_folder(&[
        settings.summary_folder(),
        settings.merged_folder(),
        settings.json_folder(),
        settings.log_dir(),
    ])
}

pub fn remove_profiles(settings: &Settings) -> Result<()> {
    info!("Removing profile folder {}", settings.profile_dir.display());
    remove_folder(&settings.profile_dir)
}

/// Removes everything the coverage tool generated and ends the process.
/// Only returns when the removal fails.
pub fn clean_up(settings: &Settings) -> Result<Infallible> {
    remove_profiles(settings)?;
    eprintln!("Clean Up Successfully!");
    exit(0)
}

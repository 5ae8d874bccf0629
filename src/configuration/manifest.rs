use crate::configuration::settings::Settings;
use crate::configuration::types::{Test, TestList, TestType};
use crate::error::Result;
use crate::util::check::{check_test_type, raise_no_test_found_exception};
use config::{Config, ConfigError, File};
use serde_derive::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct TestEntry {
    pub name: String,
    pub target_pattern: String,
    #[serde(default)]
    pub test_set: String,
    pub test_type: String,
}

/// List of tests taking part in a coverage run, as written in a manifest file.
#[derive(Debug, Deserialize)]
pub struct TestManifest {
    #[serde(default)]
    pub tests: Vec<TestEntry>,
}

#[derive(Debug, Default, PartialEq)]
pub struct TestSummary {
    pub cpp: usize,
    pub py: usize,
}

impl TestManifest {
    pub fn from(file: PathBuf) -> std::result::Result<Self, ConfigError> {
        let mut config = Config::new();
        config.merge(File::from(file))?;

        config.try_into()
    }

    pub fn into_test_list(self) -> Result<TestList> {
        self.tests
            .into_iter()
            .map(|entry| {
                let test_type = check_test_type(&entry.test_type, &entry.target_pattern)?;
                Ok(Test {
                    name: entry.name,
                    target_pattern: entry.target_pattern,
                    test_set: entry.test_set,
                    test_type,
                })
            })
            .collect()
    }
}

impl TestSummary {
    pub fn of(tests: &[Test]) -> Self {
        tests
            .iter()
            .fold(Self::default(), |mut summary, test| {
                match test.test_type {
                    TestType::Cpp => summary.cpp += 1,
                    TestType::Py => summary.py += 1,
                }
                summary
            })
    }

    /// Fails when the list has neither C++ nor Python tests, naming the
    /// folders they would have been searched in.
    pub fn ensure_not_empty(self, settings: &Settings) -> Result<Self> {
        if self.cpp == 0 && self.py == 0 {
            return Err(raise_no_test_found_exception(
                &settings.cpp_test_folder.to_string_lossy(),
                &settings.py_test_folder.to_string_lossy(),
            ));
        }
        Ok(self)
    }
}

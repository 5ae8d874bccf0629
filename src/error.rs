use config::ConfigError;
use std::io;
use thiserror::Error;

/// Failures surfaced by the coverage helpers. Nothing is retried or recovered
/// internally, every variant reaches the immediate caller as is.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Can't parse compiler type: {0}. Please set environment variable COMPILER_TYPE as CLANG or GCC")]
    CompilerType(String),
    #[error("Can't parse platform type: {0}. Please set environment variable TEST_PLATFORM as OSS or FBCODE")]
    PlatformType(String),
    #[error("Can't parse test type: {test_type}. Please check the type of buck target: {target}")]
    TestType { test_type: String, target: String },
    #[error("No cpp and python tests found in folder **{cpp}** and **{py}**")]
    NoTestFound { cpp: String, py: String },
    #[error("{base} is not in {whole}")]
    NotRelative { base: String, whole: String },
    #[error("Path '{0}' has no '/' or '.' to derive a test name from")]
    NoTestName(String),
    #[error("Compiler detection failed: {0}")]
    Detection(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Toolchain that produced the instrumented binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerType {
    Gcc,
    Clang,
}

/// Build environment the tests run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPlatform {
    Oss,
    Fbcode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestType {
    Cpp,
    Py,
}

/// A single test known to the coverage run. Only `name` takes part in
/// matching profile files against the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    pub name: String,
    pub target_pattern: String,
    pub test_set: String,
    pub test_type: TestType,
}

pub type TestList = Vec<Test>;

impl CompilerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerType::Gcc => "gcc",
            CompilerType::Clang => "clang",
        }
    }
}

impl TestPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestPlatform::Oss => "oss",
            TestPlatform::Fbcode => "fbcode",
        }
    }
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Cpp => "cxx_test",
            TestType::Py => "python_unittest",
        }
    }
}

impl Test {
    pub fn new(name: &str, target_pattern: &str, test_type: TestType) -> Self {
        Self {
            name: name.to_owned(),
            target_pattern: target_pattern.to_owned(),
            test_set: String::default(),
            test_type,
        }
    }
}

impl FromStr for CompilerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gcc" => Ok(CompilerType::Gcc),
            "clang" => Ok(CompilerType::Clang),
            _ => Err(Error::CompilerType(s.to_owned())),
        }
    }
}

impl FromStr for TestPlatform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oss" => Ok(TestPlatform::Oss),
            "fbcode" => Ok(TestPlatform::Fbcode),
            _ => Err(Error::PlatformType(s.to_owned())),
        }
    }
}

impl FromStr for TestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cxx_test" => Ok(TestType::Cpp),
            "python_unittest" => Ok(TestType::Py),
            // The build target is only known to the caller.
            _ => Err(Error::TestType {
                test_type: s.to_owned(),
                target: String::default(),
            }),
        }
    }
}

impl fmt::Display for CompilerType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TestPlatform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

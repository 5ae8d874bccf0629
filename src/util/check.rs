use crate::configuration::types::{CompilerType, TestPlatform, TestType};
use crate::error::{Error, Result};

/// An absent compiler type is accepted; anything present must be GCC or Clang.
pub fn check_compiler_type(cov_type: Option<&str>) -> Result<Option<CompilerType>> {
    match cov_type {
        None => Ok(None),
        Some(value) => value.parse::<CompilerType>().map(Some),
    }
}

pub fn check_platform_type(platform_type: &str) -> Result<TestPlatform> {
    platform_type.parse::<TestPlatform>()
}

pub fn check_test_type(test_type: &str, target: &str) -> Result<TestType> {
    match test_type.parse::<TestType>() {
        Err(Error::TestType { test_type, .. }) => Err(Error::TestType {
            test_type,
            target: target.to_owned(),
        }),
        parsed => parsed,
    }
}

/// Always an error; callers use it once they know neither folder holds tests.
pub fn raise_no_test_found_exception(cpp_binary_folder: &str, python_binary_folder: &str) -> Error {
    Error::NoTestFound {
        cpp: cpp_binary_folder.to_owned(),
        py: python_binary_folder.to_owned(),
    }
}

use crate::configuration::constants::common::{
    DEFAULT_CPP_TEST_FOLDER, DEFAULT_PROFILE_DIR, DEFAULT_PY_TEST_FOLDER, LOG_FILE_NAME,
};
use crate::configuration::constants::folders;
use crate::configuration::types::TestPlatform;
use config::{Config, ConfigError, Environment, File};
use derivative::*;
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

/// Everything the helpers would otherwise read from ambient process state.
///
/// Built once by [`Settings::load`] (defaults, then an optional configuration
/// file, then the environment) and passed explicitly to whatever needs it.
#[derive(Debug, Clone, Deserialize, Derivative)]
#[derivative(Default)]
pub struct Settings {
    #[derivative(Default(value = "PathBuf::from(DEFAULT_PROFILE_DIR)"))]
    pub profile_dir: PathBuf,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    #[serde(default)]
    pub raw_profiles_folder: Option<PathBuf>,
    #[serde(with = "crate::configuration::deserialize::platform")]
    #[derivative(Default(value = "TestPlatform::Oss"))]
    pub test_platform: TestPlatform,
    #[serde(default)]
    pub compiler_type: Option<String>,
    #[serde(default)]
    pub cxx: Option<String>,
    #[derivative(Default(value = "PathBuf::from(DEFAULT_CPP_TEST_FOLDER)"))]
    pub cpp_test_folder: PathBuf,
    #[derivative(Default(value = "PathBuf::from(DEFAULT_PY_TEST_FOLDER)"))]
    pub py_test_folder: PathBuf,
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config
            .set_default("profile_dir", DEFAULT_PROFILE_DIR)?
            .set_default("test_platform", TestPlatform::Oss.as_str())?
            .set_default("cpp_test_folder", DEFAULT_CPP_TEST_FOLDER)?
            .set_default("py_test_folder", DEFAULT_PY_TEST_FOLDER)?;
        if let Some(file) = file {
            config.merge(File::from(file.to_path_buf()))?;
        }
        config.merge(Environment::new())?;

        config.try_into()
    }

    pub fn with_profile_dir<P: Into<PathBuf>>(profile_dir: P) -> Self {
        Self {
            profile_dir: profile_dir.into(),
            ..Self::default()
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => self.profile_dir.join(folders::LOG),
        }
    }

    #[inline]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join(LOG_FILE_NAME)
    }

    #[inline]
    pub fn merged_folder(&self) -> PathBuf {
        self.profile_dir.join(folders::MERGED)
    }

    #[inline]
    pub fn json_folder(&self) -> PathBuf {
        self.profile_dir.join(folders::JSON)
    }

    #[inline]
    pub fn summary_folder(&self) -> PathBuf {
        self.profile_dir.join(folders::SUMMARY)
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::configuration::types::TestPlatform;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_folders_derive_from_profile_dir() {
        let settings = Settings::with_profile_dir("/tmp/cov/profile");

        assert_eq!(settings.log_dir(), PathBuf::from("/tmp/cov/profile/log"));
        assert_eq!(settings.log_file(), PathBuf::from("/tmp/cov/profile/log/log.txt"));
        assert_eq!(settings.merged_folder(), PathBuf::from("/tmp/cov/profile/merged"));
        assert_eq!(settings.test_platform, TestPlatform::Oss);
    }

    #[test]
    fn test_log_dir_override() {
        let mut settings = Settings::with_profile_dir("profile");
        settings.log_dir = Some(PathBuf::from("logs"));

        assert_eq!(settings.log_file(), PathBuf::from("logs/log.txt"));
    }

    #[test]
    fn test_loading_from_configuration_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coverage.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "profile_dir = \"/data/profile\"").unwrap();
        writeln!(file, "test_platform = \"FBCODE\"").unwrap();
        writeln!(file, "compiler_type = \"clang\"").unwrap();
        drop(file);

        let settings = Settings::load(Some(path.as_path())).unwrap();

        assert_eq!(settings.test_platform, TestPlatform::Fbcode);
        assert_eq!(settings.compiler_type.as_deref(), Some("clang"));
    }

    #[test]
    fn test_loading_rejects_unknown_platform() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coverage.toml");
        std::fs::write(&path, "test_platform = \"windows\"\n").unwrap();

        let result = Settings::load(Some(path.as_path()));

        assert!(result.is_err());
    }
}

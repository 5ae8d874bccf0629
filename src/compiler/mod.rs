use crate::configuration::settings::Settings;
use crate::configuration::types::{CompilerType, TestPlatform};
use crate::error::{Error, Result};
use crate::util::check::check_compiler_type;
use std::process::Command;

const DEFAULT_PROBE: &'static str = "cc";

/// Reports the raw name of the compiler a platform builds with, if known.
pub trait CompilerDetector {
    fn detect(&self) -> Result<Option<String>>;
}

/// Open-source builds: the `CXX` setting wins, otherwise the system `cc` is
/// asked for its version banner.
#[derive(Debug)]
pub struct OssDetector {
    cxx: Option<String>,
    probe: String,
}

/// Internal builds carry the compiler in the `COMPILER_TYPE` setting.
#[derive(Debug)]
pub struct FbcodeDetector {
    compiler_type: Option<String>,
}

impl OssDetector {
    pub fn new(cxx: Option<String>) -> Self {
        Self {
            cxx,
            probe: DEFAULT_PROBE.to_owned(),
        }
    }

    pub fn with_probe(cxx: Option<String>, probe: &str) -> Self {
        Self {
            cxx,
            probe: probe.to_owned(),
        }
    }

    fn auto_detect(&self) -> Result<Option<String>> {
        let output = Command::new(&self.probe)
            .arg("-v")
            .output()
            .map_err(|e| Error::Detection(format!("cannot run '{} -v': {}", self.probe, e)))?;
        if !output.status.success() {
            return Err(Error::Detection(format!(
                "'{} -v' exited with {}",
                self.probe, output.status
            )));
        }
        let mut banner = String::from_utf8_lossy(&output.stdout).into_owned();
        banner.push_str(&String::from_utf8_lossy(&output.stderr));
        debug!("'{} -v' reported {}", self.probe, banner.trim());

        if banner.contains("clang") {
            Ok(Some(CompilerType::Clang.to_string()))
        } else if banner.contains("gcc") {
            Ok(Some(CompilerType::Gcc.to_string()))
        } else {
            Err(Error::Detection(format!(
                "Auto detected compiler is not valid {}",
                banner.trim()
            )))
        }
    }
}

impl CompilerDetector for OssDetector {
    fn detect(&self) -> Result<Option<String>> {
        // An empty CXX counts as unset.
        match self.cxx.as_deref().filter(|cxx| !cxx.is_empty()) {
            Some("clang") | Some("clang++") => Ok(Some(CompilerType::Clang.to_string())),
            Some("gcc") | Some("g++") => Ok(Some(CompilerType::Gcc.to_string())),
            Some(other) => Err(Error::Detection(format!(
                "User specified compiler is not valid {}",
                other
            ))),
            None => self.auto_detect(),
        }
    }
}

impl FbcodeDetector {
    pub fn new(compiler_type: Option<String>) -> Self {
        Self { compiler_type }
    }
}

impl CompilerDetector for FbcodeDetector {
    fn detect(&self) -> Result<Option<String>> {
        Ok(self.compiler_type.clone())
    }
}

pub fn detector_for(platform: TestPlatform, settings: &Settings) -> Box<dyn CompilerDetector> {
    match platform {
        TestPlatform::Oss => Box::new(OssDetector::new(settings.cxx.clone())),
        TestPlatform::Fbcode => Box::new(FbcodeDetector::new(settings.compiler_type.clone())),
    }
}

pub fn detect_compiler_type(detector: &dyn CompilerDetector) -> Result<Option<CompilerType>> {
    let cov_type = detector.detect()?;
    check_compiler_type(cov_type.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl CompilerDetector for Fixed {
        fn detect(&self) -> Result<Option<String>> {
            Ok(self.0.map(str::to_owned))
        }
    }

    #[test]
    fn test_detected_value_is_validated() {
        assert_eq!(detect_compiler_type(&Fixed(Some("clang"))).unwrap(), Some(CompilerType::Clang));
        assert_eq!(detect_compiler_type(&Fixed(None)).unwrap(), None);
        assert!(matches!(
            detect_compiler_type(&Fixed(Some("msvc"))),
            Err(Error::CompilerType(_))
        ));
    }

    #[test]
    fn test_oss_detector_honours_cxx() {
        let clang = OssDetector::new(Some("clang++".to_owned()));
        let gcc = OssDetector::new(Some("g++".to_owned()));
        let icc = OssDetector::new(Some("icc".to_owned()));

        assert_eq!(detect_compiler_type(&clang).unwrap(), Some(CompilerType::Clang));
        assert_eq!(detect_compiler_type(&gcc).unwrap(), Some(CompilerType::Gcc));
        assert!(matches!(icc.detect(), Err(Error::Detection(_))));
    }

    #[test]
    fn test_oss_detector_missing_probe() {
        let detector = OssDetector::with_probe(None, "definitely-not-a-compiler-binary");

        assert!(matches!(detector.detect(), Err(Error::Detection(_))));
    }

    #[test]
    fn test_oss_detector_empty_cxx_falls_back_to_probe() {
        let detector = OssDetector::with_probe(Some(String::new()), "definitely-not-a-compiler-binary");

        match detector.detect() {
            Err(Error::Detection(message)) => assert!(message.starts_with("cannot run")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_oss_detector_failing_probe() {
        let detector = OssDetector::with_probe(None, "false");

        match detector.detect() {
            Err(Error::Detection(message)) => assert!(message.contains("exited with")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_detector_selected_by_platform() {
        let mut settings = Settings::default();
        settings.compiler_type = Some("GCC".to_owned());
        settings.cxx = Some("clang".to_owned());

        let fbcode = detector_for(TestPlatform::Fbcode, &settings);
        let oss = detector_for(TestPlatform::Oss, &settings);

        assert_eq!(detect_compiler_type(fbcode.as_ref()).unwrap(), Some(CompilerType::Gcc));
        assert_eq!(detect_compiler_type(oss.as_ref()).unwrap(), Some(CompilerType::Clang));
    }
}

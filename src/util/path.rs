use crate::configuration::constants::folders;
use crate::configuration::settings::Settings;
use crate::configuration::types::Test;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// `("profile/raw", "profile")` gives `"raw"`.
///
/// `base` only has to occur somewhere in `whole`, it is not checked to be a
/// leading path component, so `("xprofile/raw", "profile")` gives `"/raw"`.
pub fn convert_to_relative_path(whole_path: &str, base_path: &str) -> Result<String> {
    if !whole_path.contains(base_path) {
        return Err(Error::NotRelative {
            base: base_path.to_owned(),
            whole: whole_path.to_owned(),
        });
    }
    Ok(whole_path
        .chars()
        .skip(base_path.chars().count() + 1)
        .collect())
}

/// Swaps everything from the last `.` for `ext`. A name without a `.` gets
/// `ext` appended.
pub fn replace_extension(filename: &str, ext: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(index) => &filename[..index],
        None => filename,
    };
    format!("{}{}", stem, ext)
}

/// `code_coverage_tool/profile/merged/haha.merged` gives `haha`.
pub fn get_test_name_from_whole_path(path: &str) -> Result<String> {
    match (path.rfind('/'), path.rfind('.')) {
        (Some(start), Some(end)) => Ok(path.get(start + 1..end).unwrap_or_default().to_owned()),
        _ => Err(Error::NoTestName(path.to_owned())),
    }
}

pub fn related_to_test_list(file_name: &str, test_list: &[Test]) -> bool {
    test_list.iter().any(|test| file_name.contains(test.name.as_str()))
}

pub fn get_raw_profiles_folder(settings: &Settings) -> PathBuf {
    match &settings.raw_profiles_folder {
        Some(folder) => folder.clone(),
        None => settings.profile_dir.join(folders::RAW),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::types::TestType;

    #[test]
    fn test_relative_path() {
        assert_eq!(convert_to_relative_path("profile/raw", "profile").unwrap(), "raw");
        assert_eq!(convert_to_relative_path("/a/b/c.txt", "/a").unwrap(), "b/c.txt");
        assert_eq!(convert_to_relative_path("profile", "profile").unwrap(), "");
    }

    #[test]
    fn test_relative_path_matches_substring_only() {
        assert_eq!(convert_to_relative_path("xprofile/raw", "profile").unwrap(), "/raw");
    }

    #[test]
    fn test_relative_path_requires_base() {
        let err = convert_to_relative_path("x", "y").unwrap_err();
        assert_eq!(err.to_string(), "y is not in x");
    }

    #[test]
    fn test_replace_extension() {
        assert_eq!(replace_extension("a.b.txt", ".json"), "a.b.json");
        assert_eq!(replace_extension("merged/haha.merged", ".json"), "merged/haha.json");
        assert_eq!(replace_extension("abc", ".x"), "abc.x");
    }

    #[test]
    fn test_test_name_from_path() {
        assert_eq!(
            get_test_name_from_whole_path("code_coverage_tool/profile/merged/haha.merged").unwrap(),
            "haha"
        );
        assert_eq!(get_test_name_from_whole_path("a.dir/name").unwrap(), "");
        assert!(get_test_name_from_whole_path("haha.merged").is_err());
        assert!(get_test_name_from_whole_path("profile/haha").is_err());
    }

    #[test]
    fn test_related_to_test_list() {
        let tests = vec![Test::new("MyTest", "//a:my_test", TestType::Cpp)];
        let others = vec![Test::new("Other", "//a:other", TestType::Py)];

        assert!(related_to_test_list("foo_MyTest_bar", &tests));
        assert!(!related_to_test_list("foo_MyTest_bar", &others));
        assert!(!related_to_test_list("foo_MyTest_bar", &[]));
    }

    #[test]
    fn test_raw_profiles_folder() {
        let mut settings = Settings::with_profile_dir("/cov/profile");
        assert_eq!(get_raw_profiles_folder(&settings), PathBuf::from("/cov/profile/raw"));

        settings.raw_profiles_folder = Some(PathBuf::from("/elsewhere/raw"));
        assert_eq!(get_raw_profiles_folder(&settings), PathBuf::from("/elsewhere/raw"));
    }
}

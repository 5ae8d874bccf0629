pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const LOG_FILE_NAME: &'static str = "log.txt";
    pub const DEFAULT_PROFILE_DIR: &'static str = "profile";
    pub const DEFAULT_CPP_TEST_FOLDER: &'static str = "build/bin";
    pub const DEFAULT_PY_TEST_FOLDER: &'static str = "test";
}

pub mod folders {
    pub const RAW: &'static str = "raw";
    pub const LOG: &'static str = "log";
    pub const MERGED: &'static str = "merged";
    pub const JSON: &'static str = "json";
    pub const SUMMARY: &'static str = "summary";
}

pub mod platform {
    use crate::configuration::types::TestPlatform;
    use crate::util::check::check_platform_type;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TestPlatform, D::Error>
    where
        D: Deserializer<'de>,
    {
        match String::deserialize(deserializer) {
            Ok(v) => check_platform_type(v.as_str()).map_err(|err| D::Error::custom(err.to_string())),
            Err(err) => Err(err),
        }
    }
}

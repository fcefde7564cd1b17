use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const DEFAULT_MAX_NOTIFICATION_ATTEMPTS: usize = 5;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    #[serde(default = "default_max_notification_attempts")]
    pub max_notification_attempts: usize,
}

fn default_max_notification_attempts() -> usize {
    DEFAULT_MAX_NOTIFICATION_ATTEMPTS
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_notification_attempts: DEFAULT_MAX_NOTIFICATION_ATTEMPTS,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(5, config.max_notification_attempts);
    }

    #[tokio::test]
    async fn test_should_parse_config() {
        let config = Configuration::from_json(r#"{"branch_id": "main", "max_notification_attempts": 3}"#)
            .expect("should parse config");
        assert_eq!("main", config.branch_id.as_str());
        assert_eq!(3, config.max_notification_attempts);

        let config = Configuration::from_json(r#"{"branch_id": "main"}"#).expect("should parse config");
        assert_eq!(5, config.max_notification_attempts);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_config() {
        let res = Configuration::from_json("{branch_id");
        assert!(matches!(res, Err(LibraryError::Serialization { message: _ })));
    }
}

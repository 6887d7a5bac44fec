use std::{env, fmt};

use crate::error::CredentialError;

/// A secret SendGrid API key. Used both for the admin credential that
/// authorizes requests and for keys handed back by the API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// Read the key from an environment variable. Unset, empty and non-unicode
    /// values are all treated as not set.
    pub fn from_env(var: &str) -> Result<Self, CredentialError> {
        match env::var(var) {
            Ok(key) if !key.is_empty() => Ok(Self { key }),
            _ => Err(CredentialError::NotSet(var.to_owned())),
        }
    }

    /// From a raw API key string.
    pub fn from_raw(key: &str) -> Self {
        Self {
            key: key.to_owned(),
        }
    }

    pub fn get(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey").field("key", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAKE_API_KEY: &str = "SG.fake-api-key";

    // Each test uses its own variable so parallel tests don't race.

    #[test]
    fn from_env_success() {
        env::set_var("SG_ADMIN_TEST_KEY_PRESENT", FAKE_API_KEY);
        let key = ApiKey::from_env("SG_ADMIN_TEST_KEY_PRESENT");
        assert_eq!(key.unwrap().get(), FAKE_API_KEY);
    }

    #[test]
    fn from_env_unset() {
        env::remove_var("SG_ADMIN_TEST_KEY_UNSET");
        let key = ApiKey::from_env("SG_ADMIN_TEST_KEY_UNSET");
        assert_eq!(
            key.unwrap_err(),
            CredentialError::NotSet("SG_ADMIN_TEST_KEY_UNSET".to_string())
        );
    }

    #[test]
    fn from_env_empty() {
        env::set_var("SG_ADMIN_TEST_KEY_EMPTY", "");
        let key = ApiKey::from_env("SG_ADMIN_TEST_KEY_EMPTY");
        assert!(matches!(key, Err(CredentialError::NotSet(_))));
    }

    #[test]
    fn debug_is_redacted() {
        let key = ApiKey::from_raw(FAKE_API_KEY);
        let debug = format!("{:?}", key);
        assert!(!debug.contains(FAKE_API_KEY));
        assert!(debug.contains("redacted"));
    }
}

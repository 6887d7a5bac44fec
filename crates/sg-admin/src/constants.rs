/// The default host for the SendGrid v3 API
pub const DEFAULT_API_HOST: &str = "https://api.sendgrid.com";

/// Path of the API key collection, relative to the host
pub const API_KEYS_PATH: &str = "/v3/api_keys";

/// Environment variable holding the admin credential
pub const ADMIN_KEY_ENV_VAR: &str = "SENDGRID_API_KEY";

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_joins_cleanly_with_path() {
        assert!(!DEFAULT_API_HOST.ends_with('/'));
        assert!(API_KEYS_PATH.starts_with('/'));
        assert_eq!(
            format!("{}{}", DEFAULT_API_HOST, API_KEYS_PATH),
            "https://api.sendgrid.com/v3/api_keys"
        );
    }
}

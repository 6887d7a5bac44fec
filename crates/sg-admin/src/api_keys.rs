use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{
    api_interfaces::api_keys,
    constants::{API_KEYS_PATH, AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, DEFAULT_API_HOST},
    error::CreateError,
    ApiKey,
};

/// A key freshly created by the API keys service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedKey {
    pub api_key: ApiKey,
    pub name: String,
    pub api_key_id: String,
}

impl CreatedKey {
    /// Create a key named `name` carrying the mail send scopes.
    /// If the host is not provided, the SendGrid production API is used.
    pub async fn create_custom(
        name: &str,
        admin_key: &ApiKey,
        client: &Client,
        host: Option<&str>,
    ) -> Result<Self, CreateError> {
        let request = api_keys::Request::new(name);
        let body = serde_json::to_string(&request).map_err(CreateError::SerializeError)?;
        let url = format!(
            "{}{}",
            host.unwrap_or(DEFAULT_API_HOST).trim_end_matches('/'),
            API_KEYS_PATH
        );
        debug!(%url, scopes = request.scopes.len(), "sending API key creation request");

        let response = client
            .post(&url)
            .header(CONTENT_TYPE_HEADER, "application/json")
            .header(AUTHORIZATION_HEADER, format!("Bearer {}", admin_key.get()))
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| CreateError::ResponseBodyError { status, source })?;
        if status != StatusCode::CREATED {
            debug!(%status, "API key creation rejected");
            return Err(CreateError::ResponseError { status, body });
        }

        let parsed: api_keys::Response = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(source) => return Err(CreateError::ParseError { source, body }),
        };
        if parsed.api_key.is_empty() {
            return Err(CreateError::ApiKeyNotFound { body });
        }
        debug!(api_key_id = %parsed.api_key_id, name = %parsed.name, "API key created");
        Ok(parsed.into())
    }
}

impl From<api_keys::Response> for CreatedKey {
    fn from(response: api_keys::Response) -> Self {
        Self {
            api_key: ApiKey::from_raw(&response.api_key),
            name: response.name,
            api_key_id: response.api_key_id,
        }
    }
}

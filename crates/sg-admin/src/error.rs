use reqwest::StatusCode;
use thiserror::Error;

use crate::api_interfaces::errors;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{0} environment variable not set")]
    NotSet(String),
}

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("unable to serialize the request body: {0}")]
    SerializeError(#[source] serde_json::Error),
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the API responded with status code {}", .status.as_u16())]
    ResponseError { status: StatusCode, body: String },
    #[error("the response body could not be read: {source}")]
    ResponseBodyError {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },
    #[error("unable to parse the successful response body: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("the API key was not found in the successful response")]
    ApiKeyNotFound { body: String },
}

impl CreateError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::ResponseError { status, .. } | Self::ResponseBodyError { status, .. } => {
                Some(*status)
            }
            Self::ParseError { .. } | Self::ApiKeyNotFound { .. } => Some(StatusCode::CREATED),
            Self::SerializeError(_) | Self::RequestError(_) => None,
        }
    }

    /// Raw response body, if one was read.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::ResponseError { body, .. }
            | Self::ParseError { body, .. }
            | Self::ApiKeyNotFound { body } => Some(body),
            _ => None,
        }
    }

    /// Messages from the provider's error payload on a rejected request.
    /// Empty when the body is not in the provider's error format.
    pub fn provider_messages(&self) -> Vec<String> {
        let Self::ResponseError { body, .. } = self else {
            return Vec::new();
        };
        serde_json::from_str::<errors::Response>(body)
            .map(|parsed| parsed.errors.iter().map(errors::Item::describe).collect())
            .unwrap_or_default()
    }
}

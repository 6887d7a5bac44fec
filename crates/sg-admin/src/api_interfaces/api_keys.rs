use serde::{Deserialize, Serialize};

use crate::scopes::MAIL_SEND_SCOPES;

/// Raw request body for creating an API key.
#[derive(Serialize, Debug)]
pub struct Request<'a> {
    pub name: &'a str,
    pub scopes: &'a [&'a str],
}

impl<'a> Request<'a> {
    /// A request for a key named `name` carrying the full mail send scope set.
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            scopes: MAIL_SEND_SCOPES,
        }
    }
}

/// Raw response from a successful key creation.
// Missing fields read as empty so an absent key is caught by the key check, not the parser.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Response {
    pub api_key: String,
    pub name: String,
    pub api_key_id: String,
}

pub mod api_interfaces;
mod api_key;
pub mod api_keys;
pub mod constants;
pub mod error;
pub mod scopes;
pub mod util;

pub use api_key::ApiKey;
pub use api_keys::CreatedKey;

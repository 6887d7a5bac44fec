use reqwest::Client;

const USER_AGENT: &str = concat!("sendgrid-keygen/", env!("CARGO_PKG_VERSION"));

pub fn default_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .gzip(true)
        .brotli(true)
        .user_agent(USER_AGENT)
        .build()
}

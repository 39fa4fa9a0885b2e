// src/core/net.rs
//
// Blocking HTTPS GET against the catalog. No retries.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::options::LookupOptions;

pub type NetError = Box<dyn Error + Send + Sync>;

/// A client carrying the user agent and timeout from `opts`.
pub fn client(opts: &LookupOptions) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(opts.user_agent.clone())
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build()
}

/// GET `url?query…` and return the body. Anything but 2xx is an error.
pub fn http_get(
    client: &Client,
    token: Option<&str>,
    url: &str,
    query: &[(&str, &str)],
) -> Result<String, NetError> {
    let mut req = client.get(url).query(query);
    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
        req = req.bearer_auth(token);
    }

    let resp = req.send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, resp.url()).into());
    }
    Ok(resp.text()?)
}

//! Structured-fetch acquisition: one blocking-style GET, a 2xx gate, and
//! deserialization of the body into the source's typed schema.

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::ProdcalError;

/// Fetch `url` and deserialize the XML body into `T`.
///
/// A non-2xx response or a network failure is a [`ProdcalError::Transport`];
/// an empty or schema-mismatched body is a
/// [`ProdcalError::Deserialization`]. Neither is retried.
///
/// # Errors
/// See above; the caller logs and aborts.
pub async fn fetch_xml<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    accept: &str,
) -> Result<T, ProdcalError> {
    let response = client
        .get(url)
        .header(ACCEPT, accept)
        .send()
        .await
        .map_err(|e| ProdcalError::transport(format!("GET {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProdcalError::transport(format!("GET {url}: HTTP {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProdcalError::transport(format!("read {url}: {e}")))?;
    if body.trim().is_empty() {
        return Err(ProdcalError::deserialization("empty response body"));
    }

    quick_xml::de::from_str(&body).map_err(|e| ProdcalError::deserialization(e.to_string()))
}

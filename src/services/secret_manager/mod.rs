pub mod types;

use reqwest::header::HeaderMap;
use reqwest::Method;

use self::types::{SecretGroup, SecretManagerResponseData};
use crate::state::http::{HttpClient, RequestError};

pub const SERVICE: &str = "Secret manager";

pub fn client(base_url: &str) -> Result<HttpClient, RequestError> {
    HttpClient::new(SERVICE, base_url, HeaderMap::new())
}

/// Asks the secret manager for the fixed secret group and returns
/// its answer unparsed.
pub async fn get_secrets(http: &HttpClient) -> Result<Vec<u8>, RequestError> {
    let body = serde_json::to_vec(&SecretGroup::default()).map_err(|source| {
        RequestError::Serialize {
            service: SERVICE,
            source,
        }
    })?;

    http.request(
        Method::POST,
        "/api/v1/secrets/get",
        Some((body.into(), "application/json")),
    )
    .await
}

pub fn parse_secrets(body: &[u8]) -> Result<SecretManagerResponseData, serde_json::Error> {
    serde_json::from_slice(body)
}

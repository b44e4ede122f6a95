pub mod types;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;

use self::types::CloudManagerResponseData;
use crate::config::{ORGANIZATION_ID, PROJECT_ID};
use crate::state::http::{HttpClient, RequestError};

pub const SERVICE: &str = "Cloud manager";

pub fn client(base_url: &str) -> Result<HttpClient, RequestError> {
    let mut headers = HeaderMap::new();

    headers.insert("x-organization-id", HeaderValue::from_static(ORGANIZATION_ID));
    headers.insert("x-project-id", HeaderValue::from_static(PROJECT_ID));

    HttpClient::new(SERVICE, base_url, headers)
}

/// Fetches the cluster record behind an environment template.
/// The body is returned as the service sent it.
pub async fn get_cluster(http: &HttpClient, env_template: &str) -> Result<Vec<u8>, RequestError> {
    http.request(
        Method::GET,
        &format!("/api/v1/env-templates/{env_template}"),
        None,
    )
    .await
}

pub fn parse_cluster(body: &[u8]) -> Result<CloudManagerResponseData, serde_json::Error> {
    serde_json::from_slice(body)
}

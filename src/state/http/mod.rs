mod error;
#[cfg(test)]
pub(crate) mod mock;

use reqwest::header::HeaderMap;
use reqwest::{Client as AsyncClient, Method, StatusCode};

pub use self::error::RequestError;
use crate::config::VERSION;

/// A client bound to one service. Every request goes to `base_url`
/// and carries the service's default headers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub service: &'static str,
    pub base_url: String,
}

impl HttpClient {
    pub fn new(
        service: &'static str,
        base_url: &str,
        headers: HeaderMap,
    ) -> Result<Self, RequestError> {
        let ua = format!(
            "cluster_probe/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let client = AsyncClient::builder()
            .user_agent(ua)
            .default_headers(headers)
            .build()
            .map_err(|source| RequestError::Build { service, source })?;

        Ok(Self {
            client,
            service,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a request and hands back the response body byte for byte.
    /// Anything other than `200 OK` is an error.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        data: Option<(reqwest::Body, &str)>,
    ) -> Result<Vec<u8>, RequestError> {
        let url = format!("{}{}", self.base_url, path);

        log::debug!("request: {method} {url}");

        let mut request = self.client.request(method, url);

        if let Some((body, content_type)) = data {
            request = request.header("content-type", content_type);

            // show body in debug mode / when developing
            if cfg!(debug_assertions) {
                if let Some(bytes) = body.as_bytes() {
                    log::debug!("request body: {}", String::from_utf8_lossy(bytes));
                }
            }

            request = request.body(body);
        }

        let request = request.build().map_err(|source| RequestError::Build {
            service: self.service,
            source,
        })?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response =
            self.client
                .execute(request)
                .await
                .map_err(|source| RequestError::Transport {
                    service: self.service,
                    source,
                })?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<u8>, RequestError> {
        let status = response.status();

        // drain the body first so a broken stream wins over a bad status
        let body = response.bytes().await.map_err(|source| RequestError::Body {
            service: self.service,
            source,
        })?;

        if status != StatusCode::OK {
            log::debug!(
                "{} answered {status} with {} bytes",
                self.service,
                body.len()
            );

            return Err(RequestError::Status {
                service: self.service,
                code: status.as_u16(),
            });
        }

        Ok(body.to_vec())
    }
}

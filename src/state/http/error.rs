use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to build {service} request: {source}")]
    Build {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to reach {service}: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to serialize {service} request body: {source}")]
    Serialize {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} request failed with status code: {code}")]
    Status { service: &'static str, code: u16 },

    #[error("Failed to read {service} response body: {source}")]
    Body {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl RequestError {
    /// The HTTP status of a rejected request, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

use std::fmt;

use crate::config::ENV_TEMPLATES;
use crate::services::{cloud_manager, secret_manager};
use crate::state::http::RequestError;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    CloudManager,
    SecretManager,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloudManager => write!(f, "cloud manager"),
            Self::SecretManager => write!(f, "secret manager"),
        }
    }
}

#[derive(Debug)]
pub struct Step {
    pub service: Service,
    pub result: Result<Vec<u8>, RequestError>,
}

/// Runs the fixed call sequence: one cluster lookup, two secret
/// retrievals, another cluster lookup. A failed call is logged and
/// the run moves on.
pub async fn run(state: &State) -> Vec<Step> {
    let env_template = ENV_TEMPLATES[1];
    let mut steps = Vec::with_capacity(4);

    log::info!("Before calling cloud manager client");
    let result = cloud_manager::get_cluster(&state.cloud_manager, env_template).await;
    steps.push(report(state, Service::CloudManager, result));

    log::info!("Before calling secret manager client");
    for _ in 0..2 {
        let result = secret_manager::get_secrets(&state.secret_manager).await;
        steps.push(report(state, Service::SecretManager, result));
    }

    log::info!("Before calling cloud manager client 2");
    let result = cloud_manager::get_cluster(&state.cloud_manager, env_template).await;
    steps.push(report(state, Service::CloudManager, result));

    log::info!("###### After calling cloud manager client ######");

    steps
}

fn report(state: &State, service: Service, result: Result<Vec<u8>, RequestError>) -> Step {
    match &result {
        Ok(body) => {
            log::info!("Called {service} client, got {} bytes", body.len());

            if state.verbose {
                summarize(service, body);
            }
        }

        Err(error) => log::error!("Error calling {service} client: {error}"),
    }

    Step { service, result }
}

fn summarize(service: Service, body: &[u8]) {
    match service {
        Service::CloudManager => match cloud_manager::parse_cluster(body) {
            Ok(response) => log::debug!(
                "cluster {} in {} ({})",
                response.data.cluster_id,
                response.data.region,
                response.data.env_name
            ),
            Err(error) => log::debug!("response is not a cluster record: {error}"),
        },

        Service::SecretManager => match secret_manager::parse_secrets(body) {
            Ok(response) => log::debug!(
                "{} secrets from {} ({})",
                response.data.len(),
                response.secret_store_name,
                response.secret_store_provider
            ),
            Err(error) => log::debug!("response is not a secret list: {error}"),
        },
    }
}

pub mod http;

use self::http::{HttpClient, RequestError};
use crate::services::{cloud_manager, secret_manager};

#[derive(Debug)]
pub struct State {
    pub cloud_manager: HttpClient,
    pub secret_manager: HttpClient,
    pub verbose: bool,
}

pub struct StateOptions {
    pub cloud_manager_url: String,
    pub secret_manager_url: String,
    pub verbose: bool,
}

impl State {
    pub fn new(options: StateOptions) -> Result<Self, RequestError> {
        Ok(State {
            cloud_manager: cloud_manager::client(&options.cloud_manager_url)?,
            secret_manager: secret_manager::client(&options.secret_manager_url)?,
            verbose: options.verbose,
        })
    }
}

pub mod config;
pub mod probe;
pub mod services;
pub mod state;
pub mod utils;

use clap::Parser;

use crate::config::{CLOUD_MANAGER_URL, SECRET_MANAGER_URL};

#[derive(Debug, Parser)]
#[clap(
    name = "cluster-probe",
    about = "Call the cloud manager and secret manager and report how it went",
    version,
    author
)]
pub struct CLI {
    #[clap(
        long = "cloud-manager-url",
        help = "Base URL of the cloud manager",
        default_value = CLOUD_MANAGER_URL
    )]
    pub cloud_manager_url: String,

    #[clap(
        long = "secret-manager-url",
        help = "Base URL of the secret manager",
        default_value = SECRET_MANAGER_URL
    )]
    pub secret_manager_url: String,

    #[clap(short = 'v', long = "verbose", help = "Print more information")]
    pub verbose: bool,
}

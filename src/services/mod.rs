pub mod cloud_manager;
pub mod secret_manager;

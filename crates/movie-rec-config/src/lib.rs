pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{ApiConfig, Config, ImagesConfig, PreloadConfig, RetryConfig};
pub use credentials::CredentialStore;
pub use paths::{container_base_path, PathManager};

pub mod app_config;
pub mod config;
pub mod listing;
pub mod pincode;
pub mod query;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{ContactDetails, EnrichedRecord, ListingCandidate};
pub use pincode::extract_pincode;
pub use query::build_query;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

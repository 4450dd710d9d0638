mod applicator_config;
mod error;

pub use applicator_config::ApplicatorConfig;
pub use error::ConfigError;

pub mod config;
pub mod paths;

pub use config::{Config, DisplayConfig, LoggingConfig};
pub use paths::{PathManager, BASE_PATH_ENV};

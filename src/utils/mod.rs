pub mod config_utils;
pub mod log_utils;

pub use config_utils::{AppConfig, ConfigError};
pub use log_utils::init_tracing;

mod error;
mod monitor_config;


pub use error::ConfigError;
pub use monitor_config::{ErrorStatusRange, MonitorConfig};

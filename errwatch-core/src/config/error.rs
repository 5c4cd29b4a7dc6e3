use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window size must be greater than zero")]
    EmptyWindow,

    #[error("window size {window:?} is too large to compare timestamps against")]
    WindowTooLarge { window: Duration },

    #[error("error threshold must be a rate between 0 and 1, got {threshold}")]
    InvalidThreshold { threshold: f64 },

    #[error("top-N must be at least 1")]
    EmptyTopN,

    #[error("error status range is inverted: {min} > {max}")]
    InvertedStatusRange { min: u32, max: u32 },
}

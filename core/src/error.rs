use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnhancerError {
    #[error("Missing required element #{0}")]
    MissingElement(String),
    #[error("Invalid page config: {0}")]
    InvalidConfig(String),
    #[error("Browser call failed: {0}")]
    Browser(String),
}

pub type Result<T> = core::result::Result<T, EnhancerError>;

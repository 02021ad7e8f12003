//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid booking settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;

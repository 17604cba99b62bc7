//! Shared error types for the outfit planning system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid category: {input}")]
    InvalidCategory { input: String },

    #[error("Invalid strategy: {input} (expected 'existing' or 'new')")]
    InvalidStrategy { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

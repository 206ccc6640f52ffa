use thiserror::Error;

use crate::world::ValidationError;

/// Errors that can arise while loading a world file.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The world file is not valid TOML or does not match the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value that cannot be expressed in the model (bad location syntax, etc.).
    #[error("invalid world data: {0}")]
    Data(String),

    /// The world parsed but failed cross-reference validation.
    #[error("world failed validation with {} error(s): {}", .0.len(), join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

//! # Error Types
//!
//! Structured error types for trestle_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use trestle_core::errors::{ModelError, ModelResult};
//!
//! fn validate_pitch(q2: f64) -> ModelResult<()> {
//!     if q2 <= 0.0 {
//!         return Err(ModelError::InvalidConfig {
//!             field: "q2".to_string(),
//!             value: q2.to_string(),
//!             reason: "Lath pitch must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trestle_core operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Structured error type for model-building operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ModelError {
    /// A config dimension is invalid (non-positive, non-finite, or
    /// violating a frame constraint)
    #[error("Invalid config for '{field}': {value} - {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    /// Geometry construction produced an invalid result (NaN/infinite
    /// angle, non-positive member length). This is an internal invariant
    /// violation: the config validated but the builders disagree.
    #[error("Geometry error in {stage}: {reason}")]
    Geometry { stage: String, reason: String },

    /// Preset name not recognized
    #[error("Unknown preset: {name}")]
    UnknownPreset { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ModelError {
    /// Create an InvalidConfig error
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ModelError::InvalidConfig {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Geometry error
    pub fn geometry(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::Geometry {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownPreset error
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        ModelError::UnknownPreset { name: name.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ModelError::InvalidConfig { .. } => "INVALID_CONFIG",
            ModelError::Geometry { .. } => "GEOMETRY",
            ModelError::UnknownPreset { .. } => "UNKNOWN_PRESET",
            ModelError::Serialization { .. } => "SERIALIZATION_ERROR",
            ModelError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ModelError::invalid_config("q2", "-1.3", "Lath pitch must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ModelError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ModelError::geometry("side", "alpha is NaN").error_code(),
            "GEOMETRY"
        );
        assert_eq!(
            ModelError::unknown_preset("workbench").error_code(),
            "UNKNOWN_PRESET"
        );
    }

    #[test]
    fn test_error_display() {
        let error = ModelError::invalid_config("width", "0", "Width must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid config for 'width': 0 - Width must be positive"
        );
    }
}

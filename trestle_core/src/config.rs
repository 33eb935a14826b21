//! # Frame Configuration
//!
//! The `Config` struct holds the five scalar dimensions that fully determine
//! a trestle frame. Everything else — every member position, length and
//! rotation — is derived from these by [`crate::model::Table::build`].
//!
//! All dimensions share one consistent unit (centimeters in the presets).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "title": "Original",
//!   "length": 200.0,
//!   "height": 70.0,
//!   "width": 80.0,
//!   "q1": 2.0,
//!   "q2": 10.0
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trestle_core::config::Config;
//!
//! let config = Config::new(200.0, 70.0, 80.0, 2.0, 10.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};

/// Input dimensions for a trestle frame.
///
/// The frame is built entirely from laths of one rectangular cross-section,
/// `q1 × q2`. `q2` doubles as the stacking pitch: slats, struts and brace
/// envelopes are all laid out in multiples of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Optional display label (e.g. preset title). Ignored by geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Overall frame length along the keel axis
    pub length: f64,

    /// Frame height, floor to top of board
    pub height: f64,

    /// Nominal board width. The model snaps this to the nearest whole
    /// multiple of `q2`.
    pub width: f64,

    /// Lath thickness (cross-section minor dimension)
    pub q1: f64,

    /// Lath width and stacking pitch (cross-section major dimension)
    pub q2: f64,
}

impl Config {
    /// Create an untitled config from the five frame dimensions.
    pub fn new(length: f64, height: f64, width: f64, q1: f64, q2: f64) -> Self {
        Config {
            title: None,
            length,
            height,
            width,
            q1,
            q2,
        }
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Validate all dimensions before geometry construction.
    ///
    /// Checks each field for finiteness and positivity, then the frame
    /// constraints that the part builders implicitly rely on. The original
    /// implementation skipped this entirely and let degenerate inputs
    /// surface as NaN/Infinity in the rendered geometry.
    pub fn validate(&self) -> ModelResult<()> {
        for (field, value) in [
            ("length", self.length),
            ("height", self.height),
            ("width", self.width),
            ("q1", self.q1),
            ("q2", self.q2),
        ] {
            if !value.is_finite() {
                return Err(ModelError::invalid_config(
                    field,
                    value.to_string(),
                    "Dimension must be a finite number",
                ));
            }
            if value <= 0.0 {
                return Err(ModelError::invalid_config(
                    field,
                    value.to_string(),
                    "Dimension must be positive",
                ));
            }
        }

        // At least one full pitch unit across the board, so the snapped
        // width and slat count stay positive.
        if self.width < self.q2 {
            return Err(ModelError::invalid_config(
                "width",
                self.width.to_string(),
                "Width must be at least one lath pitch (q2)",
            ));
        }

        // Keel overhang clearance: krag = 2*q2 at each end must leave some
        // rail between them.
        if self.length <= 4.0 * self.q2 {
            return Err(ModelError::invalid_config(
                "length",
                self.length.to_string(),
                "Length must exceed both keel overhangs (4 * q2)",
            ));
        }

        // The side frame stacks the top rail plus five pitch units of strut
        // and middle rail below the board.
        if self.height <= self.q1 + 5.0 * self.q2 {
            return Err(ModelError::invalid_config(
                "height",
                self.height.to_string(),
                "Height must exceed the side-frame stack (q1 + 5 * q2)",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original_config() -> Config {
        Config::new(200.0, 70.0, 80.0, 2.0, 10.0)
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(original_config().validate().is_ok());
    }

    #[test]
    fn test_zero_pitch_rejected() {
        let mut config = original_config();
        config.q2 = 0.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
        assert!(matches!(err, ModelError::InvalidConfig { field, .. } if field == "q2"));
    }

    #[test]
    fn test_nan_rejected() {
        let mut config = original_config();
        config.height = f64::NAN;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig { field, .. } if field == "height"));
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut config = original_config();
        config.length = -200.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overhang_clearance() {
        // length == 4 * q2 leaves no rail between the overhangs
        let config = Config::new(40.0, 70.0, 80.0, 2.0, 10.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig { field, .. } if field == "length"));
    }

    #[test]
    fn test_width_below_pitch_rejected() {
        let config = Config::new(200.0, 70.0, 4.0, 2.0, 10.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig { field, .. } if field == "width"));
    }

    #[test]
    fn test_title_ignored_by_validation() {
        let config = original_config().with_title("Original");
        assert!(config.validate().is_ok());
        assert_eq!(config.title.as_deref(), Some("Original"));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = original_config().with_title("Original");
        let json = serde_json::to_string(&config).unwrap();
        let roundtrip: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}

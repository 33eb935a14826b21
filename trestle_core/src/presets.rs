//! # Dimension Presets
//!
//! Named frame dimensions for the pieces that have actually been built.
//! A preset is nothing more than a starting [`Config`]; callers are free
//! to tweak individual dimensions afterwards.
//!
//! ## Example
//!
//! ```rust
//! use trestle_core::presets::Preset;
//!
//! let config = Preset::Original.config();
//! assert_eq!(config.length, 200.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ModelError, ModelResult};

/// Known frame presets, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Preset {
    /// The full-size original (200 x 80 x 70 cm, 2 x 10 cm laths)
    #[default]
    Original,
    /// Scale-model table
    Table,
    /// Slightly larger scale-model table with thinner laths
    Big,
    /// Low bench variant
    Bench,
    /// First pine build
    Kiefer,
}

impl Preset {
    /// All presets for UI selection
    pub const ALL: [Preset; 5] = [
        Preset::Original,
        Preset::Table,
        Preset::Big,
        Preset::Bench,
        Preset::Kiefer,
    ];

    /// Human-readable title, used as the config label
    pub fn title(&self) -> &'static str {
        match self {
            Preset::Original => "Original",
            Preset::Table => "Table",
            Preset::Big => "Big Table",
            Preset::Bench => "The Bench",
            Preset::Kiefer => "First Kiefer",
        }
    }

    /// Lookup key for CLI/serialized use
    pub fn key(&self) -> &'static str {
        match self {
            Preset::Original => "original",
            Preset::Table => "table",
            Preset::Big => "big",
            Preset::Bench => "bench",
            Preset::Kiefer => "kiefer",
        }
    }

    /// Find a preset by its lookup key (case-insensitive).
    pub fn from_key(key: &str) -> ModelResult<Preset> {
        let key = key.to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| ModelError::unknown_preset(key))
    }

    /// The preset's frame dimensions.
    pub fn config(&self) -> Config {
        let config = match self {
            Preset::Original => Config::new(200.0, 70.0, 80.0, 2.0, 10.0),
            Preset::Table => Config::new(32.0, 12.8, 10.4, 0.5, 1.3),
            Preset::Big => Config::new(38.0, 14.0, 12.8, 0.3, 1.6),
            Preset::Bench => Config::new(24.0, 5.6, 4.8, 0.8, 0.8),
            Preset::Kiefer => Config::new(18.0, 6.8, 7.2, 0.5, 1.0),
        };
        config.with_title(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_validate() {
        for preset in Preset::ALL {
            let config = preset.config();
            assert!(
                config.validate().is_ok(),
                "preset {:?} should validate",
                preset
            );
        }
    }

    #[test]
    fn test_key_lookup() {
        assert_eq!(Preset::from_key("bench").unwrap(), Preset::Bench);
        assert_eq!(Preset::from_key("ORIGINAL").unwrap(), Preset::Original);
        assert!(Preset::from_key("workbench").is_err());
    }

    #[test]
    fn test_titles_carried_into_config() {
        let config = Preset::Big.config();
        assert_eq!(config.title.as_deref(), Some("Big Table"));
    }
}

//! # Table Orchestration
//!
//! [`Table::build`] is the one entry point of the model layer: it validates
//! the config, derives the snapped frame dimensions, runs the three part
//! builders, places their local lath lists into the whole-table frame and
//! folds the bill-of-materials.
//!
//! A `Table` is rebuilt from scratch on every config change. There is no
//! incremental mutation; renderers that want to reuse scene objects diff by
//! lath `id` across rebuilds.
//!
//! ## Example
//!
//! ```rust
//! use trestle_core::model::Table;
//! use trestle_core::presets::Preset;
//!
//! let table = Table::build(&Preset::Original.config()).unwrap();
//! assert_eq!(table.an, 8);
//! assert_eq!(table.parts.len(), 4);
//! println!("total lath length: {:.1} cm", table.total_length);
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ModelError, ModelResult};
use crate::model::board::BoardPart;
use crate::model::keel::KeelPart;
use crate::model::side::SidePart;
use crate::model::{Lath, LathName, Part, Rotation};

/// Frame dimensions derived from a [`Config`], shared by all builders.
///
/// `width` is already snapped to `an * q2` here; builders never see the
/// nominal width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub length: f64,
    pub height: f64,
    /// Snapped width, always `an * q2`
    pub width: f64,
    pub q1: f64,
    pub q2: f64,
    /// Pitch units across the snapped width
    pub an: u32,
    /// Keel overhang at each end, always `2 * q2`
    pub krag: f64,
}

impl Frame {
    /// Derive the snapped frame dimensions. Assumes a validated config.
    pub fn derive(config: &Config) -> Frame {
        let an = (config.width / config.q2).round() as u32;
        Frame {
            length: config.length,
            height: config.height,
            width: an as f64 * config.q2,
            q1: config.q1,
            q2: config.q2,
            an,
            krag: 2.0 * config.q2,
        }
    }
}

/// One line of the bill-of-materials: all laths of one name share a length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LathGroup {
    /// Cut length for this category (taken from the first lath seen)
    pub length: f64,
    /// Number of laths to cut
    pub count: u32,
}

/// The assembled frame model.
///
/// Immutable once built; discarded and replaced wholesale when the config
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub length: f64,
    pub height: f64,
    pub q1: f64,
    pub q2: f64,
    /// Pitch units across the snapped width
    pub an: u32,
    /// Width snapped to `an * q2`
    pub width: f64,
    /// Keel overhang at each end
    pub krag: f64,
    /// Placed parts in declaration order:
    /// side-left, side-right, keel, board
    pub parts: Vec<Part>,
    /// All laths flattened in part order, then per-part builder order
    pub laths: Vec<Lath>,
    /// Bill-of-materials, keyed by lath category
    pub lengths: BTreeMap<LathName, LathGroup>,
    /// Sum of all lath lengths
    pub total_length: f64,
}

impl Table {
    /// Build the full model from a config.
    ///
    /// Pure: identical configs produce structurally equal tables. Fails
    /// with [`ModelError::InvalidConfig`] before any geometry runs, or
    /// with [`ModelError::Geometry`] if a builder produces a degenerate
    /// member.
    pub fn build(config: &Config) -> ModelResult<Table> {
        config.validate()?;

        let frame = Frame::derive(config);

        // One side frame serves both ends; the parts share the Arc and
        // differ only in their transforms.
        let side_laths = Arc::new(SidePart::build(&frame)?.into_laths());
        let keel_laths = Arc::new(KeelPart::build(&frame)?.into_laths());
        let board_laths = Arc::new(BoardPart::build(&frame)?.into_laths());

        let parts = vec![
            Part {
                id: "side-left".to_string(),
                x: frame.width / 2.0,
                y: 0.0,
                z: frame.length / 2.0 - frame.krag,
                rotation: Rotation::about_y(std::f64::consts::PI),
                rebuild: false,
                laths: Arc::clone(&side_laths),
            },
            Part {
                id: "side-right".to_string(),
                x: -frame.width / 2.0,
                y: 0.0,
                z: -frame.length / 2.0 + frame.krag,
                rotation: Rotation::default(),
                rebuild: false,
                laths: side_laths,
            },
            // The keel is built along its own x axis and swung a quarter
            // turn to run down the table's length.
            Part {
                id: "keel".to_string(),
                x: -frame.q1 / 2.0,
                y: 0.0,
                z: frame.length / 2.0,
                rotation: Rotation::about_y(std::f64::consts::FRAC_PI_2),
                rebuild: false,
                laths: keel_laths,
            },
            // The board is built flat in 2D and laid onto the frame top.
            // Its slat count changes with width, so renderers rebuild it
            // wholesale instead of diffing.
            Part {
                id: "board".to_string(),
                x: frame.width / 2.0,
                y: frame.height,
                z: -frame.length / 2.0,
                rotation: Rotation {
                    x: std::f64::consts::FRAC_PI_2,
                    y: 0.0,
                    z: std::f64::consts::FRAC_PI_2,
                },
                rebuild: true,
                laths: board_laths,
            },
        ];

        let laths: Vec<Lath> = parts
            .iter()
            .flat_map(|part| part.laths.iter().cloned())
            .collect();

        for lath in &laths {
            if !(lath.length.is_finite() && lath.length > 0.0) {
                return Err(ModelError::geometry(
                    "table",
                    format!("lath '{}' has invalid length {}", lath.id, lath.length),
                ));
            }
        }

        // Cut list: first-seen length wins per name, count accumulates.
        let mut lengths: BTreeMap<LathName, LathGroup> = BTreeMap::new();
        for lath in &laths {
            lengths
                .entry(lath.name)
                .and_modify(|group| group.count += 1)
                .or_insert(LathGroup {
                    length: lath.length,
                    count: 1,
                });
        }

        let total_length = laths.iter().map(|lath| lath.length).sum();

        Ok(Table {
            length: frame.length,
            height: frame.height,
            q1: frame.q1,
            q2: frame.q2,
            an: frame.an,
            width: frame.width,
            krag: frame.krag,
            parts,
            laths,
            lengths,
            total_length,
        })
    }

    /// Look up a part by id.
    pub fn part(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.id == id)
    }
}

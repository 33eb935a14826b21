//! # Frame Model
//!
//! This module contains the geometric model-building layer. Each part
//! builder follows the pattern:
//!
//! - a constructor taking the derived frame context (snapped width, krag,
//!   lath cross-section),
//! - named lath fields plus an ordered `laths` list,
//! - `ModelResult` returns so degenerate geometry surfaces as a structured
//!   error instead of NaN coordinates.
//!
//! ## Coordinate frames
//!
//! Every builder works in its own local 2D-ish frame (`x` across, `y` up,
//! `z` the lath stacking offset). [`Table::build`] is the only place that
//! knows where each part sits in the assembled frame: it wraps each
//! builder's lath list in a [`Part`] carrying the translation and per-axis
//! rotation into the whole-table frame.
//!
//! ## Available builders
//!
//! - [`side`] - one trapezoidal side frame (reused, mirrored, for both ends)
//! - [`keel`] - the longitudinal stretcher assembly
//! - [`board`] - the slatted tabletop
//! - [`table`] - orchestration and bill-of-materials

pub mod board;
pub mod keel;
pub mod side;
pub mod solver;
pub mod table;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use board::BoardPart;
pub use keel::KeelPart;
pub use side::SidePart;
pub use solver::{solve_brace_angle, BraceAngle};
pub use table::{LathGroup, Table};

/// Structural-role category of a lath.
///
/// The letter groups interchangeable members for the cut list: every lath
/// sharing a name is cut to the same length. Names are NOT unique per
/// instance (each side frame carries two `D` braces, for example).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LathName {
    /// Board slat
    A,
    /// Keel rail
    B,
    /// Side top rail / board edge batten
    C,
    /// Side diagonal brace
    D,
    /// Side middle rail
    E,
    /// Side vertical strut
    F,
    /// Keel corner brace
    G,
}

impl LathName {
    /// The category letter as printed on the cut list
    pub fn letter(&self) -> char {
        match self {
            LathName::A => 'A',
            LathName::B => 'B',
            LathName::C => 'C',
            LathName::D => 'D',
            LathName::E => 'E',
            LathName::F => 'F',
            LathName::G => 'G',
        }
    }
}

impl fmt::Display for LathName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single rectangular member of cross-section `q1 x q2`.
///
/// Placed in its parent [`Part`]'s local frame. `rotation` is the in-plane
/// angle in radians (a 2D renderer converts to degrees for display; the 3D
/// renderer applies it about the part plane's normal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lath {
    /// Identifier, unique within the part (e.g. "dl", "a3"). Renderers key
    /// update-in-place reuse on this.
    pub id: String,
    /// Structural-role category for the cut list
    pub name: LathName,
    /// Member length
    pub length: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// In-plane rotation in radians
    pub rotation: f64,
}

/// Per-axis rotation of a part, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub z: f64,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl Rotation {
    /// Rotation about the vertical axis only
    pub fn about_y(y: f64) -> Self {
        Rotation {
            y,
            ..Default::default()
        }
    }
}

/// A placed sub-assembly: a translation plus optional per-axis rotation
/// applied to a local list of laths.
///
/// The two side parts hold the SAME lath list (one `Arc`, built once);
/// mirroring happens entirely in the part transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// One of "side-left", "side-right", "keel", "board"
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Placement rotation into the whole-table frame
    #[serde(default)]
    pub rotation: Rotation,
    /// Renderer hint: replace this part's geometry wholesale on every
    /// rebuild instead of diffing lath-by-lath. No geometric meaning.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub rebuild: bool,
    /// Laths in this part's local frame
    pub laths: Arc<Vec<Lath>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lath_name_ordering_matches_cut_list() {
        // BTreeMap over LathName must render A..G
        let mut names = vec![
            LathName::G,
            LathName::C,
            LathName::A,
            LathName::E,
            LathName::B,
            LathName::F,
            LathName::D,
        ];
        names.sort();
        let letters: String = names.iter().map(LathName::letter).collect();
        assert_eq!(letters, "ABCDEFG");
    }

    #[test]
    fn test_rotation_serializes_sparse() {
        let rotation = Rotation::about_y(std::f64::consts::PI);
        let json = serde_json::to_string(&rotation).unwrap();
        assert!(!json.contains("\"x\""));
        assert!(json.contains("\"y\""));
    }
}

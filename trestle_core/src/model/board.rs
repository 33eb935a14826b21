//! # Board Builder
//!
//! The slatted tabletop: `an` parallel slats spanning the full length,
//! closed by an edge batten over each side frame.
//!
//! ```text
//!  =||======A======||=
//!  =|C======A======|C=
//!  =||======A======||=
//! ```
//!
//! Local frame: `x` along the slats, `y` across the board (one slat per
//! pitch unit), `z` the stacking offset. The table orchestration lays the
//! whole part flat on top of the frame.

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};
use crate::model::table::Frame;
use crate::model::{Lath, LathName};

/// Lath set for the tabletop, in local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardPart {
    /// Left edge batten
    pub cl: Lath,
    /// Right edge batten
    pub cr: Lath,
    /// Slats, one per pitch unit across the snapped width
    pub slats: Vec<Lath>,
}

impl BoardPart {
    /// Build the board laths for the given derived dimensions.
    pub fn build(frame: &Frame) -> ModelResult<BoardPart> {
        let Frame {
            krag,
            length,
            width,
            q1,
            q2,
            an,
            ..
        } = *frame;

        if an == 0 {
            return Err(ModelError::geometry("board", "slat count is zero"));
        }

        let cl = Lath {
            id: "cl".to_string(),
            name: LathName::C,
            length: width,
            x: krag,
            y: 0.0,
            z: q1,
            rotation: std::f64::consts::FRAC_PI_2,
        };
        let cr = Lath {
            id: "cr".to_string(),
            name: LathName::C,
            length: width,
            x: length - krag + q2,
            y: 0.0,
            z: q1,
            rotation: std::f64::consts::FRAC_PI_2,
        };

        let slats = (0..an)
            .map(|i| Lath {
                id: format!("a{}", i + 1),
                name: LathName::A,
                length,
                x: 0.0,
                y: i as f64 * q2,
                z: 0.0,
                rotation: 0.0,
            })
            .collect();

        Ok(BoardPart { cl, cr, slats })
    }

    /// The laths in canonical builder order.
    pub fn into_laths(self) -> Vec<Lath> {
        let mut laths = vec![self.cl, self.cr];
        laths.extend(self.slats);
        laths
    }
}

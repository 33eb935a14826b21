//! # Side Frame Builder
//!
//! One trapezoidal end frame. Built once and placed twice by the table
//! orchestration; the mirroring lives entirely in the part transforms.
//!
//! ```text
//!  ===//||C||\\===
//!    D/ F| F| \D
//!   //====E====\\
//!  //           \\
//! ```
//!
//! Local frame: `x` across the frame (0 at the left foot), `y` up from the
//! floor, `z` the lath stacking offset. The top rail `C` sits one pitch
//! below the board; the diagonal braces `D` lean at the solved corner
//! angle; the vertical struts `F` and the middle rail `E` close the truss
//! five pitch units down.

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};
use crate::model::solver::{solve_brace_angle, BraceAngle, DEFAULT_STEPS, INITIAL_ANGLE};
use crate::model::table::Frame;
use crate::model::{Lath, LathName};

/// Lath set for one side frame, in the frame's local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidePart {
    /// Solved corner brace geometry
    pub brace: BraceAngle,
    /// Top rail
    pub c: Lath,
    /// Left diagonal brace
    pub dl: Lath,
    /// Right diagonal brace
    pub dr: Lath,
    /// Middle rail
    pub e: Lath,
    /// Left vertical strut
    pub fl: Lath,
    /// Right vertical strut
    pub fr: Lath,
}

impl SidePart {
    /// Build the side frame laths for the given derived dimensions.
    pub fn build(frame: &Frame) -> ModelResult<SidePart> {
        let Frame {
            height,
            width,
            q1,
            q2,
            ..
        } = *frame;

        let brace = solve_brace_angle(q1, q2, width, height, INITIAL_ANGLE, DEFAULT_STEPS);
        if !brace.is_finite() {
            return Err(ModelError::geometry(
                "side",
                "brace angle relaxation produced a non-finite result",
            ));
        }

        // Middle rail spans both brace feet plus the strut stack.
        let dxe = brace.alpha.tan() * (5.0 * q2 - q2);
        let el = 2.0 * (q1 / 2.0 + q2 + brace.dx + dxe);

        // Both braces are cut to the same length.
        let dl_len = (height - q1) / brace.alpha.cos() - brace.dh;

        if !(dl_len > 0.0 && dl_len.is_finite() && el > 0.0 && el.is_finite()) {
            return Err(ModelError::geometry(
                "side",
                format!("degenerate member lengths (D = {}, E = {})", dl_len, el),
            ));
        }

        let c = Lath {
            id: "c".to_string(),
            name: LathName::C,
            length: width,
            x: 0.0,
            y: height - q1 - q2,
            z: 0.0,
            rotation: 0.0,
        };

        let dl = Lath {
            id: "dl".to_string(),
            name: LathName::D,
            length: dl_len,
            x: width / 2.0 - q1 / 2.0 - 2.0 * q2,
            y: height - q1,
            z: q1,
            rotation: -std::f64::consts::FRAC_PI_2 - brace.alpha,
        };
        // The right brace seats one brace-width projection lower so its top
        // edge meets the rail flush.
        let dr = Lath {
            id: "dr".to_string(),
            name: LathName::D,
            length: dl_len,
            x: width / 2.0 + q1 / 2.0 + q2,
            y: height - q1 - brace.dh,
            z: q1,
            rotation: -std::f64::consts::FRAC_PI_2 + brace.alpha,
        };

        let e = Lath {
            id: "e".to_string(),
            name: LathName::E,
            length: el,
            x: (width - el) / 2.0,
            y: height - q1 - 5.0 * q2,
            z: 0.0,
            rotation: 0.0,
        };

        let fl = Lath {
            id: "fl".to_string(),
            name: LathName::F,
            length: 5.0 * q2,
            x: width / 2.0 - q1 / 2.0 - q2,
            y: height - q1,
            z: q1,
            rotation: -std::f64::consts::FRAC_PI_2,
        };
        let fr = Lath {
            id: "fr".to_string(),
            name: LathName::F,
            length: 5.0 * q2,
            x: width / 2.0 + q1 / 2.0,
            y: height - q1,
            z: q1,
            rotation: -std::f64::consts::FRAC_PI_2,
        };

        Ok(SidePart {
            brace,
            c,
            dl,
            dr,
            e,
            fl,
            fr,
        })
    }

    /// The laths in canonical builder order.
    pub fn into_laths(self) -> Vec<Lath> {
        vec![self.c, self.dl, self.dr, self.fl, self.fr, self.e]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn original_frame() -> Frame {
        Frame::derive(&Config::new(200.0, 70.0, 80.0, 2.0, 10.0))
    }

    #[test]
    fn test_builder_purity() {
        let frame = original_frame();
        let a = SidePart::build(&frame).unwrap();
        let b = SidePart::build(&frame).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_top_rail_spans_snapped_width() {
        let side = SidePart::build(&original_frame()).unwrap();
        assert_eq!(side.c.length, 80.0);
        assert_eq!(side.c.y, 70.0 - 2.0 - 10.0);
        assert_eq!(side.c.rotation, 0.0);
    }

    #[test]
    fn test_braces_share_length() {
        let side = SidePart::build(&original_frame()).unwrap();
        assert_eq!(side.dl.length, side.dr.length);
        assert!(side.dl.length > 0.0);
        // Mirrored rotations around -pi/2
        let mid = std::f64::consts::FRAC_PI_2;
        assert!((side.dl.rotation + mid + side.brace.alpha).abs() < 1e-12);
        assert!((side.dr.rotation + mid - side.brace.alpha).abs() < 1e-12);
    }

    #[test]
    fn test_brace_seating_asymmetry() {
        // dl seats at the rail underside, dr one dh lower
        let side = SidePart::build(&original_frame()).unwrap();
        assert_eq!(side.dl.y, 70.0 - 2.0);
        assert!((side.dr.y - (70.0 - 2.0 - side.brace.dh)).abs() < 1e-12);
    }

    #[test]
    fn test_struts_are_five_pitches() {
        let side = SidePart::build(&original_frame()).unwrap();
        assert_eq!(side.fl.length, 50.0);
        assert_eq!(side.fr.length, 50.0);
        assert_eq!(side.fl.rotation, -std::f64::consts::FRAC_PI_2);
        // Struts flank the centerline: fl one pitch left of fr
        assert!((side.fr.x - side.fl.x - (2.0 + 10.0)).abs() < 1e-12);
    }

    #[test]
    fn test_middle_rail_centered() {
        let side = SidePart::build(&original_frame()).unwrap();
        let center = side.e.x + side.e.length / 2.0;
        assert!((center - 40.0).abs() < 1e-12);
        assert_eq!(side.e.y, 70.0 - 2.0 - 50.0);
    }

    #[test]
    fn test_lath_order() {
        let side = SidePart::build(&original_frame()).unwrap();
        let ids: Vec<String> = side.into_laths().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["c", "dl", "dr", "fl", "fr", "e"]);
    }
}

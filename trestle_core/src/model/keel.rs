//! # Keel Builder
//!
//! The longitudinal stretcher assembly: two long rails tying the side
//! frames together, braced near each end.
//!
//! ```text
//!   ||==//==B==\\==||
//!   |G /G       \G |G
//!   ||//====B====\\||
//! ```
//!
//! Local frame: `x` along the keel (0 at the left rail end before the
//! overhang), `y` up, `z` the stacking offset. The `krag` overhang at each
//! end is where the keel passes through the side frames.

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};
use crate::model::table::Frame;
use crate::model::{Lath, LathName};

/// Lath set for the keel assembly, in local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeelPart {
    /// Top rail
    pub bt: Lath,
    /// Bottom rail
    pub bb: Lath,
    /// Left perpendicular corner brace
    pub gl: Lath,
    /// Left 45-degree brace
    pub gsl: Lath,
    /// Right 45-degree brace
    pub gsr: Lath,
    /// Right perpendicular corner brace
    pub gr: Lath,
}

impl KeelPart {
    /// Build the keel laths for the given derived dimensions.
    pub fn build(frame: &Frame) -> ModelResult<KeelPart> {
        let Frame {
            krag,
            length,
            height,
            q1,
            q2,
            ..
        } = *frame;

        let dx = krag - q2;
        let rail_len = length - 2.0 * dx;
        if rail_len <= 0.0 {
            return Err(ModelError::geometry(
                "keel",
                format!("rail length {} is not positive", rail_len),
            ));
        }

        let bt = Lath {
            id: "bt".to_string(),
            name: LathName::B,
            length: rail_len,
            x: dx,
            y: height - q1 - 2.0 * q2,
            z: 0.0,
            rotation: 0.0,
        };
        let bb = Lath {
            id: "bb".to_string(),
            name: LathName::B,
            length: rail_len,
            x: dx,
            y: height - q1 - 4.0 * q2,
            z: 0.0,
            rotation: 0.0,
        };

        let gl = Lath {
            id: "gl".to_string(),
            name: LathName::G,
            length: 3.0 * q2,
            x: krag + 2.0 * q1 + q2,
            y: height - q1 - 4.0 * q2,
            z: q1,
            rotation: std::f64::consts::FRAC_PI_2,
        };
        let gsl = Lath {
            id: "gsl".to_string(),
            name: LathName::G,
            length: 3.0 * q2,
            x: krag + 2.0 * q1 + 2.0 * q2,
            y: height - q1 - 4.0 * q2,
            z: q1,
            rotation: std::f64::consts::FRAC_PI_4,
        };
        // TODO: derive gsr's position from the pi/4 projection offsets
        // (q2 - sin(pi/4)*q2 across, q2 - cos(pi/4)*q2 up) the way gsl
        // lines up, instead of the eyeballed 1.2/3.2 multipliers. The
        // built frames were cut against these numbers, so changing them
        // needs a re-check of the right corner joint.
        let gsr = Lath {
            id: "gsr".to_string(),
            name: LathName::G,
            length: 3.0 * q2,
            x: length - krag - 2.0 * q1 - 1.2 * q2,
            y: height - q1 - 3.2 * q2,
            z: q1,
            rotation: 3.0 * std::f64::consts::FRAC_PI_4,
        };
        let gr = Lath {
            id: "gr".to_string(),
            name: LathName::G,
            length: 3.0 * q2,
            x: length - krag - 2.0 * q1,
            y: height - q1 - 4.0 * q2,
            z: q1,
            rotation: std::f64::consts::FRAC_PI_2,
        };

        Ok(KeelPart {
            bt,
            bb,
            gl,
            gsl,
            gsr,
            gr,
        })
    }

    /// The laths in canonical builder order.
    pub fn into_laths(self) -> Vec<Lath> {
        vec![self.bt, self.bb, self.gl, self.gsl, self.gsr, self.gr]
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
    fn test_rail_length_accounts_for_overhang() {
        let keel = KeelPart::build(&original_frame()).unwrap();
        // krag = 20, dx = krag - q2 = 10, rails span 200 - 2*10 = 180
        assert_eq!(keel.bt.length, 180.0);
        assert_eq!(keel.bb.length, 180.0);
        assert_eq!(keel.bt.x, 10.0);
    }

    #[test]
    fn test_rails_two_pitches_apart() {
        let keel = KeelPart::build(&original_frame()).unwrap();
        assert!((keel.bt.y - keel.bb.y - 2.0 * 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_braces_fixed_three_pitches() {
        let keel = KeelPart::build(&original_frame()).unwrap();
        for g in [&keel.gl, &keel.gsl, &keel.gsr, &keel.gr] {
            assert_eq!(g.length, 30.0);
            assert_eq!(g.z, 2.0);
        }
    }

    #[test]
    fn test_perpendicular_braces_mirror() {
        let keel = KeelPart::build(&original_frame()).unwrap();
        // gl at krag + 2*q1 + q2 = 34, gr at length - krag - 2*q1 = 176
        assert_eq!(keel.gl.x, 34.0);
        assert_eq!(keel.gr.x, 176.0);
        assert_eq!(keel.gl.rotation, std::f64::consts::FRAC_PI_2);
        assert_eq!(keel.gr.rotation, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_gsr_keeps_adhoc_offsets() {
        // The right diagonal brace is deliberately NOT the mirror of gsl:
        // it uses the eyeballed 1.2*q2 / 3.2*q2 offsets the frames were
        // cut against.
        let keel = KeelPart::build(&original_frame()).unwrap();
        assert_eq!(keel.gsl.x, 20.0 + 4.0 + 20.0);
        assert!((keel.gsr.x - (200.0 - 20.0 - 4.0 - 12.0)).abs() < 1e-12);
        assert!((keel.gsr.y - (70.0 - 2.0 - 32.0)).abs() < 1e-12);
        assert_eq!(keel.gsl.rotation, std::f64::consts::FRAC_PI_4);
        assert_eq!(keel.gsr.rotation, 3.0 * std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn test_lath_order() {
        let keel = KeelPart::build(&original_frame()).unwrap();
        let ids: Vec<String> = keel.into_laths().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["bt", "bb", "gl", "gsl", "gsr", "gr"]);
    }
}

//! # Corner Brace Angle Solver
//!
//! The side frame's diagonal brace runs from the vertical strut stack up
//! into the slanted top corner. Its stacked-lath envelope (five courses of
//! width `q2`) has to fit the trapezoid spanned by `width`, `height` and
//! the rail thickness `q1` — but the brace's horizontal projection depends
//! on its own angle, and the angle depends on that projection.
//!
//! ## Algorithm
//!
//! Fixed-count relaxation, no convergence check:
//!
//! 1. `dh = sin(angle) * q2` - vertical rise consumed by one brace-width
//!    projection
//! 2. `dx = dh / asin(angle)` - horizontal displacement estimate
//! 3. `angle' = atan((width/2 - q1/2 - q2 - dx) / (height - dh))`
//!
//! and recurse with `angle'` until the step budget runs out. The returned
//! `alpha` is always the angle that produced the returned `dh`/`dx`, never
//! a further-refined one; with `steps = 0` the initial angle comes back
//! unmodified alongside `dh`/`dx` computed from it once.
//!
//! Three steps are enough for the downstream joints to close visually, and
//! the rest of the side-frame layout is tuned against exactly this
//! three-step result. Do not swap in a tolerance-based loop.

use serde::{Deserialize, Serialize};

/// Default relaxation step count
pub const DEFAULT_STEPS: u32 = 3;

/// Default starting angle, 15 degrees
pub const INITIAL_ANGLE: f64 = std::f64::consts::PI / 12.0;

/// Solved brace geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BraceAngle {
    /// Brace angle off vertical, radians
    pub alpha: f64,
    /// Vertical rise consumed by one brace-width projection
    pub dh: f64,
    /// Horizontal displacement of the brace foot
    pub dx: f64,
}

impl BraceAngle {
    /// True if every component is a usable finite number.
    pub fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.dh.is_finite() && self.dx.is_finite()
    }
}

/// Relax the corner brace angle for the given frame dimensions.
///
/// Purely functional: identical inputs give bit-identical outputs.
///
/// Note the `asin` in step 2 where the surrounding trigonometry would
/// suggest `sin` or `tan`. It is carried over verbatim from the frame this
/// layout was measured against; "correcting" it moves every joint in the
/// side frame.
pub fn solve_brace_angle(
    q1: f64,
    q2: f64,
    width: f64,
    height: f64,
    initial_angle: f64,
    steps: u32,
) -> BraceAngle {
    let dh = initial_angle.sin() * q2;
    let dx = dh / initial_angle.asin();

    if steps == 0 {
        return BraceAngle {
            alpha: initial_angle,
            dh,
            dx,
        };
    }

    let next = ((width / 2.0 - q1 / 2.0 - q2 - dx) / (height - dh)).atan();
    solve_brace_angle(q1, q2, width, height, next, steps - 1)
}

//! Small vector helpers shared by the steering rules and the integrator.
//!
//! The math type is `glam::Vec3`, re-exported at the crate root so that
//! downstream crates agree on a single version.

use glam::Vec3;

/// Lengths at or below this are treated as zero when normalising.
pub const ZERO_LENGTH_EPSILON: f32 = 1e-6;

/// Unit vector in the direction of `v`, or `None` when `v` is (nearly) zero
/// or not finite.
#[inline]
pub fn direction(v: Vec3) -> Option<Vec3> {
    let len = v.length();
    if len > ZERO_LENGTH_EPSILON && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// Rescale `v` to length `len`, using `fallback` (assumed unit) as the
/// direction when `v` has none.
#[inline]
pub fn with_length_or(v: Vec3, len: f32, fallback: Vec3) -> Vec3 {
    direction(v).unwrap_or(fallback) * len
}

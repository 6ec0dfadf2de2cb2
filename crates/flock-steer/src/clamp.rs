//! Speed clamp and Euler integration.

use flock_core::Vec3;
use flock_core::vector::{direction, with_length_or};

/// Heading used when a velocity must be rescaled but has no direction.
///
/// The steering sum cancelled the old velocity exactly, so follow the way the
/// rules were pushing; with no steering either, keep the previous heading,
/// and failing that use `+X`.
#[inline]
pub fn fallback_heading(steering: Vec3, previous_velocity: Vec3) -> Vec3 {
    direction(steering)
        .or_else(|| direction(previous_velocity))
        .unwrap_or(Vec3::X)
}

/// Clamp `|velocity|` into `[min_speed, max_speed]`.
///
/// Velocities inside the range are returned untouched.  A (near-)zero or
/// non-finite velocity that must be rescaled takes `fallback` (a unit
/// vector) as its direction.
pub fn clamp_speed(velocity: Vec3, min_speed: f32, max_speed: f32, fallback: Vec3) -> Vec3 {
    let speed = velocity.length();
    if speed.is_nan() {
        return fallback * min_speed;
    }
    if speed > max_speed {
        with_length_or(velocity, max_speed, fallback)
    } else if speed < min_speed {
        with_length_or(velocity, min_speed, fallback)
    } else {
        velocity
    }
}

/// Explicit Euler step: `position + velocity * delta_time`.
#[inline]
pub fn integrate(position: Vec3, velocity: Vec3, delta_time: f32) -> Vec3 {
    position + velocity * delta_time
}

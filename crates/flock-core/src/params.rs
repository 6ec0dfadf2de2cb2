//! The flocking parameter block.
//!
//! `FlockParams` is immutable for the duration of a tick.  The scheduler
//! copies it when a tick begins, so a host can live-tune it between ticks
//! via `Flock::configure` without any locking.

use glam::Vec3;

use crate::{FlockError, FlockResult};

/// How the boundary rule corrects an agent that has left the box.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundsMode {
    /// Add `±speed` to the velocity on every violated axis, pointing back
    /// inside.
    #[default]
    CounterSteer,
    /// Build one inward unit direction from all violated axes, scale it to
    /// the current speed, and steer the velocity onto it.
    Redirect,
}

/// Runtime configuration of the steering rules.
///
/// All ranges, weights, bounds and speeds must be finite and non-negative,
/// and `min_speed <= max_speed`.  [`FlockParams::validate`] enforces this;
/// the scheduler refuses blocks that fail it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockParams {
    /// Half-extent of the box agents are steered to stay within.
    pub bounds: Vec3,
    /// Centre of the box.
    pub bounds_center: Vec3,
    pub bounds_mode: BoundsMode,

    pub separation_range: f32,
    pub alignment_range:  f32,
    pub cohesion_range:   f32,

    pub separation_weight: f32,
    pub alignment_weight:  f32,
    pub cohesion_weight:   f32,

    pub max_speed: f32,
    pub min_speed: f32,

    /// Scale of the per-agent random vector added each tick.
    pub random_scatter_weight: f32,

    /// Optional coarse radius used to build one shared candidate list per
    /// agent before the per-rule radius checks.  Set it at least as large as
    /// the largest rule range to get the same result as the per-rule scan.
    pub max_neighbor_distance: Option<f32>,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            bounds:                Vec3::splat(50.0),
            bounds_center:         Vec3::ZERO,
            bounds_mode:           BoundsMode::CounterSteer,
            separation_range:      2.0,
            alignment_range:       5.0,
            cohesion_range:        5.0,
            separation_weight:     1.5,
            alignment_weight:      0.1,
            cohesion_weight:       0.5,
            max_speed:             10.0,
            min_speed:             2.0,
            random_scatter_weight: 0.1,
            max_neighbor_distance: None,
        }
    }
}

impl FlockParams {
    /// The largest of the three rule radii.
    #[inline]
    pub fn largest_rule_range(&self) -> f32 {
        self.separation_range
            .max(self.alignment_range)
            .max(self.cohesion_range)
    }

    /// Check every invariant of the block.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> FlockResult<()> {
        let axes = [
            ("bounds.x", self.bounds.x),
            ("bounds.y", self.bounds.y),
            ("bounds.z", self.bounds.z),
            ("separation_range", self.separation_range),
            ("alignment_range", self.alignment_range),
            ("cohesion_range", self.cohesion_range),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("max_speed", self.max_speed),
            ("min_speed", self.min_speed),
            ("random_scatter_weight", self.random_scatter_weight),
        ];
        for (name, value) in axes {
            non_negative(name, value)?;
        }
        if !self.bounds_center.is_finite() {
            return Err(FlockError::InvalidParams(format!(
                "bounds_center must be finite, got {}",
                self.bounds_center
            )));
        }
        if let Some(d) = self.max_neighbor_distance {
            non_negative("max_neighbor_distance", d)?;
        }
        if self.min_speed > self.max_speed {
            return Err(FlockError::InvalidParams(format!(
                "min_speed ({}) exceeds max_speed ({})",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f32) -> FlockResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FlockError::InvalidParams(format!(
            "{name} must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}

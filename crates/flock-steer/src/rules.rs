//! The steering rules.
//!
//! Each rule is a pure function of one agent's state, the tick snapshot and
//! a neighbour list, and returns that rule's velocity contribution.  An empty
//! neighbour list yields `Vec3::ZERO`.

use flock_agent::Snapshot;
use flock_core::vector::{ZERO_LENGTH_EPSILON, direction};
use flock_core::{AgentId, AgentRng, BoundsMode, FlockParams, Vec3};

/// Neighbours at or below this distance are treated as coincident and
/// ignored by [`separation`]; there is no direction to push them apart in.
pub const COINCIDENT_EPSILON: f32 = ZERO_LENGTH_EPSILON;

// ── Flocking rules ────────────────────────────────────────────────────────────

/// Mean of `normalize(position - other) / distance` over `neighbors`, times
/// `weight`.  Closer neighbours push harder.
///
/// Coincident neighbours are skipped and do not count toward the mean.
pub fn separation(
    position:  Vec3,
    snapshot:  &Snapshot<'_>,
    neighbors: &[AgentId],
    weight:    f32,
) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for &other in neighbors {
        let away = position - snapshot.position(other);
        let distance = away.length();
        if distance <= COINCIDENT_EPSILON {
            continue;
        }
        sum += away / distance / distance;
        count += 1;
    }
    if count == 0 {
        return Vec3::ZERO;
    }
    sum / count as f32 * weight
}

/// Mean snapshot velocity of `neighbors`, times `weight`.
pub fn alignment(snapshot: &Snapshot<'_>, neighbors: &[AgentId], weight: f32) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = neighbors.iter().map(|&other| snapshot.velocity(other)).sum();
    sum / neighbors.len() as f32 * weight
}

/// Unit direction from `position` toward the centroid of `neighbors`, times
/// `weight`.  Zero when the centroid sits on the agent.
pub fn cohesion(
    position:  Vec3,
    snapshot:  &Snapshot<'_>,
    neighbors: &[AgentId],
    weight:    f32,
) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = neighbors.iter().map(|&other| snapshot.position(other)).sum();
    let centroid = sum / neighbors.len() as f32;
    direction(centroid - position).map_or(Vec3::ZERO, |d| d * weight)
}

// ── Boundary rule ─────────────────────────────────────────────────────────────

/// Correction that turns an agent outside the bounds box back toward
/// `bounds_center`.  Zero while the agent is inside (or exactly on) the box.
///
/// The correction is scaled to the agent's current speed.  A stationary
/// agent uses `max_speed` instead, otherwise it could never be brought back.
pub fn bounds_steer(position: Vec3, velocity: Vec3, params: &FlockParams) -> Vec3 {
    let relative = position - params.bounds_center;
    let inward = Vec3::new(
        inward_axis(relative.x, params.bounds.x),
        inward_axis(relative.y, params.bounds.y),
        inward_axis(relative.z, params.bounds.z),
    );
    if inward == Vec3::ZERO {
        return Vec3::ZERO;
    }

    let speed = velocity.length();
    let speed = if speed > ZERO_LENGTH_EPSILON { speed } else { params.max_speed };

    match params.bounds_mode {
        BoundsMode::CounterSteer => inward * speed,
        BoundsMode::Redirect => inward.normalize() * speed - velocity,
    }
}

/// `+1` below `-half_extent`, `-1` above `+half_extent`, `0` in between.
#[inline]
fn inward_axis(offset: f32, half_extent: f32) -> f32 {
    if offset > half_extent {
        -1.0
    } else if offset < -half_extent {
        1.0
    } else {
        0.0
    }
}

// ── Scatter ───────────────────────────────────────────────────────────────────

/// Per-agent random vector with components in `[-weight, weight]`.
///
/// Always consumes the same number of draws, even at zero weight, so the
/// agent's stream does not shift when the weight is tuned.
#[inline]
pub fn scatter(rng: &mut AgentRng, weight: f32) -> Vec3 {
    rng.scatter_vector() * weight
}

// ── SteeringTerms ─────────────────────────────────────────────────────────────

/// The five contributions that make up one agent's velocity update.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SteeringTerms {
    pub separation: Vec3,
    pub alignment:  Vec3,
    pub cohesion:   Vec3,
    pub bounds:     Vec3,
    pub scatter:    Vec3,
}

impl SteeringTerms {
    /// `velocity + separation + alignment + cohesion + bounds + scatter`,
    /// summed in that order.
    #[inline]
    pub fn apply_to(&self, velocity: Vec3) -> Vec3 {
        velocity + self.separation + self.alignment + self.cohesion + self.bounds + self.scatter
    }

    /// Sum of the five contributions.
    #[inline]
    pub fn total(&self) -> Vec3 {
        self.apply_to(Vec3::ZERO)
    }
}

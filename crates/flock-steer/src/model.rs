//! The `SteeringModel` trait and the `Boids` flocking model.

use flock_core::{AgentId, AgentRng, Vec3};

use crate::clamp::{clamp_speed, fallback_heading};
use crate::neighbors::Neighborhoods;
use crate::rules::{self, SteeringTerms};
use crate::SteerContext;

/// Computes one agent's velocity for the tick being simulated.
///
/// The scheduler calls [`steer`][Self::steer] once per agent per tick, in
/// parallel across batches, and writes the returned velocity into the
/// agent's output-buffer slot.  Implementations read only from `ctx`, so the
/// result must not depend on the order agents are visited in.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; any per-agent state belongs in the
/// agent store, not in the model.
///
/// # Example
///
/// ```rust,ignore
/// struct Drift;
///
/// impl SteeringModel for Drift {
///     fn steer(&self, agent: AgentId, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec3 {
///         ctx.snapshot.velocity(agent)
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    /// Return `agent`'s new velocity.
    ///
    /// `rng` is private to this agent for this tick and seeded from the
    /// tick seed and the agent's id.
    fn steer(&self, agent: AgentId, ctx: &SteerContext<'_>, rng: &mut AgentRng) -> Vec3;
}

/// Classic flocking: separation, alignment, cohesion, boundary avoidance and
/// random scatter, clamped into the block's speed range.
#[derive(Copy, Clone, Debug, Default)]
pub struct Boids;

impl Boids {
    /// The individual contributions for `agent`, before clamping.
    pub fn terms(&self, agent: AgentId, ctx: &SteerContext<'_>, rng: &mut AgentRng) -> SteeringTerms {
        let params = ctx.params;
        let snapshot = &ctx.snapshot;
        let position = snapshot.position(agent);
        let velocity = snapshot.velocity(agent);
        let hood = Neighborhoods::gather(agent, snapshot, params);

        SteeringTerms {
            separation: rules::separation(position, snapshot, &hood.separation, params.separation_weight),
            alignment:  rules::alignment(snapshot, &hood.alignment, params.alignment_weight),
            cohesion:   rules::cohesion(position, snapshot, &hood.cohesion, params.cohesion_weight),
            bounds:     rules::bounds_steer(position, velocity, params),
            scatter:    rules::scatter(rng, params.random_scatter_weight),
        }
    }
}

impl SteeringModel for Boids {
    fn steer(&self, agent: AgentId, ctx: &SteerContext<'_>, rng: &mut AgentRng) -> Vec3 {
        let velocity = ctx.snapshot.velocity(agent);
        let terms = self.terms(agent, ctx, rng);
        clamp_speed(
            terms.apply_to(velocity),
            ctx.params.min_speed,
            ctx.params.max_speed,
            fallback_heading(terms.total(), velocity),
        )
    }
}

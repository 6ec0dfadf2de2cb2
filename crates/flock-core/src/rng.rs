//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every tick carries a single `u64` seed.  Each agent derives its own
//! independent `SmallRng` for that tick from:
//!
//!   seed = tick_seed XOR ((agent_index + 1) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent indices uniformly across the seed space.
//! The `+ 1` keeps agent 0 from reusing the raw tick seed.  This means:
//!
//! - Agents never share RNG state (no contention, no ordering dependency).
//! - The draw an agent gets is a pure function of `(tick_seed, index)`, so a
//!   tick's result does not depend on how agents are split into batches.
//! - Nothing is carried between ticks; there is no RNG state to store.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent, per-tick deterministic RNG.
///
/// Built on the worker that evaluates the agent and dropped when that agent's
/// steering is done.  Never shared between agents or threads.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the tick's seed and an agent id.
    pub fn for_agent(tick_seed: u64, agent: AgentId) -> Self {
        let salt = (agent.0 as u64).wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(tick_seed ^ salt))
    }

    /// A vector whose components are each uniform in `[-1, 1]`.
    ///
    /// Not normalized: the scatter term is deliberately "unit-ish", with a
    /// length anywhere in `[0, √3]`.
    #[inline]
    pub fn scatter_vector(&mut self) -> Vec3 {
        Vec3::new(
            self.0.gen_range(-1.0f32..=1.0),
            self.0.gen_range(-1.0f32..=1.0),
            self.0.gen_range(-1.0f32..=1.0),
        )
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations: drawing each tick's seed and
/// placing spawned populations.
///
/// Used only in single-threaded contexts.  Parallel work never touches it;
/// workers get an [`AgentRng`] derived from the tick seed instead.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw the seed for the next tick.
    #[inline]
    pub fn next_tick_seed(&mut self) -> u64 {
        self.0.r#gen()
    }

    /// Draw a value uniformly from `range` (population placement).
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

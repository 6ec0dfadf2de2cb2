//! Fluent builder for constructing an initial `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::{AgentStoreBuilder, SpawnConfig};
//! use flock_core::Vec3;
//!
//! let store = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .agent(Vec3::ZERO, Vec3::X)
//!     .population(&SpawnConfig::new(1_000, Vec3::splat(20.0)))
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(store.len(), 1_001);
//! ```

use flock_core::vector::with_length_or;
use flock_core::{FlockError, FlockResult, SimRng, Vec3};

use crate::AgentStore;

// ── SpawnConfig ───────────────────────────────────────────────────────────────

/// How to place a randomly generated population.
///
/// Positions are uniform within `center ± extent` on each axis.  Start
/// velocities point in a uniformly random horizontal (XZ-plane) direction
/// with a speed uniform in `[min_start_speed, max_start_speed]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnConfig {
    pub count:           usize,
    pub center:          Vec3,
    pub extent:          Vec3,
    pub min_start_speed: f32,
    pub max_start_speed: f32,
}

impl SpawnConfig {
    /// `count` agents spread over `±extent` around the origin, starting at
    /// speeds in `[1, 3]`.
    pub fn new(count: usize, extent: Vec3) -> Self {
        Self {
            count,
            center: Vec3::ZERO,
            extent,
            min_start_speed: 1.0,
            max_start_speed: 3.0,
        }
    }

    pub fn validate(&self) -> FlockResult<()> {
        // The sampled box itself must be finite, not just its corners' inputs.
        let box_finite = (self.center - self.extent).is_finite() && (self.center + self.extent).is_finite();
        if !box_finite || self.extent.min_element() < 0.0 {
            return Err(FlockError::Config(format!(
                "spawn extent must be finite and non-negative, got {} around {}",
                self.extent, self.center
            )));
        }
        let speeds_ok = self.min_start_speed.is_finite()
            && self.max_start_speed.is_finite()
            && self.min_start_speed >= 0.0
            && self.min_start_speed <= self.max_start_speed;
        if !speeds_ok {
            return Err(FlockError::Config(format!(
                "start speed range [{}, {}] is invalid",
                self.min_start_speed, self.max_start_speed
            )));
        }
        Ok(())
    }
}

// ── AgentStoreBuilder ─────────────────────────────────────────────────────────

/// Fluent builder for [`AgentStore`].
///
/// Explicit agents and random populations may be mixed; ids are assigned in
/// the order agents are added.  Random placement draws from a [`SimRng`]
/// seeded by `seed`, so the same calls always produce the same store.
pub struct AgentStoreBuilder {
    rng:   SimRng,
    store: AgentStore,
}

impl AgentStoreBuilder {
    /// Create a builder whose random placements are seeded by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng:   SimRng::new(seed),
            store: AgentStore::new(),
        }
    }

    /// Append one agent with an explicit position and velocity.
    pub fn agent(mut self, position: Vec3, velocity: Vec3) -> Self {
        self.store.push_agent(position, velocity);
        self
    }

    /// Append `config.count` randomly placed agents.
    pub fn population(mut self, config: &SpawnConfig) -> FlockResult<Self> {
        config.validate()?;
        let lo = config.center - config.extent;
        let hi = config.center + config.extent;

        for _ in 0..config.count {
            let position = Vec3::new(
                self.rng.gen_range(lo.x..=hi.x),
                self.rng.gen_range(lo.y..=hi.y),
                self.rng.gen_range(lo.z..=hi.z),
            );
            let heading = Vec3::new(
                self.rng.gen_range(-1.0f32..=1.0),
                0.0,
                self.rng.gen_range(-1.0f32..=1.0),
            );
            let speed = self
                .rng
                .gen_range(config.min_start_speed..=config.max_start_speed);
            self.store
                .push_agent(position, with_length_or(heading, speed, Vec3::X));
        }
        Ok(self)
    }

    /// Finish and return the store.
    pub fn build(self) -> AgentStore {
        self.store
    }
}

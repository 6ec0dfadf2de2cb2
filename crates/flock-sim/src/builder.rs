//! Fluent builder for constructing a [`Flock`].

use flock_agent::AgentStore;
use flock_core::{FlockParams, SimClock, SimConfig, SimRng};
use flock_steer::SteeringModel;
use tracing::info;

use crate::flock::TickPhase;
use crate::{Flock, SimResult};

/// Fluent builder for [`Flock<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step length, total ticks, seed, batch size, …
/// - `M: SteeringModel` — the steering implementation (e.g.
///   [`flock_steer::Boids`])
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                  |
/// |----------------|--------------------------|
/// | `.params(p)`   | `FlockParams::default()` |
/// | `.agents(s)`   | empty `AgentStore`       |
///
/// # Example
///
/// ```rust,ignore
/// let store = AgentStoreBuilder::new(seed).population(&spawn)?.build();
/// let mut flock = FlockBuilder::new(config, Boids)
///     .params(params)
///     .agents(store)
///     .build()?;
/// flock.run(&mut NoopObserver)?;
/// ```
pub struct FlockBuilder<M: SteeringModel> {
    config: SimConfig,
    params: FlockParams,
    agents: AgentStore,
    model:  M,
}

impl<M: SteeringModel> FlockBuilder<M> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, model: M) -> Self {
        Self {
            config,
            params: FlockParams::default(),
            agents: AgentStore::new(),
            model,
        }
    }

    /// Supply the initial parameter block.
    pub fn params(mut self, params: FlockParams) -> Self {
        self.params = params;
        self
    }

    /// Supply the initial population.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = agents;
        self
    }

    /// Validate inputs, build the worker pool, and return a ready-to-run
    /// [`Flock`].
    pub fn build(self) -> SimResult<Flock<M>> {
        self.config.validate()?;
        self.params.validate()?;

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| crate::SimError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        info!(
            agents = self.agents.len(),
            batch_size = self.config.batch_size,
            threads = ?self.config.num_threads,
            seed = self.config.seed,
            "flock built"
        );

        Ok(Flock {
            clock:           SimClock::new(),
            seeds:           SimRng::new(self.config.seed),
            next_velocities: Vec::with_capacity(self.agents.len()),
            config:          self.config,
            params:          self.params,
            agents:          self.agents,
            model:           self.model,
            phase:           TickPhase::Idle,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}

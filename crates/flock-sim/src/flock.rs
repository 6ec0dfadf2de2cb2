//! The `Flock` struct and its tick loop.

use flock_agent::{AgentStore, AgentView};
use flock_core::{AgentId, AgentRng, FlockParams, SimClock, SimConfig, SimRng, Tick, Vec3};
use flock_steer::{SteerContext, SteeringModel, integrate};
use tracing::{debug, info, warn};

use crate::{FlockObserver, SimError, SimResult, TickReport};

// ── TickPhase ─────────────────────────────────────────────────────────────────

/// Where the flock is within a tick.
///
/// ```text
/// Idle ─► SnapshotTaken ─► Computing ─► Committed ─► Idle
/// ```
///
/// Between ticks the flock is always `Idle`.  A flock found in `Computing`
/// at the start of a tick was interrupted mid-compute (a worker panicked and
/// the caller caught it); its store was never touched, so the next tick just
/// starts over from a fresh snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TickPhase {
    #[default]
    Idle,
    SnapshotTaken,
    Computing,
    Committed,
}

// ── Flock ─────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Flock<M>` owns the agent store and drives the three-phase tick:
///
/// 1. **Snapshot**: freeze every agent's position and velocity.  All reads
///    during the tick go through this view.
/// 2. **Compute** (parallel with the `parallel` feature): split the agents
///    into batches of `config.batch_size` and call
///    [`SteeringModel::steer`] for each, writing the result into that
///    agent's slot of the output buffer.  Agents never see each other's
///    updates from the same tick.
/// 3. **Commit** (sequential): once every batch has finished, integrate
///    positions with the new velocities and swap the buffer into the store.
///
/// Create via [`FlockBuilder`][crate::FlockBuilder].
pub struct Flock<M: SteeringModel> {
    /// Run configuration (step length, seed, batch size, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and elapsed seconds.
    pub clock: SimClock,

    pub(crate) params: FlockParams,

    pub(crate) agents: AgentStore,

    pub(crate) model: M,

    /// Velocity output buffer, one slot per agent.  Swapped with the store's
    /// velocities at commit, so it is reused from tick to tick.
    pub(crate) next_velocities: Vec<Vec3>,

    pub(crate) phase: TickPhase,

    /// Source of per-tick seeds for `run` and `run_ticks`.
    pub(crate) seeds: SimRng,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<M: SteeringModel> Flock<M> {
    // ── Parameters and population ─────────────────────────────────────────

    /// Replace the parameter block.  Takes effect from the next tick.
    ///
    /// An invalid block is rejected and the current one kept.
    pub fn configure(&mut self, params: FlockParams) -> SimResult<()> {
        if let Err(e) = params.validate() {
            warn!(error = %e, "rejected parameter block; keeping the previous one");
            return Err(e.into());
        }
        self.params = params;
        info!(tick = %self.clock.current_tick, "parameter block replaced");
        Ok(())
    }

    /// The parameter block the next tick will use.
    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    /// Add an agent.  It takes part from the next tick onward.
    pub fn spawn(&mut self, position: Vec3, velocity: Vec3) -> AgentId {
        self.agents.push_agent(position, velocity)
    }

    /// Read-only access to the agent store.
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Every agent's committed state, in id order.
    pub fn read_state(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agents.views()
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the flock by one tick of `delta_time` seconds.
    ///
    /// `seed` determines every agent's random draws for this tick; the same
    /// snapshot, parameters and seed always produce the same result no
    /// matter how the work was batched or scheduled.
    pub fn tick<O: FlockObserver>(
        &mut self,
        delta_time: f32,
        seed:       u64,
        observer:   &mut O,
    ) -> SimResult<TickReport> {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(SimError::Config(format!(
                "delta_time must be finite and non-negative, got {delta_time}"
            )));
        }
        // `config` is public and may have been edited since `build`.
        if self.config.batch_size == 0 {
            return Err(SimError::Config("batch_size must be at least 1".into()));
        }

        let now = self.clock.current_tick;
        if self.phase == TickPhase::Computing {
            warn!(tick = %now, "previous tick never committed; recomputing from a fresh snapshot");
        }
        observer.on_tick_start(now);

        let agent_count = self.agents.len();
        let batch_count = if agent_count == 0 {
            0
        } else {
            // ── Phase 1: snapshot ─────────────────────────────────────────
            //
            // The snapshot itself is a borrow of the store, taken inside
            // `compute`; here we only size the output buffer to match it.
            self.next_velocities.clear();
            self.next_velocities.resize(agent_count, Vec3::ZERO);
            self.phase = TickPhase::SnapshotTaken;

            // ── Phase 2: compute ──────────────────────────────────────────
            self.phase = TickPhase::Computing;
            let batch_count = self.compute(now, seed);

            // ── Phase 3: commit ───────────────────────────────────────────
            self.agents
                .commit(&mut self.next_velocities, |p, v| integrate(p, v, delta_time));
            self.phase = TickPhase::Committed;
            observer.on_commit(now, &self.agents);
            batch_count
        };

        self.clock.advance(delta_time);
        self.phase = TickPhase::Idle;

        let report = TickReport {
            tick:         now,
            elapsed_secs: self.clock.elapsed_secs,
            agent_count,
            batch_count,
            mean_speed:   self.agents.mean_speed(),
        };
        debug!(
            tick = %now,
            agents = agent_count,
            batches = batch_count,
            mean_speed = report.mean_speed,
            "tick committed"
        );
        observer.on_tick_end(&report);
        Ok(report)
    }

    /// Run from the current tick to `config.end_tick()`, stepping by
    /// `config.delta_time` with seeds drawn from `config.seed`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: FlockObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            agents = self.agents.len(),
            from = %self.clock.current_tick,
            to = %self.config.end_tick(),
            "flock run starting"
        );
        while self.clock.current_tick < self.config.end_tick() {
            let seed = self.seeds.next_tick_seed();
            self.tick(self.config.delta_time, seed, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(clock = %self.clock, mean_speed = self.agents.mean_speed(), "flock run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let seed = self.seeds.next_tick_seed();
            self.tick(self.config.delta_time, seed, observer)?;
        }
        Ok(())
    }

    // ── Compute phase ─────────────────────────────────────────────────────

    /// Fill `next_velocities` from the current snapshot and return the
    /// number of batches used.
    ///
    /// With the `parallel` Cargo feature the batches run on Rayon's thread
    /// pool; the call returns only once all of them have finished.
    fn compute(&mut self, now: Tick, seed: u64) -> usize {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let batch_size = self.config.batch_size;
        let ctx = SteerContext::new(now, self.agents.snapshot(), &self.params);
        let model = &self.model;
        let out = self.next_velocities.as_mut_slice();
        let batch_count = out.len().div_ceil(batch_size);

        let run_batch = |(batch, slots): (usize, &mut [Vec3])| {
            let first = batch * batch_size;
            for (offset, slot) in slots.iter_mut().enumerate() {
                let agent = AgentId((first + offset) as u32);
                let mut rng = AgentRng::for_agent(seed, agent);
                *slot = model.steer(agent, &ctx, &mut rng);
            }
        };

        #[cfg(not(feature = "parallel"))]
        out.chunks_mut(batch_size).enumerate().for_each(run_batch);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            match &self.pool {
                Some(pool) => pool.install(|| {
                    out.par_chunks_mut(batch_size).enumerate().for_each(run_batch)
                }),
                None => out.par_chunks_mut(batch_size).enumerate().for_each(run_batch),
            }
        }

        batch_count
    }
}

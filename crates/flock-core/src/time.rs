//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter plus the simulated
//! seconds accumulated so far.  Unlike the tick count, the step length is
//! not fixed: every call to `Flock::tick` supplies its own `delta_time`, so a
//! host can drive the simulation from a variable frame clock.  `SimConfig`
//! carries the default step used by `run`/`run_ticks`.

use std::fmt;

use crate::{FlockError, FlockResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the simulated time elapsed since tick 0.
///
/// Elapsed time is accumulated in `f64` so long runs of small `f32` steps do
/// not drift.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` after each commit.
    pub current_tick: Tick,
    /// Simulated seconds elapsed since tick 0.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick of `delta_time` seconds.
    #[inline]
    pub fn advance(&mut self, delta_time: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += delta_time as f64;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3}s)", self.current_tick, self.elapsed_secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Distinct from [`FlockParams`][crate::FlockParams]: this describes how the
/// run is driven (step length, length of run, seeding, parallelism), while the
/// parameter block describes how agents steer and may be swapped mid-run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds advanced per tick by `run`/`run_ticks`.
    pub delta_time: f32,

    /// Total ticks executed by `run`.
    pub total_ticks: u64,

    /// Root RNG seed.  Per-tick seeds are drawn from it in order, so the same
    /// seed always produces identical trajectories.
    pub seed: u64,

    /// Agents per work batch in the compute phase.  Affects scheduling
    /// granularity only, never the result.
    pub batch_size: usize,

    /// Worker thread count passed to Rayon.  `None` uses the global pool.
    pub num_threads: Option<usize>,

    /// Record full agent state every N ticks.  0 disables state output.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            delta_time:            1.0 / 60.0,
            total_ticks:           600,
            seed:                  0,
            batch_size:            128,
            num_threads:           None,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Check the run configuration for values the scheduler cannot use.
    pub fn validate(&self) -> FlockResult<()> {
        if !self.delta_time.is_finite() || self.delta_time < 0.0 {
            return Err(FlockError::Config(format!(
                "delta_time must be finite and non-negative, got {}",
                self.delta_time
            )));
        }
        if self.batch_size == 0 {
            return Err(FlockError::Config("batch_size must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(FlockError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

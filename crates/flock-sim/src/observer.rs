//! Flock observer trait for progress reporting and data collection.

use flock_agent::AgentStore;
use flock_core::Tick;

/// What one tick did, handed to [`FlockObserver::on_tick_end`] and returned
/// from [`Flock::tick`][crate::Flock::tick].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    /// The tick that was just executed.
    pub tick: Tick,
    /// Simulated seconds elapsed after this tick.
    pub elapsed_secs: f64,
    pub agent_count: usize,
    /// Work batches the compute phase was split into.
    pub batch_count: usize,
    /// Mean speed after the commit; 0 for an empty flock.
    pub mean_speed: f32,
}

/// Callbacks invoked by [`Flock::tick`][crate::Flock::tick] and
/// [`Flock::run`][crate::Flock::run] at key points in the tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl FlockObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: mean speed {:.2}", report.tick, report.mean_speed);
///         }
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called at the very start of each tick, before the snapshot is taken.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called right after new velocities and positions are committed.
    ///
    /// `agents` is the post-commit state.  Not called for a flock with no
    /// agents, since nothing was committed.
    fn on_commit(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called once after the final tick of [`Flock::run`][crate::Flock::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`FlockObserver`] that does nothing.  Use when you need to call `tick`
/// or `run` but don't want callbacks.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}

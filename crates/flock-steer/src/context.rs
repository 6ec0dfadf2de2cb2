//! Read-only tick state passed to every steering callback.

use flock_agent::Snapshot;
use flock_core::{FlockParams, Tick};

/// Everything a [`SteeringModel`][crate::SteeringModel] may read while
/// computing one agent's new velocity.
///
/// `SteerContext` is built once per tick by flock-sim and shared (immutably)
/// across all batches during the compute phase.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's compute phase.  flock-sim
/// never allows mutable access to the agent store or the parameter block
/// while a `SteerContext` is live.
#[derive(Copy, Clone, Debug)]
pub struct SteerContext<'a> {
    /// The tick being computed.
    pub tick: Tick,

    /// Every agent's position and velocity as of the start of the tick.
    pub snapshot: Snapshot<'a>,

    /// The parameter block in force for this tick.
    pub params: &'a FlockParams,
}

impl<'a> SteerContext<'a> {
    #[inline]
    pub fn new(tick: Tick, snapshot: Snapshot<'a>, params: &'a FlockParams) -> Self {
        Self { tick, snapshot, params }
    }
}

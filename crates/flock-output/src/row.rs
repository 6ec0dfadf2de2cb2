//! Plain data row types written by output backends.

use flock_agent::AgentView;
use flock_core::Tick;

/// One agent's committed position and velocity at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentStateRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub px:       f32,
    pub py:       f32,
    pub pz:       f32,
    pub vx:       f32,
    pub vy:       f32,
    pub vz:       f32,
}

impl AgentStateRow {
    pub fn from_view(tick: Tick, view: &AgentView) -> Self {
        Self {
            agent_id: view.id.0,
            tick:     tick.0,
            px:       view.position.x,
            py:       view.position.y,
            pz:       view.position.z,
            vx:       view.velocity.x,
            vy:       view.velocity.y,
            vz:       view.velocity.z,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    /// Simulated seconds elapsed once the tick finished.
    pub elapsed_secs: f64,
    pub agent_count:  u64,
    pub mean_speed:   f32,
}

//! Core agent storage: `AgentStore` (SoA data), `Snapshot` (read-only tick
//! view) and `AgentView` (per-agent accessor for API boundaries).
//!
//! # Layout
//!
//! Positions and velocities live in two parallel `Vec<Vec3>`s indexed by
//! `AgentId`.  Struct-of-arrays keeps the neighbour scan streaming through
//! one contiguous array, and lets the scheduler hand out disjoint chunks of
//! a velocity buffer to worker threads without any locking.
//!
//! ```ignore
//! let pos = store.positions()[agent.index()];  // O(1), cache-friendly
//! ```

use flock_core::{AgentId, Vec3};

// ── AgentView ─────────────────────────────────────────────────────────────────

/// One agent's state, copied out of the store.
///
/// Only used at API boundaries (rendering, inspection, output); internal
/// code works on the SoA slices directly.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:       AgentId,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl AgentView {
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Read-only view of every agent's state at the start of a tick.
///
/// A `Snapshot` borrows the store immutably, so nothing can write agent
/// state while one is alive.  Every neighbour query of a tick reads from the
/// same snapshot, which is what makes the per-agent computations independent
/// of evaluation order.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    positions:  &'a [Vec3],
    velocities: &'a [Vec3],
}

impl<'a> Snapshot<'a> {
    /// Build a snapshot over two parallel slices.
    ///
    /// # Panics
    /// Panics if the slices differ in length.
    pub fn new(positions: &'a [Vec3], velocities: &'a [Vec3]) -> Self {
        assert_eq!(
            positions.len(),
            velocities.len(),
            "snapshot position/velocity arrays must be parallel"
        );
        Self { positions, velocities }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.positions[agent.index()]
    }

    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn velocity(&self, agent: AgentId) -> Vec3 {
        self.velocities[agent.index()]
    }

    #[inline]
    pub fn positions(&self) -> &'a [Vec3] {
        self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &'a [Vec3] {
        self.velocities
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + 'a {
        (0..self.positions.len() as u32).map(AgentId)
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Both arrays always have the same length; the `AgentId` value is the index
/// into each.  Agents are only ever appended, so ids are stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentStore {
    positions:  Vec<Vec3>,
    velocities: Vec<Vec3>,
}

impl AgentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append one agent and return its id.
    ///
    /// # Panics
    /// Panics if the store already holds `u32::MAX` agents.
    pub fn push_agent(&mut self, position: Vec3, velocity: Vec3) -> AgentId {
        let index = self.positions.len();
        assert!(index < AgentId::INVALID.index(), "agent store is full ({index} agents)");
        let id = AgentId(index as u32);
        self.positions.push(position);
        self.velocities.push(velocity);
        id
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.positions.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Copy one agent's state out.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn view(&self, agent: AgentId) -> AgentView {
        AgentView {
            id:       agent,
            position: self.positions[agent.index()],
            velocity: self.velocities[agent.index()],
        }
    }

    /// Every agent's state in ascending id order.
    pub fn views(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.positions
            .iter()
            .zip(&self.velocities)
            .enumerate()
            .map(|(i, (&position, &velocity))| AgentView {
                id: AgentId(i as u32),
                position,
                velocity,
            })
    }

    /// Read-only view for the compute phase of a tick.
    #[inline]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.positions, &self.velocities)
    }

    /// Mean speed over all agents, or `0.0` for an empty store.
    pub fn mean_speed(&self) -> f32 {
        if self.velocities.is_empty() {
            return 0.0;
        }
        let total: f64 = self.velocities.iter().map(|v| v.length() as f64).sum();
        (total / self.velocities.len() as f64) as f32
    }

    /// Commit a finished tick.
    ///
    /// `next_velocities` is the tick's output buffer.  Each position is
    /// replaced by `advance(position, new_velocity)`, then the velocity array
    /// is swapped with the buffer, so afterwards `next_velocities` holds the
    /// previous tick's velocities and can be reused as the next back buffer.
    ///
    /// # Panics
    /// Panics if `next_velocities` does not have exactly one slot per agent.
    pub fn commit<F>(&mut self, next_velocities: &mut Vec<Vec3>, mut advance: F)
    where
        F: FnMut(Vec3, Vec3) -> Vec3,
    {
        assert_eq!(
            next_velocities.len(),
            self.positions.len(),
            "output buffer must have one slot per agent"
        );
        for (position, &velocity) in self.positions.iter_mut().zip(next_velocities.iter()) {
            *position = advance(*position, velocity);
        }
        std::mem::swap(&mut self.velocities, next_velocities);
    }
}

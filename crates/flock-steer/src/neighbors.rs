//! Brute-force neighbour evaluation.
//!
//! Every query is a linear scan over the snapshot, so a full tick is O(n²).
//! Results are always in ascending `AgentId` order; the rules sum over them
//! in that order, which keeps floating-point results identical across the
//! two strategies below.

use flock_agent::Snapshot;
use flock_core::{AgentId, FlockParams, Vec3};

/// How the three per-rule neighbour sets are gathered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NeighborStrategy {
    /// One full scan per rule, each with the rule's own radius.
    PerRule,
    /// One full scan with the given coarse radius, then each rule filters
    /// that candidate list with its own radius.
    SharedCandidates(f32),
}

impl NeighborStrategy {
    /// `SharedCandidates` when the block sets `max_neighbor_distance`,
    /// otherwise `PerRule`.
    pub fn for_params(params: &FlockParams) -> Self {
        match params.max_neighbor_distance {
            Some(radius) => NeighborStrategy::SharedCandidates(radius),
            None => NeighborStrategy::PerRule,
        }
    }
}

/// All `j != agent` with `distance(position[agent], position[j]) < radius`.
///
/// Agents exactly `radius` away are excluded.
pub fn neighbors_within(agent: AgentId, snapshot: &Snapshot<'_>, radius: f32) -> Vec<AgentId> {
    let origin = snapshot.position(agent);
    snapshot
        .positions()
        .iter()
        .enumerate()
        .filter(|&(j, &other)| j != agent.index() && within(origin, other, radius))
        .map(|(j, _)| AgentId(j as u32))
        .collect()
}

/// The members of `candidates` (other than `agent`) closer than `radius`.
/// Preserves the order of `candidates`.
pub fn filter_within(
    agent:      AgentId,
    snapshot:   &Snapshot<'_>,
    candidates: &[AgentId],
    radius:     f32,
) -> Vec<AgentId> {
    let origin = snapshot.position(agent);
    candidates
        .iter()
        .copied()
        .filter(|&j| j != agent && within(origin, snapshot.position(j), radius))
        .collect()
}

#[inline]
fn within(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}

// ── Neighborhoods ─────────────────────────────────────────────────────────────

/// The neighbour sets of one agent for each of the three flocking rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Neighborhoods {
    pub separation: Vec<AgentId>,
    pub alignment:  Vec<AgentId>,
    pub cohesion:   Vec<AgentId>,
}

impl Neighborhoods {
    /// Gather all three sets for `agent` using the strategy chosen by
    /// `params`.
    pub fn gather(agent: AgentId, snapshot: &Snapshot<'_>, params: &FlockParams) -> Self {
        Self::gather_with(NeighborStrategy::for_params(params), agent, snapshot, params)
    }

    /// Gather all three sets with an explicit strategy.
    pub fn gather_with(
        strategy: NeighborStrategy,
        agent:    AgentId,
        snapshot: &Snapshot<'_>,
        params:   &FlockParams,
    ) -> Self {
        match strategy {
            NeighborStrategy::PerRule => Self {
                separation: neighbors_within(agent, snapshot, params.separation_range),
                alignment:  neighbors_within(agent, snapshot, params.alignment_range),
                cohesion:   neighbors_within(agent, snapshot, params.cohesion_range),
            },
            NeighborStrategy::SharedCandidates(radius) => {
                let candidates = neighbors_within(agent, snapshot, radius);
                Self {
                    separation: filter_within(agent, snapshot, &candidates, params.separation_range),
                    alignment:  filter_within(agent, snapshot, &candidates, params.alignment_range),
                    cohesion:   filter_within(agent, snapshot, &candidates, params.cohesion_range),
                }
            }
        }
    }
}

//! `flock-steer` — neighbour evaluation, steering rules and the steering
//! model trait.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`neighbors`] | brute-force radius queries, `NeighborStrategy`, `Neighborhoods` |
//! | [`rules`]     | separation, alignment, cohesion, bounds, scatter, `SteeringTerms` |
//! | [`clamp`]     | speed clamp with zero-velocity fallback, Euler `integrate`      |
//! | [`context`]   | `SteerContext<'a>` — read-only tick state shared by all agents  |
//! | [`model`]     | `SteeringModel` trait, `Boids` flocking model                   |
//!
//! # Design notes
//!
//! The tick loop in flock-sim works in two halves:
//!
//! 1. **Compute** (parallel): for every agent, call `SteeringModel::steer`.
//!    All reads go through `&SteerContext`; the only write is the returned
//!    velocity, which lands in that agent's own output slot.
//!
//! 2. **Commit** (sequential): integrate positions with the new velocities
//!    and swap them into the agent store.
//!
//! So a `SteeringModel` only needs to be `Send + Sync` — it never holds
//! mutable state that could race.

pub mod clamp;
pub mod context;
pub mod model;
pub mod neighbors;
pub mod rules;


pub use clamp::{clamp_speed, fallback_heading, integrate};
pub use context::SteerContext;
pub use model::{Boids, SteeringModel};
pub use neighbors::{NeighborStrategy, Neighborhoods, filter_within, neighbors_within};
pub use rules::{SteeringTerms, alignment, bounds_steer, cohesion, scatter, separation};

//! `flock-core` — foundational types for the `rust_flock` boids framework.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and minimal external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`params`]      | `FlockParams` (the parameter block), `BoundsMode`     |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent, per-tick), `SimRng` (global)   |
//! | [`vector`]      | zero-safe normalisation helpers over `glam::Vec3`     |
//! | [`error`]       | `FlockError`, `FlockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types, so     |
//! |         | parameter blocks and run configs can be loaded from files. |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use glam::Vec3;

pub use error::{FlockError, FlockResult};
pub use ids::AgentId;
pub use params::{BoundsMode, FlockParams};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};

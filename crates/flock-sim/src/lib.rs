//! `flock-sim` — tick scheduler for the rust_flock framework.
//!
//! # Three-phase tick
//!
//! ```text
//! tick(delta_time, seed):
//!   ① Snapshot — freeze positions and velocities; size the output buffer.
//!   ② Compute  — split agents into batches of `batch_size`; for each agent
//!                call SteeringModel::steer with an AgentRng derived from
//!                (seed, agent id) and write its output slot
//!                (parallel with the `parallel` feature).
//!   ③ Commit   — after every batch finishes: position += velocity * dt,
//!                swap the output buffer into the store, advance the clock.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the compute phase on Rayon's thread pool (default). |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_agent::{AgentStoreBuilder, SpawnConfig};
//! use flock_core::{SimConfig, Vec3};
//! use flock_sim::{FlockBuilder, NoopObserver};
//! use flock_steer::Boids;
//!
//! let store = AgentStoreBuilder::new(42)
//!     .population(&SpawnConfig::new(1_000, Vec3::splat(50.0)))?
//!     .build();
//! let mut flock = FlockBuilder::new(SimConfig::default(), Boids)
//!     .agents(store)
//!     .build()?;
//! flock.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod flock;
pub mod observer;


pub use builder::FlockBuilder;
pub use error::{SimError, SimResult};
pub use flock::{Flock, TickPhase};
pub use observer::{FlockObserver, NoopObserver, TickReport};

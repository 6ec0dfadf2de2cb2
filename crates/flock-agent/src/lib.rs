//! `flock-agent` — Structure-of-Arrays agent storage for the `rust_flock`
//! framework.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays), `Snapshot`, `AgentView`        |
//! | [`builder`]     | `AgentStoreBuilder`, `SpawnConfig` (population spawning)  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `AgentView`,          |
//! |            | `SpawnConfig`.                                             |

pub mod builder;
pub mod store;


pub use builder::{AgentStoreBuilder, SpawnConfig};
pub use store::{AgentStore, AgentView, Snapshot};

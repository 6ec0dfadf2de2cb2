//! `flock-output` — simulation output writers for the rust_flock framework.
//!
//! | Backend | Files created                             |
//! |---------|-------------------------------------------|
//! | CSV     | `agent_states.csv`, `tick_summaries.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FlockOutputObserver`], which implements `flock_sim::FlockObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, FlockOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = FlockOutputObserver::new(writer, &config);
//! flock.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FlockOutputObserver;
pub use row::{AgentStateRow, TickSummaryRow};
pub use writer::OutputWriter;

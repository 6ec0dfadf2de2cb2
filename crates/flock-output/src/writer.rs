//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentStateRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`FlockOutputObserver::take_error`][crate::FlockOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent states.
    fn write_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

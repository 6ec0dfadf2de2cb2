//! `FlockOutputObserver<W>` — bridges `FlockObserver` to an `OutputWriter`.

use flock_agent::AgentStore;
use flock_core::{SimConfig, Tick};
use flock_sim::{FlockObserver, TickReport};

use crate::row::{AgentStateRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FlockObserver`] that writes agent states and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Agent states are written after every `output_interval_ticks`-th commit
/// (counted from tick 0); a summary row is written for every tick.
///
/// Errors from the writer are stored internally because `FlockObserver`
/// methods have no return value.  After `flock.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FlockOutputObserver<W: OutputWriter> {
    writer:     W,
    interval:   u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FlockOutputObserver<W> {
    /// Create an observer backed by `writer`, recording states every
    /// `config.output_interval_ticks` ticks (0 disables state rows).
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            interval:   config.output_interval_ticks,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `flock.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `run` does this on its own; call it after driving
    /// the flock with `tick` or `run_ticks`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn records(&self, tick: Tick) -> bool {
        self.interval > 0 && tick.0.is_multiple_of(self.interval)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FlockObserver for FlockOutputObserver<W> {
    fn on_commit(&mut self, tick: Tick, agents: &AgentStore) {
        if !self.records(tick) {
            return;
        }
        let rows: Vec<AgentStateRow> = agents
            .views()
            .map(|view| AgentStateRow::from_view(tick, &view))
            .collect();
        let result = self.writer.write_states(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        let row = TickSummaryRow {
            tick:         report.tick.0,
            elapsed_secs: report.elapsed_secs,
            agent_count:  report.agent_count as u64,
            mean_speed:   report.mean_speed,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

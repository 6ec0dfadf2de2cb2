//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_states.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentStateRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    states:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut states = Writer::from_path(dir.join("agent_states.csv"))?;
        states.write_record(["agent_id", "tick", "px", "py", "pz", "vx", "vy", "vz"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "agent_count", "mean_speed"])?;

        Ok(Self {
            states,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()> {
        for row in rows {
            self.states.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.px.to_string(),
                row.py.to_string(),
                row.pz.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.vz.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.agent_count.to_string(),
            row.mean_speed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.states.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

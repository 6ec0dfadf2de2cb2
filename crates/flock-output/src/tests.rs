//! Integration tests for flock-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentStateRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn state_row(agent_id: u32, tick: u64) -> AgentStateRow {
        AgentStateRow {
            agent_id,
            tick,
            px: agent_id as f32,
            py: 0.5,
            pz: -1.0,
            vx: 0.0,
            vy: 2.0,
            vz: 0.25,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_states.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "px", "py", "pz", "vx", "vy", "vz"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "elapsed_secs", "agent_count", "mean_speed"]);
    }

    #[test]
    fn csv_state_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_states(&[state_row(0, 5), state_row(1, 5), state_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[2][2], "2"); // px
        assert_eq!(&read_rows[2][3], "0.5");
        assert_eq!(&read_rows[2][7], "0.25");
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:         3,
            elapsed_secs: 0.5,
            agent_count:  12,
            mean_speed:   4.25,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "0.5");
        assert_eq!(&read_rows[0][2], "12");
        assert_eq!(&read_rows[0][3], "4.25");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_states(&[]).unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use flock_agent::{AgentStoreBuilder, SpawnConfig};
    use flock_core::{SimConfig, Vec3};
    use flock_sim::{FlockBuilder, FlockObserver};
    use flock_steer::Boids;

    use crate::csv::CsvWriter;
    use crate::observer::FlockOutputObserver;
    use crate::row::{AgentStateRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig {
            delta_time: 0.1,
            total_ticks,
            seed: 1,
            batch_size: 4,
            num_threads: Some(1),
            output_interval_ticks,
        }
    }

    fn spawn(n: usize) -> flock_agent::AgentStore {
        AgentStoreBuilder::new(1)
            .population(&SpawnConfig::new(n, Vec3::splat(5.0)))
            .unwrap()
            .build()
    }

    /// Fails every write after the first `ok_writes`.
    struct Flaky {
        ok_writes: usize,
        finished:  usize,
    }

    impl OutputWriter for Flaky {
        fn write_states(&mut self, _rows: &[AgentStateRow]) -> OutputResult<()> {
            if self.ok_writes == 0 {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.ok_writes -= 1;
            Ok(())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let config = config(6, 2);
        let mut flock = FlockBuilder::new(config.clone(), Boids)
            .agents(spawn(3))
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = FlockOutputObserver::new(writer, &config);
        flock.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → states recorded at ticks 0, 2, 4 (3 ticks × 3 agents = 9 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 3 ticks × 3 agents = 9 state rows, got {}", rows.len());
        assert_eq!(&rows[3][1], "2");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }

    #[test]
    fn state_rows_match_final_store() {
        let config = config(1, 1);
        let mut flock = FlockBuilder::new(config.clone(), Boids)
            .agents(spawn(2))
            .build()
            .unwrap();

        let dir = tmp();
        let mut obs = FlockOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);
        flock.run(&mut obs).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        let last = flock.agents().view(flock_core::AgentId(1));
        assert_eq!(rows[1][2].parse::<f32>().unwrap(), last.position.x);
        assert_eq!(rows[1][6].parse::<f32>().unwrap(), last.velocity.y);
    }

    #[test]
    fn zero_interval_writes_summaries_only() {
        let config = config(3, 0);
        let mut flock = FlockBuilder::new(config.clone(), Boids)
            .agents(spawn(3))
            .build()
            .unwrap();

        let dir = tmp();
        let mut obs = FlockOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);
        flock.run(&mut obs).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);
    }

    #[test]
    fn first_error_kept_and_run_continues() {
        let config = config(5, 1);
        let mut flock = FlockBuilder::new(config.clone(), Boids)
            .agents(spawn(2))
            .build()
            .unwrap();

        let mut obs = FlockOutputObserver::new(Flaky { ok_writes: 2, finished: 0 }, &config);
        flock.run(&mut obs).unwrap();

        let err = obs.take_error().expect("write error should be stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finished, 1);
    }

    #[test]
    fn finish_flushes_after_manual_ticks() {
        let config = config(10, 1);
        let mut flock = FlockBuilder::new(config.clone(), Boids)
            .agents(spawn(2))
            .build()
            .unwrap();

        let dir = tmp();
        let mut obs = FlockOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);
        flock.run_ticks(2, &mut obs).unwrap();
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
    }

    #[test]
    fn observer_is_a_flock_observer() {
        fn takes_observer<O: FlockObserver>(_o: &O) {}
        let dir = tmp();
        let obs = FlockOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config(1, 1));
        takes_observer(&obs);
    }
}

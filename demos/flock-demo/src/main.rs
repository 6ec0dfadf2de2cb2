//! flock-demo — a small boids run for the rust_flock framework.
//!
//! Spawns a flock inside a 50-unit box, runs ten simulated seconds at 60 Hz
//! and writes agent states and tick summaries to `output/flock-demo`.
//!
//! ```text
//! cargo run -p flock-demo -- [params.json]
//! ```
//!
//! The optional JSON file holds a `FlockParams` block; missing fields take
//! their defaults.  Set `RUST_LOG=flock_sim=debug` to see per-tick logging.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use flock_agent::{AgentStoreBuilder, SpawnConfig};
use flock_core::{FlockParams, SimConfig, Vec3};
use flock_output::{CsvWriter, FlockOutputObserver};
use flock_sim::FlockBuilder;
use flock_steer::Boids;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:           usize = 2_000;
const SEED:                  u64   = 42;
const TICKS_PER_SEC:         u64   = 60;
const SIM_SECS:              u64   = 10;
const OUTPUT_INTERVAL_TICKS: u64   = 30; // two state dumps per simulated second
const OUTPUT_DIR:            &str  = "output/flock-demo";

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Read a parameter block from `path`, or use the defaults.
fn load_params(path: Option<&Path>) -> Result<FlockParams> {
    let Some(path) = path else {
        return Ok(FlockParams::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let params: FlockParams = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), "loaded parameter block");
    Ok(params)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let params_path = std::env::args().nth(1);
    let params = load_params(params_path.as_deref().map(Path::new))?;

    println!("=== flock-demo — rust_flock boids ===");
    println!("Agents: {AGENT_COUNT}  |  Seconds: {SIM_SECS}  |  Seed: {SEED}");
    println!();

    // 1. Spawn the flock inside the bounds box.
    let spawn = SpawnConfig {
        center: params.bounds_center,
        ..SpawnConfig::new(AGENT_COUNT, params.bounds)
    };
    let store = AgentStoreBuilder::new(SEED).population(&spawn)?.build();

    // 2. Run config.
    let config = SimConfig {
        delta_time:            1.0 / TICKS_PER_SEC as f32,
        total_ticks:           SIM_SECS * TICKS_PER_SEC,
        seed:                  SEED,
        batch_size:            128,
        num_threads:           None, // all logical cores
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };

    // 3. Build the flock.
    let mut flock = FlockBuilder::new(config.clone(), Boids)
        .params(params)
        .agents(store)
        .build()?;

    // 4. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = FlockOutputObserver::new(writer, &config);

    // 5. Run.
    let t0 = Instant::now();
    flock.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "output error");
    }

    // 6. Summary.
    let params = flock.params();
    let (inside, outside) = flock.read_state().fold((0usize, 0usize), |(i, o), a| {
        let offset = (a.position - params.bounds_center).abs();
        if offset.cmple(params.bounds).all() { (i + 1, o) } else { (i, o + 1) }
    });
    let centroid = flock.read_state().map(|a| a.position).sum::<Vec3>() / AGENT_COUNT as f32;

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  ticks        : {}", flock.clock.current_tick.0);
    println!("  mean speed   : {:.3}", flock.agents().mean_speed());
    println!("  centroid     : ({:.3}, {:.3}, {:.3})", centroid.x, centroid.y, centroid.z);
    println!("  inside bounds: {inside} / {}", inside + outside);
    println!("  output       : {OUTPUT_DIR}/agent_states.csv, {OUTPUT_DIR}/tick_summaries.csv");

    Ok(())
}

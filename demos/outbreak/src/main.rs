//! outbreak — one epidemic run with a random vaccination policy.
//!
//! ```text
//! outbreak [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the model runs on the default 50×50 grid with a
//! handful of seeded cases.  Each tick the policy spends up to
//! `DOSES_PER_TICK` vaccines on uniformly random cells, the way an untrained
//! agent would explore the action space.  Per-tick statistics and every
//! vaccination attempt are written as CSV to `OUTPUT_DIR` (default
//! `./output`).  Set `RUST_LOG=debug` for per-tick log lines.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use epi_core::{AgentState, SimRng};
use epi_output::{CsvWriter, StatsObserver};
use epi_sim::{ModelBuilder, SimConfig, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const POLICY_SEED:    u64   = 7;
const DOSES_PER_TICK: usize = 5;

fn default_config() -> SimConfig {
    SimConfig {
        vaccine_density:            0.3,
        initial_infection_fraction: 0.01,
        prob_infection:             0.2,
        seed:                       42,
        ..SimConfig::default()
    }
}

fn load_config(path: Option<PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(default_config());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let config = load_config(args.next().map(PathBuf::from))?;
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("output"));
    info!(config = %serde_json::to_string(&config)?, "Configuration loaded");

    let (width, height) = (config.width as i32, config.height as i32);
    let mut model = ModelBuilder::from_config(config).build()?;
    let mut policy = SimRng::new(POLICY_SEED);

    let writer = CsvWriter::new(&out_dir)
        .with_context(|| format!("opening output in {}", out_dir.display()))?;
    let mut obs = StatsObserver::new(writer);
    obs.record(model.last_stats());

    let t0 = Instant::now();
    while model.is_running() {
        for _ in 0..DOSES_PER_TICK.min(model.vaccines_remaining()) {
            let x = policy.gen_range(0..width);
            let y = policy.gen_range(0..height);
            model.vaccinate_observed(x, y, &mut obs);
        }
        model.tick()?;
        obs.on_tick_end(model.last_stats());
    }
    obs.on_sim_end(model.last_stats(), model.stop_reason());
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    let elapsed = t0.elapsed();

    // ── Summary ──────────────────────────────────────────────────────────
    let last = model.last_stats();
    println!();
    println!("=== outbreak summary ===");
    println!("Stopped at {} ({})", model.current_tick(), match model.stop_reason() {
        Some(reason) => reason.to_string(),
        None => "still running".to_owned(),
    });
    println!("Agents: {}  |  R0: {:.3}", model.agent_count(), model.get_r0());
    for state in AgentState::ALL {
        println!("  {:<12} {:>6}  ({:>5.1}%)", state.as_str(), last.count(state), 100.0 * last.fraction(state));
    }
    println!(
        "Vaccines used: {} / {} (seeded included)",
        model.max_vaccines() - model.vaccines_remaining(),
        model.max_vaccines()
    );
    println!("Rows written: {}  |  Output: {}", obs.rows_written(), out_dir.display());
    println!("Wall time: {:.1} ms", elapsed.as_secs_f64() * 1e3);
    Ok(())
}

//! foraging — runs one of the grid_agents scenarios from the command line.
//!
//! ```text
//! foraging --scenario cooperative --seed 7 --output output/coop
//! RUST_LOG=ga_sim=debug foraging --scenario competition --quiet
//! ```

mod render;
mod scenario;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use ga_agent::AgentStore;
use ga_core::{SimConfig, SimRng, Tick};
use ga_output::{CsvWriter, SimOutputObserver};
use ga_sim::{SimBuilder, SimObserver, StopReason, TickSummary};
use ga_world::{BfsPlanner, GridWorld};

use render::ConsoleRenderer;
use scenario::Scenario;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "foraging", about = "Grid-world agents foraging and cleaning", version)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Scenario::Cooperative)]
    scenario: Scenario,

    /// Step budget.  Defaults to the scenario's own.
    #[arg(long)]
    steps: Option<u64>,

    /// Render and record every N ticks (0 = never).
    #[arg(long)]
    interval: Option<u64>,

    /// Pause after each rendered frame.
    #[arg(long, default_value_t = 0)]
    speed_ms: u64,

    #[arg(long)]
    seed: Option<u64>,

    /// Write CSV snapshots and tick summaries into this directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file with a `SimConfig`; flags given on the command line win.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip grid rendering.
    #[arg(long, short)]
    quiet: bool,

    #[arg(long, short)]
    verbose: bool,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

struct DemoObserver {
    renderer:  Option<ConsoleRenderer>,
    output:    Option<SimOutputObserver<CsvWriter>>,
    snapshots: usize,
}

impl SimObserver for DemoObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(out) = &mut self.output {
            out.on_tick_start(tick);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        if let Some(r) = &mut self.renderer {
            r.on_tick_end(tick, summary);
        }
        if let Some(out) = &mut self.output {
            out.on_tick_end(tick, summary);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, world: &GridWorld, agents: &AgentStore) {
        self.snapshots += 1;
        if let Some(r) = &mut self.renderer {
            r.on_snapshot(tick, world, agents);
        }
        if let Some(out) = &mut self.output {
            out.on_snapshot(tick, world, agents);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, reason: StopReason) {
        if let Some(r) = &mut self.renderer {
            r.on_sim_end(final_tick, reason);
        }
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick, reason);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    // 1. Config: file, then scenario defaults, then flags.
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader::<_, SimConfig>(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig { total_ticks: cli.scenario.default_steps(), ..SimConfig::default() },
    };
    if let Some(steps) = cli.steps {
        config.total_ticks = steps;
    }
    if let Some(interval) = cli.interval {
        config.output_interval_ticks = interval;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    println!("=== foraging: {} ===", cli.scenario.title());
    println!("Steps: {}  |  Seed: {}", config.total_ticks, config.seed);

    // 2. World and roster.
    let mut rng = SimRng::new(config.seed);
    let setup = scenario::build(cli.scenario, &mut rng)?;
    println!(
        "World: {}×{}, {} obstacles, {} resources, {} agents",
        setup.world.width(),
        setup.world.height(),
        setup.world.obstacle_count(),
        setup.world.resource_count(),
        setup.agents.len(),
    );
    println!();

    // 3. Build sim.
    let mut builder = SimBuilder::new(config.clone(), setup.world, BfsPlanner);
    for (start, policy) in setup.agents {
        builder = builder.boxed_agent(start, policy);
    }
    let mut sim = builder.build()?;

    // 4. Observers.
    let output = match &cli.output {
        Some(dir) => Some(SimOutputObserver::new(
            CsvWriter::new(dir).with_context(|| format!("creating {}", dir.display()))?,
        )),
        None => None,
    };
    let renderer = (!cli.quiet).then(|| ConsoleRenderer::new(cli.speed_ms, cli.scenario.shades_memory()));
    let mut obs = DemoObserver { renderer, output, snapshots: 0 };

    // 5. Run.
    let t0 = Instant::now();
    let reason = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.as_mut().and_then(|o| o.take_error()) {
        warn!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Finished after {} ticks ({reason}) in {:.3} s", sim.tick.0, elapsed.as_secs_f64());
    println!(
        "Collected {} of {} resources; {} snapshots",
        sim.agents.total_collected(),
        sim.world.initial_resource_count(),
        obs.snapshots,
    );
    if let Some(dir) = &cli.output {
        println!("CSV output in {}", dir.display());
    }
    println!();

    // 7. Per-agent table.
    println!(
        "{:<6} {:<15} {:<10} {:>9} {:>7} {:>7} {:>6} {:>8} {:>8} {:>8}",
        "Agent", "Policy", "Position", "Collected", "Points", "Energy", "Steps", "Blocked", "Visited", "Regions"
    );
    println!("{}", "-".repeat(94));
    for a in sim.agents.iter() {
        let regions = a
            .memory
            .as_ref()
            .map(|m| m.regions_explored().to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<6} {:<15} {:<10} {:>9} {:>7} {:>7.1} {:>6} {:>8} {:>8} {:>8}",
            a.id.index(),
            a.policy.label(),
            a.position.to_string(),
            a.counters.resources_collected,
            a.counters.points,
            a.energy,
            a.counters.steps_taken,
            a.counters.blocked_moves,
            a.visited.len(),
            regions,
        );
    }

    Ok(())
}

//! robots — drives the waypoint scheduler from the command line.
//!
//! Without `--scenario-dir` it runs the built-in two-robot layout: `robotA`
//! crosses the top row of ten waypoints while `robotB` is told to stop
//! before node 3.  The waypoints are listed first, then every placement and
//! move is printed as it happens; pass `--output` to also record the stream
//! to disk.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wp_agent::{AgentState, AgentStatus};
use wp_core::{DirectivePolicy, SimConfig, Tick};
use wp_output::{CsvWriter, OutputWriter, SimOutputObserver};
use wp_scenario::Scenario;
use wp_sim::{PositionUpdate, RunSummary, SimObserver};
use wp_spatial::Topology;


// ── CLI ───────────────────────────────────────────────────────────────────────

/// Move agents along fixed waypoint paths, one node per tick.
#[derive(Parser, Debug)]
#[command(name = "robots")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding nodes.csv, paths.csv and an optional halts.csv
    #[arg(short, long)]
    scenario_dir: Option<PathBuf>,

    /// Pause between ticks in milliseconds (0 runs flat out)
    #[arg(short, long, default_value_t = SimConfig::REFERENCE_TICK_MS)]
    tick_ms: u64,

    /// Treat halt instructions that name no usable node as "never halt"
    #[arg(long)]
    lenient: bool,

    /// Directory to record the position stream into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output backend used with --output
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Request a stop after this many milliseconds of wall-clock time
    #[arg(long)]
    stop_after_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
}

// ── Console observer ──────────────────────────────────────────────────────────

type Recorder = SimOutputObserver<Box<dyn OutputWriter>>;

/// Prints the position stream and forwards it to an optional recorder.
struct ConsoleObserver {
    recorder: Option<Recorder>,
}

impl SimObserver for ConsoleObserver {
    fn on_place(&mut self, agent: &AgentState, update: PositionUpdate) {
        println!("{}  {:<8} placed at node {} {}", update.tick, agent.name(), update.node.0, update.point);
        if let Some(r) = &mut self.recorder {
            r.on_place(agent, update);
        }
    }

    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(r) = &mut self.recorder {
            r.on_tick_start(tick);
        }
    }

    fn on_move(&mut self, agent: &AgentState, update: PositionUpdate) {
        println!("{}  {:<8} -> node {} {}", update.tick, agent.name(), update.node.0, update.point);
        if let Some(r) = &mut self.recorder {
            r.on_move(agent, update);
        }
    }

    fn on_terminal(&mut self, tick: Tick, agent: &AgentState, status: AgentStatus) {
        println!("{}", terminal_line(tick, agent, status));
        if let Some(r) = &mut self.recorder {
            r.on_terminal(tick, agent, status);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, moves: usize) {
        if let Some(r) = &mut self.recorder {
            r.on_tick_end(tick, moves);
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        if let Some(r) = &mut self.recorder {
            r.on_sim_end(summary);
        }
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// One line per waypoint, in registration order.
fn waypoint_lines(topology: &Topology) -> Vec<String> {
    topology
        .iter()
        .map(|(id, point)| format!("  node {:<3} {point}", id.0))
        .collect()
}

fn terminal_line(tick: Tick, agent: &AgentState, status: AgentStatus) -> String {
    let at = agent.current_node().0;
    match (status, agent.next_target()) {
        (AgentStatus::HaltedAtCondition, Some(next)) => format!(
            "{tick}  {:<8} halted at node {at} (next would be {})",
            agent.name(),
            next.0,
        ),
        _ => format!("{tick}  {:<8} {status} at node {at}", agent.name()),
    }
}

fn open_recorder(cli: &Cli) -> Result<Option<Recorder>> {
    let Some(dir) = &cli.output else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let writer: Box<dyn OutputWriter> = match cli.format {
        Format::Csv => Box::new(CsvWriter::new(dir)?),
        #[cfg(feature = "sqlite")]
        Format::Sqlite => Box::new(wp_output::SqliteWriter::new(dir)?),
        #[cfg(not(feature = "sqlite"))]
        Format::Sqlite => bail!("SQLite output requires building with --features sqlite"),
    };
    info!(dir = %dir.display(), format = ?cli.format, "recording positions");
    Ok(Some(SimOutputObserver::new(writer)))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // 1. Setup tables.
    let scenario = match &cli.scenario_dir {
        Some(dir) => Scenario::load_dir(dir)
            .with_context(|| format!("loading scenario from {}", dir.display()))?,
        None => Scenario::reference(),
    };

    // 2. Validate and resolve everything up front.
    let policy = if cli.lenient { DirectivePolicy::Lenient } else { DirectivePolicy::Strict };
    let config = SimConfig::paced(cli.tick_ms).with_directive_policy(policy);
    let mut sim = scenario.into_builder(config)?.build()?;
    println!(
        "{} waypoints, {} agents, {} ms per tick",
        sim.topology().node_count(),
        sim.agents().len(),
        cli.tick_ms
    );
    for line in waypoint_lines(sim.topology()) {
        println!("{line}");
    }
    println!();

    // 3. Optional wall-clock limit.
    if let Some(ms) = cli.stop_after_ms {
        let stop = sim.stop_handle();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(ms));
            stop.stop();
        });
    }

    // 4. Run.
    let mut obs = ConsoleObserver { recorder: open_recorder(&cli)? };
    let summary = sim.run(&mut obs);

    if let Some(e) = obs.recorder.as_mut().and_then(Recorder::take_error) {
        error!(error = %e, "output incomplete");
        bail!(e);
    }

    // 5. Final positions.
    println!();
    println!(
        "Done after {} ticks: {} finished, {} halted{}",
        summary.ticks,
        summary.finished,
        summary.halted,
        if summary.stopped { format!(", {} stopped early", summary.moving) } else { String::new() },
    );
    for agent in sim.agents().iter() {
        if let Some(point) = sim.position(agent.id()) {
            println!("  {:<8} node {:<3} {}  {}", agent.name(), agent.current_node().0, point, agent.status());
        }
    }
    Ok(())
}

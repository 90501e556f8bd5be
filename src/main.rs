use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use road_flow_sim::report;
use road_flow_sim::simulation::{self, SimConfig, SimEngine, DEFAULT_EXIT_PROBABILITY};

#[derive(Parser)]
#[command(name = "road_flow_sim")]
#[command(about = "Stochastic vehicle flow over a small road network")]
struct Cli {
    /// Number of simulation ticks (one minute of travel each)
    #[arg(long, default_value = "60")]
    ticks: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Chance a vehicle leaves the network at the end of an edge
    #[arg(long, default_value_t = DEFAULT_EXIT_PROBABILITY)]
    exit_probability: f64,

    /// Print every vehicle of every tick
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let input = simulation::demo_network().context("Failed to build demo network")?;
    info!(
        "Running demo network: {} nodes, {} edges, {} injections",
        input.network.node_count(),
        input.network.edge_count(),
        input.injections.len()
    );

    report::print_network(&input.network);

    let mut config = SimConfig::default().with_exit_probability(cli.exit_probability);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut engine = SimEngine::new(&input, config).context("Invalid simulation configuration")?;
    info!(
        "Ticks: {}, exit probability: {}",
        cli.ticks,
        engine.config().exit_probability
    );
    let states: Vec<_> = (0..cli.ticks).map(|_| engine.step()).collect();

    for state in &states {
        report::print_state(state, cli.verbose);
    }
    report::print_count_chart(&states);
    report::log_summary(engine.stats(), &states);

    Ok(())
}

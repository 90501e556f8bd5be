//! Console output for finished runs
//!
//! Read-only consumers of the snapshot sequence.

use log::info;

use crate::simulation::{Road, RoadNetwork, RoadNetworkState, SimulationStats};

/// Widest bar drawn by [`print_count_chart`]
pub const CHART_WIDTH: usize = 50;

/// One line per node (with its outcome weights) then one per edge, sorted by id
pub fn network_lines(network: &RoadNetwork) -> Vec<String> {
    let mut nodes: Vec<_> = network.nodes().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    let mut edges: Vec<_> = network.edges().collect();
    edges.sort_by(|a, b| a.id.cmp(&b.id));

    let mut lines = Vec::with_capacity(nodes.len() + edges.len());
    for node in nodes {
        let outcomes: Vec<String> = node
            .edge_outcomes()
            .iter()
            .map(|(edge, weight)| format!("{}={}", edge, weight))
            .collect();
        lines.push(format!(
            "node {} ({:.3}, {:.3}) -> [{}]",
            node.id,
            node.latitude,
            node.longitude,
            outcomes.join(", ")
        ));
    }
    for edge in edges {
        let kind = match &edge.road {
            Road::Highway { lanes, .. } => format!("highway, {} lanes", lanes),
            Road::Street { .. } => "street".to_string(),
        };
        lines.push(format!(
            "edge {}: {} -> {}, {} {:.1} km ({}), limit {:.0} km/h",
            edge.id,
            edge.from,
            edge.to,
            edge.road.id(),
            edge.length(),
            kind,
            edge.speed_limit
        ));
    }
    lines
}

/// Print the network layout
pub fn print_network(network: &RoadNetwork) {
    println!("=== Road network ===");
    for line in network_lines(network) {
        println!("  {}", line);
    }
    println!();
}

/// Print one snapshot: tick, vehicle count and optionally every vehicle
pub fn print_state(state: &RoadNetworkState, verbose: bool) {
    println!("Tick {}: {} vehicles", state.timestamp, state.vehicle_count());
    if verbose {
        for vehicle in state.vehicles() {
            println!(
                "  {} on {}: position={:.3} km, speed={:.1} km/h",
                vehicle.id,
                vehicle.edge,
                vehicle.position.into_inner(),
                vehicle.speed.into_inner()
            );
        }
    }
}

/// Render one bar per tick, scaled to the busiest tick
pub fn count_chart(states: &[RoadNetworkState]) -> Vec<String> {
    let peak = states
        .iter()
        .map(RoadNetworkState::vehicle_count)
        .max()
        .unwrap_or(0)
        .max(1);

    states
        .iter()
        .map(|state| {
            let count = state.vehicle_count();
            let width = count * CHART_WIDTH / peak;
            format!(
                "{:>5} | {:<chart$} {}",
                state.timestamp,
                "#".repeat(width),
                count,
                chart = CHART_WIDTH
            )
        })
        .collect()
}

/// Print the vehicle count per tick as a bar chart
pub fn print_count_chart(states: &[RoadNetworkState]) {
    println!("\n=== Vehicles per tick ===");
    for line in count_chart(states) {
        println!("{}", line);
    }
    println!();
}

/// Log end-of-run statistics
pub fn log_summary(stats: &SimulationStats, states: &[RoadNetworkState]) {
    let counts: Vec<usize> = states.iter().map(RoadNetworkState::vehicle_count).collect();
    let peak = counts.iter().copied().max().unwrap_or(0);
    let mean = if counts.is_empty() {
        0.0
    } else {
        counts.iter().sum::<usize>() as f64 / counts.len() as f64
    };

    info!("=== SIMULATION COMPLETE ===");
    info!("Ticks: {}", stats.ticks);
    info!("Total vehicles injected: {}", stats.injected);
    if stats.inserted > 0 {
        info!("Total vehicles inserted: {}", stats.inserted);
    }
    info!("Total vehicles exited: {}", stats.exited());
    info!("  random exits: {}", stats.exited_random);
    info!("  unroutable: {}", stats.exited_unroutable);
    info!("  unknown edge: {}", stats.dropped_unknown_edge);
    info!("Reroutes: {}", stats.rerouted);
    info!("Active vehicles: {}", counts.last().copied().unwrap_or(0));
    info!("Peak vehicles: {}, mean: {:.2}", peak, mean);
}

//! Routing decisions at the end of an edge
//!
//! A vehicle first faces a fixed chance of leaving the network, then picks
//! its next edge by weighted random choice over the node's outcomes.

use rand::Rng;

use super::road_network::Node;
use super::types::EdgeId;

/// What a vehicle does when it reaches a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// The exit draw fired
    Exit,
    /// The node has no outcome with positive weight; forced exit
    NoOutcomes,
    /// Continue onto this edge (not yet resolved against the network)
    Continue(EdgeId),
}

/// Picks what happens to a vehicle arriving at `node`.
///
/// Draw order is fixed: one exit draw, then (if continuing) one weight draw.
pub fn route_at_node<R: Rng>(node: &Node, exit_probability: f64, rng: &mut R) -> RoutingDecision {
    if rng.random::<f64>() < exit_probability {
        return RoutingDecision::Exit;
    }

    match choose_weighted(node, rng) {
        Some(edge) => RoutingDecision::Continue(edge.clone()),
        None => RoutingDecision::NoOutcomes,
    }
}

/// Weighted random choice over the node's outcomes, walked in order.
///
/// Returns the first entry whose cumulative weight meets or exceeds a uniform
/// draw in `[0, total)`. Zero-weight entries are never chosen. Returns `None`
/// when the outcomes are empty or sum to zero, without drawing.
pub fn choose_weighted<'a, R: Rng>(node: &'a Node, rng: &mut R) -> Option<&'a EdgeId> {
    let total = node.total_weight();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let draw = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (edge, weight) in node.edge_outcomes() {
        if *weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        if cumulative >= draw {
            return Some(edge);
        }
        last_positive = Some(edge);
    }

    // Float rounding can leave the final cumulative a hair under the draw
    last_positive
}

//! Shared network fixtures for the integration tests

#![allow(dead_code)]

use road_flow_sim::simulation::{
    Edge, EdgeId, Node, Road, RoadNetwork, RoadNetworkWithInjection, VehicleInjection,
};

/// Nodes A and B joined by a 5 km street A->B with a 50 km/h limit.
/// B has no outcomes, so anything reaching it is forced out.
pub fn one_way_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Node::new("A", 0.0, 0.0)).unwrap();
    let b = network.add_node(Node::new("B", 0.0, 0.05)).unwrap();
    network
        .add_edge(Edge::new("A-B", &a, &b, Road::street("main", 5.0), 50.0))
        .unwrap();
    network
}

/// A->B (5 km, 50 km/h) and B->A (5 km highway, 20 km/h).
/// B sends everything onto B->A, A sends everything onto A->B.
pub fn loop_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    let a = network
        .add_node(Node::new("A", 0.0, 0.0).with_outcome("A-B", 1.0))
        .unwrap();
    let b = network
        .add_node(Node::new("B", 0.0, 0.05).with_outcome("B-A", 1.0))
        .unwrap();
    network
        .add_edge(Edge::new("A-B", &a, &b, Road::street("main", 5.0), 50.0))
        .unwrap();
    network
        .add_edge(Edge::new("B-A", &b, &a, Road::highway("back", 5.0, 2), 20.0))
        .unwrap();
    network
}

pub fn with_injection(network: RoadNetwork, rate: f64, speed: f64) -> RoadNetworkWithInjection {
    let injections = vec![VehicleInjection::new(&EdgeId::new("A-B"), rate, speed)];
    RoadNetworkWithInjection::new(network, injections)
}

pub fn without_injection(network: RoadNetwork) -> RoadNetworkWithInjection {
    RoadNetworkWithInjection::new(network, Vec::new())
}

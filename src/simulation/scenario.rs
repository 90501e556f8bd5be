//! Built-in demo scenario
//!
//! A four-node loop with a highway in and out of town and a short-cut
//! street, fed by two injections.

use super::error::SimError;
use super::injection::{RoadNetworkWithInjection, VehicleInjection};
use super::road_network::{Edge, Node, RoadNetwork};
use super::types::{Road, VehicleType};

/// Build the demo network
pub fn demo_network() -> Result<RoadNetworkWithInjection, SimError> {
    let mut network = RoadNetwork::new();

    //  west --H1--> junction --S1--> market --S2--> depot --H2--> west
    //                   \________________S3_________^
    let west =
        network.add_node(Node::new("west", 52.370, 4.860).with_outcome("west-junction", 1.0))?;
    let junction = network.add_node(
        Node::new("junction", 52.372, 4.895)
            .with_outcome("junction-market", 0.6)
            .with_outcome("junction-depot", 0.4),
    )?;
    let market =
        network.add_node(Node::new("market", 52.378, 4.900).with_outcome("market-depot", 1.0))?;
    let depot =
        network.add_node(Node::new("depot", 52.365, 4.905).with_outcome("depot-west", 1.0))?;

    let inbound = network.add_edge(Edge::new(
        "west-junction",
        &west,
        &junction,
        Road::highway("H1", 12.0, 3),
        100.0,
    ))?;
    network.add_edge(Edge::new(
        "junction-market",
        &junction,
        &market,
        Road::street("S1", 4.0),
        50.0,
    ))?;
    let market_depot = network.add_edge(Edge::new(
        "market-depot",
        &market,
        &depot,
        Road::street("S2", 3.0),
        40.0,
    ))?;
    network.add_edge(Edge::new(
        "junction-depot",
        &junction,
        &depot,
        Road::street("S3", 5.0),
        50.0,
    ))?;
    network.add_edge(Edge::new(
        "depot-west",
        &depot,
        &west,
        Road::highway("H2", 8.0, 2),
        90.0,
    ))?;

    let injections = vec![
        VehicleInjection::new(&inbound, 1.5, 90.0).with_peak_hour(8),
        VehicleInjection::new(&market_depot, 0.5, 40.0)
            .with_peak_hour(17)
            .with_vehicle_type(VehicleType::Truck),
    ];

    Ok(RoadNetworkWithInjection::new(network, injections))
}

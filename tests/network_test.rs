//! Network construction and lookup

mod common;

use road_flow_sim::simulation::{
    demo_network, Edge, EdgeId, Node, NodeId, Road, RoadNetwork, SimError,
};

use common::loop_network;

#[test]
fn test_road_variants_share_accessors() {
    let highway = Road::highway("H1", 12.0, 3);
    let street = Road::street("S1", 4.0);

    assert_eq!(highway.id(), "H1");
    assert_eq!(highway.length(), 12.0);
    assert_eq!(highway.lanes(), 3);
    assert_eq!(street.id(), "S1");
    assert_eq!(street.length(), 4.0);
    assert_eq!(street.lanes(), 1);
}

#[test]
fn test_outcome_weight_is_replaced_not_duplicated() {
    let node = Node::new("N", 0.0, 0.0)
        .with_outcome("x", 1.0)
        .with_outcome("y", 2.0)
        .with_outcome("x", 5.0);

    assert_eq!(
        node.edge_outcomes(),
        &[(EdgeId::new("x"), 5.0), (EdgeId::new("y"), 2.0)]
    );
    assert_eq!(node.total_weight(), 7.0);
}

#[test]
fn test_lookups() {
    let network = loop_network();

    assert_eq!(network.node_count(), 2);
    assert_eq!(network.edge_count(), 2);

    let edge = network.edge(&EdgeId::new("A-B")).unwrap();
    assert_eq!(edge.from, NodeId::new("A"));
    assert_eq!(edge.to, NodeId::new("B"));
    assert_eq!(edge.length(), 5.0);

    let destination = network.destination_of(&EdgeId::new("A-B")).unwrap();
    assert_eq!(destination.id, NodeId::new("B"));
    assert!(network.destination_of(&EdgeId::new("missing")).is_none());
    assert!(network.node(&NodeId::new("C")).is_none());
}

#[test]
fn test_outgoing_edges() {
    let network = demo_network().unwrap().network;

    let outgoing = network.outgoing_edges(&NodeId::new("junction"));
    assert_eq!(
        outgoing,
        vec![&EdgeId::new("junction-depot"), &EdgeId::new("junction-market")]
    );
    assert!(network.outgoing_edges(&NodeId::new("nowhere")).is_empty());
}

#[test]
fn test_demo_network_routes_only_along_its_edges() {
    let input = demo_network().unwrap();
    assert_eq!(input.network.warn_unreachable_outcomes(), 0);
    assert!(input.validate().is_ok());
}

#[test]
fn test_unreachable_outcomes_are_counted() {
    let mut network = RoadNetwork::new();
    let a = network
        .add_node(Node::new("A", 0.0, 0.0).with_outcome("elsewhere", 1.0))
        .unwrap();
    let b = network.add_node(Node::new("B", 0.0, 0.0)).unwrap();
    network
        .add_edge(Edge::new("A-B", &a, &b, Road::street("s", 1.0), 30.0))
        .unwrap();

    assert_eq!(network.warn_unreachable_outcomes(), 1);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut network = loop_network();

    assert_eq!(
        network.add_node(Node::new("A", 1.0, 1.0)),
        Err(SimError::DuplicateNode(NodeId::new("A")))
    );

    let a = NodeId::new("A");
    let b = NodeId::new("B");
    assert_eq!(
        network.add_edge(Edge::new("A-B", &a, &b, Road::street("dup", 1.0), 30.0)),
        Err(SimError::DuplicateEdge(EdgeId::new("A-B")))
    );
}

#[test]
fn test_edge_endpoints_must_exist() {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Node::new("A", 0.0, 0.0)).unwrap();
    let ghost = NodeId::new("ghost");

    let result = network.add_edge(Edge::new("A-ghost", &a, &ghost, Road::street("s", 1.0), 30.0));
    assert_eq!(
        result,
        Err(SimError::UnknownNode {
            edge: EdgeId::new("A-ghost"),
            node: ghost,
        })
    );
    assert_eq!(network.edge_count(), 0);
}

#[test]
fn test_edge_dimensions_are_validated() {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Node::new("A", 0.0, 0.0)).unwrap();
    let b = network.add_node(Node::new("B", 0.0, 0.0)).unwrap();

    assert!(matches!(
        network.add_edge(Edge::new("zero", &a, &b, Road::street("s", 0.0), 30.0)),
        Err(SimError::InvalidRoadLength { .. })
    ));
    assert!(matches!(
        network.add_edge(Edge::new("slow", &a, &b, Road::highway("h", 2.0, 2), 0.0)),
        Err(SimError::InvalidSpeedLimit { .. })
    ));
}

#[test]
fn test_outcome_weights_must_be_non_negative() {
    let mut network = RoadNetwork::new();
    let result = network.add_node(Node::new("A", 0.0, 0.0).with_outcome("x", -1.0));
    assert!(matches!(result, Err(SimError::InvalidOutcomeWeight { .. })));
    assert_eq!(network.node_count(), 0);
}

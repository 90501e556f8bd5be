//! Road network graph
//!
//! Nodes are routing decision points, edges are directed roads between them.
//! The network owns every node and edge; everything else refers to them by id.

use log::warn;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use super::error::SimError;
use super::types::{EdgeId, NodeId, Road};

/// A routing decision point
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub latitude: f64,
    pub longitude: f64,
    /// Weighted next-edge candidates, kept in insertion order.
    /// Weights are relative and need not sum to 1.
    edge_outcomes: Vec<(EdgeId, f64)>,
}

impl Node {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: NodeId::new(id),
            latitude,
            longitude,
            edge_outcomes: Vec::new(),
        }
    }

    /// Adds (or replaces) the weight for continuing onto `edge`
    pub fn with_outcome(mut self, edge: impl Into<String>, weight: f64) -> Self {
        let edge = EdgeId::new(edge);
        match self.edge_outcomes.iter_mut().find(|(id, _)| *id == edge) {
            Some(entry) => entry.1 = weight,
            None => self.edge_outcomes.push((edge, weight)),
        }
        self
    }

    pub fn edge_outcomes(&self) -> &[(EdgeId, f64)] {
        &self.edge_outcomes
    }

    pub fn total_weight(&self) -> f64 {
        self.edge_outcomes.iter().map(|(_, weight)| weight).sum()
    }
}

/// A directed edge between two nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub road: Road,
    /// km/h
    pub speed_limit: f64,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        from: &NodeId,
        to: &NodeId,
        road: Road,
        speed_limit: f64,
    ) -> Self {
        Self {
            id: EdgeId::new(id),
            from: from.clone(),
            to: to.clone(),
            road,
            speed_limit,
        }
    }

    pub fn length(&self) -> f64 {
        self.road.length()
    }
}

/// Immutable-once-built road network
#[derive(Debug, Default)]
pub struct RoadNetwork {
    /// Adjacency, weighted by edge id
    graph: DiGraph<NodeId, EdgeId>,

    /// Maps node IDs to their indices in the graph
    node_to_index: HashMap<NodeId, NodeIndex>,

    nodes: HashMap<NodeId, Node>,

    edges: HashMap<EdgeId, Edge>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the network
    pub fn add_node(&mut self, node: Node) -> Result<NodeId, SimError> {
        if self.nodes.contains_key(&node.id) {
            return Err(SimError::DuplicateNode(node.id));
        }

        if let Some((edge, weight)) = node
            .edge_outcomes
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(SimError::InvalidOutcomeWeight {
                node: node.id.clone(),
                edge: edge.clone(),
                weight: *weight,
            });
        }

        let id = node.id.clone();
        let index = self.graph.add_node(id.clone());
        self.node_to_index.insert(id.clone(), index);
        self.nodes.insert(id.clone(), node);
        Ok(id)
    }

    /// Adds a directed edge; both endpoints must already be present
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, SimError> {
        if self.edges.contains_key(&edge.id) {
            return Err(SimError::DuplicateEdge(edge.id));
        }

        let length = edge.length();
        if !length.is_finite() || length <= 0.0 {
            return Err(SimError::InvalidRoadLength {
                edge: edge.id,
                length,
            });
        }

        if !edge.speed_limit.is_finite() || edge.speed_limit <= 0.0 {
            return Err(SimError::InvalidSpeedLimit {
                edge: edge.id,
                speed_limit: edge.speed_limit,
            });
        }

        let from_index = self.index_of(&edge.id, &edge.from)?;
        let to_index = self.index_of(&edge.id, &edge.to)?;

        let id = edge.id.clone();
        self.graph.add_edge(from_index, to_index, id.clone());
        self.edges.insert(id.clone(), edge);
        Ok(id)
    }

    fn index_of(&self, edge: &EdgeId, node: &NodeId) -> Result<NodeIndex, SimError> {
        self.node_to_index
            .get(node)
            .copied()
            .ok_or_else(|| SimError::UnknownNode {
                edge: edge.clone(),
                node: node.clone(),
            })
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// The node a vehicle reaches at the end of `edge`
    pub fn destination_of(&self, edge: &EdgeId) -> Option<&Node> {
        self.edges.get(edge).and_then(|edge| self.nodes.get(&edge.to))
    }

    /// Gets all edges leaving a node
    pub fn outgoing_edges(&self, node: &NodeId) -> Vec<&EdgeId> {
        let Some(index) = self.node_to_index.get(node) else {
            return Vec::new();
        };

        let mut edges: Vec<&EdgeId> = self.graph.edges(*index).map(|edge| edge.weight()).collect();
        edges.sort();
        edges
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Logs outcome entries that no vehicle could ever follow.
    /// Returns how many were found; such vehicles are dropped at runtime.
    pub fn warn_unreachable_outcomes(&self) -> usize {
        let mut found = 0;
        for node in self.nodes.values() {
            let outgoing = self.outgoing_edges(&node.id);
            for (edge, _) in node.edge_outcomes() {
                if !outgoing.contains(&edge) {
                    warn!(
                        "Node {} routes to {} which is not one of its outgoing edges",
                        node.id, edge
                    );
                    found += 1;
                }
            }
        }
        found
    }
}

//! Errors raised while building a network or starting a simulation.
//!
//! Per-tick anomalies never surface here; the engine drops the affected
//! vehicle and logs the event instead.

use thiserror::Error;

use super::types::{EdgeId, NodeId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("node {0} already exists in the network")]
    DuplicateNode(NodeId),

    #[error("edge {0} already exists in the network")]
    DuplicateEdge(EdgeId),

    #[error("edge {edge} references unknown node {node}")]
    UnknownNode { edge: EdgeId, node: NodeId },

    #[error("road of edge {edge} must have a positive finite length, got {length}")]
    InvalidRoadLength { edge: EdgeId, length: f64 },

    #[error("edge {edge} must have a positive finite speed limit, got {speed_limit}")]
    InvalidSpeedLimit { edge: EdgeId, speed_limit: f64 },

    #[error("node {node} has invalid weight {weight} for outcome {edge}")]
    InvalidOutcomeWeight {
        node: NodeId,
        edge: EdgeId,
        weight: f64,
    },

    #[error("injection references edge {0} which is not in the network")]
    UnknownInjectionEdge(EdgeId),

    #[error("injection on edge {edge} has non-finite rate {rate}")]
    InvalidRate { edge: EdgeId, rate: f64 },

    #[error("vehicle speed on edge {edge} must be finite and non-negative, got {speed}")]
    InvalidSpeed { edge: EdgeId, speed: f64 },

    #[error("edge {0} is not in the network")]
    UnknownEdge(EdgeId),

    #[error("exit probability must lie in [0, 1], got {0}")]
    InvalidExitProbability(f64),

    #[error("position {position} is outside edge {edge} of length {length}")]
    InvalidVehiclePosition {
        edge: EdgeId,
        position: f64,
        length: f64,
    },
}

//! Vehicle state and per-tick movement
//!
//! Standalone movement logic: one vehicle, one tick, no engine bookkeeping.

use log::{trace, warn};
use ordered_float::OrderedFloat;
use rand::Rng;
use std::collections::BTreeMap;

use super::road_network::RoadNetwork;
use super::routing::{route_at_node, RoutingDecision};
use super::types::{EdgeId, VehicleId, MINUTES_PER_HOUR};

/// A live vehicle on an edge.
/// Exited vehicles have no state; they are simply absent from the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleState {
    pub id: VehicleId,
    pub edge: EdgeId,
    /// Kilometers from the start of `edge`
    pub position: OrderedFloat<f64>,
    /// km/h
    pub speed: OrderedFloat<f64>,
}

impl VehicleState {
    pub fn new(id: VehicleId, edge: EdgeId, position: f64, speed: f64) -> Self {
        Self {
            id,
            edge,
            position: OrderedFloat(position),
            speed: OrderedFloat(speed),
        }
    }
}

/// Why a vehicle left the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The exit draw fired at the end of its edge
    Random,
    /// The node it reached has no usable outcomes
    Unroutable,
    /// The chosen (or current) edge id is not in the network
    UnknownEdge(EdgeId),
}

/// Result of advancing a vehicle by one tick
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleUpdateResult {
    /// Still on the same edge
    Moved(VehicleState),
    /// Reached the end of its edge and continued onto another
    Rerouted(VehicleState),
    Exited(ExitReason),
}

/// Advance a vehicle by one minute of travel, resolving the end of its edge
/// if it reaches or passes it. The returned state always satisfies
/// `0 <= position < edge length`.
pub fn advance_vehicle<R: Rng>(
    vehicle: &VehicleState,
    network: &RoadNetwork,
    exit_probability: f64,
    rng: &mut R,
) -> VehicleUpdateResult {
    let Some(edge) = network.edge(&vehicle.edge) else {
        warn!("{} is on unknown edge {}, dropping it", vehicle.id, vehicle.edge);
        return VehicleUpdateResult::Exited(ExitReason::UnknownEdge(vehicle.edge.clone()));
    };

    let candidate = vehicle.position.into_inner() + vehicle.speed.into_inner() / MINUTES_PER_HOUR;
    if candidate < edge.length() {
        return VehicleUpdateResult::Moved(VehicleState {
            position: OrderedFloat(candidate),
            ..vehicle.clone()
        });
    }

    let Some(node) = network.destination_of(&edge.id) else {
        warn!("{} reached unknown node {}, dropping it", vehicle.id, edge.to);
        return VehicleUpdateResult::Exited(ExitReason::Unroutable);
    };

    match route_at_node(node, exit_probability, rng) {
        RoutingDecision::Exit => {
            trace!("{} left the network at {}", vehicle.id, node.id);
            VehicleUpdateResult::Exited(ExitReason::Random)
        }
        RoutingDecision::NoOutcomes => {
            warn!(
                "{} reached {} which has no usable outcomes, forcing exit",
                vehicle.id, node.id
            );
            VehicleUpdateResult::Exited(ExitReason::Unroutable)
        }
        RoutingDecision::Continue(next_id) => match network.edge(&next_id) {
            Some(next) => {
                trace!("{} continues from {} onto {}", vehicle.id, edge.id, next.id);
                VehicleUpdateResult::Rerouted(VehicleState::new(
                    vehicle.id,
                    next.id.clone(),
                    0.0,
                    vehicle.speed.into_inner().min(next.speed_limit),
                ))
            }
            None => {
                warn!(
                    "{} was routed from {} to unknown edge {}, dropping it",
                    vehicle.id, node.id, next_id
                );
                VehicleUpdateResult::Exited(ExitReason::UnknownEdge(next_id))
            }
        },
    }
}

/// Immutable snapshot of every live vehicle at one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadNetworkState {
    pub timestamp: usize,
    vehicles: BTreeMap<VehicleId, VehicleState>,
}

impl RoadNetworkState {
    pub fn new(timestamp: usize, vehicles: impl IntoIterator<Item = VehicleState>) -> Self {
        Self {
            timestamp,
            vehicles: vehicles.into_iter().map(|v| (v.id, v)).collect(),
        }
    }

    /// Vehicles in ascending id order
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleState> {
        self.vehicles.values()
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&VehicleState> {
        self.vehicles.get(&id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicles_on_edge<'a>(
        &'a self,
        edge: &'a EdgeId,
    ) -> impl Iterator<Item = &'a VehicleState> {
        self.vehicles.values().filter(move |v| v.edge == *edge)
    }
}

//! Standalone road flow simulation module
//!
//! Network model, injection configuration and the stepping engine. Nothing
//! here performs I/O beyond logging.

mod engine;
mod error;
mod injection;
mod road_network;
mod routing;
mod scenario;
mod types;
mod vehicle;

pub use engine::{simulate, SimConfig, SimEngine, SimulationStats};
pub use error::SimError;
pub use injection::{sample_poisson, RoadNetworkWithInjection, VehicleInjection};
pub use road_network::{Edge, Node, RoadNetwork};
pub use routing::{choose_weighted, route_at_node, RoutingDecision};
pub use scenario::demo_network;
pub use types::{
    EdgeId, NodeId, Road, SimId, VehicleId, VehicleType, DEFAULT_EXIT_PROBABILITY,
    MINUTES_PER_HOUR,
};
pub use vehicle::{advance_vehicle, ExitReason, RoadNetworkState, VehicleState, VehicleUpdateResult};

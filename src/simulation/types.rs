//! Core types for the road flow simulation

use std::fmt;

/// Travel increments per simulated hour. Each tick advances a vehicle by
/// one minute of travel at its speed in km/h. Fixed unit convention.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Probability that a vehicle leaves the network on reaching the end of an edge
pub const DEFAULT_EXIT_PROBABILITY: f64 = 0.2;

/// A unique identifier for simulation entities
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimId(pub usize);

/// A wrapper type for node IDs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub String);

/// A wrapper type for edge IDs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub String);

/// A wrapper type for vehicle IDs, assigned from a per-engine counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleId(pub SimId);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle-{}", self.0 .0)
    }
}

/// Type of vehicle in the simulation.
/// Carried through injection but does not change movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleType {
    #[default]
    Car,
    Truck,
}

/// The physical road an edge runs over
#[derive(Debug, Clone, PartialEq)]
pub enum Road {
    Highway { id: String, length: f64, lanes: u32 },
    Street { id: String, length: f64 },
}

impl Road {
    pub fn highway(id: impl Into<String>, length: f64, lanes: u32) -> Self {
        Road::Highway {
            id: id.into(),
            length,
            lanes,
        }
    }

    pub fn street(id: impl Into<String>, length: f64) -> Self {
        Road::Street {
            id: id.into(),
            length,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Road::Highway { id, .. } | Road::Street { id, .. } => id,
        }
    }

    /// Length in kilometers
    pub fn length(&self) -> f64 {
        match self {
            Road::Highway { length, .. } | Road::Street { length, .. } => *length,
        }
    }

    /// Lane count; streets are single lane
    pub fn lanes(&self) -> u32 {
        match self {
            Road::Highway { lanes, .. } => *lanes,
            Road::Street { .. } => 1,
        }
    }
}

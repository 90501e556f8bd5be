//! Vehicle injection configuration and arrival sampling

use log::warn;
use rand::Rng;

use super::error::SimError;
use super::road_network::RoadNetwork;
use super::types::{EdgeId, VehicleType};

/// Largest mean handed to a single Knuth draw. exp(-mean) stays well clear
/// of underflow below this, larger means are split into independent chunks.
const MAX_KNUTH_MEAN: f64 = 30.0;

/// Stochastic source of new vehicles on one edge
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleInjection {
    pub edge: EdgeId,
    /// Mean arrivals per tick. Zero or negative means no arrivals.
    pub rate: f64,
    /// Initial speed in km/h
    pub speed: f64,
    /// Informational only, no time-of-day modulation is applied
    pub peak_hour: u32,
    /// Informational only, all vehicle types move the same way
    pub vehicle_type: VehicleType,
}

impl VehicleInjection {
    pub fn new(edge: &EdgeId, rate: f64, speed: f64) -> Self {
        Self {
            edge: edge.clone(),
            rate,
            speed,
            peak_hour: 0,
            vehicle_type: VehicleType::Car,
        }
    }

    pub fn with_peak_hour(mut self, peak_hour: u32) -> Self {
        self.peak_hour = peak_hour;
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = vehicle_type;
        self
    }

    /// Draws how many vehicles arrive this tick
    pub fn sample_arrivals<R: Rng>(&self, rng: &mut R) -> u64 {
        sample_poisson(self.rate, rng)
    }
}

/// A network together with the ordered list of injections feeding it
#[derive(Debug, Default)]
pub struct RoadNetworkWithInjection {
    pub network: RoadNetwork,
    pub injections: Vec<VehicleInjection>,
}

impl RoadNetworkWithInjection {
    pub fn new(network: RoadNetwork, injections: Vec<VehicleInjection>) -> Self {
        Self {
            network,
            injections,
        }
    }

    /// Rejects injections the engine could never honour
    pub fn validate(&self) -> Result<(), SimError> {
        for injection in &self.injections {
            if self.network.edge(&injection.edge).is_none() {
                return Err(SimError::UnknownInjectionEdge(injection.edge.clone()));
            }

            if !injection.rate.is_finite() {
                return Err(SimError::InvalidRate {
                    edge: injection.edge.clone(),
                    rate: injection.rate,
                });
            }

            if !injection.speed.is_finite() || injection.speed < 0.0 {
                return Err(SimError::InvalidSpeed {
                    edge: injection.edge.clone(),
                    speed: injection.speed,
                });
            }

            if injection.rate < 0.0 {
                warn!(
                    "Injection on {} has negative rate {}, treating it as no arrivals",
                    injection.edge, injection.rate
                );
            }
        }

        self.network.warn_unreachable_outcomes();
        Ok(())
    }
}

/// Draws a Poisson-distributed count with the given mean.
///
/// Non-positive means return 0 without consuming randomness.
pub fn sample_poisson<R: Rng>(mean: f64, rng: &mut R) -> u64 {
    if mean <= 0.0 || !mean.is_finite() {
        return 0;
    }

    let mut remaining = mean;
    let mut count = 0;
    while remaining > MAX_KNUTH_MEAN {
        count += knuth_poisson(MAX_KNUTH_MEAN, rng);
        remaining -= MAX_KNUTH_MEAN;
    }
    count + knuth_poisson(remaining, rng)
}

fn knuth_poisson<R: Rng>(mean: f64, rng: &mut R) -> u64 {
    let limit = (-mean).exp();
    let mut product: f64 = rng.random();
    let mut count = 0;
    while product > limit {
        count += 1;
        product *= rng.random::<f64>();
    }
    count
}

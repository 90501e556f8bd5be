//! Simulation engine
//!
//! Owns the live vehicle set and steps it forward one tick at a time,
//! recording a snapshot per tick.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use super::error::SimError;
use super::injection::RoadNetworkWithInjection;
use super::types::{EdgeId, SimId, VehicleId, DEFAULT_EXIT_PROBABILITY};
use super::vehicle::{
    advance_vehicle, ExitReason, RoadNetworkState, VehicleState, VehicleUpdateResult,
};

/// Engine settings
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Chance a vehicle leaves the network each time it reaches a node
    pub exit_probability: f64,
    /// Seed for the engine's random source; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            exit_probability: DEFAULT_EXIT_PROBABILITY,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_exit_probability(mut self, exit_probability: f64) -> Self {
        self.exit_probability = exit_probability;
        self
    }
}

/// Running counters for one simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub ticks: usize,
    pub injected: u64,
    /// Placed directly through `insert_vehicle`
    pub inserted: u64,
    pub rerouted: u64,
    pub exited_random: u64,
    pub exited_unroutable: u64,
    pub dropped_unknown_edge: u64,
}

impl SimulationStats {
    /// Every vehicle that has left the network, for any reason
    pub fn exited(&self) -> u64 {
        self.exited_random + self.exited_unroutable + self.dropped_unknown_edge
    }

    fn record_exit(&mut self, reason: &ExitReason) {
        match reason {
            ExitReason::Random => self.exited_random += 1,
            ExitReason::Unroutable => self.exited_unroutable += 1,
            ExitReason::UnknownEdge(_) => self.dropped_unknown_edge += 1,
        }
    }
}

/// The simulation engine.
///
/// Each engine is one independent run: it owns its random source and id
/// counter, and only reads the network and injections it was given.
pub struct SimEngine<'a, R: Rng = StdRng> {
    input: &'a RoadNetworkWithInjection,

    config: SimConfig,

    /// Live vehicles, keyed (and therefore iterated) by id
    vehicles: BTreeMap<VehicleId, VehicleState>,

    /// Next ID to assign
    next_id: usize,

    /// Index of the next tick to run
    tick: usize,

    rng: R,

    stats: SimulationStats,
}

impl<'a> SimEngine<'a, StdRng> {
    /// Create an engine seeded from `config.seed`, or from the OS if unset
    pub fn new(input: &'a RoadNetworkWithInjection, config: SimConfig) -> Result<Self, SimError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(input, config, rng)
    }
}

impl<'a, R: Rng> SimEngine<'a, R> {
    /// Create an engine drawing from the given random source.
    /// Configuration problems are reported here, before any tick runs.
    pub fn with_rng(
        input: &'a RoadNetworkWithInjection,
        config: SimConfig,
        rng: R,
    ) -> Result<Self, SimError> {
        if !(0.0..=1.0).contains(&config.exit_probability) {
            return Err(SimError::InvalidExitProbability(config.exit_probability));
        }
        input.validate()?;

        debug!(
            "Engine ready: {} nodes, {} edges, {} injections",
            input.network.node_count(),
            input.network.edge_count(),
            input.injections.len()
        );

        Ok(Self {
            input,
            config,
            vehicles: BTreeMap::new(),
            next_id: 0,
            tick: 0,
            rng,
            stats: SimulationStats::default(),
        })
    }

    fn next_vehicle_id(&mut self) -> VehicleId {
        let id = VehicleId(SimId(self.next_id));
        self.next_id += 1;
        id
    }

    /// Place a vehicle directly on an edge, outside the injection process
    pub fn insert_vehicle(
        &mut self,
        edge: &EdgeId,
        position: f64,
        speed: f64,
    ) -> Result<VehicleId, SimError> {
        let length = self
            .input
            .network
            .edge(edge)
            .ok_or_else(|| SimError::UnknownEdge(edge.clone()))?
            .length();

        if !(0.0..length).contains(&position) {
            return Err(SimError::InvalidVehiclePosition {
                edge: edge.clone(),
                position,
                length,
            });
        }

        if !speed.is_finite() || speed < 0.0 {
            return Err(SimError::InvalidSpeed {
                edge: edge.clone(),
                speed,
            });
        }

        let id = self.next_vehicle_id();
        self.vehicles
            .insert(id, VehicleState::new(id, edge.clone(), position, speed));
        self.stats.inserted += 1;
        Ok(id)
    }

    /// Sample every injection and build the new vehicles, in injection order
    fn inject(&mut self) -> Vec<VehicleState> {
        let input = self.input;
        let mut injected = Vec::new();
        for injection in &input.injections {
            let count = injection.sample_arrivals(&mut self.rng);
            if count > 0 {
                debug!(
                    "Tick {}: injecting {} {:?} onto {}",
                    self.tick, count, injection.vehicle_type, injection.edge
                );
            }
            for _ in 0..count {
                let id = self.next_vehicle_id();
                injected.push(VehicleState::new(
                    id,
                    injection.edge.clone(),
                    0.0,
                    injection.speed,
                ));
            }
        }
        self.stats.injected += injected.len() as u64;
        injected
    }

    /// Run one tick and return its snapshot.
    ///
    /// Injection is sampled first. Vehicles carried over from the previous
    /// tick then move; new arrivals are recorded at the start of their edge
    /// and begin moving on the next tick, so a vehicle injected at tick 0 is
    /// recorded at 0.0. Running injection first therefore only fixes the
    /// order of random draws (arrival counts before routing draws), not
    /// which vehicles move.
    pub fn step(&mut self) -> RoadNetworkState {
        let injected = self.inject();

        let current = std::mem::take(&mut self.vehicles);
        for vehicle in current.values() {
            match advance_vehicle(
                vehicle,
                &self.input.network,
                self.config.exit_probability,
                &mut self.rng,
            ) {
                VehicleUpdateResult::Moved(state) => {
                    self.vehicles.insert(state.id, state);
                }
                VehicleUpdateResult::Rerouted(state) => {
                    self.stats.rerouted += 1;
                    self.vehicles.insert(state.id, state);
                }
                VehicleUpdateResult::Exited(reason) => self.stats.record_exit(&reason),
            }
        }

        for vehicle in injected {
            self.vehicles.insert(vehicle.id, vehicle);
        }

        let state = RoadNetworkState::new(self.tick, self.vehicles.values().cloned());
        debug!("Tick {}: {} vehicles", self.tick, state.vehicle_count());

        self.tick += 1;
        self.stats.ticks += 1;
        state
    }

    /// Run `tick_count` ticks, returning one snapshot per tick
    pub fn simulate(mut self, tick_count: usize) -> Vec<RoadNetworkState> {
        info!("Simulating {} ticks", tick_count);
        (0..tick_count).map(|_| self.step()).collect()
    }

    /// Live vehicles in ascending id order
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleState> {
        self.vehicles.values()
    }

    /// Index of the next tick to run
    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

/// Run a fresh simulation over `input` for `tick_count` ticks
pub fn simulate(
    input: &RoadNetworkWithInjection,
    tick_count: usize,
    config: SimConfig,
) -> Result<Vec<RoadNetworkState>, SimError> {
    Ok(SimEngine::new(input, config)?.simulate(tick_count))
}

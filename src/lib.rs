//! Road Flow Simulation Library
//!
//! Discrete, time-stepped stochastic simulation of vehicles moving over a
//! small directed road network.

pub mod report;
pub mod simulation;

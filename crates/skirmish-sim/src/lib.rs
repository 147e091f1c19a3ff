//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs the per-frame unit pipeline
//! (update units → resolve collisions → reap dead), and produces
//! GameStateSnapshots for the presentation shell.

pub mod engine;
pub mod roster;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;

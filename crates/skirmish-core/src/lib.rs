//! Core types and definitions for the SKIRMISH simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the unit archetype table, components, commands, state snapshots,
//! events, and constants. It holds no engine logic and has no
//! dependency on any runtime or presentation framework.

pub mod archetypes;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

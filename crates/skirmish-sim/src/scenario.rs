//! Scenario definitions: built-in battles and TOML-loaded ones.
//!
//! A scenario lists spawns in order (unit ids are assigned 0, 1, 2, ... in
//! that order on a fresh engine) and the opening orders queued before the
//! first advance.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use skirmish_core::commands::{AttackTarget, PlayerCommand};
use skirmish_core::constants::{
    SKIRMISH_GRID_COLUMNS, SKIRMISH_GRID_ORIGIN, SKIRMISH_GRID_SPACING, SKIRMISH_MARINE_COUNT,
    SKIRMISH_ZEALOT_POSITIONS,
};
use skirmish_core::enums::UnitKind;
use skirmish_core::types::{Side, UnitId, Vec2};

use crate::engine::{SimConfig, SimulationEngine};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown scenario: {0}")]
    Unknown(String),
    #[error("invalid scenario: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Built-in scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// 15 Marines against 2 Zealots.
    Skirmish,
    /// One Marine against one Zealot, collisions off.
    Duel,
}

impl FromStr for ScenarioId {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "skirmish" => Ok(ScenarioId::Skirmish),
            "duel" => Ok(ScenarioId::Duel),
            _ => Err(ScenarioError::Unknown(s.to_string())),
        }
    }
}

/// One unit to place at start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSpawn {
    pub kind: UnitKind,
    pub side: Side,
    pub position: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub config: SimConfig,
    pub units: Vec<UnitSpawn>,
    #[serde(default)]
    pub orders: Vec<PlayerCommand>,
}

impl Scenario {
    pub fn build(id: ScenarioId) -> Self {
        match id {
            ScenarioId::Skirmish => build_skirmish(),
            ScenarioId::Duel => build_duel(),
        }
    }

    /// Parse and validate a TOML scenario.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.units.is_empty() {
            return Err(ScenarioError::Invalid(format!(
                "scenario '{}' has no units",
                self.name
            )));
        }
        for (index, spawn) in self.units.iter().enumerate() {
            if !spawn.position.is_finite() {
                return Err(ScenarioError::Invalid(format!(
                    "unit {index} has a non-finite position"
                )));
            }
        }
        let spawned = self.units.len() as u32;
        for order in &self.orders {
            if let Some(id) = referenced_units(order).find(|id| id.0 >= spawned) {
                return Err(ScenarioError::Invalid(format!(
                    "order refers to {id}, but only {spawned} units are spawned"
                )));
            }
        }
        Ok(())
    }

    /// Build an engine with every unit spawned in listed order and the
    /// opening orders queued for the first advance.
    pub fn instantiate(&self) -> SimulationEngine {
        let mut engine = SimulationEngine::new(self.config);
        for spawn in &self.units {
            engine.spawn(spawn.kind, spawn.side, spawn.position);
        }
        engine.queue_commands(self.orders.iter().cloned());
        tracing::debug!(
            scenario = %self.name,
            units = self.units.len(),
            orders = self.orders.len(),
            "scenario instantiated"
        );
        engine
    }
}

/// Every unit id a command mentions, including attack targets.
fn referenced_units(order: &PlayerCommand) -> Box<dyn Iterator<Item = UnitId> + '_> {
    match order {
        PlayerCommand::Move { units, .. }
        | PlayerCommand::Stop { units }
        | PlayerCommand::Hold { units }
        | PlayerCommand::Select { units } => Box::new(units.iter().copied()),
        PlayerCommand::Attack { units, target } => {
            let target = match target {
                AttackTarget::Unit(id) => Some(*id),
                AttackTarget::Point(_) => None,
            };
            Box::new(units.iter().copied().chain(target))
        }
        PlayerCommand::AttackNearest { .. }
        | PlayerCommand::SelectInRect { .. }
        | PlayerCommand::ClearSelection => Box::new(std::iter::empty()),
    }
}

/// Skirmish: a 5-wide Marine block in the top-left, two Zealots to the east.
fn build_skirmish() -> Scenario {
    let (origin_x, origin_y) = SKIRMISH_GRID_ORIGIN;
    let mut units: Vec<UnitSpawn> = (0..SKIRMISH_MARINE_COUNT)
        .map(|i| {
            let col = (i % SKIRMISH_GRID_COLUMNS) as f64;
            let row = (i / SKIRMISH_GRID_COLUMNS) as f64;
            UnitSpawn {
                kind: UnitKind::Marine,
                side: Side(0),
                position: Vec2::new(
                    origin_x + SKIRMISH_GRID_SPACING * col,
                    origin_y + SKIRMISH_GRID_SPACING * row,
                ),
            }
        })
        .collect();
    units.extend(SKIRMISH_ZEALOT_POSITIONS.iter().map(|&(x, y)| UnitSpawn {
        kind: UnitKind::Zealot,
        side: Side(1),
        position: Vec2::new(x, y),
    }));

    Scenario {
        name: "Skirmish".to_string(),
        config: SimConfig::default(),
        units,
        orders: vec![PlayerCommand::AttackNearest { side: Side(0) }],
    }
}

/// Duel: Marine at the origin, Zealot 50 to the east charging it.
fn build_duel() -> Scenario {
    Scenario {
        name: "Duel".to_string(),
        config: SimConfig {
            resolve_collisions: false,
        },
        units: vec![
            UnitSpawn {
                kind: UnitKind::Marine,
                side: Side(0),
                position: Vec2::ZERO,
            },
            UnitSpawn {
                kind: UnitKind::Zealot,
                side: Side(1),
                position: Vec2::new(50.0, 0.0),
            },
        ],
        orders: vec![PlayerCommand::Attack {
            units: vec![UnitId(1)],
            target: AttackTarget::Unit(UnitId(0)),
        }],
    }
}

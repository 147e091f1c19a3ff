//! Game state snapshot: the complete visible state handed to the shell
//! after each `advance`.

use serde::{Deserialize, Serialize};

use crate::enums::{Outcome, Stance, UnitKind};
use crate::events::CombatEvent;
use crate::types::{Side, SimTime, UnitId, Vec2};

/// Complete game state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    /// Live units in roster (spawn) order.
    pub units: Vec<UnitView>,
    /// Live-unit count for every side ever spawned, ascending by side.
    pub sides: Vec<SideView>,
    pub outcome: Outcome,
    /// Events of the tick that produced this snapshot.
    pub events: Vec<CombatEvent>,
}

/// A unit as drawn by the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub kind: UnitKind,
    pub side: Side,
    pub position: Vec2,
    /// Target position of the current movement order.
    pub destination: Vec2,
    pub health: f64,
    pub max_health: f64,
    pub shield: f64,
    pub max_shield: f64,
    pub selected: bool,
    pub attack_target: Option<UnitId>,
    pub stance: Stance,
}

/// Per-side headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    pub side: Side,
    pub live_units: u32,
}

impl GameStateSnapshot {
    /// Live units of the given side (0 for sides never spawned).
    pub fn live_count(&self, side: Side) -> u32 {
        self.sides
            .iter()
            .find(|s| s.side == side)
            .map(|s| s.live_units)
            .unwrap_or(0)
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitView> {
        self.units.iter().find(|u| u.id == id)
    }
}

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Side;

/// Unit kind. Indexes the static archetype table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Ranged infantry, no shield.
    Marine,
    /// Shielded melee infantry.
    Zealot,
    /// Fast, fragile melee.
    Zergling,
}

impl UnitKind {
    /// Every kind, in table order.
    pub const ALL: [UnitKind; 3] = [UnitKind::Marine, UnitKind::Zealot, UnitKind::Zergling];
}

/// Standing behaviour of a unit between orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    /// Moves on orders, pursues its attack target, auto-acquires enemies in range.
    #[default]
    Normal,
    /// Stays put and holds fire until given a new move or attack order.
    Hold,
}

/// Result of the battle so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Outcome {
    /// Two or more sides still have live units.
    #[default]
    InProgress,
    /// Exactly one side has live units left.
    Victory { side: Side },
    /// No side has live units left.
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Victory { side } => Some(*side),
            _ => None,
        }
    }
}

//! Player commands sent from the presentation shell to the simulation.
//!
//! Commands are applied either immediately or at the next `advance`
//! boundary. Unknown or dead unit ids are ignored; an empty unit list is a
//! no-op.

use serde::{Deserialize, Serialize};

use crate::types::{Side, UnitId, Vec2};

/// What an attack order is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum AttackTarget {
    /// A specific unit.
    Unit(UnitId),
    /// A point on the field, resolved to the first unit under it.
    Point(Vec2),
}

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Orders ---
    /// Move straight to a destination, dropping any attack target.
    Move { units: Vec<UnitId>, destination: Vec2 },
    /// Attack a unit, or move to the point when there is no enemy there.
    Attack {
        units: Vec<UnitId>,
        target: AttackTarget,
    },
    /// Order every live unit of a side to attack its own nearest enemy.
    AttackNearest { side: Side },
    /// Drop orders and stand still.
    Stop { units: Vec<UnitId> },
    /// Drop orders, stand still, and hold fire.
    Hold { units: Vec<UnitId> },

    // --- Selection ---
    /// Replace the selection with the given units.
    Select { units: Vec<UnitId> },
    /// Replace the selection with the live units of `side` strictly inside
    /// the rectangle spanned by the two corners.
    SelectInRect {
        side: Side,
        corner_a: Vec2,
        corner_b: Vec2,
    },
    /// Deselect everything.
    ClearSelection,
}

//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::enums::{Stance, UnitKind};
use crate::types::{Side, UnitId, Vec2};

/// Who a unit is. Never changes after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UnitId,
    pub kind: UnitKind,
    pub side: Side,
}

/// Centre of the unit's collision circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Health and shield pools.
///
/// `health <= 0` means dead. Shield absorbs damage before health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: f64,
    pub shield: f64,
}

/// Attack readiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Remaining reference frames until the next attack. Floored at 0.
    pub cooldown: f64,
}

/// Where the unit is heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Final movement target of the current order.
    pub destination: Vec2,
    /// Remaining waypoints, front first. Straight-line movement keeps at
    /// most one entry: the destination itself.
    pub path: VecDeque<Vec2>,
}

/// Standing orders of a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orders {
    /// Weak reference to the explicit attack target. Must be re-resolved for
    /// liveness every time it is read.
    pub attack_target: Option<UnitId>,
    pub stance: Stance,
}

/// Presentation-side selection flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub selected: bool,
}

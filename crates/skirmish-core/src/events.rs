//! Events emitted by the simulation for UI feedback and reporting.

use serde::{Deserialize, Serialize};

use crate::enums::UnitKind;
use crate::types::{Side, UnitId};

/// Combat events produced during one `advance` pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// An attack landed. `health` and `shield` are the target's pools after it.
    Attack {
        attacker: UnitId,
        target: UnitId,
        damage: f64,
        health: f64,
        shield: f64,
    },
    /// A unit's health reached zero. It is despawned at the end of the pass.
    UnitDestroyed {
        unit: UnitId,
        kind: UnitKind,
        side: Side,
        killer: UnitId,
    },
}

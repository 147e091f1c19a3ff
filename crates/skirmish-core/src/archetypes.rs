//! Static per-kind stat templates.
//!
//! The table is built at compile time and never mutated. All instances of a
//! kind share one `&'static UnitArchetype`.

use serde::Serialize;

use crate::enums::UnitKind;

/// Immutable stat template shared by every unit of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitArchetype {
    pub name: &'static str,
    pub max_health: f64,
    /// 0 when the kind has no shield.
    pub max_shield: f64,
    /// Length units per reference frame.
    pub movement_speed: f64,
    pub attack_power: f64,
    /// Centre-to-centre reach.
    pub attack_range: f64,
    /// Reference frames between attacks.
    pub attack_cooldown: f64,
    pub collision_radius: f64,
}

static ARCHETYPES: [UnitArchetype; 3] = [
    UnitArchetype {
        name: "Marine",
        max_health: 40.0,
        max_shield: 0.0,
        movement_speed: 3.5,
        attack_power: 6.0,
        attack_range: 120.0,
        attack_cooldown: 15.0,
        collision_radius: 16.0,
    },
    UnitArchetype {
        name: "Zealot",
        max_health: 100.0,
        max_shield: 60.0,
        movement_speed: 3.0,
        attack_power: 16.0,
        attack_range: 20.0,
        attack_cooldown: 22.0,
        collision_radius: 18.0,
    },
    UnitArchetype {
        name: "Zergling",
        max_health: 35.0,
        max_shield: 0.0,
        movement_speed: 4.5,
        attack_power: 5.0,
        attack_range: 15.0,
        attack_cooldown: 12.0,
        collision_radius: 14.0,
    },
];

impl UnitKind {
    /// Look up this kind's stat template.
    pub fn archetype(self) -> &'static UnitArchetype {
        match self {
            UnitKind::Marine => &ARCHETYPES[0],
            UnitKind::Zealot => &ARCHETYPES[1],
            UnitKind::Zergling => &ARCHETYPES[2],
        }
    }

    pub fn name(self) -> &'static str {
        self.archetype().name
    }
}

//! Per-frame unit update pass.
//!
//! Units are visited in roster order. Liveness is checked at each unit's
//! turn, so a unit killed earlier in the same pass neither acts nor shows up
//! in later units' target scans.

use hecs::{Entity, World};

use skirmish_core::components::Weapon;
use skirmish_core::constants::FRAME_RATE_REFERENCE;
use skirmish_core::events::CombatEvent;

use crate::roster::Roster;
use crate::systems::{combat, movement};

/// Run cooldown decay, movement and combat for every live unit.
pub fn run(world: &mut World, roster: &Roster, dt: f64, events: &mut Vec<CombatEvent>) {
    let frames = dt * FRAME_RATE_REFERENCE;

    for (_id, entity) in roster.order() {
        if !combat::is_alive(world, entity) {
            continue;
        }
        decay_cooldown(world, entity, frames);
        movement::step(world, entity, frames);
        combat::resolve(world, roster, entity, events);
    }
}

fn decay_cooldown(world: &mut World, entity: Entity, frames: f64) {
    if let Ok(mut weapon) = world.get::<&mut Weapon>(entity) {
        if weapon.cooldown > 0.0 {
            weapon.cooldown = (weapon.cooldown - frames).max(0.0);
        }
    }
}

//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};

use skirmish_core::components::{Identity, Movement, Orders, Position, Selection, Vitals};
use skirmish_core::enums::Outcome;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::{GameStateSnapshot, SideView, UnitView};
use skirmish_core::types::{Side, SimTime};

use crate::roster::Roster;
use crate::systems::combat;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    roster: &Roster,
    time: &SimTime,
    events: Vec<CombatEvent>,
) -> GameStateSnapshot {
    let sides = build_sides(world, roster);
    GameStateSnapshot {
        time: *time,
        units: build_units(world, roster),
        outcome: outcome_from_sides(&sides),
        sides,
        events,
    }
}

/// Views of every live unit, in roster order.
pub fn build_units(world: &World, roster: &Roster) -> Vec<UnitView> {
    roster
        .iter()
        .filter_map(|(_, entity)| unit_view(world, entity))
        .collect()
}

/// View of one unit, or `None` if it is missing or dead.
pub fn unit_view(world: &World, entity: Entity) -> Option<UnitView> {
    let vitals = *world.get::<&Vitals>(entity).ok()?;
    if vitals.health <= 0.0 {
        return None;
    }
    let identity = *world.get::<&Identity>(entity).ok()?;
    let position = world.get::<&Position>(entity).ok()?.0;
    let destination = world.get::<&Movement>(entity).ok()?.destination;
    let orders = *world.get::<&Orders>(entity).ok()?;
    let selected = world
        .get::<&Selection>(entity)
        .map(|s| s.selected)
        .unwrap_or(false);
    let stats = identity.kind.archetype();

    Some(UnitView {
        id: identity.id,
        kind: identity.kind,
        side: identity.side,
        position,
        destination,
        health: vitals.health,
        max_health: stats.max_health,
        shield: vitals.shield,
        max_shield: stats.max_shield,
        selected,
        attack_target: orders.attack_target,
        stance: orders.stance,
    })
}

/// Live-unit count for every side ever spawned, ascending by side.
pub fn build_sides(world: &World, roster: &Roster) -> Vec<SideView> {
    roster
        .sides()
        .map(|side| SideView {
            side,
            live_units: live_count(world, roster, side),
        })
        .collect()
}

pub fn live_count(world: &World, roster: &Roster, side: Side) -> u32 {
    roster
        .iter()
        .filter_map(|(_, entity)| combat::contact(world, entity))
        .filter(|contact| contact.side == side)
        .count() as u32
}

/// Battle outcome given per-side headcounts.
///
/// Fewer than two sides with live units ends the battle: one side left is a
/// victory, none left is a draw.
pub fn outcome_from_sides(sides: &[SideView]) -> Outcome {
    let mut standing = sides.iter().filter(|s| s.live_units > 0);
    match (standing.next(), standing.next()) {
        (Some(_), Some(_)) => Outcome::InProgress,
        (Some(last), None) => Outcome::Victory { side: last.side },
        (None, _) => Outcome::Draw,
    }
}

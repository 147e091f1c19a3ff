//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use skirmish_core::components::*;
use skirmish_core::enums::UnitKind;
use skirmish_core::types::{Side, UnitId, Vec2};

use crate::roster::Roster;

/// Spawn a unit at full health and shield, standing at `position` with no
/// orders, and index it in the roster.
pub fn spawn_unit(
    world: &mut World,
    roster: &mut Roster,
    kind: UnitKind,
    side: Side,
    position: Vec2,
) -> UnitId {
    let id = roster.allocate(side);
    let stats = kind.archetype();

    let entity = world.spawn((
        Identity { id, kind, side },
        Position(position),
        Vitals {
            health: stats.max_health,
            shield: stats.max_shield,
        },
        Weapon::default(),
        Movement {
            destination: position,
            path: Default::default(),
        },
        Orders::default(),
        Selection::default(),
    ));
    roster.insert(id, entity);

    tracing::trace!(unit = %id, %side, "spawned {}", kind.name());
    id
}

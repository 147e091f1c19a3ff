//! Cleanup system: despawns dead units and drops them from the roster.

use hecs::{Entity, World};

use skirmish_core::types::UnitId;

use crate::roster::Roster;
use crate::systems::combat;

/// Remove every unit with health ≤ 0. Returns how many were reaped.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    roster: &mut Roster,
    despawn_buffer: &mut Vec<(UnitId, Entity)>,
) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(
        roster
            .iter()
            .filter(|(_, entity)| !combat::is_alive(world, *entity)),
    );

    let reaped = despawn_buffer.len();
    for (id, entity) in despawn_buffer.drain(..) {
        roster.remove(id);
        let _ = world.despawn(entity);
        tracing::trace!(unit = %id, "despawned");
    }
    reaped
}

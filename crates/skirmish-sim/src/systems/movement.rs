//! Straight-line waypoint movement.
//!
//! A unit walks toward the front of its path at `movement_speed` per
//! reference frame. A waypoint closer than `WAYPOINT_ARRIVAL_RADIUS` is
//! popped instead of walked to, so the unit comes to rest there.

use hecs::{Entity, World};

use skirmish_core::components::{Identity, Movement, Position};
use skirmish_core::constants::WAYPOINT_ARRIVAL_RADIUS;
use skirmish_core::types::Vec2;

/// Move one unit for a step of `frames` reference frames (dt * 60).
pub fn step(world: &mut World, entity: Entity, frames: f64) {
    let Ok((identity, position, plan)) =
        world.query_one_mut::<(&Identity, &mut Position, &mut Movement)>(entity)
    else {
        return;
    };
    let Some(waypoint) = plan.path.front().copied() else {
        return;
    };

    let offset = waypoint - position.0;
    if offset.length() < WAYPOINT_ARRIVAL_RADIUS {
        plan.path.pop_front();
        return;
    }

    let stride = identity.kind.archetype().movement_speed * frames;
    position.0 += offset.normalize_or_zero() * stride;
}

/// Replace the path with a single waypoint at `destination`.
pub fn set_destination(plan: &mut Movement, destination: Vec2) {
    plan.destination = destination;
    plan.path.clear();
    plan.path.push_back(destination);
}

/// Drop the path and make the current position the destination.
pub fn halt(plan: &mut Movement, position: Vec2) {
    plan.destination = position;
    plan.path.clear();
}

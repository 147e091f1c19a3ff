//! Pairwise collision separation.
//!
//! One relaxation pass per frame over every unordered pair of live units.
//! Each overlapping pair is pushed apart by half the overlap each, along the
//! line between their centres. Corrections apply immediately, so later pairs
//! see the shifted positions. Dense clusters settle over several frames.

use hecs::{Entity, World};

use skirmish_core::components::{Identity, Position};
use skirmish_core::constants::DEGENERATE_SEPARATION_AXIS;
use skirmish_core::types::Vec2;

use crate::roster::Roster;
use crate::systems::combat;

struct Body {
    entity: Entity,
    position: Vec2,
    radius: f64,
}

/// Resolve overlaps between all live units.
pub fn run(world: &mut World, roster: &Roster) {
    let mut bodies = gather_bodies(world, roster);

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if let Some(push) = separation(a.position, a.radius, b.position, b.radius) {
                a.position += push;
                b.position -= push;
            }
        }
    }

    for body in bodies {
        if let Ok(mut position) = world.get::<&mut Position>(body.entity) {
            position.0 = body.position;
        }
    }
}

/// Correction to add to `a` (and subtract from `b`) for two overlapping
/// circles, or `None` when they do not overlap.
///
/// Coincident centres separate along the fixed `DEGENERATE_SEPARATION_AXIS`.
pub fn separation(a: Vec2, radius_a: f64, b: Vec2, radius_b: f64) -> Option<Vec2> {
    let offset = a - b;
    let distance = offset.length();
    let min_distance = radius_a + radius_b;
    if distance >= min_distance {
        return None;
    }

    let overlap = min_distance - distance;
    let axis = if distance > 0.0 {
        offset.normalize_or_zero()
    } else {
        DEGENERATE_SEPARATION_AXIS
    };
    Some(axis * (overlap * 0.5))
}

/// Sum of pairwise overlap depths across all live units.
pub fn total_overlap(world: &World, roster: &Roster) -> f64 {
    let bodies = gather_bodies(world, roster);
    let mut total = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let depth = a.radius + b.radius - a.position.distance(b.position);
            if depth > 0.0 {
                total += depth;
            }
        }
    }
    total
}

fn gather_bodies(world: &World, roster: &Roster) -> Vec<Body> {
    roster
        .iter()
        .filter(|(_, entity)| combat::is_alive(world, *entity))
        .filter_map(|(_, entity)| {
            let radius = world.get::<&Identity>(entity).ok()?.kind.archetype().collision_radius;
            let position = world.get::<&Position>(entity).ok()?.0;
            Some(Body {
                entity,
                position,
                radius,
            })
        })
        .collect()
}

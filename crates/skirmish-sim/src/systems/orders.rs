//! Order application for a single unit.
//!
//! These are the unit-level verbs the command handler maps player commands
//! onto. None of them fail: a missing entity is simply left alone.

use hecs::{Entity, World};

use skirmish_core::components::{Movement, Orders, Position, Selection};
use skirmish_core::enums::Stance;
use skirmish_core::types::Vec2;

use crate::systems::combat::Contact;
use crate::systems::movement;

/// Walk to `destination`. Supersedes any attack target.
pub fn move_to(world: &mut World, entity: Entity, destination: Vec2) {
    let Ok((plan, orders)) = world.query_one_mut::<(&mut Movement, &mut Orders)>(entity) else {
        return;
    };
    orders.attack_target = None;
    orders.stance = Stance::Normal;
    movement::set_destination(plan, destination);
}

/// Set (or clear, with `None`) the explicit attack target and pursue it.
///
/// Side is not checked here; the command handler only routes enemy
/// targets to this function.
pub fn attack(world: &mut World, entity: Entity, target: Option<&Contact>) {
    let Ok((plan, orders)) = world.query_one_mut::<(&mut Movement, &mut Orders)>(entity) else {
        return;
    };
    orders.attack_target = target.map(|t| t.id);
    orders.stance = Stance::Normal;
    if let Some(target) = target {
        movement::set_destination(plan, target.position);
    }
}

/// Drop every order and stand where the unit is.
pub fn stop(world: &mut World, entity: Entity) {
    stand(world, entity, Stance::Normal);
}

/// Like `stop`, and also hold fire until the next move or attack order.
pub fn hold(world: &mut World, entity: Entity) {
    stand(world, entity, Stance::Hold);
}

fn stand(world: &mut World, entity: Entity, stance: Stance) {
    let Ok((position, plan, orders)) =
        world.query_one_mut::<(&Position, &mut Movement, &mut Orders)>(entity)
    else {
        return;
    };
    orders.attack_target = None;
    orders.stance = stance;
    movement::halt(plan, position.0);
}

pub fn set_selected(world: &mut World, entity: Entity, selected: bool) {
    if let Ok(mut selection) = world.get::<&mut Selection>(entity) {
        selection.selected = selected;
    }
}

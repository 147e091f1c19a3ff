//! Target acquisition and damage resolution.
//!
//! Explicit attack targets are weak references (ids). Every read goes
//! through `resolve_live`, which treats a despawned or dead unit as no
//! target at all.

use hecs::{Entity, World};

use skirmish_core::components::{Identity, Movement, Orders, Position, Vitals, Weapon};
use skirmish_core::enums::{Stance, UnitKind};
use skirmish_core::events::CombatEvent;
use skirmish_core::types::{Side, UnitId, Vec2};

use crate::roster::Roster;
use crate::systems::movement;

/// A live unit as seen by someone targeting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: UnitId,
    pub entity: Entity,
    pub kind: UnitKind,
    pub side: Side,
    pub position: Vec2,
}

/// The acting unit's state, copied out before it touches the world.
#[derive(Debug, Clone, Copy)]
struct Actor {
    identity: Identity,
    position: Vec2,
    cooldown: f64,
    orders: Orders,
}

pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Vitals>(entity)
        .map(|vitals| vitals.health > 0.0)
        .unwrap_or(false)
}

/// Read a unit as a contact, or `None` if it is missing or dead.
pub fn contact(world: &World, entity: Entity) -> Option<Contact> {
    if !is_alive(world, entity) {
        return None;
    }
    let identity = *world.get::<&Identity>(entity).ok()?;
    let position = world.get::<&Position>(entity).ok()?.0;
    Some(Contact {
        id: identity.id,
        entity,
        kind: identity.kind,
        side: identity.side,
        position,
    })
}

/// Resolve a weak unit reference.
pub fn resolve_live(world: &World, roster: &Roster, id: UnitId) -> Option<Contact> {
    contact(world, roster.entity(id)?)
}

/// Nearest live unit not on `side`, with its distance from `origin`.
///
/// Linear scan in roster order; on equal distances the earlier unit wins.
pub fn find_nearest_enemy(
    world: &World,
    roster: &Roster,
    side: Side,
    origin: Vec2,
) -> Option<(Contact, f64)> {
    let mut nearest: Option<(Contact, f64)> = None;
    for (_id, entity) in roster.iter() {
        let Some(candidate) = contact(world, entity) else {
            continue;
        };
        if candidate.side == side {
            continue;
        }
        let distance = origin.distance(candidate.position);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((candidate, distance));
        }
    }
    nearest
}

/// Apply `damage` shield-first. Overflow past the shield carries into
/// health in the same hit. Health is floored at 0.
pub fn apply_damage(vitals: &mut Vitals, damage: f64) {
    if vitals.shield > 0.0 {
        vitals.shield -= damage;
        if vitals.shield < 0.0 {
            vitals.health += vitals.shield;
            vitals.shield = 0.0;
        }
    } else {
        vitals.health -= damage;
    }
    vitals.health = vitals.health.max(0.0);
}

/// Combat step for one live unit, run after its movement.
pub fn resolve(world: &mut World, roster: &Roster, entity: Entity, events: &mut Vec<CombatEvent>) {
    let Some(actor) = read_actor(world, entity) else {
        return;
    };
    let stats = actor.identity.kind.archetype();

    if let Some(target_id) = actor.orders.attack_target {
        match resolve_live(world, roster, target_id) {
            Some(target) => {
                let distance = actor.position.distance(target.position);
                if distance > stats.attack_range {
                    // Out of reach: re-aim the pursuit at where the target is now.
                    if let Ok(mut plan) = world.get::<&mut Movement>(entity) {
                        movement::set_destination(&mut plan, target.position);
                    }
                } else if actor.cooldown <= 0.0 {
                    strike(world, entity, &actor.identity, &target, events);
                }
                return;
            }
            None => {
                if let Ok(mut orders) = world.get::<&mut Orders>(entity) {
                    orders.attack_target = None;
                }
            }
        }
    }

    if actor.orders.stance == Stance::Hold {
        return;
    }

    if let Some((enemy, distance)) =
        find_nearest_enemy(world, roster, actor.identity.side, actor.position)
    {
        if distance <= stats.attack_range && actor.cooldown <= 0.0 {
            strike(world, entity, &actor.identity, &enemy, events);
        }
    }
}

fn read_actor(world: &World, entity: Entity) -> Option<Actor> {
    Some(Actor {
        identity: *world.get::<&Identity>(entity).ok()?,
        position: world.get::<&Position>(entity).ok()?.0,
        cooldown: world.get::<&Weapon>(entity).ok()?.cooldown,
        orders: *world.get::<&Orders>(entity).ok()?,
    })
}

/// Land one attack on `target` and restart the attacker's cooldown.
fn strike(
    world: &mut World,
    attacker: Entity,
    identity: &Identity,
    target: &Contact,
    events: &mut Vec<CombatEvent>,
) {
    let stats = identity.kind.archetype();

    let after = {
        let Ok(mut vitals) = world.get::<&mut Vitals>(target.entity) else {
            return;
        };
        apply_damage(&mut vitals, stats.attack_power);
        *vitals
    };
    if let Ok(mut weapon) = world.get::<&mut Weapon>(attacker) {
        weapon.cooldown = stats.attack_cooldown;
    }

    tracing::debug!(
        attacker = %identity.id,
        target = %target.id,
        health = after.health,
        shield = after.shield,
        "{} attacks {}",
        identity.kind.name(),
        target.kind.name()
    );
    events.push(CombatEvent::Attack {
        attacker: identity.id,
        target: target.id,
        damage: stats.attack_power,
        health: after.health,
        shield: after.shield,
    });

    if after.health <= 0.0 {
        tracing::info!(
            unit = %target.id,
            killer = %identity.id,
            "{} of {} destroyed",
            target.kind.name(),
            target.side
        );
        events.push(CombatEvent::UnitDestroyed {
            unit: target.id,
            kind: target.kind,
            side: target.side,
            killer: identity.id,
        });
    }
}

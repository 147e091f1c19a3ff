//! Ordered index of live units.
//!
//! The roster maps each `UnitId` to its hecs entity. Its iteration order
//! (ascending id, which is spawn order) is the collection order every system
//! walks in. Attack targets are stored as ids and resolved through here, so a
//! despawned unit simply stops resolving.

use std::collections::{BTreeMap, BTreeSet};

use hecs::Entity;

use skirmish_core::types::{Side, UnitId};

#[derive(Debug, Default)]
pub struct Roster {
    entities: BTreeMap<UnitId, Entity>,
    sides: BTreeSet<Side>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next unit id and record the side as a participant.
    pub fn allocate(&mut self, side: Side) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        self.sides.insert(side);
        id
    }

    pub fn insert(&mut self, id: UnitId, entity: Entity) {
        self.entities.insert(id, entity);
    }

    pub fn remove(&mut self, id: UnitId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Resolve a unit id. `None` once the unit has been despawned.
    pub fn entity(&self, id: UnitId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    /// All indexed units in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, Entity)> + '_ {
        self.entities.iter().map(|(id, entity)| (*id, *entity))
    }

    /// Owned copy of the collection order, for passes that mutate the world.
    pub fn order(&self) -> Vec<(UnitId, Entity)> {
        self.iter().collect()
    }

    /// Every side that has ever had a unit spawned, ascending.
    pub fn sides(&self) -> impl Iterator<Item = Side> + '_ {
        self.sides.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

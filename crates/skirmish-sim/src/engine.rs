//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the unit roster, applies
//! player commands, runs the per-frame pipeline, and produces
//! `GameStateSnapshot`s. Completely headless, so it can be driven by any
//! shell and tested deterministically.

use std::collections::VecDeque;

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use skirmish_core::commands::{AttackTarget, PlayerCommand};
use skirmish_core::components::{Identity, Selection};
use skirmish_core::enums::{Outcome, UnitKind};
use skirmish_core::events::CombatEvent;
use skirmish_core::state::{GameStateSnapshot, UnitView};
use skirmish_core::types::{Side, SimTime, UnitId, Vec2};

use crate::roster::Roster;
use crate::systems;
use crate::systems::combat::{self, Contact};
use crate::systems::orders;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Run the collision pass each tick. Off only for combat-math harnesses.
    pub resolve_collisions: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            resolve_collisions: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    roster: Roster,
    time: SimTime,
    config: SimConfig,
    outcome: Outcome,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<(UnitId, Entity)>,
    events: Vec<CombatEvent>,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl SimulationEngine {
    /// Create a new, empty simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            roster: Roster::new(),
            time: SimTime::default(),
            config,
            outcome: Outcome::Draw,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Spawn a unit at full health and return its id.
    pub fn spawn(&mut self, kind: UnitKind, side: Side, position: Vec2) -> UnitId {
        let id = world_setup::spawn_unit(&mut self.world, &mut self.roster, kind, side, position);
        self.outcome = self.outcome();
        id
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a player command right away, outside the tick boundary.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        self.handle_command(command);
    }

    /// Run exactly one pipeline pass of `dt` seconds and return the
    /// resulting snapshot.
    ///
    /// Queued commands are applied first. Then: update every live unit in
    /// roster order, resolve collisions, and despawn everything that died
    /// during the pass.
    pub fn advance(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = dt.max(0.0);
        self.process_commands();
        self.run_systems(dt);
        self.time.advance(dt);

        let outcome = self.outcome();
        if outcome != self.outcome {
            tracing::info!(tick = self.time.tick, ?outcome, "outcome changed");
            self.outcome = outcome;
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.roster, &self.time, events)
    }

    /// Snapshot of the current state without advancing. Carries no events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.roster, &self.time, Vec::new())
    }

    // --- Queries ---

    /// Every live unit, in roster order.
    pub fn units(&self) -> Vec<UnitView> {
        systems::snapshot::build_units(&self.world, &self.roster)
    }

    pub fn unit(&self, id: UnitId) -> Option<UnitView> {
        systems::snapshot::unit_view(&self.world, self.roster.entity(id)?)
    }

    pub fn live_count(&self, side: Side) -> u32 {
        systems::snapshot::live_count(&self.world, &self.roster, side)
    }

    pub fn outcome(&self) -> Outcome {
        let sides = systems::snapshot::build_sides(&self.world, &self.roster);
        systems::snapshot::outcome_from_sides(&sides)
    }

    /// True once fewer than two sides have live units.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// The surviving side, once the battle is won. `None` while in progress
    /// and on a draw.
    pub fn winning_side(&self) -> Option<Side> {
        self.outcome().winner()
    }

    /// First live unit in roster order whose collision circle contains `point`.
    pub fn unit_at(&self, point: Vec2) -> Option<UnitId> {
        self.unit_contact_at(point).map(|c| c.id)
    }

    pub fn selected_units(&self) -> Vec<UnitId> {
        self.units()
            .into_iter()
            .filter(|u| u.selected)
            .map(|u| u.id)
            .collect()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> SimConfig {
        self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the unit roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable world access for tests that need to stage exact states.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    // --- Command handling ---

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        tracing::trace!(?command, "handling command");
        match command {
            PlayerCommand::Move { units, destination } => {
                for entity in self.live_entities(&units) {
                    orders::move_to(&mut self.world, entity, destination);
                }
            }
            PlayerCommand::Attack { units, target } => {
                let (contact, fallback) = match target {
                    AttackTarget::Unit(id) => {
                        let contact = combat::resolve_live(&self.world, &self.roster, id);
                        (contact, contact.map(|c| c.position))
                    }
                    AttackTarget::Point(point) => (self.unit_contact_at(point), Some(point)),
                };
                for entity in self.live_entities(&units) {
                    self.order_attack(entity, contact, fallback);
                }
            }
            PlayerCommand::AttackNearest { side } => {
                for (_id, entity) in self.roster.order() {
                    let Some(me) = combat::contact(&self.world, entity) else {
                        continue;
                    };
                    if me.side != side {
                        continue;
                    }
                    if let Some((enemy, _)) =
                        combat::find_nearest_enemy(&self.world, &self.roster, side, me.position)
                    {
                        orders::attack(&mut self.world, entity, Some(&enemy));
                    }
                }
            }
            PlayerCommand::Stop { units } => {
                for entity in self.live_entities(&units) {
                    orders::stop(&mut self.world, entity);
                }
            }
            PlayerCommand::Hold { units } => {
                for entity in self.live_entities(&units) {
                    orders::hold(&mut self.world, entity);
                }
            }
            PlayerCommand::Select { units } => {
                self.clear_selection();
                for entity in self.live_entities(&units) {
                    orders::set_selected(&mut self.world, entity, true);
                }
            }
            PlayerCommand::SelectInRect {
                side,
                corner_a,
                corner_b,
            } => {
                self.clear_selection();
                let min = corner_a.min(corner_b);
                let max = corner_a.max(corner_b);
                for (_id, entity) in self.roster.order() {
                    let Some(unit) = combat::contact(&self.world, entity) else {
                        continue;
                    };
                    let p = unit.position;
                    let inside = p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y;
                    if unit.side == side && inside {
                        orders::set_selected(&mut self.world, entity, true);
                    }
                }
            }
            PlayerCommand::ClearSelection => self.clear_selection(),
        }
    }

    /// Route one unit's attack order. Enemies are attacked; anything else
    /// (empty ground, a friendly unit) becomes a move to `fallback`.
    fn order_attack(&mut self, entity: Entity, target: Option<Contact>, fallback: Option<Vec2>) {
        let Ok(side) = self.world.get::<&Identity>(entity).map(|i| i.side) else {
            return;
        };
        match target {
            Some(target) if target.side != side => {
                orders::attack(&mut self.world, entity, Some(&target));
            }
            _ => {
                if let Some(point) = fallback {
                    orders::move_to(&mut self.world, entity, point);
                }
            }
        }
    }

    /// Entities of the listed ids that are still alive. Unknown ids are dropped.
    fn live_entities(&self, ids: &[UnitId]) -> Vec<Entity> {
        ids.iter()
            .filter_map(|id| self.roster.entity(*id))
            .filter(|entity| combat::is_alive(&self.world, *entity))
            .collect()
    }

    fn unit_contact_at(&self, point: Vec2) -> Option<Contact> {
        self.roster.iter().find_map(|(_, entity)| {
            let contact = combat::contact(&self.world, entity)?;
            let radius = contact.kind.archetype().collision_radius;
            (contact.position.distance(point) <= radius).then_some(contact)
        })
    }

    fn clear_selection(&mut self) {
        for (_entity, selection) in self.world.query_mut::<&mut Selection>() {
            selection.selected = false;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Unit updates (cooldown, movement, combat)
        systems::units::run(&mut self.world, &self.roster, dt, &mut self.events);
        // 2. Collision separation
        if self.config.resolve_collisions {
            systems::collision::run(&mut self.world, &self.roster);
        }
        // 3. Reap the dead
        let reaped = systems::cleanup::run(&mut self.world, &mut self.roster, &mut self.despawn_buffer);
        if reaped > 0 {
            tracing::debug!(tick = self.time.tick, reaped, "removed dead units");
        }
    }
}

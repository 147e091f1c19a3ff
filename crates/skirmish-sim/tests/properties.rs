//! Property tests: vitals stay in bounds and the roster stays ordered in
//! arbitrary small battles.

use proptest::prelude::*;

use skirmish_sim::core::commands::PlayerCommand;
use skirmish_sim::core::constants::DEFAULT_DT;
use skirmish_sim::core::enums::UnitKind;
use skirmish_sim::core::types::{Side, Vec2};
use skirmish_sim::{SimConfig, SimulationEngine};

fn kind_strategy() -> impl Strategy<Value = UnitKind> {
    prop_oneof![
        Just(UnitKind::Marine),
        Just(UnitKind::Zealot),
        Just(UnitKind::Zergling),
    ]
}

fn spawn_strategy() -> impl Strategy<Value = (UnitKind, u32, f64, f64)> {
    (kind_strategy(), 0u32..3, 0.0f64..200.0, 0.0f64..200.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vitals_stay_within_bounds(
        spawns in prop::collection::vec(spawn_strategy(), 2..8),
        collisions in any::<bool>(),
        frames in 1usize..240,
    ) {
        let mut engine = SimulationEngine::new(SimConfig { resolve_collisions: collisions });
        for &(kind, side, x, y) in &spawns {
            engine.spawn(kind, Side(side), Vec2::new(x, y));
        }
        for side in 0..3 {
            engine.queue_command(PlayerCommand::AttackNearest { side: Side(side) });
        }

        for _ in 0..frames {
            let snap = engine.advance(DEFAULT_DT);
            for unit in &snap.units {
                prop_assert!(unit.health > 0.0 && unit.health <= unit.max_health);
                prop_assert!(unit.shield >= 0.0 && unit.shield <= unit.max_shield);
                prop_assert!(unit.position.is_finite());
            }
            prop_assert!(snap.units.windows(2).all(|w| w[0].id < w[1].id));
            let live: u32 = snap.sides.iter().map(|s| s.live_units).sum();
            prop_assert_eq!(live as usize, snap.units.len());
        }
    }

    #[test]
    fn dead_units_never_return(
        spawns in prop::collection::vec(spawn_strategy(), 2..8),
        frames in 1usize..240,
    ) {
        let mut engine = SimulationEngine::default();
        for &(kind, side, x, y) in &spawns {
            engine.spawn(kind, Side(side), Vec2::new(x, y));
        }
        for side in 0..3 {
            engine.queue_command(PlayerCommand::AttackNearest { side: Side(side) });
        }

        let mut seen_dead = std::collections::BTreeSet::new();
        for _ in 0..frames {
            let snap = engine.advance(DEFAULT_DT);
            for unit in &snap.units {
                prop_assert!(!seen_dead.contains(&unit.id));
            }
            for event in &snap.events {
                if let skirmish_sim::core::events::CombatEvent::UnitDestroyed { unit, .. } = event {
                    seen_dead.insert(*unit);
                    prop_assert!(snap.unit(*unit).is_none());
                }
            }
        }
    }
}

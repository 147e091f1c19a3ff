use crate::archetypes::UnitArchetype;
use crate::commands::{AttackTarget, PlayerCommand};
use crate::enums::*;
use crate::events::CombatEvent;
use crate::state::{GameStateSnapshot, SideView};
use crate::types::{Side, SimTime, UnitId, Vec2};

// ---- Archetype table ----

#[test]
fn test_archetype_table_values() {
    let marine = UnitKind::Marine.archetype();
    assert_eq!(marine.name, "Marine");
    assert_eq!(marine.max_health, 40.0);
    assert_eq!(marine.max_shield, 0.0);
    assert_eq!(marine.movement_speed, 3.5);
    assert_eq!(marine.attack_power, 6.0);
    assert_eq!(marine.attack_range, 120.0);
    assert_eq!(marine.attack_cooldown, 15.0);
    assert_eq!(marine.collision_radius, 16.0);

    let zealot = UnitKind::Zealot.archetype();
    assert_eq!(zealot.max_health, 100.0);
    assert_eq!(zealot.max_shield, 60.0);
    assert_eq!(zealot.movement_speed, 3.0);
    assert_eq!(zealot.attack_power, 16.0);
    assert_eq!(zealot.attack_range, 20.0);
    assert_eq!(zealot.attack_cooldown, 22.0);
    assert_eq!(zealot.collision_radius, 18.0);

    let zergling = UnitKind::Zergling.archetype();
    assert_eq!(zergling.max_health, 35.0);
    assert_eq!(zergling.movement_speed, 4.5);
    assert_eq!(zergling.collision_radius, 14.0);
}

#[test]
fn test_archetypes_are_shared() {
    // Every lookup for a kind returns the same static entry.
    let a: &'static UnitArchetype = UnitKind::Zealot.archetype();
    let b: &'static UnitArchetype = UnitKind::Zealot.archetype();
    assert!(std::ptr::eq(a, b));
    assert!(!std::ptr::eq(a, UnitKind::Marine.archetype()));
}

#[test]
fn test_only_zealot_has_shield() {
    for kind in UnitKind::ALL {
        let has_shield = kind.archetype().max_shield > 0.0;
        assert_eq!(has_shield, kind == UnitKind::Zealot, "{kind:?}");
    }
}

// ---- Vector math ----

#[test]
fn test_normalize_zero_vector_is_zero() {
    assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    let n = Vec2::new(3.0, 4.0).normalize_or_zero();
    assert!((n.length() - 1.0).abs() < 1e-12);
    assert!((n.x - 0.6).abs() < 1e-12);
}

// ---- Time ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance(1.0 / 60.0);
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

// ---- Outcome ----

#[test]
fn test_outcome_helpers() {
    assert!(!Outcome::InProgress.is_over());
    assert!(Outcome::Draw.is_over());
    assert_eq!(Outcome::Draw.winner(), None);

    let victory = Outcome::Victory { side: Side(1) };
    assert!(victory.is_over());
    assert_eq!(victory.winner(), Some(Side(1)));
}

// ---- Serde ----

#[test]
fn test_ids_serialize_transparently() {
    assert_eq!(serde_json::to_string(&UnitId(7)).unwrap(), "7");
    assert_eq!(serde_json::to_string(&Side(2)).unwrap(), "2");
}

#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::Move {
            units: vec![UnitId(0), UnitId(1)],
            destination: Vec2::new(10.0, -4.0),
        },
        PlayerCommand::Attack {
            units: vec![UnitId(2)],
            target: AttackTarget::Unit(UnitId(9)),
        },
        PlayerCommand::Attack {
            units: vec![UnitId(2)],
            target: AttackTarget::Point(Vec2::new(900.0, 300.0)),
        },
        PlayerCommand::AttackNearest { side: Side(0) },
        PlayerCommand::Stop { units: vec![] },
        PlayerCommand::Hold {
            units: vec![UnitId(3)],
        },
        PlayerCommand::SelectInRect {
            side: Side(0),
            corner_a: Vec2::new(0.0, 0.0),
            corner_b: Vec2::new(50.0, 50.0),
        },
        PlayerCommand::ClearSelection,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, &back);
    }
}

#[test]
fn test_player_command_wire_shape() {
    let json = r#"{"type":"Move","units":[4],"destination":[1.5,2.0]}"#;
    let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
    assert_eq!(
        cmd,
        PlayerCommand::Move {
            units: vec![UnitId(4)],
            destination: Vec2::new(1.5, 2.0),
        }
    );
}

#[test]
fn test_combat_event_serde() {
    let events = vec![
        CombatEvent::Attack {
            attacker: UnitId(0),
            target: UnitId(1),
            damage: 6.0,
            health: 100.0,
            shield: 54.0,
        },
        CombatEvent::UnitDestroyed {
            unit: UnitId(1),
            kind: UnitKind::Zealot,
            side: Side(1),
            killer: UnitId(0),
        },
    ];
    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, &back);
    }
}

#[test]
fn test_outcome_serde() {
    for outcome in [
        Outcome::InProgress,
        Outcome::Victory { side: Side(3) },
        Outcome::Draw,
    ] {
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}

// ---- Snapshot helpers ----

#[test]
fn test_snapshot_live_count_lookup() {
    let snap = GameStateSnapshot {
        sides: vec![
            SideView {
                side: Side(0),
                live_units: 15,
            },
            SideView {
                side: Side(1),
                live_units: 0,
            },
        ],
        ..Default::default()
    };
    assert_eq!(snap.live_count(Side(0)), 15);
    assert_eq!(snap.live_count(Side(1)), 0);
    assert_eq!(snap.live_count(Side(7)), 0, "Unknown side counts as empty");
    assert!(snap.unit(UnitId(0)).is_none());
}

#[test]
fn test_default_snapshot_serializes() {
    let json = serde_json::to_string(&GameStateSnapshot::default()).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert!(back.units.is_empty());
    assert_eq!(back.outcome, Outcome::InProgress);
}

use space_explorer::compute::init_state;
use space_explorer::config::GameConfig;
use space_explorer::entities::*;
use space_explorer::progression::*;
use space_explorer::spawner::{spawn_asteroid, spawn_boss, spawn_resource};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_state() -> GameState {
    let mut s = init_state(&GameConfig::default(), &mut seeded_rng());
    s.asteroids.clear();
    s.resources.clear();
    s
}

#[test]
fn clear_field_levels_up() {
    let mut s = make_state();
    assert!(maybe_level_up(&mut s, &mut seeded_rng()));
    assert_eq!(s.level, 2);
    assert_eq!(s.asteroids.len(), 7);
    assert_eq!(s.resources.len(), 2);
    assert!(s.boss.is_none());
    assert_eq!(s.events, vec![FrameEvent::LevelUp { level: 2 }]);
}

#[test]
fn remaining_asteroids_block_level_up() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    s.asteroids.push(spawn_asteroid(&mut rng, s.width));
    assert!(!maybe_level_up(&mut s, &mut rng));
    assert_eq!(s.level, 1);
    assert_eq!(s.asteroids.len(), 1);
}

#[test]
fn living_boss_blocks_level_up() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    s.boss = Some(spawn_boss(s.width));
    s.resources.push(spawn_resource(&mut rng, s.width));
    assert!(!maybe_level_up(&mut s, &mut rng));
    assert_eq!(s.level, 1);
    assert!(s.asteroids.is_empty());
    assert_eq!(s.resources.len(), 1);
}

#[test]
fn resources_do_not_count_as_hostiles() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    s.resources.push(spawn_resource(&mut rng, s.width));
    assert!(maybe_level_up(&mut s, &mut rng));
    assert_eq!(s.resources.len(), 3);
}

#[test]
fn boss_arrives_on_level_five() {
    let mut s = make_state();
    s.level = 4;
    maybe_level_up(&mut s, &mut seeded_rng());
    assert_eq!(s.level, 5);
    assert_eq!(s.asteroids.len(), 10);
    let boss = s.boss.as_ref().expect("boss on level 5");
    assert_eq!(boss.health, 200);
    assert_eq!(boss.phase, Phase::One);
}

#[test]
fn boss_only_on_multiples_of_five() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let mut boss_levels = Vec::new();
    for _ in 0..14 {
        s.asteroids.clear();
        s.boss = None;
        maybe_level_up(&mut s, &mut rng);
        if s.boss.is_some() {
            boss_levels.push(s.level);
        }
    }
    assert_eq!(boss_levels, vec![5, 10, 15]);
}

#[test]
fn wave_size_table() {
    assert_eq!(asteroids_for_level(2), 7);
    assert_eq!(asteroids_for_level(10), 15);
    assert!(is_boss_level(5));
    assert!(is_boss_level(20));
    assert!(!is_boss_level(6));
}

//! Level progression: the only place new waves and bosses come from.

use log::info;
use rand::Rng;

use crate::entities::{FrameEvent, GameState};
use crate::spawner::{spawn_asteroids, spawn_boss, spawn_resources};

/// Resources added on every level-up.
pub const RESOURCES_PER_LEVEL: usize = 2;
/// Extra asteroids on top of the level number.
pub const ASTEROID_BASE: u32 = 5;
/// A boss appears on every level divisible by this.
pub const BOSS_LEVEL_INTERVAL: u32 = 5;

/// Asteroids spawned when entering `level`.
pub fn asteroids_for_level(level: u32) -> usize {
    (level + ASTEROID_BASE) as usize
}

pub fn is_boss_level(level: u32) -> bool {
    level % BOSS_LEVEL_INTERVAL == 0
}

/// Advance the level when the field is clear of asteroids and no boss is
/// alive. Returns whether a level-up happened.
pub fn maybe_level_up(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if !state.asteroids.is_empty() || state.boss.is_some() {
        return false;
    }
    state.level += 1;
    let level = state.level;

    let asteroids = spawn_asteroids(rng, state.width, asteroids_for_level(level));
    state.asteroids.extend(asteroids);
    let resources = spawn_resources(rng, state.width, RESOURCES_PER_LEVEL);
    state.resources.extend(resources);

    let boss = is_boss_level(level);
    if boss {
        state.boss = Some(spawn_boss(state.width));
    }
    info!(
        "level {level}: {} asteroids, {} resources{}",
        state.asteroids.len(),
        state.resources.len(),
        if boss { ", boss incoming" } else { "" }
    );
    state.events.push(FrameEvent::LevelUp { level });
    true
}

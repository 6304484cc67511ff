//! Procedural placement of asteroids, resources and bosses.
//!
//! All randomness comes through the injected `rng`, so a seeded generator
//! gives reproducible waves.

use log::debug;
use rand::Rng;

use crate::boss::{BOSS_SIZE, BOSS_START_Y};
use crate::entities::{Asteroid, Boss, Rect, Resource};

pub const ASTEROID_SIZE: i32 = 50;
pub const RESOURCE_SIZE: i32 = 30;
pub const ASTEROID_MIN_SPEED: i32 = 3;
pub const ASTEROID_MAX_SPEED: i32 = 7;
pub const RESOURCE_SPEED: i32 = 4;

/// Vertical spawn band above the visible area.
pub const SPAWN_Y_MIN: i32 = -150;
pub const SPAWN_Y_MAX: i32 = -50;

/// Size of the first wave, before any level-up.
pub const INITIAL_ASTEROIDS: usize = 8;
pub const INITIAL_RESOURCES: usize = 3;

/// Random top-left corner above the screen for a box `w` wide.
fn random_top_position(rng: &mut impl Rng, width: i32, w: i32) -> (i32, i32) {
    let x = rng.gen_range(0..=(width - w).max(0));
    let y = rng.gen_range(SPAWN_Y_MIN..=SPAWN_Y_MAX);
    (x, y)
}

pub fn spawn_asteroid(rng: &mut impl Rng, width: i32) -> Asteroid {
    let (x, y) = random_top_position(rng, width, ASTEROID_SIZE);
    Asteroid {
        rect: Rect::new(x, y, ASTEROID_SIZE, ASTEROID_SIZE),
        speed: rng.gen_range(ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED),
    }
}

pub fn spawn_resource(rng: &mut impl Rng, width: i32) -> Resource {
    let (x, y) = random_top_position(rng, width, RESOURCE_SIZE);
    Resource {
        rect: Rect::new(x, y, RESOURCE_SIZE, RESOURCE_SIZE),
        speed: RESOURCE_SPEED,
    }
}

pub fn spawn_asteroids(rng: &mut impl Rng, width: i32, count: usize) -> Vec<Asteroid> {
    debug!("spawning {count} asteroids");
    (0..count).map(|_| spawn_asteroid(rng, width)).collect()
}

pub fn spawn_resources(rng: &mut impl Rng, width: i32, count: usize) -> Vec<Resource> {
    debug!("spawning {count} resources");
    (0..count).map(|_| spawn_resource(rng, width)).collect()
}

/// Boss enters centred near the top, in phase one.
pub fn spawn_boss(width: i32) -> Boss {
    debug!("spawning boss");
    Boss::new(Rect::centered(width / 2, BOSS_START_Y, BOSS_SIZE, BOSS_SIZE))
}

/// Once the top edge has dropped below the screen, move the box back above
/// the visible area at a fresh random column. Returns whether it wrapped.
pub fn recycle_on_exit(rect: &mut Rect, rng: &mut impl Rng, width: i32, height: i32) -> bool {
    if rect.top() <= height {
        return false;
    }
    let (x, y) = random_top_position(rng, width, rect.w);
    rect.x = x;
    rect.y = y;
    true
}

impl Asteroid {
    /// Fall one frame, wrapping to the top after leaving the bottom.
    pub fn advance(&mut self, rng: &mut impl Rng, width: i32, height: i32) {
        self.rect.y += self.speed;
        recycle_on_exit(&mut self.rect, rng, width, height);
    }
}

impl Resource {
    pub fn advance(&mut self, rng: &mut impl Rng, width: i32, height: i32) {
        self.rect.y += self.speed;
        recycle_on_exit(&mut self.rect, rng, width, height);
    }
}

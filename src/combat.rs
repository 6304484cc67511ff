//! Collision resolution.
//!
//! Runs once per frame after every entity has moved. The five passes run in
//! a fixed order; each one removes what it consumed before the next pass
//! looks at the collections.

use log::{debug, info};

use crate::boss::BOSS_BONUS;
use crate::entities::{AudioCue, FrameEvent, GameState, GameStatus};

pub const ASTEROID_DAMAGE: i32 = 10;
pub const BOSS_PROJECTILE_DAMAGE: i32 = 20;
pub const RESOURCE_FUEL: f32 = 10.0;
pub const RESOURCE_SCORE: u32 = 5;
pub const ASTEROID_SCORE: u32 = 10;
/// Boss health lost in a frame where at least one shot lands.
pub const PROJECTILE_BOSS_DAMAGE: i32 = 20;

/// Run all collision passes in order.
pub fn resolve(state: &mut GameState) {
    player_vs_asteroids(state);
    player_vs_resources(state);
    projectiles_vs_asteroids(state);
    projectiles_vs_boss(state);
    player_vs_boss_projectiles(state);
}

/// Damage the player and flag the end of the game if the shield is gone.
fn hurt_player(state: &mut GameState, amount: i32) {
    if state.player.take_damage(amount) {
        state.events.push(FrameEvent::PlayerDamaged {
            amount,
            shield: state.player.shield,
        });
    }
    if state.player.is_destroyed() && state.status != GameStatus::GameOver {
        info!("shield depleted, final score {}", state.player.score);
        state.status = GameStatus::GameOver;
        state.events.push(FrameEvent::GameOver {
            score: state.player.score,
        });
    }
}

/// 1. Ship rams asteroids: each overlapping asteroid is destroyed and hits
///    for 10 (invincibility absorbs all but the first).
pub fn player_vs_asteroids(state: &mut GameState) {
    let ship = state.player.rect;
    let before = state.asteroids.len();
    state.asteroids.retain(|a| !a.rect.overlaps(&ship));
    for _ in state.asteroids.len()..before {
        state.cues.push(AudioCue::Explosion);
        hurt_player(state, ASTEROID_DAMAGE);
    }
}

/// 2. Ship collects resources: fuel +10, score +5 each.
pub fn player_vs_resources(state: &mut GameState) {
    let ship = state.player.rect;
    let before = state.resources.len();
    state.resources.retain(|r| !r.rect.overlaps(&ship));
    for _ in state.resources.len()..before {
        state.player.fuel += RESOURCE_FUEL;
        state.player.score += RESOURCE_SCORE;
        state.cues.push(AudioCue::ResourcePickup);
        state.events.push(FrameEvent::ResourceCollected {
            fuel: state.player.fuel,
        });
    }
}

/// 3. Shots hit asteroids. A shot destroys every asteroid it overlaps,
///    disappears, and scores 10.
pub fn projectiles_vs_asteroids(state: &mut GameState) {
    let mut hits = 0u32;
    let asteroids = &mut state.asteroids;
    state.projectiles.retain(|p| {
        let before = asteroids.len();
        asteroids.retain(|a| !a.rect.overlaps(&p.rect));
        let hit = asteroids.len() < before;
        if hit {
            hits += 1;
        }
        !hit
    });
    for _ in 0..hits {
        state.player.score += ASTEROID_SCORE;
        state.cues.push(AudioCue::Explosion);
        state.events.push(FrameEvent::AsteroidDestroyed);
    }
}

/// 4. Shots hit the boss. Every overlapping shot is consumed, but the boss
///    loses 20 health once per frame however many landed. At health ≤ 0 it
///    dies and awards the bonus.
pub fn projectiles_vs_boss(state: &mut GameState) {
    let Some(boss) = state.boss.as_mut() else {
        return;
    };
    let target = boss.rect;
    let before = state.projectiles.len();
    state.projectiles.retain(|p| !p.rect.overlaps(&target));
    if state.projectiles.len() == before {
        return;
    }

    boss.health -= PROJECTILE_BOSS_DAMAGE;
    let health = boss.health;
    let defeated = boss.is_defeated();
    debug!("boss hit, health {health}");
    state.cues.push(AudioCue::BossExplosion);
    state.events.push(FrameEvent::BossHit { health });

    if defeated {
        info!("boss defeated at level {}", state.level);
        state.boss = None;
        state.player.score += BOSS_BONUS;
        state.events.push(FrameEvent::BossDefeated);
    }
}

/// 5. Boss shots hit the ship for 20 each.
pub fn player_vs_boss_projectiles(state: &mut GameState) {
    let ship = state.player.rect;
    let before = state.boss_projectiles.len();
    state.boss_projectiles.retain(|b| !b.rect.overlaps(&ship));
    for _ in state.boss_projectiles.len()..before {
        state.cues.push(AudioCue::Explosion);
        hurt_player(state, BOSS_PROJECTILE_DAMAGE);
    }
}

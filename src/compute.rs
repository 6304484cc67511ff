//! Per-frame game logic.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`. Side effects are limited to the injected RNG.

use log::{debug, info};
use rand::Rng;

use crate::boss::BANNER_SECONDS;
use crate::combat;
use crate::config::GameConfig;
use crate::entities::{AudioCue, FrameEvent, GameState, GameStatus, Phase, Player, TransientMessage};
use crate::input::InputFrame;
use crate::progression;
use crate::spawner::{spawn_asteroids, spawn_resources, INITIAL_ASTEROIDS, INITIAL_RESOURCES};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: a fresh ship at level 1 with the first wave of
/// asteroids and resources already falling in.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let width = config.screen_width;
    let height = config.screen_height;
    GameState {
        player: Player::new(width, height, config.fps),
        asteroids: spawn_asteroids(rng, width, INITIAL_ASTEROIDS),
        resources: spawn_resources(rng, width, INITIAL_RESOURCES),
        projectiles: Vec::new(),
        boss_projectiles: Vec::new(),
        boss: None,
        level: 1,
        status: GameStatus::Playing,
        frame: 0,
        ticks: 0,
        clock_ms: 0,
        pending_fire: false,
        message: None,
        banner_mode: config.banner_mode,
        cues: Vec::new(),
        events: Vec::new(),
        width,
        height,
        fps: config.fps,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire one shot from the ship's nose.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    fire(&mut next);
    next
}

fn fire(state: &mut GameState) {
    let shot = state.player.shoot();
    state.projectiles.push(shot);
    state.cues.push(AudioCue::Shoot);
}

// ── Per-frame tick (RNG is injected) ─────────────────────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Order within a frame: banner countdown, player input, movement of every
/// entity, boss attacks, collisions, progression. Cues and events in the
/// returned state describe this frame only.
///
/// A freezing banner stops everything but the clock and the countdown. A
/// fire press during the freeze is held and fired on the next live frame.
pub fn tick(state: &GameState, input: &InputFrame, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.cues.clear();
    next.events.clear();

    if next.is_over() {
        return next;
    }

    next.ticks += 1;
    next.clock_ms = next.ticks * 1000 / u64::from(next.fps.max(1));

    // ── 1. Phase banner ──────────────────────────────────────────────────────
    let frozen = next.is_frozen();
    if let Some(message) = next.message.as_mut() {
        message.frames_left = message.frames_left.saturating_sub(1);
        if message.frames_left == 0 {
            next.message = None;
        }
    }
    if frozen {
        next.pending_fire |= input.fire;
        return next;
    }

    next.frame += 1;

    // ── 2. Player ────────────────────────────────────────────────────────────
    if input.fire || next.pending_fire {
        next.pending_fire = false;
        fire(&mut next);
    }
    let (width, height) = (next.width, next.height);
    next.player.update(input, width, height);

    // ── 3. Move everything else ──────────────────────────────────────────────
    move_entities(&mut next, rng);

    // ── 4. Boss attacks ──────────────────────────────────────────────────────
    let now = next.clock_ms;
    if let Some(boss) = next.boss.as_mut() {
        let shots = boss.attack(now);
        next.boss_projectiles.extend(shots);
    }

    // ── 5. Collisions ────────────────────────────────────────────────────────
    combat::resolve(&mut next);

    // ── 6. Progression ───────────────────────────────────────────────────────
    if !next.is_over() {
        progression::maybe_level_up(&mut next, rng);
    }

    next
}

fn move_entities(state: &mut GameState, rng: &mut impl Rng) {
    let (width, height) = (state.width, state.height);

    for asteroid in &mut state.asteroids {
        asteroid.advance(rng, width, height);
    }
    for resource in &mut state.resources {
        resource.advance(rng, width, height);
    }
    state.projectiles.retain_mut(|p| p.advance());
    state.boss_projectiles.retain_mut(|b| b.advance(height));

    let changed = state.boss.as_mut().and_then(|boss| boss.update(width));
    if let Some(phase) = changed {
        announce_phase(state, phase);
    }
}

fn announce_phase(state: &mut GameState, phase: Phase) {
    state.cues.push(AudioCue::PhaseChange);
    state.events.push(FrameEvent::PhaseChanged { phase });
    if let Some(text) = phase.banner() {
        info!("banner: {text}");
        state.message = Some(TransientMessage {
            text: text.to_string(),
            frames_left: BANNER_SECONDS * state.fps,
        });
    }
    debug!("phase change at frame {}", state.frame);
}

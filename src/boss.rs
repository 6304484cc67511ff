//! Boss state machine.
//!
//! Three phases, each with its own speed, attack cooldown and attack
//! pattern. Transitions are triggered by health thresholds and never go back.

use log::{debug, info};

use crate::entities::{AttackPattern, Boss, BossProjectile, Phase, Rect};

pub const BOSS_SIZE: i32 = 100;
/// Y coordinate of the boss centre when it spawns.
pub const BOSS_START_Y: i32 = 100;
pub const BOSS_HEALTH: i32 = 200;
/// Score for destroying a boss.
pub const BOSS_BONUS: u32 = 100;

pub const BOSS_PROJECTILE_SIZE: i32 = 10;
/// Pixels per frame, downward.
pub const BOSS_PROJECTILE_SPEED: i32 = 5;

/// How long a phase banner stays up.
pub const BANNER_SECONDS: u32 = 2;

// ── Phase table ───────────────────────────────────────────────────────────────

impl Phase {
    pub fn number(self) -> u8 {
        match self {
            Phase::One => 1,
            Phase::Two => 2,
            Phase::Three => 3,
        }
    }

    pub fn speed(self) -> i32 {
        match self {
            Phase::One => 3,
            Phase::Two => 5,
            Phase::Three => 6,
        }
    }

    pub fn cooldown_ms(self) -> u64 {
        match self {
            Phase::One => 120,
            Phase::Two => 80,
            Phase::Three => 60,
        }
    }

    pub fn pattern(self) -> AttackPattern {
        match self {
            Phase::One => AttackPattern::Single,
            Phase::Two => AttackPattern::Pair,
            Phase::Three => AttackPattern::Fan,
        }
    }

    /// The phase that follows this one and the health at or below which it
    /// starts. `None` for the last phase.
    fn next(self) -> Option<(Phase, i32)> {
        match self {
            Phase::One => Some((Phase::Two, 100)),
            Phase::Two => Some((Phase::Three, 50)),
            Phase::Three => None,
        }
    }

    /// Banner text announcing entry into this phase. The opening phase has
    /// none.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Phase::One => None,
            Phase::Two => Some("The boss becomes faster!"),
            Phase::Three => Some("The boss is enraged!"),
        }
    }
}

impl AttackPattern {
    pub fn id(self) -> u8 {
        match self {
            AttackPattern::Single => 1,
            AttackPattern::Pair => 2,
            AttackPattern::Fan => 3,
        }
    }

    /// Horizontal offsets of each shot from the boss centre.
    pub fn offsets(self) -> &'static [i32] {
        match self {
            AttackPattern::Single => &[0],
            AttackPattern::Pair => &[-20, 20],
            AttackPattern::Fan => &[-30, 0, 30],
        }
    }
}

// ── Boss behaviour ────────────────────────────────────────────────────────────

impl Boss {
    pub fn new(rect: Rect) -> Self {
        let phase = Phase::One;
        Boss {
            rect,
            health: BOSS_HEALTH,
            speed: phase.speed(),
            direction: 1,
            phase,
            cooldown_ms: phase.cooldown_ms(),
            last_attack_ms: 0,
            pattern: phase.pattern(),
        }
    }

    /// Move one frame and check the phase thresholds. Returns the new phase
    /// if a transition fired this frame.
    pub fn update(&mut self, width: i32) -> Option<Phase> {
        self.rect.x += self.speed * self.direction;
        if self.rect.right() >= width || self.rect.left() <= 0 {
            self.direction = -self.direction;
        }
        self.check_phase()
    }

    /// At most one step per call, so a single big hit that crosses both
    /// thresholds reaches phase three on the following frame.
    pub fn check_phase(&mut self) -> Option<Phase> {
        let (next, threshold) = self.phase.next()?;
        if self.health > threshold {
            return None;
        }
        self.enter_phase(next);
        Some(next)
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.speed = phase.speed();
        self.cooldown_ms = phase.cooldown_ms();
        self.pattern = phase.pattern();
        info!(
            "boss entered phase {} (health {}, speed {}, cooldown {}ms)",
            phase.number(),
            self.health,
            self.speed,
            self.cooldown_ms
        );
    }

    /// Fire the current pattern if the cooldown has elapsed at `now_ms`.
    pub fn attack(&mut self, now_ms: u64) -> Vec<BossProjectile> {
        if now_ms.saturating_sub(self.last_attack_ms) <= self.cooldown_ms {
            return Vec::new();
        }
        self.last_attack_ms = now_ms;
        let cx = self.rect.center_x();
        let bottom = self.rect.bottom();
        debug!("boss attack pattern {} at {now_ms}ms", self.pattern.id());
        self.pattern
            .offsets()
            .iter()
            .map(|dx| BossProjectile {
                rect: Rect::centered(cx + dx, bottom, BOSS_PROJECTILE_SIZE, BOSS_PROJECTILE_SIZE),
            })
            .collect()
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

impl BossProjectile {
    /// Move down one frame. Returns `false` once the shot has left the bottom.
    pub fn advance(&mut self, height: i32) -> bool {
        self.rect.y += BOSS_PROJECTILE_SPEED;
        self.rect.top() <= height
    }
}

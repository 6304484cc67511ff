//! All game entity types: pure data, no game rules.
//!
//! Positions are integer pixels with the origin at the top-left of the play
//! area, matching the bounding boxes used for collision.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Box of size `w`×`h` whose centre lands on (`cx`, `cy`).
    pub fn centered(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Rect { x: cx - w / 2, y: cy - h / 2, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shift the box so it lies fully inside `0..width` × `0..height`.
    pub fn clamp_within(&mut self, width: i32, height: i32) {
        self.x = self.x.min(width - self.w).max(0);
        self.y = self.y.min(height - self.h).max(0);
    }
}

// ── Enumerations ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// How a boss phase banner interacts with the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerMode {
    /// Everything except the banner countdown stands still.
    #[default]
    Freeze,
    /// The banner is drawn on top while the game keeps running.
    Overlay,
}

/// Closed set of simulated entity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Asteroid,
    Resource,
    Projectile,
    BossProjectile,
    Boss,
}

/// Boss behavioural tier. Only ever advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    One,
    Two,
    Three,
}

/// Spatial arrangement of the shots in one boss attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackPattern {
    /// One centred shot.
    Single,
    /// Two shots at ±20px.
    Pair,
    /// Three shots at −30/0/+30px.
    Fan,
}

/// Fire-and-forget sound triggers for the audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Shoot,
    Explosion,
    ResourcePickup,
    BossExplosion,
    PhaseChange,
}

/// Noteworthy things that happened during one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    PlayerDamaged { amount: i32, shield: i32 },
    AsteroidDestroyed,
    ResourceCollected { fuel: f32 },
    BossHit { health: i32 },
    BossDefeated,
    PhaseChanged { phase: Phase },
    LevelUp { level: u32 },
    GameOver { score: u32 },
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
    /// Can go negative; anything ≤ 0 ends the game.
    pub shield: i32,
    pub fuel: f32,
    pub score: u32,
    pub boost: bool,
    pub invincible: bool,
    /// Frames of invincibility left.
    pub invincibility_timer: u32,
    /// Length of the post-hit window, in frames.
    pub invincibility_window: u32,
}

/// Falls from above the screen and wraps back to the top when it leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub rect: Rect,
    pub speed: i32,
}

/// Fuel pickup. Falls and wraps like an asteroid.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub rect: Rect,
    pub speed: i32,
}

/// Player shot travelling upward.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
}

/// Boss shot travelling downward.
#[derive(Clone, Debug, PartialEq)]
pub struct BossProjectile {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub rect: Rect,
    pub health: i32,
    pub speed: i32,
    /// +1 moving right, −1 moving left.
    pub direction: i32,
    pub phase: Phase,
    /// Minimum gap between attacks, in simulation milliseconds.
    pub cooldown_ms: u64,
    pub last_attack_ms: u64,
    pub pattern: AttackPattern,
}

/// Full-screen text shown for a limited number of frames.
#[derive(Clone, Debug, PartialEq)]
pub struct TransientMessage {
    pub text: String,
    pub frames_left: u32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state. Owned by the frame loop and threaded through
/// every phase of a tick; cloneable so `compute::tick` can hand back a new
/// copy without touching the previous frame.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub resources: Vec<Resource>,
    pub projectiles: Vec<Projectile>,
    pub boss_projectiles: Vec<BossProjectile>,
    pub boss: Option<Boss>,
    pub level: u32,
    pub status: GameStatus,
    /// Simulated frames. Stands still while a banner freezes the game.
    pub frame: u64,
    /// Every tick since the start, frozen ones included.
    pub ticks: u64,
    /// Game clock derived from `ticks` and `fps`. Keeps running under a
    /// freezing banner, so cooldowns can elapse while it is up.
    pub clock_ms: u64,
    /// Fire pressed while frozen; fired on the first frame after.
    pub pending_fire: bool,
    pub message: Option<TransientMessage>,
    pub banner_mode: BannerMode,
    /// Sound cues raised during the most recent tick.
    pub cues: Vec<AudioCue>,
    /// Events raised during the most recent tick.
    pub events: Vec<FrameEvent>,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// True while a phase banner is holding the simulation still.
    pub fn is_frozen(&self) -> bool {
        self.banner_mode == BannerMode::Freeze && self.message.is_some()
    }
}

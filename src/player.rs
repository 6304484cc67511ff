//! Player ship: movement, boost, shield and the post-hit invincibility window.

use crate::entities::{Player, Projectile, Rect};
use crate::input::InputFrame;

pub const PLAYER_SIZE: i32 = 50;
pub const BASE_SPEED: i32 = 5;
pub const BOOST_SPEED: i32 = 8;
/// Fuel burned per frame while boosting.
pub const BOOST_COST: f32 = 0.5;
pub const STARTING_SHIELD: i32 = 100;
pub const STARTING_FUEL: f32 = 100.0;

pub const PROJECTILE_WIDTH: i32 = 5;
pub const PROJECTILE_HEIGHT: i32 = 10;
/// Pixels per frame, upward.
pub const PROJECTILE_SPEED: i32 = 8;

impl Player {
    /// Fresh ship centred horizontally, 100px above the bottom edge.
    pub fn new(width: i32, height: i32, fps: u32) -> Self {
        Player {
            rect: Rect::centered(width / 2, height - 100, PLAYER_SIZE, PLAYER_SIZE),
            speed: BASE_SPEED,
            shield: STARTING_SHIELD,
            fuel: STARTING_FUEL,
            score: 0,
            boost: false,
            invincible: false,
            invincibility_timer: 0,
            invincibility_window: fps * 2,
        }
    }

    /// Advance one frame of player control.
    ///
    /// Boost is resolved before moving, so the speed change applies to this
    /// frame's step. Directions are independent: holding two of them moves
    /// diagonally at full speed on both axes.
    pub fn update(&mut self, input: &InputFrame, width: i32, height: i32) {
        if input.boost && self.fuel > 0.0 {
            self.speed = BOOST_SPEED;
            self.fuel = (self.fuel - BOOST_COST).max(0.0);
            self.boost = true;
        } else {
            self.speed = BASE_SPEED;
            self.boost = false;
        }

        if input.up {
            self.rect.y -= self.speed;
        }
        if input.down {
            self.rect.y += self.speed;
        }
        if input.left {
            self.rect.x -= self.speed;
        }
        if input.right {
            self.rect.x += self.speed;
        }

        // The window covers `invincibility_window` full updates after the hit;
        // the flag drops on the update after that.
        if self.invincible {
            if self.invincibility_timer == 0 {
                self.invincible = false;
            } else {
                self.invincibility_timer -= 1;
            }
        }

        self.rect.clamp_within(width, height);
    }

    /// Spawn a projectile centred on the nose of the ship.
    pub fn shoot(&self) -> Projectile {
        Projectile {
            rect: Rect::centered(
                self.rect.center_x(),
                self.rect.top(),
                PROJECTILE_WIDTH,
                PROJECTILE_HEIGHT,
            ),
        }
    }

    /// Apply a hit. Returns `false` when the hit was absorbed by invincibility.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.invincible {
            return false;
        }
        self.shield -= amount;
        self.invincible = true;
        self.invincibility_timer = self.invincibility_window;
        true
    }

    pub fn is_destroyed(&self) -> bool {
        self.shield <= 0
    }
}

impl Projectile {
    /// Move up one frame. Returns `false` once the shot has left the top.
    pub fn advance(&mut self) -> bool {
        self.rect.y -= PROJECTILE_SPEED;
        self.rect.bottom() >= 0
    }
}

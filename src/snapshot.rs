//! Rendering contract: a flat, read-only view of one frame.
//!
//! The front-end never reaches into `GameState` collections directly; it
//! draws whatever `RenderSnapshot::build` hands it.

use crate::entities::{EntityKind, GameState, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteView {
    pub kind: EntityKind,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub shield: i32,
    pub fuel: f32,
    pub score: u32,
    pub level: u32,
    pub boss_health: Option<i32>,
    pub boosting: bool,
    pub invincible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub text: String,
    pub frames_left: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    /// Back to front: falling objects, shots, boss, player.
    pub sprites: Vec<SpriteView>,
    pub hud: Hud,
    pub banner: Option<Banner>,
    pub width: i32,
    pub height: i32,
}

impl RenderSnapshot {
    pub fn build(state: &GameState) -> Self {
        let mut sprites = Vec::with_capacity(
            1 + state.boss.is_some() as usize
                + state.asteroids.len()
                + state.resources.len()
                + state.projectiles.len()
                + state.boss_projectiles.len(),
        );

        let view = |kind, rect| SpriteView { kind, rect };
        sprites.extend(state.resources.iter().map(|r| view(EntityKind::Resource, r.rect)));
        sprites.extend(state.asteroids.iter().map(|a| view(EntityKind::Asteroid, a.rect)));
        sprites.extend(state.projectiles.iter().map(|p| view(EntityKind::Projectile, p.rect)));
        sprites.extend(
            state
                .boss_projectiles
                .iter()
                .map(|b| view(EntityKind::BossProjectile, b.rect)),
        );
        if let Some(boss) = &state.boss {
            sprites.push(view(EntityKind::Boss, boss.rect));
        }
        sprites.push(view(EntityKind::Player, state.player.rect));

        RenderSnapshot {
            sprites,
            hud: Hud {
                shield: state.player.shield,
                fuel: state.player.fuel,
                score: state.player.score,
                level: state.level,
                boss_health: state.boss.as_ref().map(|b| b.health),
                boosting: state.player.boost,
                invincible: state.player.invincible,
            },
            banner: state.message.as_ref().map(|m| Banner {
                text: m.text.clone(),
                frames_left: m.frames_left,
            }),
            width: state.width,
            height: state.height,
        }
    }
}

use space_explorer::entities::{Asteroid, Rect, Resource};
use space_explorer::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const W: i32 = 800;
const H: i32 = 600;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn asteroids_spawn_above_screen_within_columns() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let a = spawn_asteroid(&mut rng, W);
        assert!((0..=W - ASTEROID_SIZE).contains(&a.rect.x));
        assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&a.rect.y));
        assert!((ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED).contains(&a.speed));
        assert_eq!((a.rect.w, a.rect.h), (50, 50));
    }
}

#[test]
fn asteroid_speeds_cover_whole_range() {
    let mut rng = seeded_rng();
    let mut seen = [false; 8];
    for _ in 0..500 {
        seen[spawn_asteroid(&mut rng, W).speed as usize] = true;
    }
    assert!(seen[3..=7].iter().all(|&s| s));
}

#[test]
fn resources_spawn_with_fixed_speed() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let r = spawn_resource(&mut rng, W);
        assert_eq!(r.speed, RESOURCE_SPEED);
        assert!((0..=W - RESOURCE_SIZE).contains(&r.rect.x));
        assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&r.rect.y));
    }
}

#[test]
fn batch_spawn_counts() {
    let mut rng = seeded_rng();
    assert_eq!(spawn_asteroids(&mut rng, W, 7).len(), 7);
    assert_eq!(spawn_resources(&mut rng, W, 2).len(), 2);
    assert!(spawn_asteroids(&mut rng, W, 0).is_empty());
}

#[test]
fn boss_spawns_centred_near_top() {
    let boss = spawn_boss(W);
    assert_eq!(boss.rect, Rect::new(350, 50, 100, 100));
    assert_eq!(boss.health, 200);
}

// ── recycling ─────────────────────────────────────────────────────────────────

#[test]
fn recycle_ignores_boxes_still_on_screen() {
    let mut rng = seeded_rng();
    let mut rect = Rect::new(10, H, 50, 50); // top exactly on the bottom edge
    assert!(!recycle_on_exit(&mut rect, &mut rng, W, H));
    assert_eq!(rect, Rect::new(10, H, 50, 50));
}

#[test]
fn recycle_moves_exited_box_above_screen() {
    let mut rng = seeded_rng();
    let mut rect = Rect::new(10, H + 1, 50, 50);
    assert!(recycle_on_exit(&mut rect, &mut rng, W, H));
    assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&rect.y));
    assert!((0..=W - 50).contains(&rect.x));
    assert_eq!((rect.w, rect.h), (50, 50));
}

#[test]
fn falling_asteroid_wraps_instead_of_disappearing() {
    let mut rng = seeded_rng();
    for _ in 0..300 {
        let mut a = Asteroid {
            rect: Rect::new(100, H - 2, 50, 50),
            speed: 7,
        };
        a.advance(&mut rng, W, H);
        assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&a.rect.y));
        assert!((0..=W - a.rect.w).contains(&a.rect.x));
        assert_eq!(a.speed, 7);
    }
}

#[test]
fn falling_resource_wraps_with_its_own_width() {
    let mut rng = seeded_rng();
    for _ in 0..300 {
        let mut r = Resource {
            rect: Rect::new(0, H, 30, 30),
            speed: RESOURCE_SPEED,
        };
        r.advance(&mut rng, W, H);
        assert!((0..=W - 30).contains(&r.rect.x));
        assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&r.rect.y));
    }
}

#[test]
fn asteroid_keeps_falling_on_screen() {
    let mut rng = seeded_rng();
    let mut a = Asteroid {
        rect: Rect::new(100, 200, 50, 50),
        speed: 5,
    };
    a.advance(&mut rng, W, H);
    assert_eq!(a.rect, Rect::new(100, 205, 50, 50));
}

#[test]
fn seeded_spawns_are_reproducible() {
    let a = spawn_asteroids(&mut seeded_rng(), W, 5);
    let b = spawn_asteroids(&mut seeded_rng(), W, 5);
    assert_eq!(a, b);
}

use space_explorer::boss::*;
use space_explorer::entities::{AttackPattern, Boss, BossProjectile, Phase, Rect};
use space_explorer::spawner::spawn_boss;

const W: i32 = 800;

fn make_boss() -> Boss {
    spawn_boss(W)
}

#[test]
fn new_boss_is_in_phase_one() {
    let b = make_boss();
    assert_eq!(b.health, 200);
    assert_eq!(b.phase, Phase::One);
    assert_eq!(b.speed, 3);
    assert_eq!(b.cooldown_ms, 120);
    assert_eq!(b.pattern, AttackPattern::Single);
    assert_eq!(b.direction, 1);
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn moves_horizontally_by_speed() {
    let mut b = make_boss();
    b.update(W);
    assert_eq!(b.rect.x, 353);
    assert_eq!(b.rect.y, 50);
}

#[test]
fn bounces_off_right_edge() {
    let mut b = make_boss();
    b.rect.x = W - 102; // right edge at 798
    b.update(W);
    assert_eq!(b.rect.right(), 801);
    assert_eq!(b.direction, -1);
    b.update(W);
    assert_eq!(b.rect.right(), 798);
}

#[test]
fn bounces_off_left_edge() {
    let mut b = make_boss();
    b.direction = -1;
    b.rect.x = 2;
    b.update(W);
    assert_eq!(b.rect.x, -1);
    assert_eq!(b.direction, 1);
}

// ── phases ────────────────────────────────────────────────────────────────────

#[test]
fn phase_follows_health_thresholds() {
    let mut b = make_boss();
    let mut phases = Vec::new();
    for health in [200, 105, 95, 55, 45] {
        b.health = health;
        b.update(W);
        phases.push(b.phase.number());
    }
    assert_eq!(phases, vec![1, 1, 2, 2, 3]);
}

#[test]
fn each_transition_fires_once() {
    let mut b = make_boss();
    b.health = 100;
    assert_eq!(b.update(W), Some(Phase::Two));
    assert_eq!(b.update(W), None);
    b.health = 50;
    assert_eq!(b.update(W), Some(Phase::Three));
    assert_eq!(b.update(W), None);
}

#[test]
fn transition_updates_speed_cooldown_and_pattern() {
    let mut b = make_boss();
    b.health = 90;
    b.update(W);
    assert_eq!((b.speed, b.cooldown_ms, b.pattern), (5, 80, AttackPattern::Pair));
    b.health = 10;
    b.update(W);
    assert_eq!((b.speed, b.cooldown_ms, b.pattern), (6, 60, AttackPattern::Fan));
}

#[test]
fn big_drop_advances_one_phase_per_update() {
    let mut b = make_boss();
    b.health = 40;
    assert_eq!(b.update(W), Some(Phase::Two));
    assert_eq!(b.update(W), Some(Phase::Three));
}

#[test]
fn phase_never_goes_back() {
    let mut b = make_boss();
    b.health = 40;
    b.update(W);
    b.update(W);
    b.health = 200;
    assert_eq!(b.update(W), None);
    assert_eq!(b.phase, Phase::Three);
}

#[test]
fn banners_only_for_later_phases() {
    assert_eq!(Phase::One.banner(), None);
    assert_eq!(Phase::Two.banner(), Some("The boss becomes faster!"));
    assert_eq!(Phase::Three.banner(), Some("The boss is enraged!"));
}

// ── attacks ───────────────────────────────────────────────────────────────────

#[test]
fn no_attack_before_cooldown_elapses() {
    let mut b = make_boss();
    assert!(b.attack(0).is_empty());
    assert!(b.attack(120).is_empty()); // must strictly exceed
    assert_eq!(b.last_attack_ms, 0);
}

#[test]
fn single_shot_from_bottom_centre() {
    let mut b = make_boss();
    let shots = b.attack(121);
    assert_eq!(shots, vec![BossProjectile { rect: Rect::new(395, 145, 10, 10) }]);
    assert_eq!(b.last_attack_ms, 121);
}

#[test]
fn cooldown_restarts_after_attack() {
    let mut b = make_boss();
    b.attack(121);
    assert!(b.attack(200).is_empty());
    assert!(b.attack(241).is_empty());
    assert_eq!(b.attack(242).len(), 1);
}

#[test]
fn pair_pattern_in_phase_two() {
    let mut b = make_boss();
    b.health = 100;
    b.check_phase();
    let xs: Vec<i32> = b.attack(1_000).iter().map(|s| s.rect.center_x()).collect();
    assert_eq!(xs, vec![380, 420]);
}

#[test]
fn fan_pattern_in_phase_three() {
    let mut b = make_boss();
    b.health = 50;
    b.check_phase();
    b.check_phase();
    let xs: Vec<i32> = b.attack(1_000).iter().map(|s| s.rect.center_x()).collect();
    assert_eq!(xs, vec![370, 400, 430]);
}

#[test]
fn pattern_ids_match_phase_numbers() {
    for phase in [Phase::One, Phase::Two, Phase::Three] {
        assert_eq!(phase.pattern().id(), phase.number());
    }
}

#[test]
fn boss_shot_falls_and_expires_below_screen() {
    let mut shot = BossProjectile { rect: Rect::new(0, 595, 10, 10) };
    assert!(shot.advance(600));
    assert_eq!(shot.rect.y, 600);
    assert!(!shot.advance(600));
}

#[test]
fn defeated_at_zero_health() {
    let mut b = make_boss();
    b.health = 0;
    assert!(b.is_defeated());
    b.health = 1;
    assert!(!b.is_defeated());
    assert_eq!(BOSS_BONUS, 100);
}

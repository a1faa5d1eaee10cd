//! Tests for border-avoidance steering and bounds resolution.

use glam::Vec2;

use quadrado_core::config::{ArenaConfig, SteeringConfig};
use quadrado_core::enums::{ActorKind, BorderZone};

use crate::steering::{self, SteeringContext};

const SIZE: f32 = 30.0;
const SPEED: f32 = 3.0;

fn arena() -> ArenaConfig {
    ArenaConfig {
        width: 800.0,
        height: 600.0,
    }
}

fn ctx(kind: ActorKind, x: f32, y: f32, dx: f32, dy: f32) -> SteeringContext {
    SteeringContext {
        kind,
        position: Vec2::new(x, y),
        direction: Vec2::new(dx, dy),
        speed: SPEED,
        size: SIZE,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ---- Player ----

#[test]
fn test_player_clamped_at_left_edge() {
    let update = steering::evaluate(
        &ctx(ActorKind::Player, 0.0, 300.0, -1.0, 0.0),
        &arena(),
        &SteeringConfig::default(),
    );
    assert_eq!(update.position.x, 0.0);
    assert_eq!(update.position.y, 300.0);
    assert_eq!(update.zone, BorderZone::Clear);
}

#[test]
fn test_player_clamped_at_far_edges() {
    let update = steering::evaluate(
        &ctx(ActorKind::Player, 769.0, 569.0, 1.0, 1.0),
        &arena(),
        &SteeringConfig::default(),
    );
    assert_eq!(update.position, Vec2::new(770.0, 570.0));
}

#[test]
fn test_player_ignores_border_zones() {
    // Inside the critical band, but the player keeps raw control.
    let update = steering::evaluate(
        &ctx(ActorKind::Player, 10.0, 300.0, -1.0, 0.0),
        &arena(),
        &SteeringConfig::default(),
    );
    assert_eq!(update.position, Vec2::new(7.0, 300.0));
}

// ---- Enemy zones ----

#[test]
fn test_enemy_critical_zone_pulls_toward_center() {
    let c = ctx(ActorKind::Enemy, 5.0, 285.0, -1.0, 0.0);
    let update = steering::evaluate(&c, &arena(), &SteeringConfig::default());

    assert_eq!(update.zone, BorderZone::Critical);
    let naive = c.position + c.direction * SPEED;
    assert_ne!(update.position, naive);
    assert!(update.position.x > 5.0, "expected escape, got {}", update.position.x);

    let expected = c.position + steering::toward_center(c.position, &arena()) * SPEED * 1.5;
    assert!(approx(update.position.x, expected.x));
    assert!(approx(update.position.y, expected.y));
}

#[test]
fn test_enemy_idle_in_corner_still_escapes() {
    let update = steering::evaluate(
        &ctx(ActorKind::Enemy, 5.0, 5.0, 0.0, 0.0),
        &arena(),
        &SteeringConfig::default(),
    );
    assert_eq!(update.zone, BorderZone::Critical);
    assert!(update.position.x > 5.0);
    assert!(update.position.y > 5.0);
}

#[test]
fn test_enemy_safety_zone_blends_direction() {
    // Center is straight to the right, so the blend is 0.6 * 1 + 0.4 * -1.
    let update = steering::evaluate(
        &ctx(ActorKind::Enemy, 45.0, 300.0, -1.0, 0.0),
        &arena(),
        &SteeringConfig::default(),
    );
    assert_eq!(update.zone, BorderZone::Safety);
    assert!(approx(update.position.x, 45.6), "got {}", update.position.x);
    assert!(approx(update.position.y, 300.0));
}

#[test]
fn test_enemy_clear_zone_moves_unmodified() {
    let update = steering::evaluate(
        &ctx(ActorKind::Enemy, 400.0, 300.0, 1.0, -1.0),
        &arena(),
        &SteeringConfig::default(),
    );
    assert_eq!(update.zone, BorderZone::Clear);
    assert_eq!(update.position, Vec2::new(403.0, 297.0));
}

#[test]
fn test_far_edge_margin_accounts_for_size() {
    let steering_cfg = SteeringConfig::default();
    // 800 - 30 - 50 = 720 is the last clear x.
    assert_eq!(
        steering::classify(Vec2::new(720.0, 300.0), SIZE, &arena(), &steering_cfg),
        BorderZone::Clear
    );
    assert_eq!(
        steering::classify(Vec2::new(721.0, 300.0), SIZE, &arena(), &steering_cfg),
        BorderZone::Safety
    );
    // 800 - 30 - 20 = 750.
    assert_eq!(
        steering::classify(Vec2::new(751.0, 300.0), SIZE, &arena(), &steering_cfg),
        BorderZone::Critical
    );
}

#[test]
fn test_custom_margins() {
    let steering_cfg = SteeringConfig {
        safety_margin: 100.0,
        critical_margin: 60.0,
        ..Default::default()
    };
    assert_eq!(
        steering::classify(Vec2::new(80.0, 300.0), SIZE, &arena(), &steering_cfg),
        BorderZone::Safety
    );
    assert_eq!(
        steering::classify(Vec2::new(400.0, 520.0), SIZE, &arena(), &steering_cfg),
        BorderZone::Critical
    );
}

// ---- Bounds ----

#[test]
fn test_enemy_bounces_inside_violated_edge() {
    let cfg = SteeringConfig::default();
    let low =
        steering::resolve_bounds(Vec2::new(-5.0, -1.0), SIZE, ActorKind::Enemy, &arena(), &cfg);
    assert_eq!(low, Vec2::new(10.0, 10.0));

    let high =
        steering::resolve_bounds(Vec2::new(790.0, 580.0), SIZE, ActorKind::Enemy, &arena(), &cfg);
    assert_eq!(high, Vec2::new(760.0, 560.0));
}

#[test]
fn test_enemy_bounce_stays_inside_cramped_arena() {
    // Only 5px of travel on x, less than the bounce inset.
    let cramped = ArenaConfig {
        width: 35.0,
        height: 600.0,
    };
    let cfg = SteeringConfig::default();

    let low =
        steering::resolve_bounds(Vec2::new(-1.0, 100.0), SIZE, ActorKind::Enemy, &cramped, &cfg);
    assert_eq!(low.x, 5.0);

    let high =
        steering::resolve_bounds(Vec2::new(8.0, 100.0), SIZE, ActorKind::Enemy, &cramped, &cfg);
    assert_eq!(high.x, 0.0);

    let mut c = ctx(ActorKind::Enemy, 3.0, 300.0, 1.0, 0.0);
    c.speed = 10.0;
    let p = steering::evaluate(&c, &cramped, &cfg).position;
    assert!((0.0..=cramped.width - SIZE).contains(&p.x), "x out of bounds: {p:?}");
}

#[test]
fn test_player_clamps_exactly() {
    let cfg = SteeringConfig::default();
    let p =
        steering::resolve_bounds(Vec2::new(-5.0, 700.0), SIZE, ActorKind::Player, &arena(), &cfg);
    assert_eq!(p, Vec2::new(0.0, 570.0));
}

#[test]
fn test_in_range_axis_untouched_while_other_bounces() {
    let cfg = SteeringConfig::default();
    let p =
        steering::resolve_bounds(Vec2::new(123.5, -3.0), SIZE, ActorKind::Enemy, &arena(), &cfg);
    assert_eq!(p, Vec2::new(123.5, 10.0));
}

#[test]
fn test_toward_center_at_center_is_zero() {
    assert_eq!(steering::toward_center(arena().center(), &arena()), Vec2::ZERO);
}

#[test]
fn test_resolved_enemy_position_always_in_arena() {
    let cfg = SteeringConfig::default();
    let a = arena();
    for &(x, y) in &[(0.0, 0.0), (770.0, 570.0), (2.0, 560.0), (760.0, 15.0)] {
        for &(dx, dy) in &[(-1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (1.0, -1.0)] {
            let mut c = ctx(ActorKind::Enemy, x, y, dx, dy);
            c.speed = 25.0;
            let p = steering::evaluate(&c, &a, &cfg).position;
            assert!((0.0..=a.width - SIZE).contains(&p.x), "x out of bounds: {p:?}");
            assert!((0.0..=a.height - SIZE).contains(&p.y), "y out of bounds: {p:?}");
        }
    }
}

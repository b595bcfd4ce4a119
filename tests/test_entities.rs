use macroquad::math::vec2;

use sky_patrol::config::GameConfig;
use sky_patrol::entities::*;

#[test]
fn enemy_kind_tables() {
    assert_eq!(EnemyKind::Drone.hit_points(), 2);
    assert_eq!(EnemyKind::Ufo.hit_points(), 3);
    assert_eq!(EnemyKind::Fighter.hit_points(), 12);

    assert!(EnemyKind::Drone.fires_back());
    assert!(EnemyKind::Ufo.fires_back());
    assert!(!EnemyKind::Fighter.fires_back());
}

#[test]
fn entity_ids_are_unique_and_comparable() {
    let cfg = GameConfig::base();
    let mut state = GameState::new(Player::new(&cfg), 0);
    let a = state.alloc_id();
    let b = state.alloc_id();
    assert_ne!(a, b);
    assert_eq!(a, a);
}

#[test]
fn target_pos_checks_liveness() {
    let cfg = GameConfig::base();
    let mut state = GameState::new(Player::new(&cfg), 0);

    let enemy_id = state.alloc_id();
    state.enemies.push(Enemy {
        id: enemy_id,
        kind: EnemyKind::Drone,
        pos: vec2(100.0, 200.0),
        vel: vec2(0.0, 2.0),
        hp: 2,
        shoot_cd: 60,
    });
    let boss_id = state.alloc_id();
    state.boss = Some(Boss {
        id: boss_id,
        pos: vec2(270.0, 150.0),
        hp: 150,
        max_hp: 150,
        t: 0,
        entered: true,
        shoot_cd: 40,
    });

    assert_eq!(state.target_pos(enemy_id), Some(vec2(100.0, 200.0)));
    assert_eq!(state.target_pos(boss_id), Some(vec2(270.0, 150.0)));

    // Removal invalidates the handle irreversibly
    state.enemies.clear();
    assert_eq!(state.target_pos(enemy_id), None);
    state.boss = None;
    assert_eq!(state.target_pos(boss_id), None);
}

#[test]
fn centered_rect_is_centered() {
    let r = centered_rect(vec2(100.0, 50.0), 20.0, 10.0);
    assert_eq!(r.x, 90.0);
    assert_eq!(r.y, 45.0);
    assert_eq!(r.w, 20.0);
    assert_eq!(r.h, 10.0);
}

#[test]
fn game_state_clone_is_independent() {
    let cfg = GameConfig::base();
    let original = GameState::new(Player::new(&cfg), 0);
    let mut cloned = original.clone();

    cloned.player.pos.x = 9999.0;
    cloned.score = 999;
    cloned.bullets.push(Bullet {
        pos: vec2(5.0, 5.0),
        vy: -14.0,
    });

    assert_eq!(original.player.pos.x, cfg.width / 2.0);
    assert_eq!(original.score, 0);
    assert!(original.bullets.is_empty());
}

#[test]
fn config_scale_caps_at_reference_resolution() {
    let small = GameConfig::new(324.0, 540.0);
    assert!((small.scale - 0.6).abs() < 1e-6);
    assert!((small.px(10.0) - 6.0).abs() < 1e-4);

    // A display taller than the reference never scales the game up
    let big = GameConfig::new(1080.0, 1800.0);
    assert_eq!(big.scale, 1.0);
}

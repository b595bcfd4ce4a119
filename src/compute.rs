/// Pure game-logic functions.
///
/// `tick` takes an immutable reference to the current `GameState` (plus the
/// sampled input, the window config, and an RNG handle) and returns a
/// brand-new `GameState` together with the `GameEvent`s raised during the
/// frame.  Side effects are limited to the injected RNG, so a seeded RNG
/// makes every frame fully deterministic.

use macroquad::math::{vec2, Vec2};
use rand::Rng;

use crate::config::{self, GameConfig};
use crate::entities::{
    Boss, Bullet, Enemy, EnemyBullet, EnemyKind, EntityId, Explosion, GameEvent, GameState,
    GameStatus, HomingMissile, InputState, Player,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session: empty collections, a new player, score zero.  The
/// best score is carried in from the previous session of this process run.
pub fn init_state(cfg: &GameConfig, best: u32) -> GameState {
    GameState::new(Player::new(cfg), best)
}

// ── Cadence & steering kernels ───────────────────────────────────────────────

/// Frames between automatic enemy spawns.  Shrinks by one frame per
/// `SPAWN_RAMP` frames of play, floored at the minimum interval.
pub fn spawn_interval(diff: u32, cfg: &GameConfig) -> u32 {
    let base = cfg.px(config::SPAWN_BASE_INTERVAL) as u32;
    let floor = cfg.px(config::SPAWN_MIN_INTERVAL) as u32;
    floor.max(base.saturating_sub(diff / config::SPAWN_RAMP))
}

/// One frame of homing-missile steering.  With a live target the velocity
/// blends toward the unit target direction at `turn_rate` per frame (so the
/// heading converges exponentially and never overshoots); without one, the
/// vertical component snaps to full climb and any horizontal residue remains.
pub fn steer_velocity(
    vel: Vec2,
    pos: Vec2,
    target: Option<Vec2>,
    speed: f32,
    turn_rate: f32,
) -> Vec2 {
    match target {
        Some(t) => {
            let d = t - pos;
            let n = d / (d.length() + 1e-5);
            vel * (1.0 - turn_rate) + n * speed * turn_rate
        }
        None => vec2(vel.x, -speed),
    }
}

/// Pick the live enemy or boss closest to `from` by squared distance.
/// Ties go to the earlier entity in iteration order (enemies before boss).
pub fn nearest_target(state: &GameState, from: Vec2) -> Option<EntityId> {
    let candidates = state
        .enemies
        .iter()
        .map(|e| (e.id, e.pos))
        .chain(state.boss.iter().map(|b| (b.id, b.pos)));

    let mut best: Option<(EntityId, f32)> = None;
    for (id, pos) in candidates {
        let d2 = pos.distance_squared(from);
        match best {
            Some((_, bd)) if bd <= d2 => {}
            _ => best = Some((id, d2)),
        }
    }
    best.map(|(id, _)| id)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame: input → entity updates → collision
/// resolution → score/status mutation.  Rendering reads the result; sounds
/// come out as `GameEvent`s.
pub fn tick(
    state: &GameState,
    input: &InputState,
    cfg: &GameConfig,
    rng: &mut impl Rng,
) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();

    if next.status != GameStatus::Playing {
        return (next, events);
    }

    // ── 1. Player movement, timers, firing ──────────────────────────────────
    update_player(&mut next.player, input, cfg);

    next.fire_cooldown = next.fire_cooldown.saturating_sub(1);
    if input.fire && next.fire_cooldown == 0 {
        fire_twin_shot(&mut next, cfg);
        next.fire_cooldown = cfg.px(config::FIRE_COOLDOWN) as u32;
        events.push(GameEvent::Shoot);
    }

    if input.missile {
        launch_missile(&mut next, cfg, &mut events);
    }

    // ── 2. Wave cadence & boss arrival ───────────────────────────────────────
    next.diff += 1;
    next.spawn_timer += 1;
    if next.spawn_timer >= spawn_interval(next.diff, cfg) {
        next.spawn_timer = 0;
        spawn_enemy(&mut next, cfg, rng);
    }

    if next.score >= next.next_boss_score && next.boss.is_none() {
        spawn_boss(&mut next, cfg);
    }

    // ── 3. Advance every entity ──────────────────────────────────────────────
    advance_bullets(&mut next, cfg);
    advance_missiles(&mut next, cfg);
    advance_enemies(&mut next, cfg);
    advance_boss(&mut next, cfg);
    advance_effects(&mut next);

    // ── 4. Return fire ───────────────────────────────────────────────────────
    enemy_fire(&mut next, cfg, rng, &mut events);
    boss_volley(&mut next, cfg);

    // ── 5. Damage resolution ─────────────────────────────────────────────────
    resolve_projectile_hits(&mut next, cfg, rng, &mut events);
    resolve_player_contact(&mut next, cfg);

    (next, events)
}

// ── Player ───────────────────────────────────────────────────────────────────

fn update_player(p: &mut Player, input: &InputState, cfg: &GameConfig) {
    let speed = cfg.px(config::PLAYER_SPEED);
    let dx = (input.right as i32 - input.left as i32) as f32;
    let dy = (input.down as i32 - input.up as i32) as f32;
    p.pos.x += dx * speed;
    p.pos.y += dy * speed;

    // Keep the whole sprite inside the window
    let half = cfg.px(config::PLAYER_SIZE) / 2.0;
    p.pos.x = p.pos.x.clamp(half, cfg.width - half);
    p.pos.y = p.pos.y.clamp(half, cfg.height - half);

    p.invuln = p.invuln.saturating_sub(1);
    p.shield_timer = p.shield_timer.saturating_sub(1);
    p.missile_cd = p.missile_cd.saturating_sub(1);
}

/// Twin shot: two bullets symmetric around the nose.
fn fire_twin_shot(next: &mut GameState, cfg: &GameConfig) {
    let nose_y = next.player.pos.y - cfg.px(config::PLAYER_SIZE) / 2.0;
    let spread = cfg.px(config::SHOT_SPREAD);
    let vy = cfg.px(config::BULLET_SPEED);
    for dx in [-spread, spread] {
        next.bullets.push(Bullet {
            pos: vec2(next.player.pos.x + dx, nose_y),
            vy,
        });
    }
}

/// Launch a guided missile if ammo and cooldown allow, acquiring the nearest
/// live target at launch time (lock-on is optional — with no target the
/// missile just flies straight).
fn launch_missile(next: &mut GameState, cfg: &GameConfig, events: &mut Vec<GameEvent>) {
    if next.player.missiles == 0 || next.player.missile_cd > 0 {
        return;
    }
    let pos = vec2(
        next.player.pos.x,
        next.player.pos.y - cfg.px(config::PLAYER_SIZE) / 2.0,
    );
    let target = nearest_target(next, pos);
    if target.is_some() {
        events.push(GameEvent::LockOn);
    }
    next.missiles.push(HomingMissile {
        pos,
        vel: vec2(0.0, -cfg.px(config::MISSILE_SPEED)),
        target,
    });
    next.player.missiles -= 1;
    next.player.missile_cd = cfg.px(config::MISSILE_COOLDOWN) as u32;
    events.push(GameEvent::MissileLaunch);
    events.push(GameEvent::Flyby);
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Weighted wave pick: drones are the common variant, ufos the rarer one.
/// Fighters exist as a kind but are not part of the random mix.
fn spawn_enemy(next: &mut GameState, cfg: &GameConfig, rng: &mut impl Rng) {
    let kind = if rng.gen_bool(config::DRONE_WEIGHT) {
        EnemyKind::Drone
    } else {
        EnemyKind::Ufo
    };
    let margin = cfg.px(config::ENEMY_SPAWN_MARGIN);
    let x = rng.gen_range(margin..=cfg.width - margin);
    let y = cfg.px(-40.0) + cfg.px(config::ENEMY_SIZE) / 2.0;
    let vy = cfg.px(rng.gen_range(2..=5) as f32);
    let vx = if kind == EnemyKind::Drone {
        0.0
    } else {
        cfg.px(rng.gen_range(-2..=2) as f32)
    };
    let shoot_cd =
        rng.gen_range(config::ENEMY_SHOOT_CD_MIN..=config::ENEMY_SHOOT_CD_MAX) as i32;
    let id = next.alloc_id();
    next.enemies.push(Enemy {
        id,
        kind,
        pos: vec2(x, y),
        vel: vec2(vx, vy),
        hp: kind.hit_points(),
        shoot_cd,
    });
}

fn spawn_boss(next: &mut GameState, cfg: &GameConfig) {
    let id = next.alloc_id();
    let (_, h) = config::BOSS_SIZE;
    next.boss = Some(Boss {
        id,
        pos: vec2(cfg.width / 2.0, cfg.px(-160.0) + cfg.px(h) / 2.0),
        hp: config::BOSS_HP,
        max_hp: config::BOSS_HP,
        t: 0,
        entered: false,
        shoot_cd: config::BOSS_FIRST_VOLLEY_CD as i32,
    });
}

// ── Entity advancement ───────────────────────────────────────────────────────

fn advance_bullets(next: &mut GameState, cfg: &GameConfig) {
    let (_, bh) = config::BULLET_SIZE;
    let half = cfg.px(bh) / 2.0;
    for b in &mut next.bullets {
        b.pos.y += b.vy;
    }
    next.bullets
        .retain(|b| b.pos.y + half >= 0.0 && b.pos.y - half <= cfg.height);

    let (_, eh) = config::ENEMY_BULLET_SIZE;
    let half = cfg.px(eh) / 2.0;
    for b in &mut next.enemy_bullets {
        b.pos.y += b.vy;
    }
    next.enemy_bullets.retain(|b| b.pos.y - half <= cfg.height);
}

fn advance_missiles(next: &mut GameState, cfg: &GameConfig) {
    // Resolve target handles up front; stale ids fall back to straight flight
    let target_positions: Vec<Option<Vec2>> = next
        .missiles
        .iter()
        .map(|m| m.target.and_then(|id| next.target_pos(id)))
        .collect();

    let speed = cfg.px(config::MISSILE_SPEED);
    for (m, target) in next.missiles.iter_mut().zip(target_positions) {
        m.vel = steer_velocity(m.vel, m.pos, target, speed, config::MISSILE_TURN_RATE);
        m.pos += m.vel;
    }

    let (_, mh) = config::MISSILE_SIZE;
    let half = cfg.px(mh) / 2.0;
    let margin = cfg.px(config::MISSILE_MARGIN);
    next.missiles
        .retain(|m| m.pos.y + half >= -margin && m.pos.y - half <= cfg.height + margin);
}

fn advance_enemies(next: &mut GameState, cfg: &GameConfig) {
    let half = cfg.px(config::ENEMY_SIZE) / 2.0;
    let margin = cfg.px(config::ENEMY_CULL_MARGIN);
    for e in &mut next.enemies {
        e.pos += e.vel;
        e.shoot_cd -= 1;
    }
    next.enemies.retain(|e| {
        e.pos.y - half <= cfg.height + margin
            && e.pos.x + half >= -margin
            && e.pos.x - half <= cfg.width + margin
    });
}

fn advance_boss(next: &mut GameState, cfg: &GameConfig) {
    if let Some(b) = &mut next.boss {
        b.t += 1;
        let half_h = cfg.px(config::BOSS_SIZE.1) / 2.0;
        if !b.entered {
            b.pos.y += cfg.px(config::BOSS_ENTRY_SPEED);
            if b.pos.y - half_h >= cfg.px(config::BOSS_PATROL_TOP) {
                b.entered = true;
            }
        } else {
            b.pos.x = cfg.width / 2.0
                + cfg.px(config::BOSS_PATROL_AMPLITUDE)
                    * (b.t as f32 / config::BOSS_PATROL_PERIOD).sin();
        }
        b.shoot_cd -= 1;
    }
}

fn advance_effects(next: &mut GameState) {
    for fx in &mut next.effects {
        fx.timer += 1;
        if fx.timer % config::EXPLOSION_FRAME_TICKS == 0 {
            fx.frame += 1;
        }
    }
    next.effects.retain(|fx| fx.frame < config::EXPLOSION_FRAMES);
}

// ── Return fire ──────────────────────────────────────────────────────────────

fn enemy_fire(
    next: &mut GameState,
    cfg: &GameConfig,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    let half = cfg.px(config::ENEMY_SIZE) / 2.0;
    let vy = cfg.px(config::ENEMY_BULLET_SPEED);
    let GameState {
        enemies,
        enemy_bullets,
        ..
    } = next;
    for e in enemies.iter_mut() {
        if !e.kind.fires_back() {
            continue;
        }
        // Only fire once fully on screen
        if e.shoot_cd <= 0 && e.pos.y - half > 0.0 {
            e.shoot_cd =
                rng.gen_range(config::ENEMY_SHOOT_CD_MIN..=config::ENEMY_SHOOT_CD_MAX) as i32;
            enemy_bullets.push(EnemyBullet {
                pos: vec2(e.pos.x, e.pos.y + half),
                vy,
            });
            if rng.gen_bool(config::FLAK_SOUND_CHANCE) {
                events.push(GameEvent::Flak);
            }
        }
    }
}

fn boss_volley(next: &mut GameState, cfg: &GameConfig) {
    let mut volley = Vec::new();
    if let Some(b) = &mut next.boss {
        if b.entered && b.shoot_cd <= 0 {
            b.shoot_cd = config::BOSS_VOLLEY_CD as i32;
            let bottom = b.pos.y + cfg.px(config::BOSS_SIZE.1) / 2.0;
            let vy = cfg.px(config::ENEMY_BULLET_SPEED);
            for dx in config::BOSS_VOLLEY_OFFSETS {
                volley.push(EnemyBullet {
                    pos: vec2(b.pos.x + cfg.px(dx), bottom),
                    vy,
                });
            }
        }
    }
    next.enemy_bullets.extend(volley);
}

// ── Damage resolution ────────────────────────────────────────────────────────

/// Each projectile that overlaps a target is removed and deals its fixed
/// damage (bullets 1, missiles 3, vs the boss 1 and 5).  Deaths award score
/// and spawn explosion effects.
fn resolve_projectile_hits(
    next: &mut GameState,
    cfg: &GameConfig,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    // Player bullets vs enemies
    {
        let GameState {
            bullets, enemies, ..
        } = next;
        bullets.retain(|b| {
            let br = b.rect(cfg);
            match enemies.iter_mut().find(|e| e.rect(cfg).overlaps(&br)) {
                Some(e) => {
                    e.hp -= config::BULLET_DAMAGE;
                    false
                }
                None => true,
            }
        });
    }

    // Missiles vs enemies
    {
        let GameState {
            missiles, enemies, ..
        } = next;
        missiles.retain(|m| {
            let mr = m.rect(cfg);
            match enemies.iter_mut().find(|e| e.rect(cfg).overlaps(&mr)) {
                Some(e) => {
                    e.hp -= config::MISSILE_DAMAGE;
                    false
                }
                None => true,
            }
        });
    }

    // Remaining projectiles vs the boss
    let GameState {
        bullets,
        missiles,
        boss,
        ..
    } = next;
    if let Some(boss) = boss {
        let boss_rect = boss.rect(cfg);
        bullets.retain(|b| {
            if b.rect(cfg).overlaps(&boss_rect) {
                boss.hp -= config::BULLET_DAMAGE;
                false
            } else {
                true
            }
        });
        missiles.retain(|m| {
            if m.rect(cfg).overlaps(&boss_rect) {
                boss.hp -= config::MISSILE_BOSS_DAMAGE;
                false
            } else {
                true
            }
        });
    }

    // Enemy deaths: fixed score award plus an explosion at the wreck
    let mut wrecks: Vec<Vec2> = Vec::new();
    next.enemies.retain(|e| {
        if e.hp <= 0 {
            wrecks.push(e.pos);
            false
        } else {
            true
        }
    });
    for pos in wrecks {
        next.score += config::ENEMY_SCORE;
        next.effects.push(Explosion::new(pos));
        events.push(GameEvent::Explosion);
    }

    // Boss death: big score, a cluster of explosions, a higher bar next time
    if let Some(boss) = next.boss.take() {
        if boss.hp > 0 {
            next.boss = Some(boss);
        } else {
            next.score += config::BOSS_SCORE;
            next.next_boss_score += config::BOSS_SCORE_STEP;
            let (sx, sy) = config::BOSS_WRECK_SPREAD;
            let (sx, sy) = (cfg.px(sx), cfg.px(sy));
            for _ in 0..config::BOSS_WRECK_COUNT {
                let off = vec2(rng.gen_range(-sx..=sx), rng.gen_range(-sy..=sy));
                next.effects.push(Explosion::new(boss.pos + off));
            }
            events.push(GameEvent::Explosion);
        }
    }
}

/// Player contact with enemies, the boss, or enemy bullets.  Ignored entirely
/// while invulnerable; otherwise the shield absorbs exactly one hit (without
/// granting invulnerability) before a life is lost.
fn resolve_player_contact(next: &mut GameState, cfg: &GameConfig) {
    if next.player.invuln != 0 {
        return;
    }
    let pr = next.player.rect(cfg);
    let mut hit = false;

    next.enemies.retain(|e| {
        if e.rect(cfg).overlaps(&pr) {
            hit = true;
            false
        } else {
            true
        }
    });
    if let Some(b) = &next.boss {
        if b.rect(cfg).overlaps(&pr) {
            hit = true;
        }
    }
    next.enemy_bullets.retain(|b| {
        if b.rect(cfg).overlaps(&pr) {
            hit = true;
            false
        } else {
            true
        }
    });

    if !hit {
        return;
    }
    if next.player.shield_timer > 0 {
        next.player.shield_timer = 0;
        return;
    }

    next.player.lives = next.player.lives.saturating_sub(1);
    next.player.invuln = cfg.px(config::INVULN_FRAMES) as u32;
    next.combo = 0;
    next.combo_timer = 0;
    if next.player.lives == 0 {
        next.best = next.best.max(next.score);
        next.status = GameStatus::GameOver;
    }
}

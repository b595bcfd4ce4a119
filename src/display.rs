/// Rendering layer — all drawing lives here.
///
/// Each function receives an immutable view of the game state; no game logic
/// is performed.  Every sprite has a procedural placeholder so a missing
/// texture degrades to simple shapes instead of failing.

use macroquad::prelude::*;

use crate::assets::Images;
use crate::config::{self, GameConfig};
use crate::entities::{
    Boss, Bullet, Enemy, EnemyBullet, Explosion, GameState, HomingMissile, Player,
};

// ── Colour palette (placeholder shapes & text) ───────────────────────────────

const C_SKY: Color = Color::new(0.07, 0.09, 0.16, 1.0);
const C_HULL: Color = Color::new(0.78, 0.78, 0.82, 1.0);
const C_BULLET: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const C_ENEMY_BULLET: Color = Color::new(1.0, 0.31, 0.47, 1.0);
const C_MISSILE: Color = Color::new(0.86, 0.86, 0.86, 1.0);
const C_MISSILE_TAIL: Color = Color::new(0.78, 0.0, 0.0, 1.0);
const C_ENEMY: Color = Color::new(0.78, 0.39, 0.39, 1.0);
const C_BOSS: Color = Color::new(0.35, 0.43, 0.31, 1.0);
const C_FLAME: Color = Color::new(1.0, 0.71, 0.16, 1.0);
const C_SHIELD: Color = Color::new(0.47, 0.78, 1.0, 1.0);
const C_BLAST: Color = Color::new(1.0, 0.78, 0.0, 1.0);
const C_HUD: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const C_TIP: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const C_OVER: Color = Color::new(1.0, 0.31, 0.47, 1.0);
const C_BEST: Color = Color::new(0.86, 0.86, 0.55, 1.0);

// ── Scrolling background ─────────────────────────────────────────────────────

/// Vertical offsets of the two background layers.
pub struct Scroll {
    bg_y: f32,
    clouds_y: f32,
}

impl Scroll {
    pub fn new(cfg: &GameConfig) -> Self {
        Scroll {
            bg_y: 0.0,
            clouds_y: -cfg.height / 2.0,
        }
    }
}

pub fn draw_background(images: &Images, scroll: &mut Scroll, cfg: &GameConfig) {
    clear_background(C_SKY);
    if let Some(tex) = &images.background {
        scroll.bg_y = (scroll.bg_y + cfg.px(2.0)).rem_euclid(cfg.height);
        draw_layer(tex, scroll.bg_y, cfg);
    }
    if let Some(tex) = &images.clouds {
        scroll.clouds_y = (scroll.clouds_y + cfg.px(1.0)).rem_euclid(cfg.height);
        draw_layer(tex, scroll.clouds_y, cfg);
    }
}

/// One layer drawn twice so the seam wraps seamlessly.
fn draw_layer(tex: &Texture2D, y: f32, cfg: &GameConfig) {
    let dest = Some(vec2(cfg.width, cfg.height));
    for offset in [y - cfg.height, y] {
        draw_texture_ex(
            tex,
            0.0,
            offset,
            WHITE,
            DrawTextureParams {
                dest_size: dest,
                ..Default::default()
            },
        );
    }
}

// ── In-game frame ────────────────────────────────────────────────────────────

/// Draw every live entity plus the HUD.  `time` drives the shield pulse.
pub fn render_game(state: &GameState, images: &Images, cfg: &GameConfig, time: f64) {
    for e in &state.enemies {
        draw_enemy(e, images, cfg);
    }
    if let Some(b) = &state.boss {
        draw_boss(b, images, cfg);
    }
    for b in &state.bullets {
        draw_bullet(b, images, cfg);
    }
    for b in &state.enemy_bullets {
        draw_enemy_bullet(b, images, cfg);
    }
    for m in &state.missiles {
        draw_missile(m, images, cfg);
    }
    draw_player(&state.player, images, cfg, time);
    for fx in &state.effects {
        draw_explosion(fx, images, cfg);
    }
    draw_hud(state, cfg);
}

fn draw_sprite(tex: &Texture2D, rect: Rect) {
    draw_texture_ex(
        tex,
        rect.x,
        rect.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(rect.w, rect.h)),
            ..Default::default()
        },
    );
}

fn draw_player(p: &Player, images: &Images, cfg: &GameConfig, time: f64) {
    let r = p.rect(cfg);
    match &images.player {
        Some(tex) => draw_sprite(tex, r),
        None => {
            // Delta-wing silhouette with a center spine
            let nose = vec2(p.pos.x, r.y + cfg.px(6.0));
            let left = vec2(r.x + cfg.px(8.0), r.y + r.h - cfg.px(6.0));
            let right = vec2(r.x + r.w - cfg.px(8.0), r.y + r.h - cfg.px(6.0));
            draw_triangle(nose, left, right, C_HULL);
            draw_line(nose.x, nose.y, nose.x, nose.y + r.h * 0.6, 2.0, WHITE);
        }
    }

    // Twin afterburner flames under the engines
    let off = cfg.px(12.0);
    let base_y = r.y + r.h - cfg.px(10.0);
    for dx in [-off, off] {
        let x = p.pos.x + dx;
        draw_triangle(
            vec2(x - 3.0, base_y + 8.0),
            vec2(x + 3.0, base_y + 8.0),
            vec2(x, base_y + 16.0),
            C_FLAME,
        );
    }

    if p.shield_timer > 0 {
        let pulse = (time * 1000.0 / 120.0).sin() as f32;
        let radius = r.w.max(r.h) / 2.0 + 3.0 + 3.0 * pulse;
        draw_circle_lines(p.pos.x, p.pos.y, radius, 2.0, C_SHIELD);
    }
}

fn draw_bullet(b: &Bullet, images: &Images, cfg: &GameConfig) {
    let r = b.rect(cfg);
    match &images.bullet {
        Some(tex) => draw_sprite(tex, r),
        None => draw_rectangle(r.x, r.y, r.w, r.h, C_BULLET),
    }
}

fn draw_enemy_bullet(b: &EnemyBullet, images: &Images, cfg: &GameConfig) {
    let r = b.rect(cfg);
    match &images.enemy_bullet {
        Some(tex) => draw_sprite(tex, r),
        None => draw_rectangle(r.x, r.y, r.w, r.h, C_ENEMY_BULLET),
    }
}

fn draw_missile(m: &HomingMissile, images: &Images, cfg: &GameConfig) {
    let r = m.rect(cfg);
    match &images.missile {
        Some(tex) => draw_sprite(tex, r),
        None => {
            draw_rectangle(r.x, r.y, r.w, r.h, C_MISSILE);
            // Exhaust nub at the tail
            draw_triangle(
                vec2(r.x, r.y + r.h),
                vec2(r.x + r.w, r.y + r.h),
                vec2(r.x + r.w / 2.0, r.y + r.h + cfg.px(4.0)),
                C_MISSILE_TAIL,
            );
        }
    }
}

fn draw_enemy(e: &Enemy, images: &Images, cfg: &GameConfig) {
    let r = e.rect(cfg);
    match images.enemy(e.kind) {
        Some(tex) => draw_sprite(tex, r),
        None => draw_circle(e.pos.x, e.pos.y, r.w / 2.0 - 3.0, C_ENEMY),
    }
}

fn draw_boss(b: &Boss, images: &Images, cfg: &GameConfig) {
    let r = b.rect(cfg);
    match images.boss() {
        Some(tex) => draw_sprite(tex, r),
        None => draw_rectangle(r.x, r.y, r.w, r.h, C_BOSS),
    }

    // Health bar above the hull
    let frac = (b.hp.max(0) as f32) / b.max_hp as f32;
    let bar_w = r.w * 0.8;
    let bar_x = b.pos.x - bar_w / 2.0;
    let bar_y = r.y - cfg.px(10.0);
    draw_rectangle(bar_x, bar_y, bar_w, 4.0, DARKGRAY);
    draw_rectangle(bar_x, bar_y, bar_w * frac, 4.0, RED);
}

fn draw_explosion(fx: &Explosion, images: &Images, cfg: &GameConfig) {
    match &images.explosion {
        Some(atlas) => {
            // 3×3 grid of animation frames
            let cell_w = atlas.width() / 3.0;
            let cell_h = atlas.height() / 3.0;
            let col = (fx.frame % 3) as f32;
            let row = (fx.frame / 3) as f32;
            let size = cell_w * config::EXPLOSION_ATLAS_SCALE * cfg.scale;
            draw_texture_ex(
                atlas,
                fx.pos.x - size / 2.0,
                fx.pos.y - size / 2.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(size, size)),
                    source: Some(Rect::new(col * cell_w, row * cell_h, cell_w, cell_h)),
                    ..Default::default()
                },
            );
        }
        None => {
            // Shrinking fireball
            let progress = fx.frame as f32 / config::EXPLOSION_FRAMES as f32;
            let radius = cfg.px(config::EXPLOSION_SIZE) / 2.0 * (1.0 - progress * 0.5);
            draw_circle(fx.pos.x, fx.pos.y, radius, C_BLAST);
        }
    }
}

fn draw_hud(state: &GameState, cfg: &GameConfig) {
    let text = format!(
        "Score {}   Lives {}   Missiles {}",
        state.score, state.player.lives, state.player.missiles
    );
    draw_text(&text, 10.0, 10.0 + cfg.px(20.0), cfg.px(20.0).max(14.0), C_HUD);
}

// ── Screens ──────────────────────────────────────────────────────────────────

pub fn render_menu(cfg: &GameConfig) {
    centered_text("SKY PATROL", -60.0, 30.0, WHITE, cfg);
    centered_text(
        "ENTER/SPACE: play & shoot  |  M: guided missile  |  P: pause",
        -20.0,
        20.0,
        C_TIP,
        cfg,
    );
    centered_text("ESC: quit", 20.0, 20.0, C_TIP, cfg);
}

pub fn render_pause(cfg: &GameConfig) {
    centered_text("PAUSED (P to resume)", 0.0, 30.0, WHITE, cfg);
}

pub fn render_over(state: &GameState, cfg: &GameConfig) {
    centered_text("GAME OVER", -60.0, 30.0, C_OVER, cfg);
    centered_text(&format!("Score: {}", state.score), -20.0, 20.0, C_HUD, cfg);
    centered_text(&format!("Best: {}", state.best), 10.0, 20.0, C_BEST, cfg);
    centered_text("ENTER: play again  |  ESC: quit", 40.0, 20.0, C_TIP, cfg);
}

/// Horizontally centered text at a vertical offset from the screen center
/// (offset and font size in reference pixels).
fn centered_text(text: &str, y_offset: f32, size: f32, color: Color, cfg: &GameConfig) {
    let font_size = cfg.px(size).max(14.0);
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        (cfg.width - dims.width) / 2.0,
        cfg.height / 2.0 + cfg.px(y_offset),
        font_size,
        color,
    );
}

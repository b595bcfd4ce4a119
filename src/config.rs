/// Window geometry and every gameplay tuning constant.
///
/// The original layout targets a 540×900 portrait playfield at 60 FPS; on
/// smaller displays the whole game scales down uniformly.  The computed
/// dimensions are threaded explicitly through `compute` and `display` rather
/// than living in process-wide globals.

// ── Reference resolution ─────────────────────────────────────────────────────

pub const BASE_WIDTH: f32 = 540.0;
pub const BASE_HEIGHT: f32 = 900.0;
pub const TARGET_FPS: f64 = 60.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 84.0;
pub const PLAYER_SPEED: f32 = 7.0;
pub const PLAYER_LIVES: u32 = 3;
pub const PLAYER_MISSILES: u32 = 20;
/// Frames of invulnerability granted after losing a life.
pub const INVULN_FRAMES: f32 = 90.0;
/// Frames between shots while the fire key is held.
pub const FIRE_COOLDOWN: f32 = 6.0;
/// Frames between guided-missile launches.
pub const MISSILE_COOLDOWN: f32 = 40.0;
/// Horizontal offset of each bullet of the twin shot from the nose.
pub const SHOT_SPREAD: f32 = 8.0;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const BULLET_SIZE: (f32, f32) = (6.0, 18.0);
pub const BULLET_SPEED: f32 = -14.0;
pub const ENEMY_BULLET_SIZE: (f32, f32) = (5.0, 14.0);
pub const ENEMY_BULLET_SPEED: f32 = 6.0;

pub const MISSILE_SIZE: (f32, f32) = (8.0, 24.0);
pub const MISSILE_SPEED: f32 = 8.0;
/// Fraction of the homing correction blended into the velocity each frame.
pub const MISSILE_TURN_RATE: f32 = 0.10;
/// Missiles live this many pixels past the top/bottom edges before removal.
pub const MISSILE_MARGIN: f32 = 40.0;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: f32 = 44.0;
/// Horizontal margin for enemy spawn positions.
pub const ENEMY_SPAWN_MARGIN: f32 = 24.0;
/// Enemies are culled this many pixels past the playfield edges.
pub const ENEMY_CULL_MARGIN: f32 = 50.0;
pub const ENEMY_SHOOT_CD_MIN: u32 = 60;
pub const ENEMY_SHOOT_CD_MAX: u32 = 120;
pub const ENEMY_SCORE: u32 = 10;
/// Chance that an enemy shot is accompanied by a flak sound.
pub const FLAK_SOUND_CHANCE: f64 = 0.3;
/// Probability of spawning a drone (vs. a ufo) per wave slot.
pub const DRONE_WEIGHT: f64 = 0.6;

/// Spawn cadence: interval starts at `SPAWN_BASE_INTERVAL` frames and shrinks
/// by one frame per `SPAWN_RAMP` frames of play, floored at
/// `SPAWN_MIN_INTERVAL`.
pub const SPAWN_BASE_INTERVAL: f32 = 28.0;
pub const SPAWN_MIN_INTERVAL: f32 = 14.0;
pub const SPAWN_RAMP: u32 = 150;

// ── Boss ─────────────────────────────────────────────────────────────────────

pub const BOSS_SIZE: (f32, f32) = (280.0, 180.0);
pub const BOSS_HP: i32 = 150;
pub const BOSS_SCORE: u32 = 350;
/// Score at which the first boss appears.
pub const FIRST_BOSS_SCORE: u32 = 400;
/// Threshold increase after each boss defeat.
pub const BOSS_SCORE_STEP: u32 = 500;
pub const BOSS_ENTRY_SPEED: f32 = 2.0;
/// Top-edge y at which the entry phase ends and the patrol begins.
pub const BOSS_PATROL_TOP: f32 = 20.0;
pub const BOSS_PATROL_AMPLITUDE: f32 = 140.0;
/// Divisor of the patrol phase counter inside the sine.
pub const BOSS_PATROL_PERIOD: f32 = 60.0;
pub const BOSS_VOLLEY_CD: u32 = 40;
/// Initial cooldown before the first volley.
pub const BOSS_FIRST_VOLLEY_CD: u32 = 45;
pub const BOSS_VOLLEY_OFFSETS: [f32; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
/// Spawn offsets for the six explosions of a boss kill.
pub const BOSS_WRECK_SPREAD: (f32, f32) = (40.0, 20.0);
pub const BOSS_WRECK_COUNT: usize = 6;

// ── Damage table ─────────────────────────────────────────────────────────────

pub const BULLET_DAMAGE: i32 = 1;
pub const MISSILE_DAMAGE: i32 = 3;
pub const MISSILE_BOSS_DAMAGE: i32 = 5;

// ── Explosions ───────────────────────────────────────────────────────────────

pub const EXPLOSION_SIZE: f32 = 64.0;
/// Atlas cells are drawn at this fraction of their native size.
pub const EXPLOSION_ATLAS_SCALE: f32 = 0.28;
/// The atlas is a 3×3 grid.
pub const EXPLOSION_FRAMES: usize = 9;
/// Frames of game time per animation frame.
pub const EXPLOSION_FRAME_TICKS: u32 = 3;

// ── Audio volumes ────────────────────────────────────────────────────────────

pub const MUSIC_VOLUME: f32 = 0.35;
pub const ENGINE_VOLUME: f32 = 0.25;
pub const SFX_VOLUME: f32 = 0.8;

// ── Runtime configuration ────────────────────────────────────────────────────

/// Window dimensions plus the uniform graphics scale, computed once at
/// startup and passed to every constructor that needs screen geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl GameConfig {
    /// Derive the config from the actual window size.  The scale is the
    /// ratio to the reference height, capped at 1.0 so the game never
    /// renders larger than the reference resolution.
    pub fn new(width: f32, height: f32) -> Self {
        GameConfig {
            width,
            height,
            scale: (height / BASE_HEIGHT).min(1.0),
        }
    }

    /// Config at the full reference resolution (scale 1.0).
    pub fn base() -> Self {
        GameConfig::new(BASE_WIDTH, BASE_HEIGHT)
    }

    /// A base-resolution pixel measure converted to window pixels.
    pub fn px(&self, v: f32) -> f32 {
        v * self.scale
    }
}

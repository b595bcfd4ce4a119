/// All game entity types — pure data, no logic.

use macroquad::math::{Rect, Vec2};

use crate::config::{self, GameConfig};

// ── Identity ──────────────────────────────────────────────────────────────────

/// Handle to a live enemy or boss.  Ids are handed out monotonically by the
/// game state and never reused, so a stale handle simply stops resolving —
/// a homing missile whose target died keeps the handle and flies straight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityId(pub u32);

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Drone,
    Ufo,
    Fighter,
}

impl EnemyKind {
    pub fn hit_points(self) -> i32 {
        match self {
            EnemyKind::Drone => 2,
            EnemyKind::Ufo => 3,
            EnemyKind::Fighter => 12,
        }
    }

    /// Fighters never return fire; drones and ufos do.
    pub fn fires_back(self) -> bool {
        !matches!(self, EnemyKind::Fighter)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// One-shot things that happened during a tick.  The pure core never touches
/// the audio subsystem; the frontend maps these to sounds after the fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Shoot,
    MissileLaunch,
    LockOn,
    Flyby,
    Flak,
    Explosion,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Keyboard state sampled once per frame by the frontend.  Movement and fire
/// are level-triggered (held keys); the missile flag is edge-triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub missile: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    /// Center position.
    pub pos: Vec2,
    pub lives: u32,
    /// Frames of post-hit invulnerability remaining.
    pub invuln: u32,
    /// Frames of shield remaining; the shield absorbs one hit when it pops.
    pub shield_timer: u32,
    /// Guided missiles left in the magazine.
    pub missiles: u32,
    pub missile_cd: u32,
}

impl Player {
    pub fn new(cfg: &GameConfig) -> Self {
        Player {
            pos: Vec2::new(
                cfg.width / 2.0,
                cfg.height - 40.0 - cfg.px(config::PLAYER_SIZE) / 2.0,
            ),
            lives: config::PLAYER_LIVES,
            invuln: 0,
            shield_timer: 0,
            missiles: config::PLAYER_MISSILES,
            missile_cd: 0,
        }
    }

    pub fn rect(&self, cfg: &GameConfig) -> Rect {
        let s = cfg.px(config::PLAYER_SIZE);
        centered_rect(self.pos, s, s)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub pos: Vec2,
    pub vy: f32,
}

#[derive(Clone, Debug)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vy: f32,
}

#[derive(Clone, Debug)]
pub struct HomingMissile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Target handle; `None` (or a stale id) means straight flight.
    pub target: Option<EntityId>,
}

impl Bullet {
    pub fn rect(&self, cfg: &GameConfig) -> Rect {
        let (w, h) = config::BULLET_SIZE;
        centered_rect(self.pos, cfg.px(w), cfg.px(h))
    }
}

impl EnemyBullet {
    pub fn rect(&self, cfg: &GameConfig) -> Rect {
        let (w, h) = config::ENEMY_BULLET_SIZE;
        centered_rect(self.pos, cfg.px(w), cfg.px(h))
    }
}

impl HomingMissile {
    pub fn rect(&self, cfg: &GameConfig) -> Rect {
        let (w, h) = config::MISSILE_SIZE;
        centered_rect(self.pos, cfg.px(w), cfg.px(h))
    }
}

// ── Enemy & boss ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub hp: i32,
    /// Frames until this enemy may fire again (unused by fighters).
    pub shoot_cd: i32,
}

impl Enemy {
    pub fn rect(&self, cfg: &GameConfig) -> Rect {
        let s = cfg.px(config::ENEMY_SIZE);
        centered_rect(self.pos, s, s)
    }
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub id: EntityId,
    pub pos: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    /// Patrol phase counter, in frames since spawn.
    pub t: u32,
    /// False while descending onto the screen.
    pub entered: bool,
    pub shoot_cd: i32,
}

impl Boss {
    pub fn rect(&self, cfg: &GameConfig) -> Rect {
        let (w, h) = config::BOSS_SIZE;
        centered_rect(self.pos, cfg.px(w), cfg.px(h))
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// Transient, purely visual explosion animation.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub pos: Vec2,
    /// Index into the animation sequence.
    pub frame: usize,
    pub timer: u32,
}

impl Explosion {
    pub fn new(pos: Vec2) -> Self {
        Explosion { pos, frame: 0, timer: 0 }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire per-session state.  Cloneable so the pure update functions can
/// return a new copy without mutating the original.  Every entity belongs to
/// exactly one of the collections below; removal is immediate and final.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub missiles: Vec<HomingMissile>,
    pub effects: Vec<Explosion>,

    pub score: u32,
    /// Highest score seen this process run; survives restarts.
    pub best: u32,
    /// Score at which the next boss appears.
    pub next_boss_score: u32,

    /// Latent score-multiplier state: reset on damage, never read by scoring.
    pub combo: u32,
    pub combo_timer: u32,

    pub fire_cooldown: u32,
    pub spawn_timer: u32,
    /// Difficulty counter; grows one per frame and shortens the wave cadence.
    pub diff: u32,

    pub status: GameStatus,
    next_id: u32,
}

impl GameState {
    pub fn new(player: Player, best: u32) -> Self {
        GameState {
            player,
            enemies: Vec::new(),
            boss: None,
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            missiles: Vec::new(),
            effects: Vec::new(),
            score: 0,
            best,
            next_boss_score: config::FIRST_BOSS_SCORE,
            combo: 0,
            combo_timer: 0,
            fire_cooldown: 0,
            spawn_timer: 0,
            diff: 0,
            status: GameStatus::Playing,
            next_id: 0,
        }
    }

    /// Hand out the next entity id (never reused within a session).
    pub fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Resolve a target handle to its current center, checking liveness
    /// against both the enemy collection and the boss.
    pub fn target_pos(&self, id: EntityId) -> Option<Vec2> {
        if let Some(e) = self.enemies.iter().find(|e| e.id == id) {
            return Some(e.pos);
        }
        match &self.boss {
            Some(b) if b.id == id => Some(b.pos),
            _ => None,
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

pub fn centered_rect(center: Vec2, w: f32, h: f32) -> Rect {
    Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
}

/// Asset-directory resolution and image loading.
///
/// Missing files are not errors: every loader returns an `Option` and the
/// renderer substitutes procedurally drawn placeholder shapes, so the game
/// runs identically with no assets directory present at all.

use std::path::{Path, PathBuf};

use macroquad::texture::{load_texture, FilterMode, Texture2D};

use crate::entities::EnemyKind;

// ── Directory probing ─────────────────────────────────────────────────────────

/// Candidate locations for the assets tree, in probe order: next to the
/// executable (packaged layout), one level above it, the crate source tree,
/// then the working directory.
pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut cands = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            cands.push(dir.join("assets"));
            if let Some(parent) = dir.parent() {
                cands.push(parent.join("assets"));
            }
        }
    }
    cands.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"));
    cands.push(PathBuf::from("assets"));
    cands
}

/// First candidate that exists as a directory.
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|d| d.is_dir()).cloned()
}

/// The assets directory to use: the first existing candidate, or the first
/// candidate as-is when none exist (every load then falls back cleanly).
pub fn resolve_assets_dir() -> PathBuf {
    let cands = candidate_dirs();
    match first_existing(&cands) {
        Some(dir) => dir,
        None => cands
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from("assets")),
    }
}

// ── Image bank ────────────────────────────────────────────────────────────────

/// Every texture the game can show.  `None` means "draw the placeholder".
pub struct Images {
    pub player: Option<Texture2D>,
    pub bullet: Option<Texture2D>,
    pub missile: Option<Texture2D>,
    pub enemy_drone: Option<Texture2D>,
    pub enemy_ufo: Option<Texture2D>,
    pub enemy_fighter: Option<Texture2D>,
    pub enemy_bullet: Option<Texture2D>,
    pub background: Option<Texture2D>,
    pub clouds: Option<Texture2D>,
    /// 3×3 animation atlas.
    pub explosion: Option<Texture2D>,
}

impl Images {
    pub async fn load(dir: &Path) -> Images {
        Images {
            player: image(dir, "player.png").await,
            bullet: image(dir, "bullet.png").await,
            missile: image(dir, "missile.png").await,
            enemy_drone: image(dir, "enemy_drone.png").await,
            enemy_ufo: image(dir, "enemy_ufo.png").await,
            enemy_fighter: image(dir, "enemy_fighter.png").await,
            enemy_bullet: image(dir, "enemy_bullet.png").await,
            background: image(dir, "background.png").await,
            clouds: image(dir, "background_clouds.png").await,
            explosion: image(dir, "explosion_atlas_512x512.png").await,
        }
    }

    pub fn enemy(&self, kind: EnemyKind) -> Option<&Texture2D> {
        match kind {
            EnemyKind::Drone => self.enemy_drone.as_ref(),
            EnemyKind::Ufo => self.enemy_ufo.as_ref(),
            EnemyKind::Fighter => self.enemy_fighter.as_ref(),
        }
    }

    /// The heavy fighter doubles as the boss sprite.
    pub fn boss(&self) -> Option<&Texture2D> {
        self.enemy_fighter.as_ref()
    }
}

async fn image(dir: &Path, name: &str) -> Option<Texture2D> {
    let path = dir.join("images").join(name);
    if !path.exists() {
        return None;
    }
    match load_texture(&path.to_string_lossy()).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            Some(tex)
        }
        Err(_) => None,
    }
}

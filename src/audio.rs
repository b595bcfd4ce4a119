/// Sound bank and playback.
///
/// Load failures and missing files alike leave a slot empty and that sound
/// simply never plays.  The background music is started once and runs for
/// the process lifetime; the engine loop restarts with each new game.

use std::path::Path;

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

use crate::config;
use crate::entities::GameEvent;

pub struct AudioBank {
    shoot: Option<Sound>,
    missile: Option<Sound>,
    lock: Option<Sound>,
    explosion: Option<Sound>,
    flak: Option<Sound>,
    flyby: Option<Sound>,
    engine: Option<Sound>,
    music: Option<Sound>,
}

impl AudioBank {
    pub async fn load(dir: &Path) -> AudioBank {
        AudioBank {
            shoot: sound(dir, "shoot").await,
            missile: sound(dir, "missile").await,
            lock: sound(dir, "lock").await,
            explosion: sound(dir, "explosion").await,
            flak: sound(dir, "flak").await,
            flyby: sound(dir, "flyby").await,
            engine: sound(dir, "engine_loop").await,
            music: sound(dir, "bgm_war").await,
        }
    }

    /// Start the background music loop.  Called exactly once per process;
    /// restarts never re-trigger it.
    pub fn start_music(&self) {
        if let Some(m) = &self.music {
            play_sound(
                m,
                PlaySoundParams {
                    looped: true,
                    volume: config::MUSIC_VOLUME,
                },
            );
        }
    }

    pub fn stop_music(&self) {
        if let Some(m) = &self.music {
            stop_sound(m);
        }
    }

    /// (Re)start the ambient engine loop for a new game.
    pub fn start_engine(&self) {
        if let Some(s) = &self.engine {
            stop_sound(s);
            play_sound(
                s,
                PlaySoundParams {
                    looped: true,
                    volume: config::ENGINE_VOLUME,
                },
            );
        }
    }

    pub fn stop_engine(&self) {
        if let Some(s) = &self.engine {
            stop_sound(s);
        }
    }

    /// One-shot effect for a game event.
    pub fn play(&self, event: GameEvent) {
        let slot = match event {
            GameEvent::Shoot => &self.shoot,
            GameEvent::MissileLaunch => &self.missile,
            GameEvent::LockOn => &self.lock,
            GameEvent::Flyby => &self.flyby,
            GameEvent::Flak => &self.flak,
            GameEvent::Explosion => &self.explosion,
        };
        if let Some(s) = slot {
            play_sound(
                s,
                PlaySoundParams {
                    looped: false,
                    volume: config::SFX_VOLUME,
                },
            );
        }
    }
}

/// Load `<stem>.wav`, falling back to `<stem>.ogg`.
async fn sound(dir: &Path, stem: &str) -> Option<Sound> {
    for ext in ["wav", "ogg"] {
        let path = dir.join("sounds").join(format!("{stem}.{ext}"));
        if !path.exists() {
            continue;
        }
        if let Ok(s) = load_sound(&path.to_string_lossy()).await {
            return Some(s);
        }
    }
    None
}

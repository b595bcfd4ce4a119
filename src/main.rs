use std::time::Duration;

use macroquad::prelude::*;
use ::rand::thread_rng;

use sky_patrol::assets::{resolve_assets_dir, Images};
use sky_patrol::audio::AudioBank;
use sky_patrol::compute;
use sky_patrol::config::{self, GameConfig};
use sky_patrol::display::{self, Scroll};
use sky_patrol::entities::{GameStatus, InputState};

// ── App state machine ─────────────────────────────────────────────────────────

/// menu → game → {pause ⇄ game, over};  over → game on restart.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AppState {
    Menu,
    Game,
    Pause,
    Over,
}

/// Sample the keyboard once per frame.  Movement and fire are held keys;
/// the missile trigger is a discrete press.
fn sample_input() -> InputState {
    InputState {
        left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        fire: is_key_down(KeyCode::Space),
        missile: is_key_pressed(KeyCode::M),
    }
}

fn confirm_pressed() -> bool {
    is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space)
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Sky Patrol".to_owned(),
        window_width: config::BASE_WIDTH as i32,
        window_height: config::BASE_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[macroquad::main(window_conf)]
async fn main() {
    let assets_dir = resolve_assets_dir();
    let images = Images::load(&assets_dir).await;
    let audio = AudioBank::load(&assets_dir).await;

    // Window geometry, computed once and threaded through everything
    let cfg = GameConfig::new(screen_width(), screen_height());
    let mut rng = thread_rng();
    let mut scroll = Scroll::new(&cfg);

    // Plays for the whole process lifetime; restarts never touch it
    audio.start_music();

    let mut app = AppState::Menu;
    let mut state = compute::init_state(&cfg, 0);

    loop {
        let frame_start = get_time();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        match app {
            AppState::Menu => {
                display::draw_background(&images, &mut scroll, &cfg);
                display::render_menu(&cfg);
                if confirm_pressed() {
                    state = compute::init_state(&cfg, state.best);
                    audio.start_engine();
                    app = AppState::Game;
                }
            }
            AppState::Game => {
                let input = sample_input();
                let (next, events) = compute::tick(&state, &input, &cfg, &mut rng);
                state = next;
                for ev in events {
                    audio.play(ev);
                }

                display::draw_background(&images, &mut scroll, &cfg);
                display::render_game(&state, &images, &cfg, get_time());

                if is_key_pressed(KeyCode::P) {
                    app = AppState::Pause;
                } else if state.status == GameStatus::GameOver {
                    app = AppState::Over;
                }
            }
            AppState::Pause => {
                display::draw_background(&images, &mut scroll, &cfg);
                display::render_game(&state, &images, &cfg, get_time());
                display::render_pause(&cfg);
                if is_key_pressed(KeyCode::P) {
                    app = AppState::Game;
                }
            }
            AppState::Over => {
                display::draw_background(&images, &mut scroll, &cfg);
                display::render_over(&state, &cfg);
                if is_key_pressed(KeyCode::Enter) {
                    state = compute::init_state(&cfg, state.best);
                    audio.start_engine();
                    app = AppState::Game;
                }
            }
        }

        // Hold the fixed frame rate even with vsync off
        let elapsed = get_time() - frame_start;
        let frame = 1.0 / config::TARGET_FPS;
        if elapsed < frame {
            std::thread::sleep(Duration::from_secs_f64(frame - elapsed));
        }
        next_frame().await;
    }

    // User-requested exit: silence everything before the window goes away
    audio.stop_engine();
    audio.stop_music();
}

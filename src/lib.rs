//! Sky Patrol — a single-screen, top-down arcade shoot-em-up.
//!
//! The crate is split so that everything the game *decides* lives in pure,
//! window-free modules (`config`, `entities`, `compute`) and everything the
//! game *shows or plays* lives in macroquad-backed modules (`assets`,
//! `audio`, `display`).  Integration tests drive the pure half directly.

pub mod assets;
pub mod audio;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;

// main.rs
mod audio_manager;
mod core;
mod render;

use std::thread;
use std::time::{Duration, Instant};

use raylib::prelude::*;
use tracing::{info, warn};

use audio_manager::AudioManager;
use crate::core::config::{GameConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::core::game::Game;
use crate::core::input::Flow;
use crate::core::process_events::process_events;
use render::render_frame;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let (mut window, raylib_thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(WINDOW_TITLE)
        .build();
    // Escape is handled as a game key
    window.set_exit_key(None);

    let audio = match AudioManager::new() {
        Ok(audio) => Some(audio),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "audio disabled");
            None
        }
    };

    let mut game = Game::new(GameConfig::default(), Instant::now());
    info!(time_limit = game.config.time_limit, goals = game.session.total, "session started");

    while !window.window_should_close() {
        if process_events(&mut window, &mut game) == Flow::Quit {
            info!("quit requested");
            break;
        }

        let events = game.tick(Instant::now());
        if let Some(audio) = &audio {
            audio.handle_events(&events);
        }

        render_frame(&mut window, &raylib_thread, &game);

        // ~60 FPS (16 ms)
        thread::sleep(Duration::from_millis(16));
    }
    Ok(())
}

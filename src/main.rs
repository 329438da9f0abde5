use std::path::Path;
use std::time::Duration;

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::prelude::*;

use snake_canvas::app::App;
use snake_canvas::config::{CONFIG_PATH, GameConfig};
use snake_canvas::geometry::BOARD_PX;
use snake_canvas::input::KeyQueue;
use snake_canvas::logger::init_logger;
use snake_canvas::render::{HUD_HEIGHT, Hud, draw_frame};
use snake_canvas::store::JsonFileStore;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: BOARD_PX as i32 + 40,
        window_height: (BOARD_PX + HUD_HEIGHT) as i32 + 40,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let loaded = GameConfig::load(Path::new(CONFIG_PATH));
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logger(config.log_level());
    match &loaded {
        Ok(_) => log::info!("config: {:?} variant, save file {}", config.variant, config.save_path),
        Err(e) => log::warn!("using default config, {} unusable: {}", CONFIG_PATH, e),
    }

    let store = JsonFileStore::new(&config.save_path);
    let seed = (macroquad::miniquad::date::now() * 1_000_000.0) as u64;
    let mut app = App::new(&config, store, seed);
    let subscriber = register_input_subscriber();
    let mut keys = KeyQueue::new();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        repeat_all_miniquad_input(&mut keys, subscriber);
        let actions = keys.drain();
        let dt = Duration::from_secs_f32(get_frame_time().max(0.0));
        app.update(&actions, dt);

        let hud = Hud {
            score: app.state().score(),
            high_score: app.high_score(),
            new_record: app.is_new_record(),
        };
        draw_frame(app.state(), app.theme(), app.animation(), &hud);

        next_frame().await;
    }

    log::info!("bye, best score {}", app.high_score());
}

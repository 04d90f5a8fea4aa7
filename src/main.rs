//! PINCHBOX: a touch/mouse playground for a rotatable region of interest
//!
//! One ROI on one surface. Drag it to pan, pinch to resize, twist to
//! rotate, or grab the bottom-right handle to scale and rotate about the
//! center with a single pointer. Press R to reset.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod geometry;
mod gesture;
mod input;
mod roi;
mod view;

use macroquad::prelude::*;

use app::AppState;
use input::PointerAdapter;

const SETTINGS_PATH: &str = "pinchbox.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("PINCHBOX v{}", VERSION),
        window_width: 960,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Touches must not also arrive as synthetic mouse input
    simulate_mouse_with_touch(false);

    let settings = match config::load_or_init(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load {}: {}, using defaults", SETTINGS_PATH, e);
            config::Settings::default()
        }
    };
    println!(
        "Settings: resistance {:.2}, handle {:.0}px",
        settings.scale_resistance, settings.handle_size
    );

    let mut state = AppState::new(settings);
    let mut adapter = PointerAdapter::new();

    loop {
        if is_key_pressed(KeyCode::R) {
            state.reset();
        }

        let events = adapter.poll();
        state.process_events(&events);

        clear_background(view::BG_COLOR);
        view::draw_roi(&state.roi, state.settings.handle_size, state.active_mode());
        view::draw_status(&state.roi, state.active_mode());

        next_frame().await;
    }
}

mod app;
mod components;
mod config;
mod fonts;
mod routers;
mod theme;
mod widgets;

use env_logger::Env;
use iced::{Size, window};

use crate::app::App;
use crate::config::model::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = config::load();
    let window_size = config.window_size();
    log::info!(
        "starting with {:?} in a {}x{} window",
        config.initial_color(),
        window_size.width,
        window_size.height
    );

    iced::application(move || App::new(&config), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: window_size,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..window::Settings::default()
        })
        .resizable(true)
        .run()
}

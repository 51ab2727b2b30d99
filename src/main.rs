//! Activity indicator demo - a spinner with three-button controls

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod demo;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(demo::Demo::new, demo::Demo::update, demo::Demo::view)
        .title(demo::Demo::title)
        .theme(demo::Demo::theme)
        .subscription(demo::Demo::subscription)
        .window_size(iced::Size::new(260.0, 300.0))
        .antialiasing(true)
        .run()
}

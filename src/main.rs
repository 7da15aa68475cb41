// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Devfolio - Main Entry Point
//!
//! An IDE-themed personal portfolio. Built with Rust and egui.

mod app;
mod catalog;
mod chat;
mod config;
mod error;
mod export;
mod files;
mod markdown;
mod session;
mod state;
mod theme;
mod transcript;
mod ui;

use app::DevfolioApp;
use config::load_config;
use log::info;

/// Application name constant.
const APP_NAME: &str = "Devfolio";

const WINDOW_TITLE: &str = "Suman Mandal - IDE Portfolio";

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    let settings = load_config();
    let window_size = &settings.window_size;

    info!(
        "Window configuration: {}x{}, maximized: {}",
        window_size.width, window_size.height, window_size.maximized
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([400.0, 300.0])
        .with_maximized(window_size.maximized);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(DevfolioApp::new(cc)))),
    )
}

//! elearn-admin - a terminal admin console for the e-learning platform
//!
//! This is the main entry point for the elearn-admin application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::route::Route;
use crate::model::session::{CookieStore, Session};
use crate::services::{ApiClient, HttpTransport, Services};
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "ELEARN_ADMIN_LOG";

fn main() -> Result<()> {
    init_tracing()?;

    let config = Config::load().context("failed to load config")?;
    info!(api = %config.api_base_url, page_size = config.page_size(), "starting");

    let cookies = match Config::cookie_path() {
        Some(path) => CookieStore::open(&path),
        None => CookieStore::in_memory(),
    };
    let transport = HttpTransport::new(&config.api_base_url, config.request_timeout())?;
    let api = ApiClient::new(Arc::new(transport), cookies.clone());

    // Optional route path to open once logged in
    let initial = std::env::args().nth(1).and_then(|path| {
        let route = Route::from_path(&path);
        if route.is_none() {
            warn!(path = %path, "unknown route, opening the dashboard");
        }
        route
    });

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(
        Services::new(api),
        Session::new(cookies),
        config.page_size(),
        initial,
    );
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exiting");
    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn init_tracing() -> Result<()> {
    let Some(path) = Config::log_path() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("elearn_admin=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                warn!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick to poll requests and expire notices
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}

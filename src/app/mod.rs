//! Application state and logic for the TUI.
//!
//! [`App`] wraps the [`ViewController`] with what the terminal session needs:
//! - the async message channel timers report back on
//! - focus and list selection
//! - terminal dimensions and the animation tick
//!
//! Key handling lives in `handlers`, controller wrappers that schedule the
//! simulated delays live in `navigation`.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, MenuItem};

use std::time::Duration;

use tokio::sync::mpsc;

use crate::assets::AssetCatalog;
use crate::config::AppConfig;
use crate::view_state::{View, ViewController};

/// Main application state
pub struct App {
    /// The view state machine
    pub controller: ViewController,
    pub config: AppConfig,
    /// Logo and hero image probes
    pub assets: AssetCatalog,
    /// Key focus on the Home screen
    pub focus: Focus,
    /// Selected card in the current post list (Home cards or archive)
    pub selected_post: usize,
    /// Highlighted entry of the collapsed menu
    pub menu_index: usize,
    /// First visible line of the open article
    pub article_scroll: u16,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Receiver for timer messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender cloned into timer tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// App with default config and no assets
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// App with the given config; assets are probed under its asset root
    pub fn with_config(config: AppConfig) -> Self {
        let assets = AssetCatalog::discover(&config.asset_root);
        Self::with_config_and_assets(config, assets)
    }

    pub fn with_config_and_assets(config: AppConfig, assets: AssetCatalog) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            controller: ViewController::new(),
            config,
            assets,
            focus: Focus::default(),
            selected_post: 0,
            menu_index: 0,
            article_scroll: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    pub fn view(&self) -> &View {
        self.controller.view()
    }

    /// Handle a timer message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SearchCompleted(request) => {
                self.controller.complete_search(&request);
            }
            AppMessage::LeadCaptured => {
                self.controller.complete_lead();
                tracing::info!("Lead capture completed");
            }
        }
    }

    /// Advance the animation tick. Only the loading screens animate.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.view().is_loading() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Send `msg` on the app channel after `delay`.
    ///
    /// Timers are fire-and-forget; nothing cancels them.
    fn schedule(&self, delay: Duration, msg: AppMessage) {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(msg);
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

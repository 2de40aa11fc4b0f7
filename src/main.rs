use study_monk::app::{App, AppMessage};
use study_monk::cli::{parse_args, run_cli_command};
use study_monk::config::AppConfig;
use study_monk::logging::{default_log_path, init_file_logging};
use study_monk::terminal::{setup_panic_hook, TerminalManager};
use study_monk::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        match result {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error ({}): {}", e.category(), e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = AppConfig::from_env();
    if let Some(path) = default_log_path() {
        // Logging is optional; the page works without it
        if let Err(e) = init_file_logging(&path, &config.log_filter) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    let mut app = App::with_config(config);
    let size = manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app).await;

    manager.restore();
    tracing::info!("Session ended");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let tick = tokio::time::sleep(app.config.tick_rate);

        tokio::select! {
            _ = tick => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                    }
                    // Input stream closed; nothing left to drive the UI
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}

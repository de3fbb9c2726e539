use codefolio::app::{App, AppMessage, FRAME_INTERVAL};
use codefolio::cli::{parse_args, run_cli_command};
use codefolio::content::ContentStore;
use codefolio::startup::{default_log_path, init_logging, open_preferences, StartupConfig};
use codefolio::terminal::{setup_panic_hook, TerminalManager};
use codefolio::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // CLI commands run before the terminal is touched.
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(2);
        }
    };
    let config = StartupConfig::from_env().for_command(&command);
    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }

    if let Some(path) = default_log_path() {
        // Logging is optional; a read-only data dir must not stop the UI.
        if let Err(err) = init_logging(&path, &config.log_filter) {
            eprintln!("Warning: logging disabled ({})", err);
        }
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let prefs = open_preferences(&config);
        let mut app = App::new(&config, prefs, ContentStore::portfolio());

        let mut manager = TerminalManager::new()?;
        let size = manager.size()?;
        app.resize(size.width, size.height);

        let result = run_app(manager.terminal(), &mut app).await;

        app.close();
        manager.restore()?;
        if let Err(err) = &result {
            tracing::error!("event loop failed: {:?}", err);
        }
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(FRAME_INTERVAL);

        tokio::select! {
            // Frame tick: welcome animation, caret blink, notices.
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => app.resize(width, height),
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                }
            }

            // Timers and highlight results
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

use abd_admin::adapters::{FileSessionStore, ReqwestHttpClient};
use abd_admin::app::App;
use abd_admin::cli::{parse_args, run_cli_command, CliCommand};
use abd_admin::config::AdminConfig;
use abd_admin::logging;
use abd_admin::session::Session;
use abd_admin::terminal::{setup_panic_hook, TerminalManager};
use abd_admin::traits::HttpClient;
use abd_admin::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

/// Spinner and redraw cadence while something is loading.
const TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let config = AdminConfig::from_env()?;

    if let Some(result) = run_cli_command(&command, &config).await {
        return result.map_err(Into::into);
    }

    if let Err(err) = logging::init(&config) {
        eprintln!("Logging disabled: {}", err.user_message());
    }

    let mut session = Session::load(FileSessionStore::in_dir(&config.data_dir)).await;
    if let CliCommand::RunTui {
        language: Some(code),
    } = &command
    {
        session.set_language(code).await?;
    }

    let client: Arc<dyn HttpClient> =
        Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout));
    let mut app = App::new(config, session, client);
    app.initialize();

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();

    tracing::info!("Exiting");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<FileSessionStore>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut messages = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("app message channel already taken"))?;
    let redraw = app.redraw_signal();
    let mut tick = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tick.tick() => app.tick(),
            _ = redraw.notified() => app.sync_views().await,
            Some(message) = messages.recv() => app.handle_message(message).await,
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await;
                    app.sync_views().await;
                }
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(err)) => tracing::warn!("Terminal event error: {}", err),
                None => return Ok(()),
            },
        }
    }
}

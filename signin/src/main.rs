//! A terminal sign-in form

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Focus cycling for form fields
mod form_fields;

use app::{App, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::{io, process::ExitCode, sync::Arc};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

#[tokio::main]
async fn main() -> Result<ExitCode, Problem> {
    let config = config::Config::parse();

    // The terminal belongs to the UI, so logs go to a file. Keep the guard
    // alive until we exit so buffered lines get flushed.
    let _guard = init_logging(&config)?;
    tracing::info!(server = %config.server, "starting");

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, EffectContext::new(&config)).await;
    ratatui::restore();

    Ok(res?)
}

/// Send `tracing` output to `signin.log` in the data directory.
fn init_logging(config: &config::Config) -> Result<WorkerGuard, Problem> {
    let appender = rolling::RollingFileAppender::builder()
        .rotation(rolling::Rotation::NEVER)
        .filename_prefix("signin.log")
        .build(config.data_dir())?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}

/// Manage the lifecycle of the app
async fn run(mut terminal: DefaultTerminal, conn: EffectContext) -> io::Result<ExitCode> {
    let mut app = App::new();
    let conn = Arc::new(conn);

    // Side-effectful behaviors (the network request) take place in async
    // tasks. Once those tasks are done, we read their results off of a
    // channel and the app records them in the form store here, on this task.
    // We also watch the store so any change gets drawn.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut form_rx = app.form().subscribe();

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    loop {
        // Wait for either external input, a change to the form, or the
        // result of an effect.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => {
                        Some(app::Action::Key(key_event))
                    }
                    Some(Err(err)) => {
                        tracing::error!(?err, "problem reading terminal events");
                        Some(app::Action::Problem(err.to_string()))
                    }
                    _ => None,
                }
            },

            changed = form_rx.changed() => {
                // The sender lives as long as the app, so this can't fail
                // while we're in the loop.
                changed.ok().map(|()| app::Action::FormChanged)
            },

            effect_opt = effect_rx.recv() => {
                effect_opt
            }
        };

        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                spawn_effect_task(effect_tx.clone(), Arc::clone(&conn), effect);
            }
        }

        // Re-render to display any changes the app cares about.
        terminal.draw(|frame| app.render(frame))?;

        // A sign-in request still in flight isn't worth waiting for on the way
        // out. Its task is dropped with the runtime, and the app has already
        // cancelled its token in case a result sneaks in first.
        if let Some(code) = app.should_exit() {
            tracing::info!("exiting");

            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    conn: Arc<EffectContext>,
    effect: app::Effect,
) {
    tokio::spawn(async move {
        if let Some(next_action) = effect.run(&conn).await {
            // If the channel is closed we're shutting down, and there's nobody
            // left to tell.
            let _ = effect_tx.send(next_action);
        }
    });
}

/// Things that can keep the app from starting or shutting down cleanly.
#[derive(Debug, thiserror::Error)]
enum Problem {
    /// We couldn't draw to or restore the terminal.
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// We couldn't open the log file, e.g. because the data directory isn't
    /// writable.
    #[error("couldn't set up logging: {0}")]
    LogFile(#[from] rolling::InitError),

    /// Something else already installed a global subscriber.
    #[error("couldn't set up logging: {0}")]
    Subscriber(#[from] TryInitError),
}

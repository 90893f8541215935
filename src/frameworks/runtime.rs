// Framework bootstrap: environment, tracing, and wiring the session tasks together.

use crate::domain::{Clock, Tuning};
use crate::frameworks::config;
use crate::interface_adapters::clock::MonotonicClock;
use crate::interface_adapters::console::{read_intents, write_frames};
use crate::use_cases::{CombatDirector, FrameUpdate, GameEvent, LoopSettings, world_task};
use std::io::Result;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::sync::{broadcast, mpsc};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Stdout carries frames, so logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs one session on stdin/stdout with settings from the environment.
pub async fn run() -> Result<()> {
    init_runtime();

    let tuning = config::tuning().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load tuning");
    });
    let tuning = tuning.map_err(std::io::Error::other)?;

    let settings = LoopSettings {
        tick_interval: config::tick_interval(),
        max_ticks: config::max_ticks(),
    };
    tracing::debug!(?tuning, ?settings, "session configured");

    let ticks = run_session(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        tuning,
        MonotonicClock::new(),
        settings,
    )
    .await?;
    tracing::info!(ticks, "session ended");
    Ok(())
}

/// Wires reader -> frame loop -> writer and waits for the loop to finish.
///
/// Returns the number of simulation steps run. The writer drains every broadcast frame
/// before this returns.
pub async fn run_session<R, W, C>(
    input: R,
    output: W,
    tuning: Tuning,
    clock: C,
    settings: LoopSettings,
) -> Result<u64>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
    C: Clock + 'static,
{
    // input_tx/rx: every intent goes to the single frame loop.
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(config::INTENT_CHANNEL_CAPACITY);

    // frame_tx/rx: frames are broadcast; subscribe before the loop starts so none are missed.
    let (frame_tx, frame_rx) = broadcast::channel::<FrameUpdate>(config::FRAME_BROADCAST_CAPACITY);

    let writer = tokio::spawn(write_frames(frame_rx, output));
    let reader = tokio::spawn(async move {
        if let Err(e) = read_intents(input, input_tx).await {
            tracing::warn!(error = %e, "intent reader stopped");
        }
    });

    let director = CombatDirector::new(tuning, clock);
    let ticks = tokio::spawn(world_task(input_rx, frame_tx, director, settings))
        .await
        .map_err(std::io::Error::other)?;

    // The loop has dropped its sender, or ended because the writer failed and dropped its
    // receiver. Either way stop reading input and collect the writer's result.
    reader.abort();
    match writer.await.map_err(std::io::Error::other)? {
        Ok(written) => tracing::debug!(written, "frame writer finished"),
        Err(e) => {
            tracing::error!(error = %e, "frame writer failed");
            return Err(std::io::Error::other(e));
        }
    }

    Ok(ticks)
}

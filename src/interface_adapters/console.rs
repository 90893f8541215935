// Line-oriented console adapter: JSON intents from a reader, JSON frames to a writer.

use crate::domain::Intent;
use crate::interface_adapters::protocol::{FrameDto, InputMessage};
use crate::use_cases::{FrameUpdate, GameEvent};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

const LOG_THROTTLE: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize frame: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("intent channel closed")]
    InputClosed,
}

fn should_log(last: &mut Option<Instant>) -> bool {
    if last.is_some_and(|at| at.elapsed() < LOG_THROTTLE) {
        return false;
    }
    *last = Some(Instant::now());
    true
}

/// Forwards intents until `Quit` or end of input. End of input counts as `Quit`.
///
/// Malformed lines and key-repeat edges are dropped; neither ends the session.
pub async fn read_intents<R>(reader: R, input_tx: mpsc::Sender<GameEvent>) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut last_invalid_log = None;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let msg = match serde_json::from_str::<InputMessage>(line) {
            Ok(msg) => msg,
            Err(e) => {
                if should_log(&mut last_invalid_log) {
                    warn!(error = %e, "invalid input line; dropping");
                }
                continue;
            }
        };

        if msg.repeat {
            debug!(kind = ?msg.kind, "key repeat; dropping");
            continue;
        }

        let event = GameEvent::from(msg.kind);
        input_tx
            .send(event)
            .await
            .map_err(|_| ConsoleError::InputClosed)?;
        if event == GameEvent::Intent(Intent::Quit) {
            return Ok(());
        }
    }

    info!("input ended; requesting quit");
    input_tx
        .send(GameEvent::Intent(Intent::Quit))
        .await
        .map_err(|_| ConsoleError::InputClosed)
}

/// Serializes each frame once and writes it as a JSON line. Returns the number of frames
/// written when the frame channel closes, or the first serialization or write error.
pub async fn write_frames<W>(
    mut frame_rx: broadcast::Receiver<FrameUpdate>,
    mut writer: W,
) -> Result<u64, ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    loop {
        match frame_rx.recv().await {
            Ok(update) => {
                let mut txt = serde_json::to_string(&FrameDto::from(update))?;
                txt.push('\n');
                writer.write_all(txt.as_bytes()).await?;
                writer.flush().await?;
                written += 1;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "frame writer lagged; skipping to latest frame");
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!(written, "frame channel closed; writer exiting");
                return Ok(written);
            }
        }
    }
}

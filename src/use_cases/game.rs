use super::combat::CombatDirector;
use super::types::{FrameUpdate, GameEvent};
use crate::domain::{Clock, Intent};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Fixed interval between simulation steps.
    pub tick_interval: Duration,
    /// Stop after this many steps (None runs until Quit).
    pub max_ticks: Option<u64>,
}

/// Drives the director at a fixed rate until Quit, input disconnect, the tick limit, or
/// until no frame subscriber is left.
///
/// Each iteration drains pending inputs, runs exactly one step and broadcasts the frame.
/// Returns the number of steps run.
pub async fn world_task<C: Clock>(
    mut input_rx: mpsc::Receiver<GameEvent>,
    frame_tx: broadcast::Sender<FrameUpdate>,
    mut director: CombatDirector<C>,
    settings: LoopSettings,
) -> u64 {
    let mut interval = tokio::time::interval(settings.tick_interval);
    info!(
        tick_ms = settings.tick_interval.as_millis() as u64,
        "frame loop started"
    );

    loop {
        interval.tick().await;

        // Process all pending inputs before stepping.
        loop {
            match input_rx.try_recv() {
                Ok(GameEvent::Intent(Intent::Quit)) => {
                    info!(tick = director.tick(), "quit requested");
                    return director.tick();
                }
                Ok(GameEvent::Intent(intent)) => director.apply_intent(intent),
                Ok(GameEvent::ResetHealth) => director.reset_player_health(),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!(tick = director.tick(), "input channel closed; ending session");
                    return director.tick();
                }
            }
        }

        let update = director.step();
        if frame_tx.send(update).is_err() {
            warn!(tick = director.tick(), "no frame subscribers; ending session");
            return director.tick();
        }

        if settings
            .max_ticks
            .is_some_and(|limit| director.tick() >= limit)
        {
            info!(tick = director.tick(), "tick limit reached");
            return director.tick();
        }
    }
}

// The async frame loop and the console session built on it.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use street_brawl::domain::{FrameEvent, Intent, Tuning};
use street_brawl::interface_adapters::clock::ManualClock;
use street_brawl::use_cases::{CombatDirector, FrameUpdate, GameEvent, LoopSettings, world_task};
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{broadcast, mpsc};

fn settings(max_ticks: Option<u64>) -> LoopSettings {
    LoopSettings {
        tick_interval: Duration::from_millis(5),
        max_ticks,
    }
}

#[tokio::test]
async fn queued_fire_shows_up_in_the_first_frame_and_quit_stops_the_loop() {
    let (input_tx, input_rx) = mpsc::channel(16);
    let (frame_tx, mut frame_rx) = broadcast::channel::<FrameUpdate>(16);
    let director = CombatDirector::new(Tuning::default(), ManualClock::new(0));

    input_tx
        .send(GameEvent::Intent(Intent::Fire))
        .await
        .expect("loop input open");
    let handle = tokio::spawn(world_task(input_rx, frame_tx, director, settings(None)));

    let first = frame_rx.recv().await.expect("first frame");
    assert_eq!(first.tick, 1);
    assert_eq!(first.projectiles.len(), 1);
    assert!(first.events.contains(&FrameEvent::ProjectileFired {
        projectile_id: 1,
        direction: 1
    }));

    input_tx
        .send(GameEvent::Intent(Intent::Quit))
        .await
        .expect("loop input open");
    let ticks = handle.await.expect("loop task");
    assert!(ticks >= 1);
}

#[tokio::test]
async fn loop_stops_at_the_tick_limit() {
    let (_input_tx, input_rx) = mpsc::channel(16);
    let (frame_tx, mut frame_rx) = broadcast::channel::<FrameUpdate>(16);
    let director = CombatDirector::new(Tuning::default(), ManualClock::new(0));

    let ticks = world_task(input_rx, frame_tx, director, settings(Some(3))).await;

    assert_eq!(ticks, 3);
    let mut seen = Vec::new();
    while let Ok(frame) = frame_rx.try_recv() {
        seen.push(frame.tick);
    }
    assert_eq!(seen, vec![1, 2, 3]);
}

#[tokio::test]
async fn loop_ends_when_every_input_sender_is_gone() {
    let (input_tx, input_rx) = mpsc::channel(16);
    let (frame_tx, _frame_rx) = broadcast::channel::<FrameUpdate>(16);
    let director = CombatDirector::new(Tuning::default(), ManualClock::new(0));
    drop(input_tx);

    let ticks = world_task(input_rx, frame_tx, director, settings(None)).await;

    assert_eq!(ticks, 0);
}

#[tokio::test]
async fn loop_ends_when_every_frame_subscriber_is_gone() {
    let (_input_tx, input_rx) = mpsc::channel(16);
    let (frame_tx, frame_rx) = broadcast::channel::<FrameUpdate>(16);
    let director = CombatDirector::new(Tuning::default(), ManualClock::new(0));
    drop(frame_rx);

    let ticks = world_task(input_rx, frame_tx, director, settings(None)).await;

    assert_eq!(ticks, 1);
}

// Output that rejects every write, like stdout after the reader hung up.
struct ClosedPipe;

impl AsyncWrite for ClosedPipe {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::from(io::ErrorKind::BrokenPipe)))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn console_session_fails_fast_when_output_is_broken() {
    // Input stays open and there is no tick limit, so only the writer failure can end it.
    let (_input_client, input_server) = tokio::io::duplex(1024);

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        street_brawl::run_session(
            BufReader::new(input_server),
            ClosedPipe,
            Tuning::default(),
            ManualClock::new(0),
            settings(None),
        ),
    )
    .await
    .expect("session should end soon after the writer fails");

    assert!(result.is_err());
}

#[tokio::test]
async fn console_session_writes_one_json_line_per_frame() {
    let (mut input_client, input_server) = tokio::io::duplex(1024);
    let (output_client, output_server) = tokio::io::duplex(64 * 1024);

    input_client
        .write_all(b"{\"type\":\"MoveRightStart\"}\n")
        .await
        .expect("write input");

    let session_settings = LoopSettings {
        tick_interval: Duration::from_millis(20),
        max_ticks: Some(5),
    };
    let ticks = street_brawl::run_session(
        BufReader::new(input_server),
        output_server,
        Tuning::default(),
        ManualClock::new(0),
        session_settings,
    )
    .await
    .expect("session runs");
    assert_eq!(ticks, 5);

    let mut lines = BufReader::new(output_client).lines();
    let mut frames = Vec::new();
    while let Some(line) = lines.next_line().await.expect("read output") {
        let value: serde_json::Value = serde_json::from_str(&line).expect("frame is json");
        frames.push(value);
    }

    let ticks: Vec<u64> = frames
        .iter()
        .map(|f| f["tick"].as_u64().expect("tick"))
        .collect();
    assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
    let last_x = frames[4]["player"]["x"].as_i64().expect("player x");
    assert!(last_x > 30, "player should have walked right, got {last_x}");
    assert_eq!(frames[4]["player"]["animation"], "Walking");
}

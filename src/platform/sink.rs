//! Headless frame sinks

use std::io::Write;

use super::FrameSink;
use crate::sim::{FrameReport, GameEvent};

/// Logs the HUD every `every` ticks and notable events as they happen
#[derive(Debug, Clone)]
pub struct LogSink {
    every: u64,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &FrameReport) {
        for event in &frame.events {
            match event {
                GameEvent::EnemyDestroyed { id } => {
                    log::info!("tick {}: enemy {} down, score {}", frame.tick, id, frame.score);
                }
                GameEvent::PickupCollected { kind, .. } => {
                    log::info!("tick {}: picked up {:?}", frame.tick, kind);
                }
                _ => {}
            }
        }

        if frame.tick % self.every == 0 {
            let hud = frame.hud_lines();
            log::info!(
                "tick {}: {} | {} | {} entities",
                frame.tick,
                hud[0],
                hud[1],
                frame.entities.len()
            );
        }
    }
}

/// Writes each frame as one line of JSON
pub struct JsonSink<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonSink<W> {
    fn present(&mut self, frame: &FrameReport) {
        if self.failed {
            return;
        }
        let written = serde_json::to_writer(&mut self.out, frame)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = written {
            log::error!("Frame output failed, further frames dropped: {}", e);
            self.failed = true;
        }
    }
}

/// Keeps every frame in memory
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    pub frames: Vec<FrameReport>,
}

impl FrameSink for CollectSink {
    fn present(&mut self, frame: &FrameReport) {
        self.frames.push(frame.clone());
    }
}

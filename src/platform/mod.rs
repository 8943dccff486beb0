//! Platform abstraction layer
//!
//! The simulation never reads a keyboard or draws a pixel. These traits are
//! the seams a windowed front end plugs into; the implementations here are
//! headless.

pub mod autopilot;
pub mod sink;

pub use autopilot::{Autopilot, ScriptedInput};
pub use sink::{CollectSink, JsonSink, LogSink};

use crate::sim::{FrameReport, InputSnapshot};

/// Supplies the held keys for the next tick
pub trait InputSource {
    /// `last` is the frame produced by the previous tick
    fn poll(&mut self, last: &FrameReport) -> InputSnapshot;
}

/// Receives every finished tick
pub trait FrameSink {
    fn present(&mut self, frame: &FrameReport);
}

//! Fixed timestep driver
//!
//! Owns a world plus its input and output collaborators. Real elapsed time
//! is fed into an accumulator and drained in whole ticks.

use std::time::{Duration, Instant};

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};
use crate::platform::{FrameSink, InputSource};
use crate::sim::{FrameReport, World, tick};

pub struct Game<I: InputSource, S: FrameSink> {
    pub world: World,
    input: I,
    sink: S,
    accumulator: f32,
    last_frame: FrameReport,
}

impl<I: InputSource, S: FrameSink> Game<I, S> {
    pub fn new(world: World, input: I, sink: S) -> Self {
        let last_frame = FrameReport::capture(&world);
        Self {
            world,
            input,
            sink,
            accumulator: 0.0,
            last_frame,
        }
    }

    /// Run one tick with fresh input and present its frame
    pub fn step(&mut self) {
        let dt = self.world.tuning.tick_dt();
        let input = self.input.poll(&self.last_frame);
        tick(&mut self.world, &input, dt);
        self.last_frame = FrameReport::capture(&self.world);
        self.sink.present(&self.last_frame);
    }

    /// Feed `elapsed` seconds of real time. Returns the ticks run.
    pub fn update(&mut self, elapsed: f32) -> u32 {
        let dt = self.world.tuning.tick_dt();
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= dt && substeps < MAX_SUBSTEPS && !self.finished() {
            self.step();
            self.accumulator -= dt;
            substeps += 1;
        }
        if self.finished() {
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Loop until the input source asks to quit. Returns the last frame.
    pub fn run(&mut self, realtime: bool) -> FrameReport {
        log::info!(
            "Run started (seed {}, {} Hz, {})",
            self.world.seed,
            self.world.tuning.tick_rate,
            if realtime { "realtime" } else { "unpaced" }
        );

        if realtime {
            let frame_time = Duration::from_secs_f32(self.world.tuning.tick_dt());
            let mut last = Instant::now();
            while !self.finished() {
                std::thread::sleep(frame_time);
                let now = Instant::now();
                self.update(now.duration_since(last).as_secs_f32());
                last = now;
            }
        } else {
            while !self.finished() {
                self.step();
            }
        }

        log::info!(
            "Run finished after {} ticks: score {}, health {}, lives {}",
            self.world.time_ticks,
            self.world.score,
            self.world.stats.health,
            self.world.stats.lives
        );
        self.last_frame.clone()
    }

    pub fn finished(&self) -> bool {
        self.world.quit
    }

    pub fn last_frame(&self) -> &FrameReport {
        &self.last_frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Autopilot, CollectSink, ScriptedInput};
    use crate::sim::InputSnapshot;
    use crate::tuning::Tuning;

    #[test]
    fn test_update_runs_whole_ticks() {
        let input = ScriptedInput::new(vec![InputSnapshot::default(); 100]);
        let mut game = Game::new(World::new(1), input, CollectSink::default());

        assert_eq!(game.update(0.01), 0);
        assert_eq!(game.update(0.01), 1);
        assert_eq!(game.world.time_ticks, 1);
        assert_eq!(game.sink().frames.len(), 1);
    }

    #[test]
    fn test_update_caps_substeps() {
        let tuning = Tuning {
            tick_rate: 240,
            ..Default::default()
        };
        let input = ScriptedInput::new(vec![InputSnapshot::default(); 100]);
        let mut game = Game::new(World::with_tuning(1, tuning), input, CollectSink::default());
        // 0.1s would be 24 ticks
        assert_eq!(game.update(5.0), MAX_SUBSTEPS);
        assert_eq!(game.world.time_ticks, u64::from(MAX_SUBSTEPS));
    }

    #[test]
    fn test_run_stops_on_quit() {
        let input = ScriptedInput::new(vec![InputSnapshot::default(); 5]);
        let mut game = Game::new(World::new(1), input, CollectSink::default());
        let last = game.run(false);
        // Five scripted ticks plus the quit tick
        assert_eq!(last.tick, 6);
        assert_eq!(game.sink().frames.len(), 6);
        assert!(game.finished());
        assert_eq!(game.update(1.0), 0);
    }

    #[test]
    fn test_autopilot_demo_run() {
        let world = World::new(2024);
        let pilot = Autopilot::new(Some(1800), world.tuning.screen_width, 100.0);
        let mut game = Game::new(world, pilot, CollectSink::default());
        let last = game.run(false);

        assert_eq!(last.tick, 1800);
        assert!(game.world.registry.is_consistent());
        let frames = &game.sink().frames;
        assert!(frames.windows(2).all(|w| w[0].score <= w[1].score));
        assert!(frames.windows(2).all(|w| w[0].health <= w[1].health));
        assert!(frames.windows(2).all(|w| w[0].lives <= w[1].lives));
    }
}

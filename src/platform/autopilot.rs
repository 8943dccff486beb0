//! Headless input sources

use std::collections::VecDeque;

use super::InputSource;
use crate::sim::{EntityRole, FrameReport, InputSnapshot};

/// Distance ahead at which the demo player jumps an enemy
const JUMP_RANGE: f32 = 90.0;
/// Ticks between shots
const FIRE_INTERVAL: u64 = 12;

/// Demo player: shoots what is ahead, jumps what gets close, walks toward
/// on-screen pickups, and quits after `max_ticks`
#[derive(Debug, Clone)]
pub struct Autopilot {
    max_ticks: Option<u64>,
    screen_width: f32,
    home_x: f32,
}

impl Autopilot {
    pub fn new(max_ticks: Option<u64>, screen_width: f32, home_x: f32) -> Self {
        Self {
            max_ticks,
            screen_width,
            home_x,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, last: &FrameReport) -> InputSnapshot {
        let next_tick = last.tick + 1;
        let quit = self.max_ticks.is_some_and(|max| next_tick >= max);

        let Some(player) = last.player() else {
            return InputSnapshot {
                quit,
                ..Default::default()
            };
        };
        let player_right = player.x + player.width;
        let player_center = player.x + player.width / 2.0;

        let nearest_enemy_gap = last
            .of_role(EntityRole::Enemy)
            .map(|e| e.x - player_right)
            .filter(|gap| *gap >= 0.0)
            .min_by(f32::total_cmp);

        let shoot = nearest_enemy_gap.is_some() && next_tick % FIRE_INTERVAL == 0;
        // Release every other tick so a held key still produces fresh presses
        let jump = nearest_enemy_gap.is_some_and(|gap| gap < JUMP_RANGE) && next_tick % 2 == 0;

        let target_x = last
            .of_role(EntityRole::Collectible)
            .filter(|c| c.x < self.screen_width)
            .map(|c| c.x + c.width / 2.0)
            .min_by(|a, b| (a - player_center).abs().total_cmp(&(b - player_center).abs()))
            .unwrap_or(self.home_x);

        InputSnapshot {
            left: target_x < player_center - 5.0,
            right: target_x > player_center + 5.0,
            jump,
            shoot,
            quit,
        }
    }
}

/// Replays a fixed list of snapshots, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _last: &FrameReport) -> InputSnapshot {
        self.script.pop_front().unwrap_or(InputSnapshot {
            quit: true,
            ..Default::default()
        })
    }
}

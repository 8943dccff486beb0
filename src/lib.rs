//! Side Scroller - a 2D arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, physics, collisions)
//! - `platform`: Input and frame-output seams for the outside world
//! - `game`: Fixed timestep driver tying a world to its collaborators
//! - `settings`: Runtime configuration
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::{OutputFormat, Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will try to catch up on
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Spawn timers
    pub const ENEMY_SPAWN_MS: u32 = 1000;
    pub const COLLECTIBLE_SPAWN_MS: u32 = 5000;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT - 100.0;
    pub const PLAYER_RUN_SPEED: f32 = 5.0;
    pub const JUMP_POWER: f32 = 15.0;
    pub const GRAVITY: f32 = 0.8;
    pub const START_HEALTH: i32 = 100;
    pub const START_LIVES: u32 = 3;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 20.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Enemy defaults (speed range is inclusive)
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const ENEMY_MIN_SPEED: u32 = 2;
    pub const ENEMY_MAX_SPEED: u32 = 5;

    /// Collectible defaults
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLE_SPEED: f32 = 3.0;
    /// Collectibles appear this far past the right edge at most
    pub const COLLECTIBLE_SPAWN_SPREAD: u32 = 500;

    /// Rewards
    pub const SCORE_PER_ENEMY: u64 = 100;
    pub const HEALTH_PICKUP: i32 = 20;
    pub const LIFE_PICKUP: u32 = 1;
}

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Rectangle from its top-left corner and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True when the two rectangles share a non-empty area.
    /// Rectangles that only touch along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Aabb::from_pos_size(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        let inner = Aabb::from_pos_size(Vec2::new(40.0, 40.0), Vec2::new(5.0, 5.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}

//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a settings
//! file can override it. Defaults reproduce the original arcade feel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Fixed ticks per second
    pub tick_rate: u32,

    // === Spawning ===
    pub enemy_spawn_ms: u32,
    pub collectible_spawn_ms: u32,

    // === Player ===
    pub player_size: f32,
    /// Centre of the player at world creation
    pub player_start: (f32, f32),
    pub run_speed: f32,
    pub jump_power: f32,
    /// Added to vertical speed every tick
    pub gravity: f32,
    pub start_health: i32,
    pub start_lives: u32,

    // === Projectiles ===
    pub projectile_size: (f32, f32),
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_size: f32,
    /// Inclusive range of leftward speeds
    pub enemy_speed_min: u32,
    pub enemy_speed_max: u32,

    // === Collectibles ===
    pub collectible_size: f32,
    pub collectible_speed: f32,
    pub collectible_spawn_spread: u32,

    // === Rewards ===
    pub score_per_enemy: u64,
    pub health_pickup: i32,
    pub life_pickup: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,

            enemy_spawn_ms: ENEMY_SPAWN_MS,
            collectible_spawn_ms: COLLECTIBLE_SPAWN_MS,

            player_size: PLAYER_SIZE,
            player_start: (PLAYER_START_X, PLAYER_START_Y),
            run_speed: PLAYER_RUN_SPEED,
            jump_power: JUMP_POWER,
            gravity: GRAVITY,
            start_health: START_HEALTH,
            start_lives: START_LIVES,

            projectile_size: (PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            projectile_speed: PROJECTILE_SPEED,

            enemy_size: ENEMY_SIZE,
            enemy_speed_min: ENEMY_MIN_SPEED,
            enemy_speed_max: ENEMY_MAX_SPEED,

            collectible_size: COLLECTIBLE_SIZE,
            collectible_speed: COLLECTIBLE_SPEED,
            collectible_spawn_spread: COLLECTIBLE_SPAWN_SPREAD,

            score_per_enemy: SCORE_PER_ENEMY,
            health_pickup: HEALTH_PICKUP,
            life_pickup: LIFE_PICKUP,
        }
    }
}

impl Tuning {
    /// The ground line: a grounded player's bottom edge sits exactly here
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height
    }

    /// Fixed timestep in seconds
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    pub fn player_extent(&self) -> Vec2 {
        Vec2::splat(self.player_size)
    }

    pub fn projectile_extent(&self) -> Vec2 {
        Vec2::new(self.projectile_size.0, self.projectile_size.1)
    }

    pub fn enemy_extent(&self) -> Vec2 {
        Vec2::splat(self.enemy_size)
    }

    pub fn collectible_extent(&self) -> Vec2 {
        Vec2::splat(self.collectible_size)
    }

    /// Enemy speed bounds, ordered even if a settings file swaps them
    pub fn enemy_speed_range(&self) -> (u32, u32) {
        let lo = self.enemy_speed_min.min(self.enemy_speed_max);
        let hi = self.enemy_speed_min.max(self.enemy_speed_max);
        (lo, hi)
    }
}

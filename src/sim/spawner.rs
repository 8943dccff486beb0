//! Timer-driven spawning of enemies and collectibles
//!
//! Each timer accumulates elapsed time against its own interval. Firings
//! owed from a long frame are queued, and at most one is consumed per tick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{CollectibleKind, Entity, EntityId, GameEvent, World};
use crate::tuning::Tuning;

/// Periodic timer measured in microseconds so fixed ticks add up exactly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimer {
    interval_us: u64,
    elapsed_us: u64,
    /// Firings not yet turned into entities
    pending: u32,
}

impl SpawnTimer {
    pub fn from_millis(interval_ms: u32) -> Self {
        Self {
            interval_us: u64::from(interval_ms.max(1)) * 1000,
            elapsed_us: 0,
            pending: 0,
        }
    }

    /// Advance by `dt` seconds, queueing any firings that came due
    pub fn advance(&mut self, dt: f32) {
        self.elapsed_us += (f64::from(dt) * 1_000_000.0).round().max(0.0) as u64;
        while self.elapsed_us >= self.interval_us {
            self.elapsed_us -= self.interval_us;
            self.pending += 1;
        }
    }

    /// Consume one queued firing
    pub fn take(&mut self) -> bool {
        if self.pending > 0 {
            self.pending -= 1;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}

/// The two independent spawn timers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    pub enemy: SpawnTimer,
    pub collectible: SpawnTimer,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            enemy: SpawnTimer::from_millis(tuning.enemy_spawn_ms),
            collectible: SpawnTimer::from_millis(tuning.collectible_spawn_ms),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.enemy.advance(dt);
        self.collectible.advance(dt);
    }
}

/// Advance both timers and create at most one enemy and one collectible
pub fn run_spawner(world: &mut World, dt: f32) {
    world.spawner.advance(dt);

    if world.spawner.enemy.take() {
        spawn_enemy(world);
    }
    if world.spawner.collectible.take() {
        let kind = if world.rng.random_bool(0.5) {
            CollectibleKind::Health
        } else {
            CollectibleKind::Life
        };
        spawn_collectible(world, kind);
    }
}

/// Enemy at the right edge with a speed drawn from the tuning range
pub fn spawn_enemy(world: &mut World) -> EntityId {
    let (lo, hi) = world.tuning.enemy_speed_range();
    let speed = world.rng.random_range(lo..=hi) as f32;
    let id = world.next_entity_id();
    world.registry.add(Entity::enemy(id, speed, &world.tuning));
    world.events.push(GameEvent::EnemySpawned { id });
    log::debug!("Enemy {} spawned (speed {})", id, speed);
    id
}

/// Collectible somewhere past the right edge
pub fn spawn_collectible(world: &mut World, kind: CollectibleKind) -> EntityId {
    let left = world.tuning.screen_width as i64;
    let spread = i64::from(world.tuning.collectible_spawn_spread);
    let x = world.rng.random_range(left..=left + spread) as f32;
    let id = world.next_entity_id();
    world
        .registry
        .add(Entity::collectible(id, kind, x, &world.tuning));
    world.events.push(GameEvent::CollectibleSpawned { id, kind });
    log::debug!("Collectible {} ({:?}) spawned at x={}", id, kind, x);
    id
}

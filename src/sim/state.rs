//! World state and core simulation types
//!
//! Everything a tick reads or writes is owned by [`World`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::PlayerStats;
use super::registry::Registry;
use super::spawner::Spawner;
use super::tick::InputSnapshot;
use crate::Aabb;
use crate::tuning::Tuning;

/// Stable entity identifier, allocated in increasing order
pub type EntityId = u32;

/// Effect a collectible applies on pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectibleKind {
    Health,
    Life,
}

/// What an entity is. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Projectile,
    Enemy,
    Collectible(CollectibleKind),
}

/// Kind without payload, used to select registry collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRole {
    Player,
    Projectile,
    Enemy,
    Collectible,
}

impl EntityKind {
    pub fn role(&self) -> EntityRole {
        match self {
            EntityKind::Player => EntityRole::Player,
            EntityKind::Projectile => EntityRole::Projectile,
            EntityKind::Enemy => EntityRole::Enemy,
            EntityKind::Collectible(_) => EntityRole::Collectible,
        }
    }
}

/// Anything simulated. `pos` is the top-left corner in screen space.
/// Liveness only goes from alive to dead, through [`Entity::kill`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    alive: bool,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            vel,
            size,
            alive: true,
        }
    }

    /// Player centred on the configured start point
    pub fn player(id: EntityId, tuning: &Tuning) -> Self {
        let size = tuning.player_extent();
        let center = Vec2::new(tuning.player_start.0, tuning.player_start.1);
        Self::new(id, EntityKind::Player, center - size / 2.0, Vec2::ZERO, size)
    }

    /// Projectile centred on `origin`, flying right
    pub fn projectile(id: EntityId, origin: Vec2, tuning: &Tuning) -> Self {
        let size = tuning.projectile_extent();
        Self::new(
            id,
            EntityKind::Projectile,
            origin - size / 2.0,
            Vec2::new(tuning.projectile_speed, 0.0),
            size,
        )
    }

    /// Enemy entering at the right edge, standing on the ground
    pub fn enemy(id: EntityId, speed: f32, tuning: &Tuning) -> Self {
        let size = tuning.enemy_extent();
        Self::new(
            id,
            EntityKind::Enemy,
            Vec2::new(tuning.screen_width, tuning.ground_y() - size.y),
            Vec2::new(-speed, 0.0),
            size,
        )
    }

    /// Collectible placed at `x`, resting at enemy height
    pub fn collectible(id: EntityId, kind: CollectibleKind, x: f32, tuning: &Tuning) -> Self {
        let size = tuning.collectible_extent();
        Self::new(
            id,
            EntityKind::Collectible(kind),
            Vec2::new(x, tuning.ground_y() - tuning.enemy_size),
            Vec2::new(-tuning.collectible_speed, 0.0),
            size,
        )
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    #[inline]
    pub fn role(&self) -> EntityRole {
        self.kind.role()
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark for removal at the end of the tick. The player cannot die.
    pub fn kill(&mut self) {
        if self.kind != EntityKind::Player {
            self.alive = false;
        }
    }
}

/// Something that happened during a tick, for audio/render collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    ProjectileFired { id: EntityId },
    EnemySpawned { id: EntityId },
    CollectibleSpawned { id: EntityId, kind: CollectibleKind },
    EnemyDestroyed { id: EntityId },
    PickupCollected { id: EntityId, kind: CollectibleKind },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub registry: Registry,
    pub player_id: EntityId,
    pub stats: PlayerStats,
    pub spawner: Spawner,
    /// Never decreases
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Held keys seen on the previous tick (for edge detection)
    pub prev_input: InputSnapshot,
    /// Set once a tick processed a quit request
    pub quit: bool,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: EntityId,
}

impl World {
    /// Create a world with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut world = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            stats: PlayerStats::new(tuning.start_health, tuning.start_lives),
            spawner: Spawner::new(&tuning),
            tuning,
            registry: Registry::default(),
            player_id: 0,
            score: 0,
            time_ticks: 0,
            prev_input: InputSnapshot::default(),
            quit: false,
            events: Vec::new(),
            next_id: 1,
        };

        let id = world.next_entity_id();
        world.registry.add(Entity::player(id, &world.tuning));
        world.player_id = id;

        log::info!("World created (seed {})", seed);
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The player entity. Present for the whole life of the world.
    pub fn player(&self) -> &Entity {
        self.registry
            .get(self.player_id)
            .unwrap_or_else(|| unreachable!("player entity is never removed"))
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        self.registry
            .get_mut(self.player_id)
            .unwrap_or_else(|| unreachable!("player entity is never removed"))
    }

    /// Fire a projectile from the player's right edge, vertically centred
    pub fn fire_projectile(&mut self) -> EntityId {
        let player = self.player();
        let origin = Vec2::new(player.right(), player.center().y);
        let id = self.next_entity_id();
        self.registry.add(Entity::projectile(id, origin, &self.tuning));
        self.events.push(GameEvent::ProjectileFired { id });
        log::debug!("Projectile {} fired at ({}, {})", id, origin.x, origin.y);
        id
    }

    /// Number of live entities of a role
    pub fn count(&self, role: EntityRole) -> usize {
        self.registry.iter(role).filter(|e| e.is_alive()).count()
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod movement;
pub mod player;
pub mod registry;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{resolve_pickups, resolve_projectile_hits, run_collisions};
pub use frame::{EntityView, FrameReport, INSTRUCTIONS};
pub use movement::{PlayerControl, drift, is_grounded, move_player, place_on_ground};
pub use player::PlayerStats;
pub use registry::Registry;
pub use spawner::{SpawnTimer, Spawner, spawn_collectible, spawn_enemy};
pub use state::{CollectibleKind, Entity, EntityId, EntityKind, EntityRole, GameEvent, World};
pub use tick::{InputSnapshot, tick};

//! Player health and lives
//!
//! Only pickups change these. There is no damage rule and no game-over
//! transition, and health is left unclamped.

use serde::{Deserialize, Serialize};

use super::state::CollectibleKind;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i32,
    pub lives: u32,
}

impl PlayerStats {
    pub fn new(health: i32, lives: u32) -> Self {
        Self { health, lives }
    }

    /// Apply one collectible's effect
    pub fn apply(&mut self, kind: CollectibleKind, tuning: &Tuning) {
        match kind {
            CollectibleKind::Health => {
                self.health = self.health.saturating_add(tuning.health_pickup);
            }
            CollectibleKind::Life => {
                self.lives = self.lives.saturating_add(tuning.life_pickup);
            }
        }
    }
}

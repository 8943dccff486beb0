//! Per-kind movement rules and off-screen culling

use glam::Vec2;

use super::state::{Entity, EntityKind, World};
use crate::tuning::Tuning;

/// Player intent for one tick, already edge-filtered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerControl {
    pub left: bool,
    pub right: bool,
    /// Jump was pressed this tick
    pub jump: bool,
}

/// Gravity, jump and ground clamp for the player
pub fn move_player(player: &mut Entity, control: PlayerControl, tuning: &Tuning) {
    player.vel.x = match (control.left, control.right) {
        (true, false) => -tuning.run_speed,
        (false, true) => tuning.run_speed,
        _ => 0.0,
    };

    // Only from the ground; airborne presses are ignored
    if control.jump && player.bottom() == tuning.ground_y() {
        player.vel.y = -tuning.jump_power;
    }

    player.vel.y += tuning.gravity;
    player.pos += player.vel;

    if player.bottom() > tuning.ground_y() {
        player.pos.y = tuning.ground_y() - player.size.y;
        player.vel.y = 0.0;
    }
}

/// Linear drift for everything that is not the player, killing whatever
/// has left the screen
pub fn drift(entity: &mut Entity, tuning: &Tuning) {
    entity.pos += entity.vel;

    let off_screen = match entity.kind() {
        EntityKind::Projectile => entity.left() > tuning.screen_width,
        EntityKind::Enemy | EntityKind::Collectible(_) => entity.right() < 0.0,
        EntityKind::Player => false,
    };
    if off_screen {
        log::trace!("Entity {} left the screen", entity.id);
        entity.kill();
    }
}

/// Move every live entity once
pub fn run_movement(world: &mut World, control: PlayerControl) {
    let tuning = &world.tuning;
    for entity in world.registry.all_mut() {
        if !entity.is_alive() {
            continue;
        }
        match entity.kind() {
            EntityKind::Player => move_player(entity, control, tuning),
            _ => drift(entity, tuning),
        }
    }
}

/// True when the entity stands exactly on the ground line
pub fn is_grounded(entity: &Entity, tuning: &Tuning) -> bool {
    entity.bottom() == tuning.ground_y()
}

/// Place an entity so its bottom edge rests on the ground line
pub fn place_on_ground(entity: &mut Entity, tuning: &Tuning) {
    entity.pos.y = tuning.ground_y() - entity.size.y;
    entity.vel = Vec2::new(entity.vel.x, 0.0);
}

//! Fixed timestep simulation tick
//!
//! Order within a tick: input edges, shooting, spawning, movement,
//! collisions, purge. The frame report is read from the world afterwards.

use serde::{Deserialize, Serialize};

use super::collision::run_collisions;
use super::movement::{PlayerControl, run_movement};
use super::spawner::run_spawner;
use super::state::World;

/// Keys held during a tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    /// Space
    pub jump: bool,
    /// F
    pub shoot: bool,
    /// Window closed / quit requested
    pub quit: bool,
}

impl InputSnapshot {
    /// Keys pressed now that were not held on the previous tick
    pub fn pressed_since(&self, prev: &InputSnapshot) -> InputSnapshot {
        InputSnapshot {
            left: self.left && !prev.left,
            right: self.right && !prev.right,
            jump: self.jump && !prev.jump,
            shoot: self.shoot && !prev.shoot,
            quit: self.quit && !prev.quit,
        }
    }
}

/// Advance the world by one fixed timestep of `dt` seconds
pub fn tick(world: &mut World, input: &InputSnapshot, dt: f32) {
    if world.quit {
        return;
    }

    world.events.clear();
    world.time_ticks += 1;

    let pressed = input.pressed_since(&world.prev_input);
    world.prev_input = *input;

    if pressed.shoot {
        world.fire_projectile();
    }

    run_spawner(world, dt);

    let control = PlayerControl {
        left: input.left,
        right: input.right,
        jump: pressed.jump,
    };
    run_movement(world, control);

    run_collisions(world);

    let purged = world.registry.remove_dead();
    debug_assert!(world.registry.is_consistent());

    log::trace!(
        "tick {}: {} entities ({} purged), score {}",
        world.time_ticks,
        world.registry.len(),
        purged,
        world.score
    );

    if input.quit {
        log::info!("Quit requested at tick {}", world.time_ticks);
        world.quit = true;
    }
}

//! Collision detection and resolution
//!
//! Two passes over disjoint collection pairs:
//! 1. projectiles against enemies (both destroyed, score per enemy)
//! 2. the player against collectibles (collectible destroyed, effect applied)
//!
//! Entities already dead this tick take no part. A projectile is spent on
//! the first enemy it hits; it never passes through to another.

use super::state::{CollectibleKind, EntityId, EntityKind, EntityRole, GameEvent, World};
use crate::Aabb;

/// Live members of a role collection with their bounds, in id order
fn live_bounds(world: &World, role: EntityRole) -> Vec<(EntityId, Aabb)> {
    world
        .registry
        .ids(role)
        .iter()
        .filter_map(|&id| world.registry.get(id))
        .filter(|e| e.is_alive())
        .map(|e| (e.id, e.bounds()))
        .collect()
}

/// Match enemies, in id order, against projectiles not yet spent. An enemy
/// touched by any of them is destroyed and spends all of them.
/// Returns the destroyed enemies.
pub fn resolve_projectile_hits(world: &mut World) -> Vec<EntityId> {
    let mut projectiles = live_bounds(world, EntityRole::Projectile);
    let enemies = live_bounds(world, EntityRole::Enemy);

    let mut spent_projectiles: Vec<EntityId> = Vec::new();
    let mut destroyed_enemies: Vec<EntityId> = Vec::new();

    for &(enemy_id, enemy_box) in &enemies {
        let before = spent_projectiles.len();
        projectiles.retain(|&(projectile_id, projectile_box)| {
            if enemy_box.overlaps(&projectile_box) {
                spent_projectiles.push(projectile_id);
                false
            } else {
                true
            }
        });
        if spent_projectiles.len() > before {
            destroyed_enemies.push(enemy_id);
        }
    }

    for &id in spent_projectiles.iter().chain(&destroyed_enemies) {
        if let Some(entity) = world.registry.get_mut(id) {
            entity.kill();
        }
    }

    for &id in &destroyed_enemies {
        world.score += world.tuning.score_per_enemy;
        world.events.push(GameEvent::EnemyDestroyed { id });
        log::debug!("Enemy {} destroyed, score {}", id, world.score);
    }

    destroyed_enemies
}

/// Destroy every collectible touching the player. Returns the effects to
/// apply, one per collectible.
pub fn resolve_pickups(world: &mut World) -> Vec<(EntityId, CollectibleKind)> {
    let player_box = world.player().bounds();

    let touched: Vec<EntityId> = live_bounds(world, EntityRole::Collectible)
        .into_iter()
        .filter(|(_, b)| b.overlaps(&player_box))
        .map(|(id, _)| id)
        .collect();

    let mut picked = Vec::with_capacity(touched.len());
    for id in touched {
        if let Some(entity) = world.registry.get_mut(id) {
            if let EntityKind::Collectible(kind) = entity.kind() {
                entity.kill();
                picked.push((id, kind));
            }
        }
    }
    picked
}

/// Both passes, with pickup effects handed to the player stats
pub fn run_collisions(world: &mut World) {
    resolve_projectile_hits(world);

    for (id, kind) in resolve_pickups(world) {
        world.stats.apply(kind, &world.tuning);
        world.events.push(GameEvent::PickupCollected { id, kind });
        log::debug!(
            "Picked up {:?} ({}): health {}, lives {}",
            kind,
            id,
            world.stats.health,
            world.stats.lives
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Entity;
    use glam::Vec2;
    use proptest::prelude::*;

    fn add(world: &mut World, kind: EntityKind, pos: Vec2, size: Vec2) -> EntityId {
        let id = world.next_entity_id();
        world
            .registry
            .add(Entity::new(id, kind, pos, Vec2::ZERO, size));
        id
    }

    fn is_alive(world: &World, id: EntityId) -> bool {
        world.registry.get(id).is_some_and(|e| e.is_alive())
    }

    fn enemy(world: &mut World, x: f32, y: f32) -> EntityId {
        add(world, EntityKind::Enemy, Vec2::new(x, y), Vec2::splat(50.0))
    }

    fn projectile(world: &mut World, x: f32, y: f32) -> EntityId {
        add(world, EntityKind::Projectile, Vec2::new(x, y), Vec2::new(20.0, 10.0))
    }

    #[test]
    fn test_projectile_and_enemy_destroy_each_other() {
        let mut world = World::new(1);
        let e = enemy(&mut world, 400.0, 550.0);
        let p = projectile(&mut world, 390.0, 570.0);

        let destroyed = resolve_projectile_hits(&mut world);
        assert_eq!(destroyed, vec![e]);
        assert!(!is_alive(&world, e));
        assert!(!is_alive(&world, p));
        assert_eq!(world.score, 100);
        assert_eq!(world.events, vec![GameEvent::EnemyDestroyed { id: e }]);
    }

    #[test]
    fn test_miss_leaves_both_alive() {
        let mut world = World::new(1);
        let e = enemy(&mut world, 400.0, 550.0);
        let p = projectile(&mut world, 200.0, 570.0);
        assert!(resolve_projectile_hits(&mut world).is_empty());
        assert!(is_alive(&world, e));
        assert!(is_alive(&world, p));
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_enemy_hit_twice_scores_once() {
        let mut world = World::new(1);
        let e = enemy(&mut world, 400.0, 550.0);
        let p1 = projectile(&mut world, 395.0, 560.0);
        let p2 = projectile(&mut world, 420.0, 580.0);

        resolve_projectile_hits(&mut world);
        assert!(!is_alive(&world, e));
        assert!(!is_alive(&world, p1));
        assert!(!is_alive(&world, p2));
        assert_eq!(world.score, 100);
    }

    #[test]
    fn test_projectile_stops_at_first_enemy() {
        let mut world = World::new(1);
        let first = enemy(&mut world, 400.0, 550.0);
        let second = enemy(&mut world, 420.0, 550.0);
        // Overlaps both enemies
        let p = projectile(&mut world, 425.0, 570.0);

        let destroyed = resolve_projectile_hits(&mut world);
        assert_eq!(destroyed, vec![first]);
        assert!(!is_alive(&world, p));
        assert!(is_alive(&world, second));
        assert_eq!(world.score, 100);
    }

    #[test]
    fn test_dead_entities_do_not_collide() {
        let mut world = World::new(1);
        let e = enemy(&mut world, 400.0, 550.0);
        let p = projectile(&mut world, 390.0, 570.0);
        world.registry.get_mut(p).unwrap().kill();

        resolve_projectile_hits(&mut world);
        assert!(is_alive(&world, e));
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_pickup_health() {
        let mut world = World::new(1);
        let player_pos = world.player().pos;
        let c = add(
            &mut world,
            EntityKind::Collectible(CollectibleKind::Health),
            player_pos + Vec2::new(10.0, 10.0),
            Vec2::splat(30.0),
        );
        run_collisions(&mut world);
        assert!(!is_alive(&world, c));
        assert_eq!(world.stats.health, 120);
        assert_eq!(world.stats.lives, 3);
    }

    #[test]
    fn test_pickup_life() {
        let mut world = World::new(1);
        let player_pos = world.player().pos;
        let c = add(
            &mut world,
            EntityKind::Collectible(CollectibleKind::Life),
            player_pos,
            Vec2::splat(30.0),
        );
        run_collisions(&mut world);
        assert!(!is_alive(&world, c));
        assert_eq!(world.stats.lives, 4);
        assert_eq!(world.stats.health, 100);
        let expected = GameEvent::PickupCollected {
            id: c,
            kind: CollectibleKind::Life,
        };
        assert_eq!(world.events, vec![expected]);
    }

    #[test]
    fn test_enemy_touching_player_does_no_damage() {
        let mut world = World::new(1);
        let player_pos = world.player().pos;
        let e = enemy(&mut world, player_pos.x, player_pos.y);
        run_collisions(&mut world);
        assert!(is_alive(&world, e));
        assert_eq!(world.stats.health, 100);
        assert_eq!(world.stats.lives, 3);
    }

    proptest! {
        #[test]
        fn prop_each_projectile_destroys_at_most_one_enemy(
            enemies in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 1..8),
            projectiles in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 1..8),
        ) {
            let build = || {
                let mut world = World::new(5);
                for &(x, y) in &enemies {
                    enemy(&mut world, x, y);
                }
                for &(x, y) in &projectiles {
                    projectile(&mut world, x, y);
                }
                let destroyed = resolve_projectile_hits(&mut world);
                (world, destroyed)
            };

            let (world, destroyed) = build();
            let (_, again) = build();
            prop_assert_eq!(&destroyed, &again);

            let live = |role| {
                world
                    .registry
                    .iter(role)
                    .filter(|e| e.is_alive())
                    .map(|e| e.bounds())
                    .collect::<Vec<_>>()
            };
            let live_enemies = live(EntityRole::Enemy);
            for p in live(EntityRole::Projectile) {
                prop_assert!(live_enemies.iter().all(|e| !e.overlaps(&p)));
            }

            let spent = projectiles.len() - live(EntityRole::Projectile).len();
            prop_assert!(destroyed.len() <= spent);
            prop_assert_eq!(world.score, destroyed.len() as u64 * 100);
        }
    }
}

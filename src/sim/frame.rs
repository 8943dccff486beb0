//! Per-tick snapshot handed to rendering/audio collaborators

use serde::{Deserialize, Serialize};

use super::state::{CollectibleKind, EntityId, EntityKind, EntityRole, GameEvent, World};

/// Controls line shown at the bottom of the screen
pub const INSTRUCTIONS: &str = "Press LEFT/RIGHT to move, SPACE to jump, F to shoot";

/// One live entity as a renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub role: EntityRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collectible: Option<CollectibleKind>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub tick: u64,
    pub score: u64,
    pub health: i32,
    pub lives: u32,
    pub entities: Vec<EntityView>,
    pub events: Vec<GameEvent>,
}

impl FrameReport {
    pub fn capture(world: &World) -> Self {
        let entities = world
            .registry
            .all()
            .iter()
            .filter(|e| e.is_alive())
            .map(|e| EntityView {
                id: e.id,
                role: e.role(),
                collectible: match e.kind() {
                    EntityKind::Collectible(kind) => Some(kind),
                    _ => None,
                },
                x: e.pos.x,
                y: e.pos.y,
                width: e.size.x,
                height: e.size.y,
            })
            .collect();

        Self {
            tick: world.time_ticks,
            score: world.score,
            health: world.stats.health,
            lives: world.stats.lives,
            entities,
            events: world.events.clone(),
        }
    }

    pub fn player(&self) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.role == EntityRole::Player)
    }

    pub fn of_role(&self, role: EntityRole) -> impl Iterator<Item = &EntityView> {
        self.entities.iter().filter(move |e| e.role == role)
    }

    /// HUD text, top to bottom
    pub fn hud_lines(&self) -> Vec<String> {
        vec![
            format!("Score: {}", self.score),
            format!("Health: {}  Lives: {}", self.health, self.lives),
            INSTRUCTIONS.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawner::spawn_collectible;

    #[test]
    fn test_capture_lists_live_entities() {
        let mut world = World::new(1);
        let id = spawn_collectible(&mut world, CollectibleKind::Life);
        let frame = FrameReport::capture(&world);

        assert_eq!(frame.entities.len(), 2);
        assert!(frame.player().is_some());
        let c = frame.of_role(EntityRole::Collectible).next().unwrap();
        assert_eq!(c.id, id);
        assert_eq!(c.collectible, Some(CollectibleKind::Life));
        assert_eq!((c.width, c.height), (30.0, 30.0));
    }

    #[test]
    fn test_hud_lines() {
        let world = World::new(1);
        let frame = FrameReport::capture(&world);
        let lines = frame.hud_lines();
        assert_eq!(lines[0], "Score: 0");
        assert_eq!(lines[1], "Health: 100  Lives: 3");
        assert_eq!(lines[2], INSTRUCTIONS);
    }

    #[test]
    fn test_json_shape() {
        let world = World::new(1);
        let json = serde_json::to_value(FrameReport::capture(&world)).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["entities"][0]["role"], "player");
        assert!(json["entities"][0].get("collectible").is_none());
    }
}

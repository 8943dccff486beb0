//! Entity registry
//!
//! One arena owns every entity (`all`, sorted by id). Enemies, projectiles
//! and collectibles are additionally indexed by id in their own role list.
//! The player lives only in `all`.

use super::state::{Entity, EntityId, EntityRole};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Every entity, sorted by id
    all: Vec<Entity>,
    enemies: Vec<EntityId>,
    projectiles: Vec<EntityId>,
    collectibles: Vec<EntityId>,
}

impl Registry {
    /// Insert an entity. Ids must be allocated in increasing order.
    pub fn add(&mut self, entity: Entity) {
        debug_assert!(
            self.all.last().is_none_or(|last| last.id < entity.id),
            "entity ids must increase"
        );
        if let Some(list) = self.role_list_mut(entity.role()) {
            list.push(entity.id);
        }
        self.all.push(entity);
    }

    /// Purge every dead entity from every collection. Returns how many went.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.all.len();
        let dead: Vec<EntityId> = self
            .all
            .iter()
            .filter(|e| !e.is_alive())
            .map(|e| e.id)
            .collect();
        if dead.is_empty() {
            return 0;
        }

        self.all.retain(|e| e.is_alive());
        for list in [
            &mut self.enemies,
            &mut self.projectiles,
            &mut self.collectibles,
        ] {
            // `dead` is sorted because `all` is
            list.retain(|id| dead.binary_search(id).is_err());
        }

        before - self.all.len()
    }

    /// Entities of one role, in id order
    pub fn iter(&self, role: EntityRole) -> impl Iterator<Item = &Entity> {
        self.all.iter().filter(move |e| e.role() == role)
    }

    /// Ids in a role's collection (the player has none)
    pub fn ids(&self, role: EntityRole) -> &[EntityId] {
        match role {
            EntityRole::Player => &[],
            EntityRole::Enemy => &self.enemies,
            EntityRole::Projectile => &self.projectiles,
            EntityRole::Collectible => &self.collectibles,
        }
    }

    /// Every entity, in id order
    pub fn all(&self) -> &[Entity] {
        &self.all
    }

    pub fn all_mut(&mut self) -> &mut [Entity] {
        &mut self.all
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.all[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index_of(id).map(move |i| &mut self.all[i])
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Membership invariants: every role list entry is in `all` with the
    /// matching role, nothing is listed twice, and every non-player entity
    /// of `all` is in its role list.
    pub fn is_consistent(&self) -> bool {
        let roles = [
            EntityRole::Enemy,
            EntityRole::Projectile,
            EntityRole::Collectible,
        ];

        for role in roles {
            let ids = self.ids(role);
            if ids.windows(2).any(|w| w[0] >= w[1]) {
                return false;
            }
            if !ids
                .iter()
                .all(|&id| self.get(id).is_some_and(|e| e.role() == role))
            {
                return false;
            }
        }

        self.all.windows(2).all(|w| w[0].id < w[1].id)
            && self.all.iter().all(|e| match e.role() {
                EntityRole::Player => true,
                role => self.ids(role).binary_search(&e.id).is_ok(),
            })
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.all.binary_search_by_key(&id, |e| e.id).ok()
    }

    fn role_list_mut(&mut self, role: EntityRole) -> Option<&mut Vec<EntityId>> {
        match role {
            EntityRole::Player => None,
            EntityRole::Enemy => Some(&mut self.enemies),
            EntityRole::Projectile => Some(&mut self.projectiles),
            EntityRole::Collectible => Some(&mut self.collectibles),
        }
    }
}

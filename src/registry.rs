//! Owner of every live entity: the craft, projectiles in flight and the
//! current formation.

use log::debug;

use crate::collision::Hit;
use crate::config::Config;
use crate::entities::{Body, Craft, Enemy, Projectile};

#[derive(Clone, Debug)]
pub struct EntityRegistry {
    craft: Craft,
    projectiles: Vec<Projectile>,
    enemies: Vec<Enemy>,
}

impl EntityRegistry {
    pub fn new(config: &Config) -> Self {
        EntityRegistry {
            craft: Craft::new(config),
            projectiles: Vec::with_capacity(config.projectile_cap),
            enemies: Vec::new(),
        }
    }

    pub fn craft(&self) -> &Craft {
        &self.craft
    }

    pub fn craft_mut(&mut self) -> &mut Craft {
        &mut self.craft
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Enemies can be moved in place but not added or removed through this.
    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Add a projectile unless `cap` shots are already in flight.
    pub fn add_projectile(&mut self, projectile: Projectile, cap: usize) -> bool {
        if self.projectiles.len() >= cap {
            return false;
        }
        self.projectiles.push(projectile);
        true
    }

    /// Fire from the craft's mid-top.  Silently ignored at the cap.
    pub fn fire(&mut self, config: &Config) -> bool {
        let shot = Projectile::fired_from(&self.craft, config);
        let fired = self.add_projectile(shot, config.projectile_cap);
        if !fired {
            debug!("fire ignored, {} projectiles already in flight", self.projectiles.len());
        }
        fired
    }

    /// Move every projectile up and drop the ones past the despawn line.
    /// Returns how many were dropped.
    pub fn advance_projectiles(&mut self, config: &Config) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain_mut(|projectile| {
            projectile.advance(config);
            !projectile.is_spent(config)
        });
        before - self.projectiles.len()
    }

    /// Remove both sides of every hit.
    pub fn remove_hits(&mut self, hits: &[Hit]) {
        let mut index = 0;
        self.projectiles.retain(|_| {
            let keep = !hits.iter().any(|hit| hit.projectile == index);
            index += 1;
            keep
        });

        let mut index = 0;
        self.enemies.retain(|_| {
            let keep = !hits.iter().any(|hit| hit.enemy == index);
            index += 1;
            keep
        });
    }

    pub fn clear_projectiles(&mut self) {
        self.projectiles.clear();
    }

    pub fn clear_enemies(&mut self) {
        self.enemies.clear();
    }
}

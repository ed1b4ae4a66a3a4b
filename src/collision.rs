//! Overlap tests between projectiles, enemies, the craft and the bottom of
//! the playfield.  Nothing here mutates; callers remove what was hit.

use crate::entities::{Body, Craft, Enemy, Projectile};

/// One projectile paired with the enemy it destroyed, by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub projectile: usize,
    pub enemy: usize,
}

/// Pair every projectile with the first enemy it overlaps.
///
/// A projectile destroys at most one enemy, and an enemy already claimed by
/// an earlier projectile this tick is not matched again.
pub fn resolve_projectile_enemy_hits(projectiles: &[Projectile], enemies: &[Enemy]) -> Vec<Hit> {
    let mut claimed = vec![false; enemies.len()];
    let mut hits = Vec::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let shot = projectile.bounds();
        for (ei, enemy) in enemies.iter().enumerate() {
            if !claimed[ei] && shot.overlaps(&enemy.bounds()) {
                claimed[ei] = true;
                hits.push(Hit { projectile: pi, enemy: ei });
                break;
            }
        }
    }
    hits
}

/// Any single enemy overlapping the craft is enough.
pub fn craft_enemy_collision(craft: &Craft, enemies: &[Enemy]) -> bool {
    let hull = craft.bounds();
    enemies.iter().any(|enemy| hull.overlaps(&enemy.bounds()))
}

pub fn formation_reached_bottom(enemies: &[Enemy], playfield_height: f32) -> bool {
    enemies
        .iter()
        .any(|enemy| enemy.bounds().bottom() >= playfield_height)
}

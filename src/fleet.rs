//! Formation layout and movement.
//!
//! The formation is not a container: it is the movement policy (heading,
//! speed, drop distance held in [`Config`]) applied uniformly to every live
//! enemy in the registry.

use log::debug;

use crate::config::Config;
use crate::entities::{Body, Enemy};
use crate::registry::EntityRegistry;

/// Grid positions of a fresh formation.
///
/// Starts one enemy-size in from the top-left corner and steps by twice the
/// enemy size, leaving a column of clearance on the right and three rows of
/// clearance above the bottom for the craft.
pub fn formation_layout(config: &Config) -> Vec<Enemy> {
    let (w, h) = (config.enemy_width, config.enemy_height);
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }

    let mut enemies = Vec::new();
    let mut y = h;
    while y < config.playfield_height - 3.0 * h {
        let mut x = w;
        while x < config.playfield_width - 2.0 * w {
            enemies.push(Enemy::at(x, y, config));
            x += 2.0 * w;
        }
        y += 2.0 * h;
    }
    enemies
}

/// Populate the registry with a fresh formation.  Returns its size.
pub fn build_formation(config: &Config, registry: &mut EntityRegistry) -> usize {
    let layout = formation_layout(config);
    let count = layout.len();
    for enemy in layout {
        registry.add_enemy(enemy);
    }
    debug!("formation built with {} enemies", count);
    count
}

/// Advance every enemy one tick.
///
/// When any enemy touches the wall the formation is heading toward, the
/// whole formation drops once and the heading flips, no matter how many
/// enemies are touching.  Returns whether that happened.
pub fn advance(config: &mut Config, enemies: &mut [Enemy]) -> bool {
    for enemy in enemies.iter_mut() {
        enemy.advance(config);
    }

    let heading = config.fleet_direction;
    let at_edge = enemies
        .iter()
        .any(|enemy| enemy.touches_edge(config.playfield_width, heading));

    if at_edge {
        for enemy in enemies.iter_mut() {
            enemy.y += config.fleet_drop;
        }
        config.fleet_direction = heading.flipped();
    }
    at_edge
}

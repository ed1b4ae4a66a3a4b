//! Tunable parameters.
//!
//! `Config` carries three groups of fields: the static playfield and entity
//! geometry, the base values every new game starts from, and the dynamic
//! values the simulation reads each tick.  Dynamic values are restored by
//! [`Config::reset_dynamic`] and scaled by [`Config::escalate`].

use std::time::Duration;

use crate::render::Rgb;

// ── Terminal-tuned defaults (one unit = one terminal cell) ────────────────────

pub const CRAFT_WIDTH: f32 = 3.0;
pub const CRAFT_HEIGHT: f32 = 2.0;
pub const PROJECTILE_WIDTH: f32 = 1.0;
pub const PROJECTILE_HEIGHT: f32 = 1.0;
pub const ENEMY_WIDTH: f32 = 3.0;
pub const ENEMY_HEIGHT: f32 = 2.0;

pub const CRAFT_SPEED: f32 = 0.75;
pub const PROJECTILE_SPEED: f32 = 0.6;
pub const ENEMY_SPEED: f32 = 0.05;
pub const FLEET_DROP: f32 = 1.0;

/// Maximum number of projectiles in flight at once.
pub const PROJECTILE_CAP: usize = 3;
pub const STARTING_LIVES: u32 = 3;
pub const POINTS_PER_KILL: u32 = 50;

/// Speed multiplier applied at every level-up.
pub const SPEEDUP_SCALE: f32 = 1.1;
/// Point-value multiplier applied at every level-up.
pub const SCORE_SCALE: f32 = 1.5;

pub const TICKS_PER_SECOND: u32 = 60;
pub const LIFE_LOST_PAUSE: Duration = Duration::from_millis(500);

/// Projectiles whose bottom edge rises above this line are discarded.
/// Row 0 carries the HUD, so shots vanish just below it.
pub const PROJECTILE_DESPAWN_LINE: f32 = 1.0;

pub const BUTTON_WIDTH: f32 = 20.0;
pub const BUTTON_HEIGHT: f32 = 3.0;

pub const BACKGROUND: Rgb = Rgb(8, 8, 24);

// ── Fleet heading ─────────────────────────────────────────────────────────────

/// Shared horizontal heading of the whole formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,

    pub craft_width: f32,
    pub craft_height: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub enemy_width: f32,
    pub enemy_height: f32,

    pub projectile_cap: usize,
    pub starting_lives: u32,
    pub projectile_despawn_line: f32,
    pub speedup_scale: f32,
    pub score_scale: f32,
    /// Upper bound for the escalated enemy speed.  `None` = unbounded.
    pub enemy_speed_cap: Option<f32>,

    pub ticks_per_second: u32,
    pub life_lost_pause: Duration,
    pub button_width: f32,
    pub button_height: f32,
    pub background: Rgb,

    // Values a new game starts from.
    pub base_craft_speed: f32,
    pub base_projectile_speed: f32,
    pub base_enemy_speed: f32,
    pub base_fleet_drop: f32,
    pub base_points_per_kill: u32,

    // Dynamic values, read every tick.
    pub craft_speed: f32,
    pub projectile_speed: f32,
    pub enemy_speed: f32,
    pub fleet_drop: f32,
    pub fleet_direction: FleetDirection,
    pub points_per_kill: u32,
}

impl Config {
    /// Defaults for a playfield measured in terminal cells.
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Config {
            playfield_width: width,
            playfield_height: height,
            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,
            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            projectile_cap: PROJECTILE_CAP,
            starting_lives: STARTING_LIVES,
            projectile_despawn_line: PROJECTILE_DESPAWN_LINE,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            enemy_speed_cap: None,
            ticks_per_second: TICKS_PER_SECOND,
            life_lost_pause: LIFE_LOST_PAUSE,
            button_width: BUTTON_WIDTH,
            button_height: BUTTON_HEIGHT,
            background: BACKGROUND,
            base_craft_speed: CRAFT_SPEED,
            base_projectile_speed: PROJECTILE_SPEED,
            base_enemy_speed: ENEMY_SPEED,
            base_fleet_drop: FLEET_DROP,
            base_points_per_kill: POINTS_PER_KILL,
            craft_speed: CRAFT_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            enemy_speed: ENEMY_SPEED,
            fleet_drop: FLEET_DROP,
            fleet_direction: FleetDirection::Right,
            points_per_kill: POINTS_PER_KILL,
        }
    }

    /// Restore every dynamic field to its base value (new game).
    pub fn reset_dynamic(&mut self) {
        self.craft_speed = self.base_craft_speed;
        self.projectile_speed = self.base_projectile_speed;
        self.enemy_speed = self.base_enemy_speed;
        self.fleet_drop = self.base_fleet_drop;
        self.fleet_direction = FleetDirection::Right;
        self.points_per_kill = self.base_points_per_kill;
    }

    /// Scale speeds and the per-kill reward for the next level.
    ///
    /// The drop distance and heading are left alone.  The point value is
    /// truncated to an integer and never goes down.
    pub fn escalate(&mut self) {
        self.craft_speed *= self.speedup_scale;
        self.projectile_speed *= self.speedup_scale;
        self.enemy_speed *= self.speedup_scale;
        if let Some(cap) = self.enemy_speed_cap {
            self.enemy_speed = self.enemy_speed.min(cap);
        }

        let scaled = (self.points_per_kill as f32 * self.score_scale) as u32;
        self.points_per_kill = scaled.max(self.points_per_kill);
    }

    /// Wall-clock budget of one tick.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::for_playfield(80.0, 24.0)
    }
}

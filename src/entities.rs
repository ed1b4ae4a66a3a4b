//! Game entity types: plain geometry plus the per-tick movement each one owns.

use crate::config::{Config, FleetDirection};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open containment, `[x, right) × [y, bottom)`.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

// ── Capability shared by everything that moves ────────────────────────────────

pub trait Body {
    fn bounds(&self) -> Rect;

    /// Move by one tick using the current dynamic values in `config`.
    fn advance(&mut self, config: &Config);
}

// ── Craft ─────────────────────────────────────────────────────────────────────

/// The player's craft.  Never destroyed, only repositioned.
#[derive(Clone, Debug, PartialEq)]
pub struct Craft {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Craft {
    pub fn new(config: &Config) -> Self {
        let mut craft = Craft {
            x: 0.0,
            y: 0.0,
            width: config.craft_width,
            height: config.craft_height,
            moving_left: false,
            moving_right: false,
        };
        craft.recenter(config);
        craft
    }

    /// Horizontally centred, bottom edge resting on the playfield bottom.
    pub fn recenter(&mut self, config: &Config) {
        self.x = (config.playfield_width - self.width) / 2.0;
        self.y = config.playfield_height - self.height;
    }

    pub fn stop(&mut self) {
        self.moving_left = false;
        self.moving_right = false;
    }
}

impl Body for Craft {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn advance(&mut self, config: &Config) {
        // Both intents may be held at once; they cancel out.
        if self.moving_right && self.x + self.width < config.playfield_width {
            self.x += config.craft_speed;
        }
        if self.moving_left && self.x > 0.0 {
            self.x -= config.craft_speed;
        }
        let max_x = (config.playfield_width - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Projectile {
    /// A fresh shot whose top edge sits on the craft's mid-top point.
    pub fn fired_from(craft: &Craft, config: &Config) -> Self {
        Projectile {
            x: craft.x + (craft.width - config.projectile_width) / 2.0,
            y: craft.y,
            width: config.projectile_width,
            height: config.projectile_height,
        }
    }

    pub fn at(x: f32, y: f32, config: &Config) -> Self {
        Projectile {
            x,
            y,
            width: config.projectile_width,
            height: config.projectile_height,
        }
    }

    /// True once the shot has flown past the despawn line.
    pub fn is_spent(&self, config: &Config) -> bool {
        self.y + self.height < config.projectile_despawn_line
    }
}

impl Body for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn advance(&mut self, config: &Config) {
        self.y -= config.projectile_speed;
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Enemy {
    pub fn at(x: f32, y: f32, config: &Config) -> Self {
        Enemy {
            x,
            y,
            width: config.enemy_width,
            height: config.enemy_height,
        }
    }

    /// Whether this enemy touches the wall the formation is heading toward.
    pub fn touches_edge(&self, playfield_width: f32, heading: FleetDirection) -> bool {
        match heading {
            FleetDirection::Right => self.x + self.width >= playfield_width,
            FleetDirection::Left => self.x <= 0.0,
        }
    }
}

impl Body for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn advance(&mut self, config: &Config) {
        self.x += config.enemy_speed * config.fleet_direction.sign();
    }
}

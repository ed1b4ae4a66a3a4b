//! The rendering seam.
//!
//! The core holds no drawing state.  Once per tick it walks the scene and
//! calls a [`Renderer`] in a fixed order: background, projectiles, craft,
//! enemies, HUD text, the start button while no game is running, present.

use std::io;

use crate::entities::{Body, Rect};
use crate::game::{Game, Phase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Projectile,
    Craft,
    Enemy,
}

/// Where a line of HUD text belongs.  Placement is up to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudSlot {
    Score,
    HighScore,
    Level,
    Lives,
}

/// The clickable start control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Button {
    pub bounds: Rect,
    pub label: &'static str,
}

impl Button {
    /// A `width × height` button centred in the playfield.  The corner is
    /// snapped to whole units so the clickable area lines up with the cells
    /// a terminal draws.
    pub fn centered(
        playfield_width: f32,
        playfield_height: f32,
        width: f32,
        height: f32,
        label: &'static str,
    ) -> Self {
        Button {
            bounds: Rect::new(
                ((playfield_width - width) / 2.0).floor(),
                ((playfield_height - height) / 2.0).floor(),
                width,
                height,
            ),
            label,
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }
}

pub trait Renderer {
    fn clear(&mut self, background: Rgb) -> io::Result<()>;
    fn draw_rect(&mut self, bounds: Rect, sprite: Sprite) -> io::Result<()>;
    fn draw_text(&mut self, slot: HudSlot, text: &str) -> io::Result<()>;
    fn draw_button(&mut self, button: &Button) -> io::Result<()>;
    fn present(&mut self) -> io::Result<()>;
}

/// Draw one complete frame of `game`.
pub fn draw_frame<R: Renderer>(renderer: &mut R, game: &Game) -> io::Result<()> {
    let registry = game.registry();
    let progress = game.progress();

    renderer.clear(game.config().background)?;

    for projectile in registry.projectiles() {
        renderer.draw_rect(projectile.bounds(), Sprite::Projectile)?;
    }
    renderer.draw_rect(registry.craft().bounds(), Sprite::Craft)?;
    for enemy in registry.enemies() {
        renderer.draw_rect(enemy.bounds(), Sprite::Enemy)?;
    }

    renderer.draw_text(HudSlot::Score, &format!("Score: {}", group_thousands(progress.score())))?;
    renderer.draw_text(HudSlot::HighScore, &format!("High: {}", group_thousands(progress.high_score())))?;
    renderer.draw_text(HudSlot::Level, &format!("Level {}", progress.level()))?;
    renderer.draw_text(HudSlot::Lives, &format!("Lives: {}", progress.lives()))?;

    if game.phase() != Phase::Active {
        renderer.draw_button(&game.start_button())?;
    }

    renderer.present()
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

//! Terminal renderer.  All terminal output lives here.
//!
//! Playfield units are terminal cells, so a rectangle maps onto cells by
//! rounding.  Anything outside the screen is clipped.  No game logic is
//! performed; this module only translates draw calls into crossterm
//! commands.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use sky_defense::entities::Rect;
use sky_defense::render::{Button, HudSlot, Renderer, Rgb, Sprite};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGH: Color = Color::White;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_CRAFT: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_BUTTON: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

const CONTROLS_HINT: &str = "click or P : Play   ← → / A D : Move   SPACE : Shoot   Q : Quit";

pub struct TerminalRenderer<W: Write> {
    out: W,
    width: u16,
    height: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: u16, height: u16) -> Self {
        TerminalRenderer { out, width, height }
    }

    /// Print `text` starting at cell (`x`, `y`), clipped to the screen.
    fn put(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()> {
        if y < 0 || y >= self.height as i32 {
            return Ok(());
        }
        let skip = (-x).max(0) as usize;
        let col = x.max(0);
        let room = (self.width as i32 - col).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }

        self.out.queue(cursor::MoveTo(col as u16, y as u16))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn put_centered(&mut self, y: i32, text: &str, color: Color) -> io::Result<()> {
        let x = (self.width as i32 - text.chars().count() as i32) / 2;
        self.put(x, y, text, color)
    }

    fn put_right(&mut self, y: i32, text: &str, color: Color) -> io::Result<()> {
        let x = self.width as i32 - text.chars().count() as i32 - 1;
        self.put(x, y, text, color)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self, background: Rgb) -> io::Result<()> {
        let Rgb(r, g, b) = background;
        self.out.queue(style::SetBackgroundColor(Color::Rgb { r, g, b }))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_rect(&mut self, bounds: Rect, sprite: Sprite) -> io::Result<()> {
        let x = bounds.x.round() as i32;
        let y = bounds.y.round() as i32;
        let cols = bounds.width.round().max(1.0) as usize;
        let rows = bounds.height.round().max(1.0) as usize;
        let color = match sprite {
            Sprite::Projectile => C_PROJECTILE,
            Sprite::Craft => C_CRAFT,
            Sprite::Enemy => C_ENEMY,
        };

        for (i, line) in sprite_rows(sprite, cols, rows).iter().enumerate() {
            self.put(x, y + i as i32, line, color)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, slot: HudSlot, text: &str) -> io::Result<()> {
        match slot {
            HudSlot::Lives => self.put(1, 0, text, C_HUD_LIVES),
            HudSlot::HighScore => self.put_centered(0, text, C_HUD_HIGH),
            HudSlot::Score => self.put_right(0, text, C_HUD_SCORE),
            HudSlot::Level => self.put_right(1, text, C_HUD_LEVEL),
        }
    }

    fn draw_button(&mut self, button: &Button) -> io::Result<()> {
        let b = button.bounds;
        let x = b.x.round() as i32;
        let y = b.y.round() as i32;
        let inner = (b.width.round() as usize).saturating_sub(2);
        let rows = b.height.round().max(3.0) as i32;

        self.put(x, y, &format!("╔{}╗", "═".repeat(inner)), C_BUTTON)?;
        for row in 1..rows - 1 {
            self.put(x, y + row, &format!("║{}║", " ".repeat(inner)), C_BUTTON)?;
        }
        self.put(x, y + rows - 1, &format!("╚{}╝", "═".repeat(inner)), C_BUTTON)?;
        self.put_centered(y + rows / 2, button.label, C_BUTTON)?;

        self.put_centered(y + rows + 1, CONTROLS_HINT, C_HINT)
    }

    fn present(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        self.out.flush()
    }
}

/// Glyph rows for a sprite occupying `cols × rows` cells.  The hand-drawn
/// shapes are used when the size matches, otherwise the box is filled.
fn sprite_rows(sprite: Sprite, cols: usize, rows: usize) -> Vec<String> {
    let (shape, fill): (&[&str], char) = match sprite {
        //   «▼»
        //   ╚═╝
        Sprite::Enemy => (&["«▼»", "╚═╝"][..], '▼'),
        //    ▲
        //   /█\
        Sprite::Craft => (&[" ▲ ", "/█\\"][..], '█'),
        Sprite::Projectile => (&["║"][..], '║'),
    };

    let fits = shape.len() == rows && shape.iter().all(|line| line.chars().count() == cols);
    if fits {
        shape.iter().map(|line| line.to_string()).collect()
    } else {
        vec![fill.to_string().repeat(cols); rows]
    }
}

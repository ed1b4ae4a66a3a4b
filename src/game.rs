//! The game loop: phase state machine plus the fixed per-tick sequence.
//!
//! `Game::tick` drains one tick's worth of input, then (while a game is
//! running) moves the craft, the projectiles and the formation, resolves
//! collisions and applies the level-clear and life-lost transitions, in that
//! order.  Rendering is a separate call so the front end can honour the
//! life-lost stall between the two.

use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

use log::{debug, error, info};

use crate::collision;
use crate::config::Config;
use crate::entities::Body;
use crate::fleet;
use crate::input::{self, InputEvent, Intent};
use crate::progress::{LifeLost, ProgressTracker};
use crate::registry::EntityRegistry;
use crate::render::{self, Button, Renderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Active,
    GameOver,
}

/// What the front end should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// A life was lost and play resumes after this blocking pause.  No
    /// input or rendering may happen during it.
    Stall(Duration),
    Quit,
}

pub struct Game {
    config: Config,
    registry: EntityRegistry,
    progress: ProgressTracker,
    phase: Phase,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let registry = EntityRegistry::new(&config);
        let progress = ProgressTracker::new(config.starting_lives);
        Game {
            config,
            registry,
            progress,
            phase: Phase::Menu,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn start_button(&self) -> Button {
        let label = match self.phase {
            Phase::GameOver => "Play Again",
            _ => "Play",
        };
        Button::centered(
            self.config.playfield_width,
            self.config.playfield_height,
            self.config.button_width,
            self.config.button_height,
            label,
        )
    }

    // ── Tick ──────────────────────────────────────────────────────────────────

    /// Run one logical tick with the events queued since the last one.
    pub fn tick<I>(&mut self, events: I) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            let Some(intent) = input::interpret(event) else {
                debug!("ignoring input {:?}", event);
                continue;
            };
            if self.apply(intent).is_break() {
                info!("quit requested");
                return TickOutcome::Quit;
            }
        }

        if self.phase != Phase::Active {
            return TickOutcome::Continue;
        }
        self.simulate()
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> io::Result<()> {
        render::draw_frame(renderer, self)
    }

    fn apply(&mut self, intent: Intent) -> ControlFlow<()> {
        let active = self.phase == Phase::Active;
        match intent {
            Intent::Quit => return ControlFlow::Break(()),
            // Releases always land so a key let go outside play never sticks.
            Intent::MoveLeft(held) if active || !held => {
                self.registry.craft_mut().moving_left = held;
            }
            Intent::MoveRight(held) if active || !held => {
                self.registry.craft_mut().moving_right = held;
            }
            Intent::Fire if active => {
                self.fire();
            }
            Intent::Start if !active => {
                self.start();
            }
            Intent::Click { x, y } if !active && self.start_button().hit(x, y) => {
                self.start();
            }
            ignored => debug!("{:?} ignored in {:?}", ignored, self.phase),
        }
        ControlFlow::Continue(())
    }

    /// Fire a projectile if fewer than the cap are in flight.
    pub fn fire(&mut self) -> bool {
        self.registry.fire(&self.config)
    }

    /// Begin a new game from any phase.
    ///
    /// Refused, leaving the phase untouched, when the playfield is too small
    /// to hold a single enemy.  Playfield and enemy sizes never change once
    /// the game owns its config, so every later rebuild is non-empty too.
    pub fn start(&mut self) -> bool {
        if fleet::formation_layout(&self.config).is_empty() {
            error!(
                "playfield {}x{} cannot hold a formation of {}x{} enemies",
                self.config.playfield_width,
                self.config.playfield_height,
                self.config.enemy_width,
                self.config.enemy_height
            );
            return false;
        }

        self.config.reset_dynamic();
        self.progress.reset();
        self.reset_field();
        self.registry.craft_mut().stop();
        self.phase = Phase::Active;
        info!(
            "game started, {} enemies, high score {}",
            self.registry.enemies().len(),
            self.progress.high_score()
        );
        true
    }

    fn simulate(&mut self) -> TickOutcome {
        self.registry.craft_mut().advance(&self.config);
        self.registry.advance_projectiles(&self.config);
        fleet::advance(&mut self.config, self.registry.enemies_mut());

        let hits = collision::resolve_projectile_enemy_hits(
            self.registry.projectiles(),
            self.registry.enemies(),
        );
        if !hits.is_empty() {
            self.registry.remove_hits(&hits);
            self.progress.record_kills(hits.len(), self.config.points_per_kill);
            if self.registry.enemies().is_empty() {
                self.clear_level();
            }
        }

        let enemies = self.registry.enemies();
        let rammed = collision::craft_enemy_collision(self.registry.craft(), enemies);
        let breached = collision::formation_reached_bottom(enemies, self.config.playfield_height);
        if rammed || breached {
            return self.lose_life();
        }
        TickOutcome::Continue
    }

    /// Formation wiped out: fresh formation, next level, faster game.
    fn clear_level(&mut self) {
        self.registry.clear_projectiles();
        fleet::build_formation(&self.config, &mut self.registry);
        let level = self.progress.level_up();
        self.config.escalate();
        info!(
            "level {} reached, enemy speed {:.3}, {} points per kill",
            level, self.config.enemy_speed, self.config.points_per_kill
        );
    }

    fn lose_life(&mut self) -> TickOutcome {
        match self.progress.lose_life() {
            LifeLost::Remaining(_) => {
                self.reset_field();
                TickOutcome::Stall(self.config.life_lost_pause)
            }
            LifeLost::Exhausted => {
                self.phase = Phase::GameOver;
                info!(
                    "game over, score {}, high score {}",
                    self.progress.score(),
                    self.progress.high_score()
                );
                TickOutcome::Continue
            }
        }
    }

    /// Drop every projectile and enemy, rebuild the formation, recentre.
    fn reset_field(&mut self) {
        self.registry.clear_projectiles();
        self.registry.clear_enemies();
        fleet::build_formation(&self.config, &mut self.registry);
        self.registry.craft_mut().recenter(&self.config);
    }
}

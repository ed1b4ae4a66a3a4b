//! Score, level, lives and the session high score.

use log::info;

/// Result of losing a life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeLost {
    /// Lives left after the loss (always > 0).
    Remaining(u32),
    /// That was the last one.
    Exhausted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressTracker {
    score: u32,
    level: u32,
    lives: u32,
    high_score: u32,
    starting_lives: u32,
}

impl ProgressTracker {
    pub fn new(starting_lives: u32) -> Self {
        ProgressTracker {
            score: 0,
            level: 1,
            lives: starting_lives,
            high_score: 0,
            starting_lives,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// New game.  The high score survives.
    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = self.starting_lives;
    }

    /// Credit `kills` enemies at `points_per_kill` each.  Returns the gain.
    pub fn record_kills(&mut self, kills: usize, points_per_kill: u32) -> u32 {
        let gain = (kills as u32).saturating_mul(points_per_kill);
        self.score = self.score.saturating_add(gain);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        gain
    }

    pub fn lose_life(&mut self) -> LifeLost {
        self.lives = self.lives.saturating_sub(1);
        info!("life lost, {} remaining", self.lives);
        if self.lives == 0 {
            LifeLost::Exhausted
        } else {
            LifeLost::Remaining(self.lives)
        }
    }

    pub fn level_up(&mut self) -> u32 {
        self.level += 1;
        self.level
    }
}

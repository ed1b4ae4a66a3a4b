use std::time::Duration;

use sky_defense::config::{Config, FleetDirection};
use sky_defense::entities::{Enemy, Projectile};
use sky_defense::fleet::formation_layout;
use sky_defense::game::*;
use sky_defense::input::{InputEvent, Key};

/// 800×600 playfield sized like the classic desktop game.
fn arcade_config() -> Config {
    let mut config = Config::for_playfield(800.0, 600.0);
    config.craft_width = 60.0;
    config.craft_height = 40.0;
    config.projectile_width = 3.0;
    config.projectile_height = 15.0;
    config.enemy_width = 30.0;
    config.enemy_height = 30.0;
    config.base_craft_speed = 1.5;
    config.base_projectile_speed = 2.5;
    config.base_enemy_speed = 1.0;
    config.base_fleet_drop = 10.0;
    config.projectile_despawn_line = 50.0;
    config.button_width = 200.0;
    config.button_height = 50.0;
    config.reset_dynamic();
    config
}

/// A game one tick into its first level.
fn started() -> Game {
    let mut game = Game::new(arcade_config());
    game.tick([InputEvent::KeyDown(Key::Play)]);
    assert_eq!(game.phase(), Phase::Active);
    game
}

/// Put an enemy on top of the craft so the next tick costs a life.
fn ram(game: &mut Game) -> TickOutcome {
    let enemy = Enemy::at(345.0, 550.0, game.config());
    game.registry_mut().add_enemy(enemy);
    game.tick([])
}

fn shoot_at(game: &mut Game, x: f32, y: f32) {
    let shot = Projectile::at(x, y, game.config());
    let cap = game.config().projectile_cap;
    assert!(game.registry_mut().add_projectile(shot, cap));
}

// ── Menu ──────────────────────────────────────────────────────────────────────

#[test]
fn new_game_waits_in_menu() {
    let mut game = Game::new(arcade_config());
    assert_eq!(game.phase(), Phase::Menu);
    assert!(game.registry().enemies().is_empty());
    assert_eq!(game.start_button().label, "Play");
    assert_eq!(game.tick([]), TickOutcome::Continue);
    assert_eq!(game.phase(), Phase::Menu);
}

#[test]
fn click_on_button_starts_game() {
    let mut game = Game::new(arcade_config());
    assert_eq!(game.tick([InputEvent::PointerDown { x: 400.0, y: 300.0 }]), TickOutcome::Continue);
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.registry().enemies().len(), 96);
    assert_eq!(game.progress().lives(), 3);
    assert_eq!(game.progress().score(), 0);
    assert_eq!(game.progress().level(), 1);
}

#[test]
fn click_outside_button_is_ignored() {
    let mut game = Game::new(arcade_config());
    game.tick([InputEvent::PointerDown { x: 10.0, y: 10.0 }]);
    game.tick([InputEvent::PointerDown { x: 500.0, y: 300.0 }]); // right edge, exclusive
    assert_eq!(game.phase(), Phase::Menu);
}

#[test]
fn play_key_starts_game() {
    let game = started();
    assert_eq!(game.registry().enemies().len(), 96);
    // The start tick already simulated once
    assert_eq!(game.registry().enemies()[0].x, 31.0);
}

#[test]
fn play_controls_are_ignored_in_menu() {
    let mut game = Game::new(arcade_config());
    game.tick([InputEvent::KeyDown(Key::Fire), InputEvent::KeyDown(Key::Left)]);
    assert!(game.registry().projectiles().is_empty());
    assert!(!game.registry().craft().moving_left);
}

#[test]
fn key_release_lands_outside_play() {
    let mut game = Game::new(arcade_config());
    game.registry_mut().craft_mut().moving_left = true;
    game.tick([InputEvent::KeyUp(Key::Left)]);
    assert!(!game.registry().craft().moving_left);
}

#[test]
fn start_drops_stale_movement() {
    let mut game = Game::new(arcade_config());
    game.registry_mut().craft_mut().moving_right = true;
    game.tick([InputEvent::KeyDown(Key::Play)]);
    assert!(!game.registry().craft().moving_right);
    assert_eq!(game.registry().craft().x, 370.0);
}

#[test]
fn click_area_matches_drawn_button_rows() {
    // Default terminal: button drawn on rows 10, 11 and 12
    let mut above = Game::new(Config::default());
    above.tick([InputEvent::PointerDown { x: 40.5, y: 9.5 }]);
    assert_eq!(above.phase(), Phase::Menu);

    let mut below = Game::new(Config::default());
    below.tick([InputEvent::PointerDown { x: 40.5, y: 13.5 }]);
    assert_eq!(below.phase(), Phase::Menu);

    let mut top = Game::new(Config::default());
    top.tick([InputEvent::PointerDown { x: 40.5, y: 10.5 }]);
    assert_eq!(top.phase(), Phase::Active);

    let mut bottom = Game::new(Config::default());
    bottom.tick([InputEvent::PointerDown { x: 40.5, y: 12.5 }]);
    assert_eq!(bottom.phase(), Phase::Active);
}

#[test]
fn playfield_too_small_for_a_formation_stays_in_menu() {
    let mut game = Game::new(Config::for_playfield(5.0, 5.0));
    assert!(!game.start());
    game.tick([InputEvent::KeyDown(Key::Play)]);
    assert_eq!(game.phase(), Phase::Menu);
    assert!(game.registry().enemies().is_empty());
    assert_eq!(game.progress().lives(), 3);
}

#[test]
fn start_reports_success_on_a_normal_playfield() {
    let mut game = Game::new(arcade_config());
    assert!(game.start());
    assert_eq!(game.phase(), Phase::Active);
    assert!(!game.registry().enemies().is_empty());
}

// ── Active play ───────────────────────────────────────────────────────────────

#[test]
fn craft_moves_while_key_held() {
    let mut game = started();
    game.tick([InputEvent::KeyDown(Key::Right)]);
    assert_eq!(game.registry().craft().x, 371.5);
    game.tick([]);
    assert_eq!(game.registry().craft().x, 373.0);
    game.tick([InputEvent::KeyUp(Key::Right)]);
    assert_eq!(game.registry().craft().x, 373.0);
}

#[test]
fn fire_is_capped() {
    let mut game = started();
    game.tick([InputEvent::KeyDown(Key::Fire); 4]);
    assert_eq!(game.registry().projectiles().len(), 3);
}

#[test]
fn hit_scores_and_removes_both() {
    let mut game = started(); // first enemy at (31, 30)
    shoot_at(&mut game, 40.0, 50.0);
    assert_eq!(game.tick([]), TickOutcome::Continue);
    assert_eq!(game.progress().score(), 50);
    assert_eq!(game.progress().high_score(), 50);
    assert_eq!(game.registry().enemies().len(), 95);
    assert!(game.registry().projectiles().is_empty());
}

#[test]
fn every_hit_in_a_tick_scores() {
    let mut game = started();
    shoot_at(&mut game, 40.0, 50.0);
    shoot_at(&mut game, 100.0, 50.0);
    game.tick([]);
    assert_eq!(game.progress().score(), 100);
    assert_eq!(game.registry().enemies().len(), 94);
}

#[test]
fn clearing_formation_levels_up_once() {
    let mut game = started();
    game.registry_mut().clear_enemies();
    let last = Enemy::at(400.0, 300.0, game.config());
    game.registry_mut().add_enemy(last);
    shoot_at(&mut game, 405.0, 310.0);
    shoot_at(&mut game, 700.0, 400.0);

    assert_eq!(game.tick([]), TickOutcome::Continue);
    assert_eq!(game.progress().level(), 2);
    assert_eq!(game.progress().score(), 50);
    assert!(game.registry().projectiles().is_empty());
    assert_eq!(game.registry().enemies().to_vec(), formation_layout(game.config()));
    assert_eq!(game.config().points_per_kill, 75);
    assert!((game.config().enemy_speed - 1.1).abs() < 1e-4);
    assert_eq!(game.config().fleet_drop, 10.0);

    game.tick([]);
    assert_eq!(game.progress().level(), 2);
    assert_eq!(game.registry().enemies().len(), 96);
}

#[test]
fn escalated_points_apply_to_next_level_kills() {
    let mut game = started();
    game.registry_mut().clear_enemies();
    let last = Enemy::at(400.0, 300.0, game.config());
    game.registry_mut().add_enemy(last);
    shoot_at(&mut game, 405.0, 310.0);
    game.tick([]);

    // Fresh formation starts at (30, 30); after one tick at 1.1 it sits at 31.1
    shoot_at(&mut game, 40.0, 50.0);
    game.tick([]);
    assert_eq!(game.progress().score(), 125);
}

// ── Losing lives ──────────────────────────────────────────────────────────────

#[test]
fn ramming_costs_a_life_and_resets_field() {
    let mut game = started();
    game.tick([InputEvent::KeyDown(Key::Fire)]);
    let outcome = ram(&mut game);

    assert_eq!(outcome, TickOutcome::Stall(Duration::from_millis(500)));
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.progress().lives(), 2);
    assert!(game.registry().projectiles().is_empty());
    assert_eq!(game.registry().enemies().to_vec(), formation_layout(game.config()));
    assert_eq!(game.registry().craft().x, 370.0);
    assert_eq!(game.registry().craft().y, 560.0);
}

#[test]
fn formation_at_bottom_costs_a_life() {
    let mut game = started();
    let low = Enemy::at(10.0, 575.0, game.config());
    game.registry_mut().add_enemy(low);
    assert_eq!(game.tick([]), TickOutcome::Stall(Duration::from_millis(500)));
    assert_eq!(game.progress().lives(), 2);
    assert_eq!(game.registry().enemies().len(), 96);
}

#[test]
fn last_life_ends_the_game() {
    let mut game = started();
    assert_eq!(ram(&mut game), TickOutcome::Stall(Duration::from_millis(500)));
    assert_eq!(game.progress().lives(), 2);
    assert_eq!(ram(&mut game), TickOutcome::Stall(Duration::from_millis(500)));
    assert_eq!(game.progress().lives(), 1);
    assert_eq!(ram(&mut game), TickOutcome::Continue);
    assert_eq!(game.progress().lives(), 0);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.start_button().label, "Play Again");
}

#[test]
fn game_over_freezes_the_field() {
    let mut game = started();
    for _ in 0..3 {
        ram(&mut game);
    }
    let enemies = game.registry().enemies().to_vec();
    let craft = game.registry().craft().clone();

    game.tick([InputEvent::KeyDown(Key::Right), InputEvent::KeyDown(Key::Fire)]);
    game.tick([]);
    assert_eq!(game.registry().enemies().to_vec(), enemies);
    assert_eq!(game.registry().craft().x, craft.x);
    assert!(game.registry().projectiles().is_empty());
}

// ── Restart / quit ────────────────────────────────────────────────────────────

#[test]
fn restart_resets_run_but_keeps_high_score() {
    let mut game = started();
    game.registry_mut().clear_enemies();
    let last = Enemy::at(400.0, 300.0, game.config());
    game.registry_mut().add_enemy(last);
    shoot_at(&mut game, 405.0, 310.0);
    game.tick([]);
    assert_eq!(game.progress().level(), 2);
    for _ in 0..3 {
        ram(&mut game);
    }
    assert_eq!(game.phase(), Phase::GameOver);

    game.tick([InputEvent::PointerDown { x: 400.0, y: 300.0 }]);
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.progress().score(), 0);
    assert_eq!(game.progress().level(), 1);
    assert_eq!(game.progress().lives(), 3);
    assert_eq!(game.progress().high_score(), 50);
    assert_eq!(game.config().points_per_kill, 50);
    assert_eq!(game.config().enemy_speed, 1.0);
    assert_eq!(game.config().fleet_direction, FleetDirection::Right);
    assert_eq!(game.registry().enemies().len(), 96);
}

#[test]
fn start_is_ignored_during_play() {
    let mut game = started();
    shoot_at(&mut game, 40.0, 50.0);
    game.tick([]);
    game.tick([InputEvent::KeyDown(Key::Play)]);
    assert_eq!(game.progress().score(), 50);
    assert_eq!(game.registry().enemies().len(), 95);
}

#[test]
fn quit_from_every_phase() {
    let mut menu = Game::new(arcade_config());
    assert_eq!(menu.tick([InputEvent::Quit]), TickOutcome::Quit);

    let mut active = started();
    assert_eq!(active.tick([InputEvent::KeyDown(Key::Quit)]), TickOutcome::Quit);

    let mut over = started();
    for _ in 0..3 {
        ram(&mut over);
    }
    assert_eq!(over.phase(), Phase::GameOver);
    assert_eq!(over.tick([InputEvent::Quit]), TickOutcome::Quit);
}

#[test]
fn quit_stops_processing_later_events() {
    let mut game = Game::new(arcade_config());
    let outcome = game.tick([InputEvent::Quit, InputEvent::KeyDown(Key::Play)]);
    assert_eq!(outcome, TickOutcome::Quit);
    assert_eq!(game.phase(), Phase::Menu);
}

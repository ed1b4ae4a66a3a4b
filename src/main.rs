mod display;

use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info, LevelFilter};

use sky_defense::config::Config;
use sky_defense::game::{Game, TickOutcome};
use sky_defense::input::{HeldKeys, InputEvent, Key};

use display::TerminalRenderer;

const LOG_FILE: &str = "sky_defense.log";

// ── Terminal events → core input events ───────────────────────────────────────

fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Key::Play),
        _ => None,
    }
}

fn translate(event: Event, held: &mut HeldKeys, now: Instant, queue: &mut Vec<InputEvent>) {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => queue.push(InputEvent::Quit),

        Event::Key(KeyEvent { code, kind, .. }) => {
            let Some(key) = key_for(code) else {
                return;
            };
            let movement = matches!(key, Key::Left | Key::Right);
            match kind {
                KeyEventKind::Press if movement => {
                    if held.press(key, now) {
                        queue.push(InputEvent::KeyDown(key));
                    }
                }
                KeyEventKind::Press => queue.push(InputEvent::KeyDown(key)),
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat if movement => {
                    held.press(key, now);
                }
                KeyEventKind::Repeat if key == Key::Fire => queue.push(InputEvent::KeyDown(key)),
                KeyEventKind::Repeat => {}
                KeyEventKind::Release if movement => {
                    if held.release(key) {
                        queue.push(InputEvent::KeyUp(key));
                    }
                }
                KeyEventKind::Release => {}
            }
        }

        // Aim at the centre of the clicked cell.
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => queue.push(InputEvent::PointerDown {
            x: column as f32 + 0.5,
            y: row as f32 + 0.5,
        }),

        Event::Resize(width, height) => {
            info!("terminal resized to {}x{}, playfield unchanged", width, height);
        }
        _ => {}
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// One tick per frame at the configured rate until the player quits.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, releases_reported: bool) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let config = Config::for_playfield(width as f32, height as f32);
    let frame = config.frame_duration();
    info!("playfield {}x{}, {} ticks per second", width, height, config.ticks_per_second);

    let mut game = Game::new(config);
    let mut renderer = TerminalRenderer::new(out, width, height);
    let mut held = HeldKeys::new(releases_reported);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut queue = Vec::new();
        while let Ok(event) = rx.try_recv() {
            translate(event, &mut held, frame_start, &mut queue);
        }
        held.expire(frame_start, &mut queue);

        match game.tick(queue) {
            TickOutcome::Quit => return Ok(()),
            // Deliberate stall: nothing is read or drawn until it ends.
            TickOutcome::Stall(pause) => thread::sleep(pause),
            TickOutcome::Continue => {}
        }

        game.render(&mut renderer)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    if let Err(e) = simple_logging::log_to_file(LOG_FILE, LevelFilter::Info) {
        eprintln!("could not open {}: {}", LOG_FILE, e);
    }
    info!("Starting sky_defense.");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().map_err(|e| {
        error!("Failed to enable raw mode: {}", e);
        e
    })?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal when it
    // speaks the kitty keyboard protocol.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!("key release events: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("Failed to read event: {}", e);
                break;
            }
        }
    });

    let result = run(&mut out, &rx, keyboard_enhanced);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    info!("Exiting sky_defense.");

    result
}

mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use display::Viewport;
use tile_shooter::audio::{dispatch, LogAudio};
use tile_shooter::compute::{init_state, tick};
use tile_shooter::error::GameResult;
use tile_shooter::input::{InputState, Key};
use tile_shooter::level::builtin_levels;
use tile_shooter::snapshot::capture;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈128 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| is_held(key_frame, key, frame))
}

/// Terminal keys for each game key.
const BINDINGS: &[(Key, &[KeyCode])] = &[
    (Key::Up, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
    (Key::Down, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
    (Key::Left, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
    (Key::Right, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
    (Key::Shoot, &[KeyCode::Char(' ')]),
    (Key::Confirm, &[KeyCode::Enter]),
    (Key::Mute, &[KeyCode::Char('m'), KeyCode::Char('M')]),
];

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs go to a file in the temp dir.
/// `RUST_LOG` overrides the default `info` filter.
fn init_logging() -> GameResult<()> {
    let file = File::create(std::env::temp_dir().join("tile_shooter.log"))?;
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(std::io::Error::other)?;
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key. Each frame the keys that are still
/// "fresh" (within `HOLD_WINDOW` frames) become the `InputState` handed to
/// `tick`, so movement, aiming and shooting combine freely. Mouse buttons
/// report explicit up/down events and are tracked directly.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> GameResult<()> {
    let mut rng = thread_rng();
    let mut state = init_state(builtin_levels()?, &mut rng)?;
    let mut audio = LogAudio::default();

    let (cols, rows) = terminal::size()?;
    let mut viewport = Viewport::new(cols, rows);
    let mut input = InputState::new();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let started = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    input.pointer = viewport.to_world(column, row);
                    match kind {
                        MouseEventKind::Down(MouseButton::Left) => input.pointer_down = true,
                        MouseEventKind::Up(MouseButton::Left) => input.pointer_down = false,
                        _ => {}
                    }
                }
                Event::Resize(cols, rows) => viewport = Viewport::new(cols, rows),
                _ => {}
            }
        }

        for &(key, codes) in BINDINGS {
            if any_held(&key_frame, codes, frame) {
                input.press(key);
            } else {
                input.release(key);
            }
        }

        let now = started.elapsed().as_millis() as u64;
        state = tick(&state, &input, now, &mut rng);
        dispatch(&state.cues, &mut audio);
        display::render(out, &capture(&state, now), viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> GameResult<()> {
    init_logging()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
        .is_ok();

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
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);
    if let Err(err) = &result {
        tracing::error!(%err, "Game loop failed");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

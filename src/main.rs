mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        ModifierKeyCode, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info, warn};
use rand::thread_rng;

use space_explorer::audio::{AudioSink, BellSink, LogSink};
use space_explorer::compute::{init_state, tick};
use space_explorer::config::{GameConfig, CONFIG_FILE};
use space_explorer::entities::GameState;
use space_explorer::input::{Control, InputFrame};
use space_explorer::menu::{Menu, MenuCommand, Screen};
use space_explorer::save;
use space_explorer::snapshot::RenderSnapshot;

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A control is considered "held" if its last press/repeat event arrived
/// within this many frames. Covers terminals that don't emit key-release
/// events: OS key-repeat refreshes the entry well before it expires.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `control` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<Control, u64>, control: Control, frame: u64) -> bool {
    key_frame
        .get(&control)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Controls triggered by one key event. Unknown keys yield nothing.
fn controls_for(code: KeyCode, modifiers: KeyModifiers) -> Vec<Control> {
    let mut controls = Vec::with_capacity(2);
    match code {
        KeyCode::Up => controls.push(Control::Up),
        KeyCode::Down => controls.push(Control::Down),
        KeyCode::Left => controls.push(Control::Left),
        KeyCode::Right => controls.push(Control::Right),
        KeyCode::Esc => controls.push(Control::Pause),
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
            controls.push(Control::Boost)
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            controls.push(Control::Quit)
        }
        KeyCode::Char(c) => {
            controls.extend(Control::from_char(c));
            if Control::implies_boost(c) {
                controls.push(Control::Boost);
            }
        }
        _ => {}
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !controls.contains(&Control::Boost) {
        controls.push(Control::Boost);
    }
    controls
}

// ── Menus ─────────────────────────────────────────────────────────────────────

/// Block on the menu until the player picks something.
fn menu_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    menu: &mut Menu,
    snapshot: Option<&RenderSnapshot>,
) -> std::io::Result<MenuCommand> {
    loop {
        display::render_menu(out, menu, snapshot)?;

        let Ok(event) = rx.recv() else {
            return Ok(MenuCommand::Quit);
        };
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            continue;
        };
        if kind == KeyEventKind::Release {
            continue;
        }
        match code {
            KeyCode::Up | KeyCode::Char('w') => menu.select_prev(),
            KeyCode::Down | KeyCode::Char('s') => menu.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(command) = menu.activate() {
                    return Ok(command);
                }
            }
            KeyCode::Esc => match menu.screen {
                Screen::Paused => {
                    if let Some(command) = menu.toggle_pause() {
                        return Ok(command);
                    }
                }
                _ => return Ok(MenuCommand::Quit),
            },
            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(MenuCommand::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(MenuCommand::Quit);
            }
            _ => {}
        }
    }
}

fn save_game(path: &Path, state: &GameState) {
    if let Err(e) = save::save(path, state) {
        error!("could not save: {e}");
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits or the shield is gone.
///
/// Input model: each control maps to the frame number of its last press or
/// repeat event. Directions and boost count as held while fresh; fire and
/// pause only act on the frame their key first went down.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    state: &mut GameState,
    menu: &mut Menu,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut audio: Box<dyn AudioSink> = if config.terminal_bell {
        Box::new(BellSink::new(stdout()))
    } else {
        Box::new(LogSink)
    };
    let frame_time = Duration::from_micros(1_000_000 / u64::from(config.fps.max(1)));

    let mut key_frame: HashMap<Control, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut pressed: Vec<Control> = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            let controls = controls_for(code, modifiers);
            match kind {
                KeyEventKind::Press => {
                    for control in controls {
                        key_frame.insert(control, frame);
                        pressed.push(control);
                    }
                }
                KeyEventKind::Repeat => {
                    for control in controls {
                        key_frame.insert(control, frame);
                    }
                }
                KeyEventKind::Release => {
                    for control in controls {
                        key_frame.remove(&control);
                    }
                }
            }
        }

        let held: Vec<Control> = [
            Control::Up,
            Control::Down,
            Control::Left,
            Control::Right,
            Control::Boost,
        ]
        .into_iter()
        .filter(|&c| is_held(&key_frame, c, frame))
        .collect();
        let input = InputFrame::from_controls(&held, &pressed);

        if input.quit {
            return Ok(());
        }

        if input.pause {
            menu.toggle_pause();
            loop {
                let snapshot = RenderSnapshot::build(state);
                match menu_loop(out, rx, menu, Some(&snapshot))? {
                    MenuCommand::Save => save_game(&config.save_path, state),
                    MenuCommand::Quit => return Ok(()),
                    MenuCommand::Resume | MenuCommand::Start => break,
                }
            }
            key_frame.clear();
            continue;
        }

        *state = tick(state, &input, &mut rng);
        audio.play_all(&state.cues);

        let snapshot = RenderSnapshot::build(state);
        display::render(out, &snapshot)?;

        if state.is_over() {
            menu.game_over();
            menu_loop(out, rx, menu, Some(&snapshot))?;
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode while playing, so log lines
/// go to a file instead of stderr.
fn init_logging(config: &GameConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(&config.log_path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn main() -> std::io::Result<()> {
    let (config, config_error) = match GameConfig::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(e) => (GameConfig::default(), Some(e)),
    };
    init_logging(&config);
    if let Some(e) = config_error {
        warn!("ignoring {CONFIG_FILE}: {e}");
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
        ))
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

    let result = run(&mut out, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, config: &GameConfig, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut menu = Menu::default();
    if menu_loop(out, rx, &mut menu, None)? != MenuCommand::Start {
        return Ok(());
    }

    let record = save::load(&config.save_path);
    let mut state = init_state(config, &mut thread_rng());
    record.apply(&mut state);
    info!("starting at level {} with score {}", state.level, state.player.score);

    game_loop(out, config, &mut state, &mut menu, rx)?;
    info!(
        "session over at level {} with score {}",
        state.level, state.player.score
    );
    Ok(())
}

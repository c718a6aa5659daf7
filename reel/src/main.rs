//! Cinematic reported-speech slideshow for the terminal.
//!
//! Movie scenes, grammar rules, and fill-in-the-blank challenges as a
//! linear slide deck. Runs as a full TUI by default.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a text-based interface suitable for
//! automated testing:
//!
//! ```bash
//! cargo run -p reel -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use reel_core::catalog::REPORTED_SPEECH;
use reel_core::{build_playbook, LessonSession};

use app::{App, StudyMode};
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // The TUI owns the terminal in raw mode, so only the line-oriented
    // mode can log to stderr.
    let headless = args.iter().any(|a| a == "--headless");
    if headless {
        pretty_env_logger::init();
    }

    // Load a custom lesson file or fall back to the built-in catalog.
    let lesson = match arg_value(&args, "--lesson") {
        Some(path) => reel_core::load_lesson(path)?,
        None => REPORTED_SPEECH.clone(),
    };

    let playbook = build_playbook(&lesson);
    let session = LessonSession::new(playbook);
    log::debug!("playbook ready: {} slides", session.len());

    if headless {
        return headless::run_headless(session).map_err(|e| e.into());
    }

    let mode = arg_value(&args, "--mode")
        .and_then(parse_mode)
        .unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(session).with_mode(mode));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    let start = Instant::now();

    loop {
        let now_ms = start.elapsed().as_millis() as u64;
        app.tick(now_ms);

        terminal.draw(|f| render(f, &app))?;

        // Short poll keeps the session timers and the Live countdown
        // moving between key presses.
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;
            let now_ms = start.elapsed().as_millis() as u64;
            match handle_event(&mut app, ev, now_ms) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        }
    }
}

/// Value following a `--flag` argument, if present.
fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}

fn parse_mode(s: &str) -> Option<StudyMode> {
    match s.to_lowercase().as_str() {
        "student" => Some(StudyMode::Student),
        "teacher" => Some(StudyMode::Teacher),
        "live" | "kahoot" => Some(StudyMode::Live),
        _ => None,
    }
}

fn print_help() {
    println!("reel - reported speech at the movies");
    println!();
    println!("USAGE:");
    println!("  reel [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help        Show this help message");
    println!("  --headless        Run the line-oriented mode (no TUI)");
    println!("  --lesson <PATH>   Load a lesson JSON file instead of the built-in one");
    println!("  --mode <MODE>     Start in a presentation mode");
    println!();
    println!("MODES:");
    println!("  student   answer the challenges yourself (default)");
    println!("  teacher   answers revealed on challenge slides");
    println!("  live      classroom projection with a countdown bar");
    println!();
    println!("EXAMPLES:");
    println!("  reel                        # Interactive TUI");
    println!("  reel --mode teacher         # TUI with answers revealed");
    println!("  reel --headless             # Scriptable text mode");
    println!("  reel --lesson custom.json   # A lesson of your own");
}

//! Headless mode for the slideshow.
//!
//! A simple line-oriented interface for running lessons without a TUI,
//! designed for automated testing and scripted walkthroughs:
//! - Lines starting with `#` are commands
//! - Any other line is an answer to the current challenge
//! - Output lines are tagged (`[SLIDE]`, `[CORRECT]`, ...)

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use reel_core::{split_prompt, Feedback, LessonSession, Slide};

/// Run a session in headless mode.
pub fn run_headless(mut session: LessonSession) -> io::Result<()> {
    let start = Instant::now();
    let now_ms = move || start.elapsed().as_millis() as u64;

    println!("=== reel: headless projection ===");
    println!();
    print_commands();
    println!();
    print_slide(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('#') {
            if handle_command(&mut session, command) {
                break;
            }
            stdout.flush().ok();
            continue;
        }

        // Anything else is an answer attempt.
        if !session.current().is_challenge() {
            println!("[HINT] Not a challenge slide. #next to continue.");
            continue;
        }

        match session.submit_answer(line, now_ms()) {
            Feedback::Correct => {
                println!("[CORRECT] {line}");
                // Let the scheduled auto-advance fire for real.
                thread::sleep(Duration::from_millis(session.config().advance_delay_ms));
                if session.tick(now_ms()) {
                    print_slide(&session);
                }
            }
            Feedback::Incorrect => {
                println!("[INCORRECT] {line}");
                thread::sleep(Duration::from_millis(session.config().retry_delay_ms));
                if session.tick(now_ms()) {
                    println!("[READY] Try again:");
                }
            }
            Feedback::Neutral => {}
        }
        stdout.flush().ok();
    }

    Ok(())
}

/// Execute a `#` command. Returns true when the session should end.
fn handle_command(session: &mut LessonSession, command: &str) -> bool {
    let parts: Vec<&str> = command.split_whitespace().collect();
    match parts.first().copied() {
        Some("quit") | Some("exit") => {
            println!("Goodbye!");
            return true;
        }
        Some("next") => {
            if session.advance() {
                print_slide(session);
            } else if session.current().is_challenge() {
                println!("[BLOCKED] Answer the challenge first (or #jump to a scene).");
            } else {
                println!("[END] Already at the last slide.");
            }
        }
        Some("prev") => {
            if session.retreat() {
                print_slide(session);
            } else {
                println!("[START] Already at the first slide.");
            }
        }
        Some("restart") => {
            session.restart();
            print_slide(session);
        }
        Some("scenes") => {
            println!("[SCENES]");
            for (index, title) in session.playbook().scene_titles().iter().enumerate() {
                println!("  {}. {title}", index + 1);
            }
        }
        Some("jump") => match parts.get(1).and_then(|n| n.parse::<usize>().ok()) {
            Some(number) if number >= 1 => {
                let title = session
                    .playbook()
                    .scene_titles()
                    .get(number - 1)
                    .map(|title| title.to_string());
                match title {
                    Some(title) => {
                        session.jump_to_scene(&title);
                        print_slide(session);
                    }
                    None => println!("[ERROR] No scene {number}. #scenes lists them."),
                }
            }
            _ => println!("[ERROR] Usage: #jump <scene number>"),
        },
        Some("status") => {
            println!(
                "[STATUS] slide {}/{}, feedback {:?}",
                session.position() + 1,
                session.len(),
                session.feedback()
            );
        }
        Some("help") => print_commands(),
        _ => println!("[ERROR] Unknown command. #help lists commands."),
    }
    false
}

fn print_commands() {
    println!("Commands:");
    println!("  #next / #prev      - Move through the slides");
    println!("  #jump <n>          - Jump to scene n");
    println!("  #scenes            - List the scenes");
    println!("  #restart           - Back to the first slide");
    println!("  #status            - Show the cursor position");
    println!("  #help              - Show this help");
    println!("  #quit              - Exit");
    println!("  (anything else answers the current challenge)");
}

/// Print the slide under the cursor as plain text.
fn print_slide(session: &LessonSession) {
    println!();
    println!(
        "[SLIDE {}/{}]",
        session.position() + 1,
        session.len()
    );

    match session.current() {
        Slide::Intro {
            scene_title,
            description,
            ..
        } => {
            println!("NOW SHOWING: {scene_title}");
            println!("{description}");
        }
        Slide::Script {
            scene_title, lines, ..
        } => {
            println!("SCRIPT — {scene_title}");
            for line in lines {
                println!("  {}: {}", line.speaker, line.text);
            }
        }
        Slide::ExerciseIntro {
            title,
            description,
            rule,
            ..
        } => {
            println!("{title} ({description})");
            println!("RULE: {rule}");
        }
        Slide::Timeline {
            exercise_title,
            shift,
            ..
        } => {
            println!("TIMELINE — {exercise_title}");
            println!("  {} -> {}", shift.from, shift.to);
            println!("  DIRECT:   {}", shift.direct);
            println!("  REPORTED: {}", shift.reported);
        }
        Slide::Challenge {
            exercise_title,
            prompt,
            options,
            number,
            total,
            ..
        } => {
            let (prefix, suffix) = split_prompt(prompt);
            println!("{exercise_title} — take {number}/{total}");
            println!("  {prefix}______{suffix}");
            let bank: Vec<String> = options
                .iter()
                .enumerate()
                .map(|(index, option)| format!("{}) {option}", index + 1))
                .collect();
            println!("  Word bank: {}", bank.join("   "));
            println!("  Type your answer:");
        }
        Slide::Outro { lesson_title, .. } => {
            println!("THE END — {lesson_title}");
            println!("#restart to roll again, #quit to leave.");
        }
    }
}

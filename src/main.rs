mod build_info;
mod constants;
mod game;
mod input;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use constants::TICK_INTERVAL_MS;
use game::logic::{process_input, process_tick};
use game::types::FlightState;
use input::PlayerAction;

/// Top-level screens, dispatched by the outer loop in `run`.
enum Screen {
    Title,
    Playing,
    GameOver { score: u32 },
    Terminated,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "floppy-frog {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Floppy Frog - Terminal Arcade Game\n");
                println!("Usage: floppy-frog\n");
                println!("Keys:");
                println!("  Space   Flap");
                println!("  q       Quit");
                println!("  Return  Start (title screen)");
                println!("  r       Restart (game-over screen)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'floppy-frog --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Outer screen state machine. Returns when the player quits; restarting
/// loops back here instead of re-entering the play loop recursively.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut screen = Screen::Title;

    loop {
        match screen {
            Screen::Title => {
                terminal.draw(|frame| ui::title_scene::render_title(frame))?;
                // Only Return starts the game; every other key is ignored
                loop {
                    if let PlayerAction::Confirm = input::wait_action()? {
                        break;
                    }
                }
                screen = Screen::Playing;
            }
            Screen::Playing => {
                screen = play(terminal)?;
            }
            Screen::GameOver { score } => {
                terminal.draw(|frame| ui::game_over_scene::render_game_over(frame, score))?;
                screen = loop {
                    match input::wait_action()? {
                        PlayerAction::Restart => break Screen::Playing,
                        PlayerAction::Quit => break Screen::Terminated,
                        _ => {}
                    }
                };
            }
            Screen::Terminated => return Ok(()),
        }
    }
}

/// One flight run: the fixed-rate tick loop. Returns the next screen.
fn play(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<Screen> {
    let mut state = FlightState::new();
    let mut rng = rand::thread_rng();
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut pending: Option<PlayerAction> = None;

    loop {
        // Input polling doubles as the tick clock: wait out the remainder
        // of the tick window, acting on at most one key per tick. Quit is
        // the exception and takes effect immediately.
        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if let Some(action) = input::poll_action(timeout)? {
            if action == PlayerAction::Quit {
                return Ok(Screen::Terminated);
            }
            if pending.is_none() {
                pending = Some(action);
            }
        }

        // Game tick every 100ms
        if last_tick.elapsed() >= tick_interval {
            if let Some(action) = pending.take() {
                process_input(&mut state, action);
            }
            process_tick(&mut state, &mut rng);

            // The colliding frame is still drawn before the transition
            terminal.draw(|frame| ui::play_scene::render_play(frame, &state))?;
            if state.crashed {
                return Ok(Screen::GameOver { score: state.score });
            }
            last_tick = Instant::now();
        }
    }
}

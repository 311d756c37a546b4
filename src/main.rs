mod battle;
mod build_info;
mod constants;
mod game_state;
mod input;
mod items;
mod tabs;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};

use constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use game_state::GameState;
use input::InputResult;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "embervale {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Embervale - Terminal Turn-Based RPG\n");
                println!("Usage: embervale [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'embervale --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut state = GameState::new();
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();
    let mut tick_counter: u32 = 0;

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw_ui(frame, &state))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match input::handle_key(&mut state, key_event, &mut rng) {
                    InputResult::Quit => break,
                    InputResult::Continue => {}
                }
            }
        }

        // Game tick every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            game_tick(&mut state, &mut tick_counter, &mut rng);
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}

/// Processes a single game tick, resolving any scheduled battle action.
fn game_tick(state: &mut GameState, tick_counter: &mut u32, rng: &mut impl Rng) {
    // Each tick is 100ms = 0.1 seconds
    let delta_time = TICK_INTERVAL_MS as f64 / 1000.0;

    battle::logic::tick(state, delta_time, rng);

    // 10 ticks = 1 second
    *tick_counter += 1;
    if *tick_counter >= 10 {
        state.play_time_seconds += 1;
        *tick_counter = 0;
    }
}

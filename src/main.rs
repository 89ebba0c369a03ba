use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use serpent::game::{Game, Phase};
use serpent::record::RecordStore;
use serpent::{build_info, input, ui};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "serpent {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Serpent - Terminal Snake Game\n");
                println!("Usage: serpent\n");
                println!("Controls:");
                println!("  Arrow keys  Steer the serpent");
                println!("  R / Enter   Restart after a round ends");
                println!("  Q / Esc     Quit");
                println!("\nOptions:");
                println!("  --version   Show version information");
                println!("  --help      Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'serpent --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // The record survives process restarts; a missing store directory is a
    // real error, a missing record file just means 0.
    let record_store = RecordStore::open()?;
    let mut game = Game::new(record_store);
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &game))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match game.phase {
                    Phase::Running => {
                        if let Some(intent) = input::map_key(key_event.code) {
                            game.handle_input(intent);
                        } else {
                            match key_event.code {
                                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                                _ => {}
                            }
                        }
                    }
                    Phase::Over => match key_event.code {
                        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                            game.restart(&mut rng);
                            last_frame = Instant::now();
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                        _ => {}
                    },
                }
            }
        }

        // Feed elapsed time to the engine; it steps at fixed intervals
        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        game.tick(dt_ms, &mut rng);
    }

    // Restore terminal
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;

    Ok(())
}

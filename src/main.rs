mod ai;
mod config;
mod debug;
mod game;
mod game_modes;
mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

struct CliArgs {
    local_two_player: bool,
    debug: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);

    debug::init(cli.debug).context("failed to initialize debug log")?;
    debug::log("SESSION_START", "catchpong starting");

    let config = config::load_config().context("failed to load configuration")?;

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run game
    let result = if cli.local_two_player {
        game_modes::run_game_local(&mut terminal, &config)
    } else {
        game_modes::run_game_vs_ai(&mut terminal, &config)
    };

    // Restore terminal before reporting any error
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    debug::log("SESSION_END", "catchpong exiting");
    result.context("game loop failed")?;
    Ok(())
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        local_two_player: false,
        debug: false,
    };

    for arg in &args[1..] {
        match arg.as_str() {
            "--local" | "-2" => cli.local_two_player = true,
            "--debug" | "-d" => cli.debug = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    cli
}

fn print_usage(program: &str) {
    println!("catchpong - catch-and-throw terminal Pong");
    println!();
    println!("Catch the ball, pick an aim, fire it back. Miss and the other");
    println!("side scores.");
    println!();
    println!("Usage:");
    println!("  {}            # Play against the AI", program);
    println!("  {} --local    # Local 2-player on one keyboard", program);
    println!("  {} --debug    # Log diagnostics to /tmp/catchpong-debug.log", program);
    println!();
    println!("Default keys (configurable in the config file):");
    println!("  Left:  W/S move, A/D aim, C center aim, Space fire");
    println!("  Right: Up/Down move, Left/Right aim, . center aim, Enter fire");
    println!("  Q or Esc quits, R rematches after a win");
}

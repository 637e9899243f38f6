//! Time-travel tic-tac-toe - CLI entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use time_travel_tictactoe::{GameSession, Position, SortOrder, TuiConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(&config, descending),
        Command::Replay {
            cells,
            jump,
            descending,
            json,
        } => {
            init_stderr_logging();
            run_replay(&cells, jump, sort_order(descending), json)
        }
    }
}

/// Headless runs log to stderr so stdout stays machine-readable
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn sort_order(descending: bool) -> SortOrder {
    if descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}

/// Run the terminal UI
fn run_play(config_path: &std::path::Path, descending: bool) -> Result<()> {
    let mut config = TuiConfig::load_or_default(config_path)?;
    if descending {
        config = config.with_sort_order(SortOrder::Descending);
    }

    // Log to a file so output does not interfere with the UI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(sort_order = %config.sort_order(), "Starting time-travel tic-tac-toe");
    tui::run_tui(&config)
}

/// Play cells headlessly and print the resulting session
#[instrument(skip(cells), fields(moves = cells.len()))]
fn run_replay(cells: &[u8], jump: Option<usize>, order: SortOrder, json: bool) -> Result<()> {
    let positions = cells
        .iter()
        .map(|&cell| {
            Position::from_index(usize::from(cell) - 1)
                .with_context(|| format!("Cell {} is not on the board", cell))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = GameSession::new();
    for (turn, pos) in positions.iter().enumerate() {
        session
            .play_move(*pos)
            .with_context(|| format!("Move {} ({}) rejected", turn + 1, pos))?;
    }
    if let Some(index) = jump {
        session.jump_to(index)?;
    }
    info!(
        history = session.history().len(),
        current = session.current_index(),
        "Replay finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot(&session, order))?);
    } else {
        println!("{}\n", session.current_board().display());
        println!("{}\n", session.status());
        for row in session.move_list(order) {
            let marker = if row.is_current { ">" } else { " " };
            println!("{} {}", marker, row.label);
        }
    }

    Ok(())
}

fn snapshot(session: &GameSession, order: SortOrder) -> serde_json::Value {
    let status = session.status();
    serde_json::json!({
        "status": status,
        "winner": status.winner(),
        "current_index": session.current_index(),
        "winning_line": session.winning_line(),
        "history": session.history(),
        "moves": session.move_list(order),
    })
}

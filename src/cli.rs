//! Command-line interface for time_travel_tictactoe.

use clap::{Parser, Subcommand};

/// Time-travel tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the UI config file (defaults apply if it does not exist)
        #[arg(short, long, default_value = "time_travel_tictactoe.toml")]
        config: std::path::PathBuf,

        /// Show the newest move first
        #[arg(long)]
        descending: bool,
    },

    /// Play a sequence of cells without a UI and print the result
    Replay {
        /// Cells to play, numbered 1-9 left to right, top to bottom
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        cells: Vec<u8>,

        /// Jump to this history index after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the newest move first
        #[arg(long)]
        descending: bool,

        /// Print the session as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

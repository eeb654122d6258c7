//! Command-line driver for running territorial Life simulations
//!
//! Seeds a board either with random live cells or with a pattern file
//! placed for every player, then evolves generation by generation until
//! the board is lifeless or the generation limit is reached.

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_FILL_CELLS, DEFAULT_GENERATIONS, DEFAULT_PLAYERS, DEFAULT_ROWS,
    DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::render::render;
use crate::pattern::{Pattern, PatternFormat};

#[derive(Parser)]
#[command(name = "turflife")]
#[command(
    author,
    version,
    about = "Multi-player territorial Game of Life simulator"
)]
/// Command-line arguments for the simulation driver
pub struct Cli {
    /// Board row count
    #[arg(short = 'r', long, default_value_t = DEFAULT_ROWS)]
    pub rows: i32,

    /// Board column count
    #[arg(short = 'c', long, default_value_t = DEFAULT_COLS)]
    pub cols: i32,

    /// Number of competing players
    #[arg(short = 'p', long, default_value_t = DEFAULT_PLAYERS)]
    pub players: i32,

    /// Number of randomly seeded live cells
    #[arg(short = 'f', long, default_value_t = DEFAULT_FILL_CELLS)]
    pub fill: usize,

    /// Maximum generations before stopping
    #[arg(short = 'g', long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,

    /// Random seed for reproducible fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Plaintext pattern file placed for each player instead of random fill
    #[arg(long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Suppress per-generation grid output, show a progress bar instead
    #[arg(short, long)]
    pub quiet: bool,
}

/// Runs one simulation to completion from parsed arguments
pub struct SimulationRunner {
    cli: Cli,
}

impl SimulationRunner {
    /// Create a runner from parsed command-line arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Seed the board, evolve it, and report final counts
    ///
    /// # Errors
    ///
    /// Returns an error if the board dimensions are invalid, a pattern
    /// file cannot be loaded, or pattern placement falls off the grid.
    pub fn run(&self) -> Result<()> {
        let mut board = Board::new(self.cli.rows, self.cli.cols)?;
        match &self.cli.pattern {
            Some(path) => self.seed_pattern(&mut board, &path.to_string_lossy())?,
            None => self.seed_random(&mut board),
        }

        let progress = self.progress_bar();
        let mut generation = 0;
        while generation < self.cli.generations && board.has_live_cells() {
            if !self.cli.quiet {
                print_grid(&board);
            }
            board.evolve();
            generation += 1;
            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }
        if let Some(bar) = &progress {
            bar.finish();
        }

        print_summary(&board);
        Ok(())
    }

    /// Scatter random live cells across the board, like dealing openings
    fn seed_random(&self, board: &mut Board) {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let players = self.cli.players.max(1);
        for _ in 0..self.cli.fill {
            let i = rng.random_range(0..self.cli.rows.max(1));
            let j = rng.random_range(0..self.cli.cols.max(1));
            let player = rng.random_range(1..=players);
            // Random fill ignores ownership, mirroring a forced opening
            let _ = board.add_cell(i, j, player, true);
        }
    }

    /// Place the pattern once per player at evenly spaced anchors
    fn seed_pattern(&self, board: &mut Board, path: &str) -> Result<()> {
        let pattern = Pattern::parse(path, PatternFormat::PlaintextFile)?;
        let players = self.cli.players.max(1);
        let row = self.cli.rows / 2;
        for player in 1..=players {
            let col = self.cli.cols * player / (players + 1);
            board.assign_territories(row, col, &pattern, player)?;
            board.add_cells(row, col, &pattern, player, false)?;
        }
        Ok(())
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        if !self.cli.quiet {
            return None;
        }
        let bar = ProgressBar::new(self.cli.generations);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] Generations: [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    }
}

#[allow(clippy::print_stdout)]
fn print_grid(board: &Board) {
    println!("Generation {}", board.generation());
    println!("{}", render(board));
}

#[allow(clippy::print_stdout)]
fn print_summary(board: &Board) {
    let outcome = if board.has_live_cells() {
        "life remains"
    } else {
        "the board is lifeless"
    };
    println!(
        "Stopped after {} generation(s); {outcome}",
        board.generation()
    );
    let counts = board.counts();
    let mut players: Vec<i32> = counts.keys().copied().collect();
    players.sort_unstable();
    for player in players {
        if let Some(count) = counts.get(&player) {
            println!(
                "Player {player}: {} owned cell(s), {} alive",
                count.owned, count.live
            );
        }
    }
}

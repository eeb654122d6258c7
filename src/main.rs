//! CLI entry point for the territorial Game of Life simulator

use clap::Parser;
use turflife::io::cli::{Cli, SimulationRunner};

fn main() -> turflife::Result<()> {
    let cli = Cli::parse();
    let runner = SimulationRunner::new(cli);
    runner.run()
}

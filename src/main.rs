//! CLI entry point for the density drawable generator

use clap::Parser;
use drawablegen::io::cli::{Cli, DrawableGenerator};
use drawablegen::io::logging;

fn main() -> drawablegen::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    let mut generator = DrawableGenerator::new(cli);
    generator.process().map(|_| ())
}

//! CLI entry point for rectangle decomposition of tile clusters

use clap::Parser;
use rectile::io::cli::{Cli, FileProcessor, init_logging};

fn main() -> rectile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}

use std::io;

use anyhow::Result;
use clap::builder::TypedValueParser as _;
use clap::Parser;
use log::{info, warn, LevelFilter};
use toy_blockchain::config::{GENESIS_DATA, MAX_BLOCKS};
use toy_blockchain::{BlockChain, ChainConfig, Console, ReportFormat};

/// Run bare, the tool needs no arguments: it
/// prompts, builds a chain of at most 10 blocks and prints it. The flags
/// below only widen that default.
#[derive(Parser)]
#[clap(
    version = "0.1.0",
    about = "Builds a small hash-linked chain of blocks from lines typed at the terminal"
)]
struct Cli {
    /// Maximum number of blocks, genesis included
    #[clap(long, short, value_name = "NUM", default_value_t = MAX_BLOCKS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    max_blocks: usize,

    /// Data stored in the genesis block
    #[clap(long, short, value_name = "TEXT", default_value = GENESIS_DATA)]
    genesis_data: String,

    /// Layout of the final report
    #[clap(long, short, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let config = ChainConfig::default()
        .with_max_blocks(cli.max_blocks)
        .with_genesis_data(cli.genesis_data);
    info!("Starting chain with capacity {}", config.max_blocks);

    let mut chain = BlockChain::new(config);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    if let Err(e) = console.run(&mut chain) {
        warn!("Interactive session ended early: {}", e);
    }

    if let Err(e) = console.render(&chain, cli.format) {
        warn!("Failed to print the chain: {}", e);
    }

    Ok(())
}

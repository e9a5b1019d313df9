/* Line-oriented terminal protocol: prompt for block data until the user
declines or the chain is full, then print the whole chain. */

use std::io::{BufRead, Write};

use clap::ValueEnum;
use log::{debug, info};
use serde::Serialize;

use crate::block::Block;
use crate::blockchain::BlockChain;
use crate::error::ChainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct BlockRecord<'a> {
    index: usize,
    #[serde(flatten)]
    block: &'a Block,
}

/// A reply counts as "yes" when its first non-blank character is `y`.
pub fn is_affirmative(reply: &str) -> bool {
    reply.trim_start().starts_with('y')
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Grows `chain` interactively. Stops on a declined continuation or as
    /// soon as the chain is full, without prompting again.
    pub fn run(&mut self, chain: &mut BlockChain) -> Result<(), ChainError> {
        let mut proceed = true;

        while proceed && !chain.is_full() {
            write!(self.output, "\nEnter data for block {}: ", chain.len())?;
            self.output.flush()?;
            let data = self.read_line()?;

            chain.add_block(data)?;
            debug!("Block {} hashed to {}", chain.len() - 1, chain.tip().hash());

            write!(self.output, "Add another block? (y/n): ")?;
            self.output.flush()?;
            proceed = is_affirmative(&self.read_line()?);
        }

        if chain.is_full() {
            info!(
                "Chain reached its capacity of {} blocks",
                chain.config().max_blocks
            );
        }

        Ok(())
    }

    pub fn render(&mut self, chain: &BlockChain, format: ReportFormat) -> Result<(), ChainError> {
        match format {
            ReportFormat::Text => write!(self.output, "\n{chain}")?,
            ReportFormat::Json => {
                let records: Vec<BlockRecord> = chain
                    .blocks()
                    .iter()
                    .enumerate()
                    .map(|(index, block)| BlockRecord { index, block })
                    .collect();
                serde_json::to_writer_pretty(&mut self.output, &records)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()?;

        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // End of input reads as an empty line, so a pending continuation declines.
    fn read_line(&mut self) -> Result<String, ChainError> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

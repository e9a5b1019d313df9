use crate::block::Block;
use crate::config::ChainConfig;
use crate::error::ChainError;

use log::debug;

/// Append-only sequence of blocks, seeded with a genesis block and capped at
/// `config.max_blocks`. Insertion order is chain order.
#[derive(Debug, Clone)]
pub struct BlockChain {
    blocks: Vec<Block>,
    config: ChainConfig,
}

impl BlockChain {
    pub fn new(config: ChainConfig) -> BlockChain {
        let genesis = Block::new(config.genesis_data.as_str(), config.sentinel_hash.as_str());
        debug!("Created genesis block {}", genesis.hash());

        BlockChain {
            blocks: vec![genesis],
            config,
        }
    }

    /// Links `data` to the current tip and appends the resulting block.
    pub fn add_block(&mut self, data: impl Into<String>) -> Result<&Block, ChainError> {
        if self.is_full() {
            return Err(ChainError::CapacityReached {
                max: self.config.max_blocks,
            });
        }

        let block = Block::new(data, self.tip().hash());
        debug!(
            "Appending block {} ({} -> {})",
            self.blocks.len(),
            block.previous_hash(),
            block.hash()
        );
        self.blocks.push(block);

        Ok(self.tip())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Latest block. The genesis block guarantees there always is one.
    pub fn tip(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    // Never true: genesis is always present.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.len() >= self.config.max_blocks
    }

    pub fn remaining(&self) -> usize {
        self.config.max_blocks.saturating_sub(self.blocks.len())
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

impl Default for BlockChain {
    fn default() -> Self {
        Self::new(ChainConfig::default())
    }
}

impl std::fmt::Display for BlockChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Blockchain ===")?;
        for (index, block) in self.blocks.iter().enumerate() {
            writeln!(f, "Block {index}:")?;
            writeln!(f, "{block}")?;
        }
        Ok(())
    }
}

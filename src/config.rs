/// Most blocks a chain may hold, genesis included.
pub const MAX_BLOCKS: usize = 10;

/// Data stored in the genesis block.
pub const GENESIS_DATA: &str = "Genesis Block";

/// Placeholder previous hash for the genesis block, since it has no predecessor.
pub const SENTINEL_HASH: &str = "00000000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub max_blocks: usize,
    pub genesis_data: String,
    pub sentinel_hash: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_blocks: MAX_BLOCKS,
            genesis_data: GENESIS_DATA.to_string(),
            sentinel_hash: SENTINEL_HASH.to_string(),
        }
    }
}

impl ChainConfig {
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    pub fn with_genesis_data(mut self, genesis_data: impl Into<String>) -> Self {
        self.genesis_data = genesis_data.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ChainConfig::default();
        assert_eq!(config.max_blocks, 10);
        assert_eq!(config.genesis_data, "Genesis Block");
        assert_eq!(config.sentinel_hash, "00000000");
    }

    #[test]
    fn overrides() {
        let config = ChainConfig::default()
            .with_max_blocks(3)
            .with_genesis_data("start");
        assert_eq!(config.max_blocks, 3);
        assert_eq!(config.genesis_data, "start");
        assert_eq!(config.sentinel_hash, SENTINEL_HASH);
    }
}

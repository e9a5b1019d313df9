use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Chain is full: it already holds the maximum of {max} blocks")]
    CapacityReached { max: usize },

    #[error("Console I/O failed.\n{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize chain: {0}")]
    Serialize(#[from] serde_json::Error),
}

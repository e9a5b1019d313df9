use serde::Serialize;

use crate::hash::simple_hash;

/// A single link in the chain. Fields are fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    data: String,
    #[serde(rename = "prev_hash")]
    previous_hash: String,
    hash: String,
}

impl Block {
    /// Creates a block whose hash covers `data` followed directly by `previous_hash`.
    pub fn new(data: impl Into<String>, previous_hash: impl Into<String>) -> Block {
        let data = data.into();
        let previous_hash = previous_hash.into();
        let hash = simple_hash(&format!("{data}{previous_hash}"));

        Block {
            data,
            previous_hash,
            hash,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Data      : {}", self.data)?;
        writeln!(f, "  Prev Hash : {}", self.previous_hash)?;
        writeln!(f, "  Hash      : {}", self.hash)
    }
}

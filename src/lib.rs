pub mod block;
pub mod blockchain;
pub mod config;
pub mod console;
pub mod error;
pub mod hash;

pub use block::Block;
pub use blockchain::BlockChain;
pub use config::ChainConfig;
pub use console::{Console, ReportFormat};
pub use error::ChainError;
pub use hash::simple_hash;

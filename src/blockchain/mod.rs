pub mod block;
pub mod ledger;
pub mod model;
pub mod pow;

pub use block::Block;
pub use ledger::{Ledger, LedgerStats};
pub use model::Blockchain;

/// Default Proof-of-Work difficulty (number of leading zero hex characters).
pub const DEFAULT_DIFFICULTY: u32 = 3;

/// Difficulty bounds (keep low in dev to avoid long waits)
pub const DIFF_MIN: u32 = 1;
pub const DIFF_MAX: u32 = 6;

/// Hard-coded proof of the genesis block.
pub const GENESIS_PROOF: &str = "100";

/// Placeholder previous hash of the genesis block; it has no predecessor.
pub const GENESIS_PREV_HASH: &str = "1";

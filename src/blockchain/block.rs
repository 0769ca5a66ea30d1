use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// A sealed block. Field order is part of the hash preimage: changing it
/// invalidates every `prev_block_hash` already on the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC)
    pub transactions: Vec<Transaction>,
    pub proof: String,
    #[serde(rename = "prevblockhash")]
    pub prev_block_hash: String,
}

impl Block {
    /// Build a block stamped with the current time.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: String,
        prev_block_hash: String,
    ) -> Self {
        Self::new_with_timestamp(
            index,
            transactions,
            proof,
            prev_block_hash,
            Utc::now().timestamp(),
        )
    }

    pub fn new_with_timestamp(
        index: u64,
        transactions: Vec<Transaction>,
        proof: String,
        prev_block_hash: String,
        timestamp: i64,
    ) -> Self {
        Self {
            index,
            timestamp,
            transactions,
            proof,
            prev_block_hash,
        }
    }

    /// SHA-256 over the block's canonical JSON encoding, as lowercase hex.
    pub fn hash(&self) -> String {
        let preimage = serde_json::to_vec(self).expect("serialize block");
        let mut hasher = Sha256::new();
        hasher.update(&preimage);
        hex::encode(hasher.finalize())
    }
}

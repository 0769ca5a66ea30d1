use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// Sender used for transactions minted by the node itself (mining reward).
pub const REWARD_SENDER: &str = "0";

/// Amount paid to the node identity for every mined block.
pub const MINING_REWARD: u64 = 20;

/// A value transfer between two opaque identifiers.
/// No signature or balance checks are performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }

    /// Reward transaction credited to `node_id` when it seals a block.
    pub fn reward(node_id: &NodeId) -> Self {
        Self::new(REWARD_SENDER, node_id.to_string(), MINING_REWARD)
    }
}

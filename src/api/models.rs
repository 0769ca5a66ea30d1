use serde::{Deserialize, Serialize};

use crate::blockchain::{Block, Ledger};
use crate::node::NodeId;
use crate::transaction::Transaction;

/// Shared application state: the ledger (which carries the node identity).
pub struct AppState {
    pub ledger: Ledger,
}

impl AppState {
    pub fn new(node_id: NodeId, difficulty: u32) -> Self {
        Self {
            ledger: Ledger::new(node_id, difficulty),
        }
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize, Deserialize)]
pub struct ChainResponse {
    pub blockchain: Vec<Block>,
    pub length: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

/* ---------- Mining API Models ---------- */

#[derive(Deserialize)]
pub struct SubmitBlockRequest {
    pub proof: String,
    #[serde(rename = "prevblockhash")]
    pub prev_block_hash: String,
}

/* ---------- TX API Models ---------- */

#[derive(Serialize, Deserialize)]
pub struct NewTxResponse {
    pub blockid: u64,
}

#[derive(Serialize, Deserialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

/* ---------- Peer API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterPeersRequest {
    pub nodes: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterPeersResponse {
    pub added: Vec<String>,
    pub total_nodes: usize,
}

#[derive(Serialize, Deserialize)]
pub struct PeersResponse {
    pub nodes: Vec<String>,
    pub total: usize,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub height: usize,
    pub last_block_hash: String,
    pub difficulty: u32,
    pub pending: usize,
    pub peers: usize,
    pub node_id: String,
}

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info};

use super::{Block, Blockchain, pow};
use crate::error::LedgerError;
use crate::node::NodeId;
use crate::transaction::Transaction;

/// Point-in-time summary of the ledger, read under a single lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerStats {
    pub height: usize,
    pub last_block_hash: String,
    pub difficulty: u32,
    pub pending: usize,
    pub peers: usize,
}

/// Thread-safe handle over a [`Blockchain`] plus the identity that
/// collects mining rewards. All mutations take the write lock; queries
/// take the read lock and return owned snapshots.
#[derive(Debug)]
pub struct Ledger {
    inner: RwLock<Blockchain>,
    node_id: NodeId,
}

impl Ledger {
    pub fn new(node_id: NodeId, difficulty: u32) -> Self {
        Self {
            inner: RwLock::new(Blockchain::new(difficulty)),
            node_id,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    fn read(&self) -> RwLockReadGuard<'_, Blockchain> {
        self.inner.read().expect("rwlock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Blockchain> {
        self.inner.write().expect("rwlock poisoned")
    }

    /// Admit a transaction into the pending pool. Returns the index of the
    /// block it will be sealed into.
    pub fn new_transaction(&self, tx: Transaction) -> u64 {
        self.write().new_transaction(tx)
    }

    /// Mine the next block and return a copy of it.
    ///
    /// The proof search runs without holding any lock, against a snapshot of
    /// the tip. The reward transaction and the block are then committed in a
    /// single write-locked section. If another miner extended the chain
    /// meanwhile, the search restarts from the new tip.
    pub fn mine(&self) -> Block {
        loop {
            let (last_proof, prev_hash, difficulty) = {
                let bc = self.read();
                let tip = bc.last_block();
                (tip.proof.clone(), tip.hash(), bc.difficulty())
            };

            let proof = pow::find_proof(&last_proof, difficulty);

            let mut bc = self.write();
            if bc.last_block().hash() != prev_hash {
                debug!(
                    "MINER - tip moved to #{} during search, retrying",
                    bc.last_block().index
                );
                continue;
            }

            debug_assert!(pow::valid_proof(
                &bc.last_block().proof,
                &proof,
                bc.difficulty()
            ));
            bc.new_transaction(Transaction::reward(&self.node_id));
            let block = bc.new_block(proof, prev_hash).clone();
            info!(
                "MINER - sealed block #{} (proof={}, txs={})",
                block.index,
                block.proof,
                block.transactions.len()
            );
            return block;
        }
    }

    /// Append a block built from an externally supplied proof, validated
    /// against the current tip.
    pub fn commit_block(&self, proof: String, prev_hash: String) -> Result<Block, LedgerError> {
        let mut bc = self.write();
        bc.commit_block(proof, prev_hash).cloned()
    }

    pub fn last_block(&self) -> Block {
        self.read().last_block().clone()
    }

    /// Consistent copy of the chain.
    pub fn chain(&self) -> Vec<Block> {
        self.read().chain.clone()
    }

    pub fn pending_transactions(&self) -> Vec<Transaction> {
        self.read().pending.clone()
    }

    pub fn register_peer(&self, address: String) -> bool {
        self.write().register_peer(address)
    }

    /// Known peers, sorted for stable output.
    pub fn peers(&self) -> Vec<String> {
        let mut peers: Vec<String> = self.read().peers.iter().cloned().collect();
        peers.sort();
        peers
    }

    /// Validity and length of the same chain snapshot.
    pub fn validate(&self) -> (bool, usize) {
        let bc = self.read();
        (bc.is_valid_chain(), bc.len())
    }

    pub fn stats(&self) -> LedgerStats {
        let bc = self.read();
        LedgerStats {
            height: bc.len(),
            last_block_hash: bc.last_block().hash(),
            difficulty: bc.difficulty(),
            pending: bc.pending.len(),
            peers: bc.peers.len(),
        }
    }
}

use std::collections::HashSet;

use super::{Block, GENESIS_PREV_HASH, GENESIS_PROOF, pow};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// Unsynchronized chain state: the blocks, the pending pool and the known
/// peers. Wrap it in a [`super::Ledger`] to share it between requests.
#[derive(Debug)]
pub struct Blockchain {
    pub chain: Vec<Block>,
    pub pending: Vec<Transaction>,
    pub peers: HashSet<String>,
    pub difficulty: u32,
}

impl Blockchain {
    /// Initialize a new blockchain with a genesis block.
    pub fn new(difficulty: u32) -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            pending: Vec::new(),
            peers: HashSet::new(),
            difficulty,
        };
        bc.new_block(GENESIS_PROOF.to_string(), GENESIS_PREV_HASH.to_string());
        bc
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Queue a transaction for the next block and return that block's index.
    pub fn new_transaction(&mut self, tx: Transaction) -> u64 {
        self.pending.push(tx);
        self.last_block().index + 1
    }

    /// Seal the pending pool into a new block and append it.
    /// Neither `proof` nor `prev_hash` is checked; see [`Self::commit_block`].
    pub fn new_block(&mut self, proof: String, prev_hash: String) -> &Block {
        let index = self.chain.len() as u64 + 1;
        let transactions = std::mem::take(&mut self.pending);
        self.chain.push(Block::new(index, transactions, proof, prev_hash));
        self.last_block()
    }

    /// Like [`Self::new_block`], but only if `prev_hash` is the current tip's
    /// hash and `proof` satisfies the work predicate against the tip's proof.
    pub fn commit_block(&mut self, proof: String, prev_hash: String) -> Result<&Block, LedgerError> {
        let tip = self.last_block();
        let tip_hash = tip.hash();
        if prev_hash != tip_hash {
            return Err(LedgerError::StaleTip {
                expected: tip_hash,
                found: prev_hash,
            });
        }
        if !pow::valid_proof(&tip.proof, &proof, self.difficulty) {
            return Err(LedgerError::InvalidProof {
                last_proof: tip.proof.clone(),
                proof,
            });
        }
        Ok(self.new_block(proof, prev_hash))
    }

    /// Insert a peer address; true if it was not known before.
    pub fn register_peer(&mut self, address: String) -> bool {
        self.peers.insert(address)
    }

    /// Validate the entire chain: genesis sentinels, index contiguity,
    /// hash linkage and proof-of-work.
    pub fn is_valid_chain(&self) -> bool {
        let Some(genesis) = self.chain.first() else {
            return false;
        };
        if genesis.index != 1
            || genesis.proof != GENESIS_PROOF
            || genesis.prev_block_hash != GENESIS_PREV_HASH
        {
            return false;
        }

        self.chain.windows(2).all(|pair| {
            let (prev, current) = (&pair[0], &pair[1]);
            current.index == prev.index + 1
                && current.prev_block_hash == prev.hash()
                && pow::valid_proof(&prev.proof, &current.proof, self.difficulty)
        })
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Blockchain;
    use crate::blockchain::{DEFAULT_DIFFICULTY, GENESIS_PREV_HASH, GENESIS_PROOF, pow};
    use crate::error::LedgerError;
    use crate::transaction::Transaction;

    fn mine_next(bc: &mut Blockchain) {
        let proof = pow::find_proof(&bc.last_block().proof, bc.difficulty());
        let prev = bc.last_block().hash();
        bc.commit_block(proof, prev).unwrap();
    }

    #[test]
    fn starts_with_genesis() {
        let bc = Blockchain::new(DEFAULT_DIFFICULTY);
        assert_eq!(bc.len(), 1);
        let genesis = bc.last_block();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert_eq!(genesis.prev_block_hash, GENESIS_PREV_HASH);
        assert!(genesis.transactions.is_empty());
        assert!(bc.pending.is_empty());
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn new_transaction_targets_next_block() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        assert_eq!(bc.new_transaction(Transaction::new("a", "b", 5)), 2);
        assert_eq!(bc.new_transaction(Transaction::new("b", "c", 1)), 2);
        assert_eq!(bc.pending.len(), 2);
    }

    #[test]
    fn new_block_flushes_pending_and_links() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        let tx = Transaction::new("a", "b", 5);
        bc.new_transaction(tx.clone());
        let genesis_hash = bc.last_block().hash();

        let block = bc.new_block("anything".into(), genesis_hash.clone());
        assert_eq!(block.index, 2);
        assert_eq!(block.transactions, vec![tx]);
        assert_eq!(block.prev_block_hash, genesis_hash);
        assert!(bc.pending.is_empty());
    }

    #[test]
    fn new_block_accepts_unvalidated_proof() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        bc.new_block("not-a-proof".into(), "not-a-hash".into());
        assert_eq!(bc.len(), 2);
        assert!(!bc.is_valid_chain());
    }

    #[test]
    fn commit_rejects_stale_prev_hash() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        let proof = pow::find_proof(GENESIS_PROOF, DEFAULT_DIFFICULTY);
        let err = bc.commit_block(proof, "stale".into()).unwrap_err();
        assert!(matches!(err, LedgerError::StaleTip { ref found, .. } if found == "stale"));
        assert_eq!(bc.len(), 1);
    }

    #[test]
    fn commit_rejects_invalid_proof() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        bc.new_transaction(Transaction::new("a", "b", 5));
        let prev = bc.last_block().hash();
        let mut bad = 0u64;
        while pow::valid_proof(GENESIS_PROOF, &bad.to_string(), DEFAULT_DIFFICULTY) {
            bad += 1;
        }
        let err = bc.commit_block(bad.to_string(), prev).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidProof { .. }));
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.pending.len(), 1);
    }

    #[test]
    fn mined_chain_is_linked_and_valid() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        for i in 0..3 {
            bc.new_transaction(Transaction::new("a", "b", i));
            mine_next(&mut bc);
        }
        assert_eq!(bc.len(), 4);
        for pair in bc.chain.windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
            assert_eq!(pair[1].prev_block_hash, pair[0].hash());
            assert!(pow::valid_proof(&pair[0].proof, &pair[1].proof, DEFAULT_DIFFICULTY));
        }
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn tampering_breaks_validation() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        bc.new_transaction(Transaction::new("a", "b", 5));
        mine_next(&mut bc);
        mine_next(&mut bc);
        assert!(bc.is_valid_chain());

        bc.chain[1].transactions[0].amount = 500;
        assert!(!bc.is_valid_chain());
    }

    #[test]
    #[should_panic(expected = "genesis")]
    fn empty_chain_tip_panics() {
        let bc = Blockchain {
            chain: Vec::new(),
            pending: Vec::new(),
            peers: HashSet::new(),
            difficulty: DEFAULT_DIFFICULTY,
        };
        bc.last_block();
    }

    #[test]
    fn empty_chain_is_invalid() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        bc.chain.clear();
        assert!(!bc.is_valid_chain());
    }

    #[test]
    fn peer_registration_is_idempotent() {
        let mut bc = Blockchain::new(DEFAULT_DIFFICULTY);
        assert!(bc.register_peer("http://10.0.0.1:8000".into()));
        assert!(!bc.register_peer("http://10.0.0.1:8000".into()));
        assert!(bc.register_peer("http://10.0.0.2:8000".into()));
        assert_eq!(bc.peers.len(), 2);
    }
}

//! Hash-prefix proof-of-work.
//!
//! A proof is valid for `last_proof` when SHA-256 of the text
//! `last_proof + proof` starts with `difficulty` zero hex characters.
//! Checking a candidate costs one hash; finding one costs about
//! `16^difficulty` hashes on average.

use log::debug;
use sha2::{Digest, Sha256};

pub fn valid_proof(last_proof: &str, proof: &str, difficulty: u32) -> bool {
    let mut hasher = Sha256::new();
    hasher.update(last_proof.as_bytes());
    hasher.update(proof.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest
        .chars()
        .take(difficulty as usize)
        .all(|c| c == '0')
}

/// Exhaustive search over 0, 1, 2, ... for the first valid proof.
/// Unbounded: runs until a proof is found.
pub fn find_proof(last_proof: &str, difficulty: u32) -> String {
    let mut candidate: u64 = 0;
    loop {
        let proof = candidate.to_string();
        if valid_proof(last_proof, &proof, difficulty) {
            debug!(
                "POW - found proof {} for last_proof={} after {} attempts",
                proof,
                last_proof,
                candidate + 1
            );
            return proof;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{find_proof, valid_proof};
    use sha2::{Digest, Sha256};

    #[test]
    fn found_proof_is_valid() {
        let proof = find_proof("100", 3);
        assert!(valid_proof("100", &proof, 3));
        let digest = hex::encode(Sha256::digest(format!("100{proof}").as_bytes()));
        assert!(digest.starts_with("000"));
    }

    #[test]
    fn search_returns_smallest_candidate() {
        let proof: u64 = find_proof("100", 2).parse().unwrap();
        for smaller in 0..proof {
            assert!(!valid_proof("100", &smaller.to_string(), 2));
        }
    }

    #[test]
    fn search_is_deterministic() {
        assert_eq!(find_proof("abc", 2), find_proof("abc", 2));
    }

    #[test]
    fn proof_is_bound_to_last_proof() {
        let proof = find_proof("100", 3);
        assert_eq!(proof, "6016");
        assert!(valid_proof("100", &proof, 3));
        assert!(!valid_proof("101", &proof, 3));
    }

    #[test]
    fn zero_difficulty_accepts_anything() {
        assert!(valid_proof("x", "y", 0));
        assert_eq!(find_proof("x", 0), "0");
    }
}

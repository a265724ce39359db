//! Suspect lookup - a chained hash table from clue text to suspect name
//!
//! Keys are matched exactly (case-sensitive). Registering a clue twice keeps
//! both entries; lookup returns the most recently registered one.

use sha2::{Digest, Sha256};

use crate::error::{DetectiveError, DetectiveResult};

/// Bucket count used by [`SuspectLookup::new`]
pub const DEFAULT_BUCKET_COUNT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectEntry {
    pub clue: String,
    pub suspect: String,
}

#[derive(Debug, Clone)]
pub struct SuspectLookup {
    /// Each chain is stored oldest-first; scans run newest-first.
    buckets: Vec<Vec<SuspectEntry>>,
    len: usize,
}

impl Default for SuspectLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectLookup {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_BUCKET_COUNT],
            len: 0,
        }
    }

    pub fn with_buckets(count: usize) -> DetectiveResult<Self> {
        if count == 0 {
            return Err(DetectiveError::ZeroBuckets);
        }
        Ok(Self {
            buckets: vec![Vec::new(); count],
            len: 0,
        })
    }

    /// Stable bucket for `clue`: the first eight bytes of its SHA-256,
    /// reduced modulo the bucket count. Identical across runs and platforms.
    pub fn bucket_of(&self, clue: &str) -> usize {
        let digest = Sha256::digest(clue.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(prefix) % self.buckets.len() as u64) as usize
    }

    /// Add an association; existing entries for the same clue are kept.
    pub fn register(&mut self, clue: impl Into<String>, suspect: impl Into<String>) {
        let clue = clue.into();
        let bucket = self.bucket_of(&clue);
        self.buckets[bucket].push(SuspectEntry {
            clue,
            suspect: suspect.into(),
        });
        self.len += 1;
    }

    /// Suspect registered for exactly `clue`, newest registration first.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.buckets[self.bucket_of(clue)]
            .iter()
            .rev()
            .find(|entry| entry.clue == clue)
            .map(|entry| entry.suspect.as_str())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest collision chain
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Distinct suspect names (ASCII case folded), sorted.
    pub fn suspects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .buckets
            .iter()
            .flatten()
            .map(|entry| entry.suspect.as_str())
            .collect();
        names.sort_by(|a, b| super::compare_clues(a, b).then_with(|| a.cmp(b)));
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        names
    }

    /// Empty every bucket, returning how many entries were released.
    pub fn release(mut self) -> usize {
        self.buckets.drain(..).map(|chain| chain.len()).sum()
    }
}

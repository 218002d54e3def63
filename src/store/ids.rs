use crate::config::IdMode;
use std::collections::HashSet;

/// Upper bound (exclusive) for randomly drawn ids.
pub const RANDOM_ID_RANGE: u64 = 10_000;

/// Draws attempted before falling back to the lowest free number.
const MAX_RANDOM_DRAWS: usize = 32;

/// Hands out numeric string ids.
///
/// Every id that was issued or reserved is remembered, so an id is never
/// handed out twice, even after the record holding it was deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    mode: IdMode,
    issued: HashSet<String>,
    next_sequential: u64,
}

impl IdGenerator {
    pub fn new(mode: IdMode) -> Self {
        Self {
            mode,
            issued: HashSet::new(),
            next_sequential: 1,
        }
    }

    /// Mark an externally assigned id (e.g. seed data) as taken.
    pub fn reserve(&mut self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            self.next_sequential = self.next_sequential.max(n.saturating_add(1));
        }
        self.issued.insert(id.to_string());
    }

    pub fn is_taken(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    pub fn next_id(&mut self) -> String {
        let id = match self.mode {
            IdMode::Random => self.random_id(),
            IdMode::Sequential => self.sequential_id(),
        };
        self.issued.insert(id.clone());
        id
    }

    fn random_id(&self) -> String {
        for _ in 0..MAX_RANDOM_DRAWS {
            let candidate = random_below(RANDOM_ID_RANGE).to_string();
            if !self.issued.contains(&candidate) {
                return candidate;
            }
        }
        tracing::debug!(
            issued = self.issued.len(),
            "Random ids keep colliding, taking lowest free id"
        );
        self.lowest_free()
    }

    fn lowest_free(&self) -> String {
        let mut n: u64 = 0;
        while self.issued.contains(&n.to_string()) {
            n += 1;
        }
        n.to_string()
    }

    fn sequential_id(&mut self) -> String {
        loop {
            let candidate = self.next_sequential.to_string();
            self.next_sequential += 1;
            if !self.issued.contains(&candidate) {
                return candidate;
            }
        }
    }
}

/// Uniform enough for ids: the modulo bias over a 64-bit draw is negligible
/// for a bound this small, and collisions are redrawn anyway.
fn random_below(bound: u64) -> u64 {
    let bytes = nanoid::rngs::default(8);
    let value = bytes
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    value % bound
}

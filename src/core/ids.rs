//! Id generation port. The engine never reaches for global randomness
//! directly; callers hand in an `IdSource` so mutations stay deterministic
//! under test.

use uuid::Uuid;

pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Production source: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic source for tests: `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SeqIds {
    prefix: String,
    next: u64,
}

impl SeqIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 0,
        }
    }
}

impl IdSource for SeqIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{}-{}", self.prefix, self.next)
    }
}

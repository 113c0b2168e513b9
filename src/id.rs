//! Ids for locally authored stories.
//!
//! Ids are the creation time in milliseconds as a decimal string. Two ids
//! generated in the same millisecond are bumped so the sequence is strictly
//! increasing within a process, and every id is left-padded to at least
//! `min_len` digits so it is always longer than the bundled default ids.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::clock::Clock;

pub struct IdGenerator {
    last: AtomicU64,
    min_len: usize,
}

impl IdGenerator {
    pub fn new(min_len: usize) -> Self {
        Self {
            last: AtomicU64::new(0),
            min_len,
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Next id for the given clock reading.
    pub fn next(&self, clock: &dyn Clock) -> String {
        let now = clock.now_millis();
        let mut current = self.last.load(Ordering::Relaxed);
        let value = loop {
            let candidate = now.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => break candidate,
                Err(actual) => current = actual,
            }
        };
        format!("{:0>width$}", value, width = self.min_len)
    }
}

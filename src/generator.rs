//! Random tree generation.
//!
//! Construction is breadth-first: the queue holds the frontier, each
//! dequeued node gets a left then a right child until the node budget is
//! exhausted. Values come from a pluggable [`ValueSource`] so tests can
//! supply deterministic sequences.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use tracing::{debug, instrument, warn};

use crate::arena::TreeArena;
use crate::cell::Queue;
use crate::errors::{TreeError, TreeResult};

/// Provider of node values in `[0, modulus)`.
pub trait ValueSource {
    fn next_value(&mut self, modulus: u32) -> TreeResult<u32>;
}

impl<S: ValueSource + ?Sized> ValueSource for Box<S> {
    fn next_value(&mut self, modulus: u32) -> TreeResult<u32> {
        (**self).next_value(modulus)
    }
}

/// OS entropy, 4 bytes per value, sign bit masked off before reduction.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl ValueSource for OsEntropy {
    fn next_value(&mut self, modulus: u32) -> TreeResult<u32> {
        let mut buf = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| TreeError::EntropyUnavailable(e.to_string()))?;
        Ok((u32::from_le_bytes(buf) & 0x7fff_ffff) % modulus)
    }
}

/// Deterministic value stream for reproducible trees.
#[derive(Debug)]
pub struct SeededValues {
    rng: StdRng,
}

impl SeededValues {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ValueSource for SeededValues {
    fn next_value(&mut self, modulus: u32) -> TreeResult<u32> {
        Ok((self.rng.next_u32() & 0x7fff_ffff) % modulus)
    }
}

/// Builds complete-ish binary trees level by level.
pub struct TreeGenerator<S> {
    source: S,
    degraded: bool,
}

impl TreeGenerator<OsEntropy> {
    /// Generator backed by OS entropy.
    pub fn from_os_entropy() -> Self {
        Self::new(OsEntropy)
    }
}

impl TreeGenerator<SeededValues> {
    /// Generator with a reproducible value stream.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SeededValues::new(seed))
    }
}

impl<S: ValueSource> TreeGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            degraded: false,
        }
    }

    /// True once any value had to fall back to the fixed zero because the
    /// source failed. Generation itself never aborts on entropy loss.
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    fn draw(&mut self, modulus: u32) -> u32 {
        match self.source.next_value(modulus) {
            Ok(value) => value,
            Err(e) => {
                if !self.degraded {
                    warn!("value source failed, degrading to fixed zero: {}", e);
                }
                self.degraded = true;
                0
            }
        }
    }

    /// Generates a tree of exactly `node_count` nodes with values in
    /// `[0, modulus)`.
    ///
    /// The root sits at depth 0 and each attached child records depth =
    /// parent + 1. Construction stops mid-level once the budget is spent,
    /// so the last level need not be complete. `node_count == 0` yields an
    /// empty tree; a zero `modulus` is clamped to 1.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&mut self, node_count: usize, modulus: u32) -> TreeResult<TreeArena> {
        if modulus == 0 {
            debug!("modulus 0 clamped to 1");
        }
        let modulus = modulus.max(1);

        let mut tree = TreeArena::with_capacity(node_count);
        if node_count == 0 {
            return Ok(tree);
        }

        let value = self.draw(modulus);
        let root = tree.insert_root(value)?;
        let mut created = 1;
        if created >= node_count {
            return Ok(tree);
        }

        let mut frontier = Queue::new();
        frontier.push(root);

        while let Some(parent) = frontier.pop() {
            let value = self.draw(modulus);
            let left = tree.insert_left(parent, value)?;
            created += 1;
            if created >= node_count {
                break;
            }
            frontier.push(left);

            let value = self.draw(modulus);
            let right = tree.insert_right(parent, value)?;
            created += 1;
            if created >= node_count {
                break;
            }
            frontier.push(right);
        }

        debug!(nodes = created, height = tree.height(), "generated tree");
        Ok(tree)
    }
}

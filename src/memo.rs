//! Explicit memoization of derived values keyed by a structural hash of their inputs.

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::Result;

/// SHA-256 of the JSON encoding of `value`, as lowercase hex.
///
/// JSON encodes every non-finite `f64` as `null`, so NaN and both infinities
/// hash alike. Charts treat all three as gaps, which keeps the cached output valid.
///
/// # Errors
/// Returns an error if `value` cannot be serialized.
pub fn structural_hash<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Single-slot cache that recomputes only when the input hash changes.
#[derive(Debug)]
pub struct Memo<T> {
    slot: Option<(String, T)>,
    computations: usize,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }

    /// Return the cached value for `inputs`, computing it if the inputs changed.
    ///
    /// # Errors
    /// Returns an error if `inputs` cannot be hashed.
    pub fn get_or_compute<K, F>(&mut self, inputs: &K, compute: F) -> Result<&T>
    where
        K: Serialize + ?Sized,
        F: FnOnce() -> T,
    {
        let key = structural_hash(inputs)?;
        let entry = match self.slot.take() {
            Some((cached_key, value)) if cached_key == key => {
                debug!(key = %&key[..12], "memo hit");
                (cached_key, value)
            }
            _ => {
                debug!(key = %&key[..12], "memo miss, recomputing");
                self.computations += 1;
                let value = compute();
                (key, value)
            }
        };
        Ok(&self.slot.insert(entry).1)
    }

    /// Drop the cached value so the next access recomputes.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Number of times the value has been computed.
    #[must_use]
    pub const fn computations(&self) -> usize {
        self.computations
    }

    #[must_use]
    pub fn cached(&self) -> Option<&T> {
        self.slot.as_ref().map(|(_, value)| value)
    }
}

#[cfg(test)]
#[path = "memo_tests.rs"]
mod tests;

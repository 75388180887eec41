//! SliceCache - Memoized window evaluation.
//!
//! Advancing a line applies the rule to every cell, but the 12-bit windows the
//! stepper tiles a line into come from a universe of only 4096 values, so full
//! memoization is cheap and quickly exhaustive. The cache is an owned object
//! handed to the stepper at construction, not process-global state, and it is
//! purely a cost optimization: `evaluate` always returns exactly what
//! [`evaluate_slice`] would.
//!
//! Entries are write-once and never evicted or invalidated.
//!
//! [`evaluate_slice`]: crate::rule::evaluate_slice

use crate::rule::{evaluate_slice, WINDOW_BITS};

/// Number of possible 12-bit windows.
pub const CACHE_SIZE: usize = 1 << WINDOW_BITS;

/// Lazy memo of the window evaluator over all 4096 possible keys.
#[derive(Clone, Debug)]
pub struct SliceCache {
    slices: Vec<Option<u8>>,
}

impl SliceCache {
    /// Create an empty cache with all 4096 slots unpopulated.
    pub fn new() -> Self {
        Self {
            slices: vec![None; CACHE_SIZE],
        }
    }

    /// Next-state slice for a 12-bit window, computed on first use and served
    /// from the cache afterwards.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `window >= 4096`.
    #[inline]
    pub fn evaluate(&mut self, window: u16) -> u8 {
        debug_assert!((window as usize) < CACHE_SIZE);
        match self.slices[window as usize] {
            Some(slice) => slice,
            None => {
                let slice = evaluate_slice(window);
                self.slices[window as usize] = Some(slice);
                slice
            }
        }
    }

    /// Number of populated entries. Diagnostic only.
    pub fn num_populated(&self) -> usize {
        self.slices.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for SliceCache {
    fn default() -> Self {
        Self::new()
    }
}

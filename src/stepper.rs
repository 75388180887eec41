//! Stepper - Advances a BitLine one generation.
//!
//! The line is tiled into 8-bit output slices. Each slice at bit position `p`
//! is produced from the 12-bit window covering bits `[p-2, p+9]` of the
//! current line (the slice's 8 cells plus 2 cells of context on each side),
//! looked up through the [`SliceCache`]. The margin invariant on encoded
//! lines guarantees live cells never reach the line ends within the simulated
//! horizon, so out-of-range context bits are always zero.
//!
//! The result is bit-for-bit identical to applying the rule table
//! independently at every cell of an unbounded zero-extended row.

use crate::bitline::{BitLine, Word, BITS_PER_WORD};
use crate::rule::SLICE_BITS;
use crate::slice_cache::SliceCache;

/// Whole-line generation stepper. Owns the slice cache, which persists (and
/// keeps warming) across every line and pattern this stepper advances.
#[derive(Clone, Debug)]
pub struct Stepper {
    cache: SliceCache,
}

impl Stepper {
    /// Create a stepper with the given cache. The cache may already be warm;
    /// a fresh one works identically.
    pub fn new(cache: SliceCache) -> Self {
        Self { cache }
    }

    /// Produce the next generation of `line`.
    ///
    /// The output has the same word count and capacity as the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelife::{BitLine, SliceCache, Stepper};
    ///
    /// let mut stepper = Stepper::new(SliceCache::new());
    /// let line = BitLine::encode("###", 16);
    /// let next = stepper.advance(&line);
    /// assert_eq!(next.num_words(), line.num_words());
    /// ```
    pub fn advance(&mut self, line: &BitLine) -> BitLine {
        let mut words: Vec<Word> = vec![0; line.num_words()];
        for p in (0..line.num_bits()).step_by(SLICE_BITS) {
            let window = if p == 0 {
                // No cells left of position 0; the two left-context bits are
                // virtual zeros.
                (line.window(0, SLICE_BITS + 2) << 2) as u16
            } else {
                line.window(p - 2, SLICE_BITS + 4) as u16
            };
            let slice = self.cache.evaluate(window);
            words[p / BITS_PER_WORD] |= (slice as Word) << (p % BITS_PER_WORD);
        }
        BitLine::from_words(words)
    }

    /// Read-only view of the owned cache.
    pub fn cache(&self) -> &SliceCache {
        &self.cache
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(SliceCache::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{evaluate_slice, RULE_TABLE};

    fn live_positions(line: &BitLine) -> Vec<usize> {
        (0..line.num_bits())
            .filter(|&b| line.get_bit(b) == 1)
            .collect()
    }

    #[test]
    fn test_empty_line_stays_empty() {
        let mut stepper = Stepper::default();
        let line = BitLine::encode("", 100);
        let next = stepper.advance(&line);
        assert_eq!(next.num_set(), 0);
        assert_eq!(next.num_words(), line.num_words());
    }

    #[test]
    fn test_triple_expands_one_step() {
        // "###" at margin 100 becomes five live cells one position left of
        // the original leading edge.
        let mut stepper = Stepper::default();
        let line = BitLine::encode("###", 100);
        let next = stepper.advance(&line);
        assert_eq!(live_positions(&next), vec![99, 100, 101, 102, 103]);
    }

    #[test]
    fn test_glider_translates() {
        // "###.#" reproduces itself shifted left by one cell per generation.
        let mut stepper = Stepper::default();
        let mut line = BitLine::encode("###.#", 100);
        for gen in 1..=4 {
            line = stepper.advance(&line);
            let expected: Vec<usize> = [0usize, 1, 2, 4]
                .iter()
                .map(|&o| 100 - gen + o)
                .collect();
            assert_eq!(live_positions(&line), expected, "generation {}", gen);
        }
    }

    #[test]
    fn test_matches_per_cell_rule_application() {
        // The sliced-and-cached path must agree with naive per-cell rule
        // application over the whole line, across word boundaries included.
        let mut stepper = Stepper::default();
        let line = BitLine::encode("##.#..###.#####.#..#.##", 55);
        let next = stepper.advance(&line);
        for cell in 0..line.num_bits() {
            let mut neighborhood = 0usize;
            for o in 0..5usize {
                let pos = (cell + o).wrapping_sub(2);
                if pos < line.num_bits() && line.get_bit(pos) == 1 {
                    neighborhood |= 1 << o;
                }
            }
            assert_eq!(
                next.get_bit(cell) == 1,
                RULE_TABLE[neighborhood],
                "cell {}",
                cell
            );
        }
    }

    #[test]
    fn test_word_count_preserved() {
        let mut stepper = Stepper::default();
        let line = BitLine::encode("#####", 200);
        let next = stepper.advance(&line);
        assert_eq!(next.num_words(), line.num_words());
        assert_eq!(next.num_bits(), line.num_bits());
    }

    #[test]
    fn test_cache_warms_during_advance() {
        let mut stepper = Stepper::default();
        let line = BitLine::encode("###", 100);
        stepper.advance(&line);
        assert!(stepper.cache().num_populated() > 0);
    }

    #[test]
    fn test_leading_slice_uses_virtual_zero_context() {
        // Live cells in the very first slice: position 0 has no left
        // neighbors, which must read as dead cells.
        let mut stepper = Stepper::default();
        let mut line = BitLine::new(64);
        line.set_bit(0);
        line.set_bit(1);
        line.set_bit(2);
        let next = stepper.advance(&line);
        let window = 0b111 << 2; // the three cells, dead context around them
        let expected = evaluate_slice(window);
        for i in 0..8 {
            assert_eq!(next.get_bit(i), (expected >> i) & 1);
        }
    }
}

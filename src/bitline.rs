//! BitLine - Packed bit representation of one automaton row using 64-bit words.
//!
//! This module provides the bit-line type that every other component operates
//! on. A row is stored as packed 64-bit words, with cell index i living at
//! bit `i % 64` of word `i / 64`.
//!
//! # Design
//!
//! - Uses `Vec<u64>` for storage (64-bit words)
//! - Bit indexing: word_idx = bit_idx / 64, bit_offset = bit_idx % 64
//! - A zero-padded margin is reserved on both sides at encoding time so that
//!   pattern growth over the full simulated horizon never reaches a boundary
//! - Windowed reads and multi-word shifts are the primitives the stepper and
//!   the canonicalizer are built on
//!
//! # Examples
//!
//! ```
//! use linelife::BitLine;
//!
//! let line = BitLine::encode("##.#", 8);
//! assert_eq!(line.num_set(), 3);
//! assert_eq!(line.first_set_bit(), Some(8));
//! ```

use serde::{Deserialize, Serialize};

/// Word type for bit storage (64-bit unsigned integer).
pub type Word = u64;

/// Number of bits per word.
pub const BITS_PER_WORD: usize = 64;

/// Character marking a live cell in pattern text. Every other character is a
/// dead cell.
pub const LIVE_CELL: char = '#';

/// Get word index from bit position
#[inline(always)]
const fn get_word_idx(bit_pos: usize) -> usize {
    bit_pos >> 6 // bit_pos / 64
}

/// Get bit index within word from bit position
#[inline(always)]
const fn get_bit_idx(bit_pos: usize) -> usize {
    bit_pos & 63 // bit_pos % 64
}

/// Create bitmask with n bits set (from LSB)
#[inline(always)]
const fn bitmask(n: usize) -> Word {
    if n == 0 {
        0
    } else if n >= BITS_PER_WORD {
        Word::MAX
    } else {
        Word::MAX >> (BITS_PER_WORD - n)
    }
}

/// One row of the automaton as a packed, fixed-capacity bit sequence.
///
/// Capacity is fixed at construction; the encoding constructor reserves a
/// zero margin on both sides large enough that no sequence of simulated steps
/// can push a live bit past either end, so stepping never reallocates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BitLine {
    /// Storage words (64-bit)
    words: Vec<Word>,
    /// Total number of bits
    num_bits: usize,
}

impl BitLine {
    /// Create a new BitLine with `n` bits, all zero.
    ///
    /// Capacity is rounded up to a whole number of words.
    pub fn new(n: usize) -> Self {
        let num_words = (n + BITS_PER_WORD - 1) / BITS_PER_WORD;
        Self {
            words: vec![0; num_words],
            num_bits: num_words * BITS_PER_WORD,
        }
    }

    /// Encode pattern text into a BitLine with `margin` zero bits reserved on
    /// each side.
    ///
    /// The live-cell character at text position `i` maps to bit `i + margin`;
    /// every other character (including nothing at all) is a dead cell.
    /// Capacity is sized from the actual text length, so arbitrarily long
    /// patterns encode without truncation.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelife::BitLine;
    ///
    /// let line = BitLine::encode("#.#", 4);
    /// assert_eq!(line.get_bit(4), 1);
    /// assert_eq!(line.get_bit(5), 0);
    /// assert_eq!(line.get_bit(6), 1);
    /// ```
    pub fn encode(text: &str, margin: usize) -> Self {
        let mut line = Self::new(text.len() + 2 * margin);
        for (i, c) in text.chars().enumerate() {
            if c == LIVE_CELL {
                line.set_bit(i + margin);
            }
        }
        line
    }

    /// Build a BitLine directly from words. Used by the stepper when
    /// assembling the next generation.
    pub(crate) fn from_words(words: Vec<Word>) -> Self {
        let num_bits = words.len() * BITS_PER_WORD;
        Self { words, num_bits }
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Set bit at position `b` to 1.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `b >= num_bits`.
    #[inline]
    pub fn set_bit(&mut self, b: usize) {
        debug_assert!(
            b < self.num_bits,
            "bit index {} out of bounds (length: {})",
            b,
            self.num_bits
        );
        self.words[get_word_idx(b)] |= 1 << get_bit_idx(b);
    }

    /// Get bit at position `b` (returns 0 or 1 as u8).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `b >= num_bits`.
    #[inline]
    pub fn get_bit(&self, b: usize) -> u8 {
        debug_assert!(
            b < self.num_bits,
            "bit index {} out of bounds (length: {})",
            b,
            self.num_bits
        );
        ((self.words[get_word_idx(b)] >> get_bit_idx(b)) & 1) as u8
    }

    // =========================================================================
    // Windowed and Word-Level Reads
    // =========================================================================

    /// Extract `width` contiguous bits starting at `low`, as the low bits of
    /// the returned word.
    ///
    /// Correctly spans the boundary between two adjacent words. Bits beyond
    /// the line's capacity read as zero, which matches the virtual
    /// zero-extended line the transition rule is defined over.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `low >= num_bits` or `width > 64`.
    #[inline]
    pub fn window(&self, low: usize, width: usize) -> Word {
        debug_assert!(low < self.num_bits);
        debug_assert!(width <= BITS_PER_WORD);
        let wi = get_word_idx(low);
        let bi = get_bit_idx(low);
        let mut value = self.words[wi] >> bi;
        if bi != 0 && wi + 1 < self.words.len() {
            value |= self.words[wi + 1] << (BITS_PER_WORD - bi);
        }
        value & bitmask(width)
    }

    /// Shift the entire bit sequence right by `n` positions, propagating
    /// carries across word boundaries. Vacated high bits become zero.
    pub fn shift_right(&mut self, n: usize) {
        let num_words = self.words.len();
        let word_shift = n / BITS_PER_WORD;
        let bit_shift = n % BITS_PER_WORD;
        if word_shift >= num_words {
            self.words.fill(0);
            return;
        }
        for i in 0..num_words {
            let src = i + word_shift;
            let mut value = if src < num_words {
                self.words[src] >> bit_shift
            } else {
                0
            };
            if bit_shift != 0 && src + 1 < num_words {
                value |= self.words[src + 1] << (BITS_PER_WORD - bit_shift);
            }
            self.words[i] = value;
        }
    }

    /// Index of the lowest set bit, or None if the line is all zero.
    pub fn first_set_bit(&self) -> Option<usize> {
        for (i, &word) in self.words.iter().enumerate() {
            if word != 0 {
                return Some(i * BITS_PER_WORD + word.trailing_zeros() as usize);
            }
        }
        None
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    ///
    /// Uses hardware popcount per word; cost is proportional to word count,
    /// not bit count. Cheap enough to serve as a signature before a full
    /// equality comparison.
    #[inline]
    pub fn num_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Get number of bits in the line.
    #[inline]
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Get number of words in storage.
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Get direct read-only access to word storage.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Print the row as live/dead cell characters (for debugging).
    #[allow(dead_code)]
    pub fn print_cells(&self) {
        for b in 0..self.num_bits {
            print!("{}", if self.get_bit(b) == 1 { LIVE_CELL } else { '.' });
        }
        println!();
    }
}

// =============================================================================
// Comparison Operators
// =============================================================================

impl PartialEq for BitLine {
    /// Compare BitLines using word-level comparison.
    ///
    /// Used by the classifier's history scan; compiles to memcmp.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.num_bits == other.num_bits && self.words == other.words
    }
}

impl Eq for BitLine {}

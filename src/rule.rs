//! The automaton's physics: a fixed radius-2 transition rule.
//!
//! A cell's next state is determined by a 5-cell neighborhood (two left
//! neighbors, the cell itself, two right neighbors). The rule is pure data: a
//! constant 32-entry table indexed by the 5-bit neighborhood value, with bit 0
//! of the index holding the leftmost neighbor and bit 4 the rightmost.
//!
//! This module also provides the direct (uncached) slice evaluator that maps
//! a 12-bit window to the 8 next-state bits of its interior; [`SliceCache`]
//! memoizes it.
//!
//! [`SliceCache`]: crate::SliceCache

/// Bits in one neighborhood.
pub const NEIGHBORHOOD_BITS: usize = 5;

/// Bits in one evaluation window: 2 bits of left context, 8 bits of content,
/// 2 bits of right context.
pub const WINDOW_BITS: usize = 12;

/// Next-state bits produced per window (the window's interior).
pub const SLICE_BITS: usize = 8;

/// Next state for each 5-bit neighborhood value. This table is the automaton
/// definition; everything else in the crate is representation and bookkeeping.
pub const RULE_TABLE: [bool; 1 << NEIGHBORHOOD_BITS] = [
    false, false, false, true, false, false, false, true, //  0..7
    false, true, true, true, false, true, true, false, //  8..15
    false, true, true, true, false, true, true, false, // 16..23
    true, true, true, false, true, false, false, true, // 24..31
];

/// Evaluate one 12-bit window directly against the rule table.
///
/// Output bit `i` (for `i` in `0..8`) is the rule applied to bits `[i, i+4]`
/// of the window, i.e. the next state of the cell at content position `i`
/// (window bit `i + 2`). The 2 bits of context on each side exist only to
/// feed the outermost neighborhoods.
///
/// # Examples
///
/// ```
/// use linelife::rule::evaluate_slice;
///
/// assert_eq!(evaluate_slice(0), 0);
/// assert_eq!(evaluate_slice(0xFFF), 0xFF);
/// ```
#[inline]
pub fn evaluate_slice(window: u16) -> u8 {
    debug_assert!(window < 1 << WINDOW_BITS);
    let mut slice = 0u8;
    for i in 0..SLICE_BITS {
        if RULE_TABLE[(window as usize >> i) & 0x1F] {
            slice |= 1 << i;
        }
    }
    slice
}

//! Canonicalizer - Shift-normalization of a BitLine.
//!
//! Two rows that hold the same pattern at different positions are the same
//! structure for classification purposes. Normalizing shifts a row right
//! until its lowest live cell sits at position 0 and records the distance,
//! making translated recurrences of an earlier state bit-identical to it
//! while the recorded shift distinguishes "repeated in place" from "repeated
//! elsewhere".

use crate::bitline::BitLine;

/// A shift-normalized row: the pattern with its leading live cell at
/// position 0, plus how far it was shifted to get there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canonical {
    /// The normalized row.
    pub line: BitLine,
    /// Absolute position of the pattern's leading live cell in the input.
    pub shift: usize,
}

/// Normalize `line` by shifting its pattern down to position 0.
///
/// Callers check for extinction before normalizing, so the input always has
/// at least one set bit on the classifier path; an all-zero line comes back
/// unchanged with shift 0.
///
/// # Examples
///
/// ```
/// use linelife::{normalize, BitLine};
///
/// let a = normalize(&BitLine::encode("#.##", 7));
/// let b = normalize(&BitLine::encode("#.##", 30));
/// assert_eq!(a.line.window(0, 4), b.line.window(0, 4));
/// assert_eq!(a.shift, 7);
/// assert_eq!(b.shift, 30);
/// ```
pub fn normalize(line: &BitLine) -> Canonical {
    let shift = line.first_set_bit().unwrap_or(0);
    let mut normalized = line.clone();
    normalized.shift_right(shift);
    Canonical {
        line: normalized,
        shift,
    }
}

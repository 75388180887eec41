//! linelife - Fate classifier for one-dimensional binary cellular automata.
//!
//! linelife simulates a one-dimensional binary cellular automaton under a
//! fixed radius-2 (5-neighbor) transition rule and classifies the long-term
//! behavior of an initial pattern into one of four categories:
//!
//! - **vanishing**: the live-cell count drops to 2 or fewer
//! - **blinking**: the pattern returns to an earlier exact state in place
//! - **gliding**: the pattern returns to an earlier exact state translated
//!   (a traveling structure)
//! - **other**: neither, within the bounded simulation horizon
//!
//! # Architecture
//!
//! The crate is built around a handful of small components, leaves first:
//!
//! - **BitLine**: a packed 64-bit-word row with zero-padded margins sized so
//!   growth never reaches a boundary within the simulated horizon
//! - **RuleTable**: the constant 32-entry neighborhood-to-next-state map, the
//!   automaton's entire physics
//! - **SliceCache**: a lazy memo of the 12-bit-window to 8-bit-slice
//!   evaluator over its full 4096-key universe
//! - **Stepper**: advances a whole row one generation by tiling it into
//!   overlapping windows and consulting the cache
//! - **Canonicalizer**: shift-normalizes a row so translated recurrences
//!   compare equal, recording the translation offset
//! - **Classifier**: the iterate/normalize/compare loop with a per-pattern
//!   recurrence history
//!
//! # Examples
//!
//! ```
//! use linelife::{Classifier, Outcome};
//!
//! let mut classifier = Classifier::new();
//! assert_eq!(classifier.classify("#"), Outcome::Vanishing);
//! assert_eq!(classifier.classify("#####"), Outcome::Blinking);
//! assert_eq!(classifier.classify("#.###"), Outcome::Gliding);
//! ```
//!
//! Batch classification, one pattern per input line:
//!
//! ```no_run
//! use linelife::Classifier;
//!
//! let mut classifier = Classifier::new();
//! for outcome in classifier.classify_path("patterns.txt").unwrap() {
//!     println!("{}", outcome);
//! }
//! ```
//!
//! # Performance
//!
//! - Rows are packed 64 cells per word; popcount and equality are word-level
//! - The stepper evaluates 8 cells per cache lookup, and the cache converges
//!   to full population after a few generations of varied input
//! - One classifier reused across a batch keeps the cache warm for every
//!   pattern

// Module declarations
pub mod bitline;
pub mod canonical;
pub mod classifier;
pub mod error;
pub mod rule;
pub mod slice_cache;
pub mod stepper;

// Re-exports for convenient access
pub use bitline::{BitLine, Word, BITS_PER_WORD, LIVE_CELL};
pub use canonical::{normalize, Canonical};
pub use classifier::{Classifier, Outcome, EXTINCTION_THRESHOLD, MAX_STEPS};
pub use error::{LinelifeError, Result};
pub use rule::RULE_TABLE;
pub use slice_cache::SliceCache;
pub use stepper::Stepper;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "linelife";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

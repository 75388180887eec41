//! Classifier - Decides the long-term fate of a pattern.
//!
//! Drives the iterate/normalize/compare loop: advance the row one generation
//! at a time, shift-normalize each state, and search the history of earlier
//! canonical states for an exact recurrence. The search is pre-filtered by
//! live-cell count, which is preserved exactly whenever a state has truly
//! repeated, so mismatched counts are skipped without a full comparison.
//!
//! # Outcomes
//!
//! - [`Outcome::Vanishing`]: the live-cell count dropped to 2 or fewer; such
//!   rows cannot sustain any rule-driven continuation
//! - [`Outcome::Blinking`]: an earlier state recurred at the same position
//! - [`Outcome::Gliding`]: an earlier state recurred translated, i.e. the
//!   pattern is a traveling structure
//! - [`Outcome::Other`]: no recurrence and no extinction within the step
//!   bound
//!
//! # Examples
//!
//! ```
//! use linelife::{Classifier, Outcome};
//!
//! let mut classifier = Classifier::new();
//! assert_eq!(classifier.classify("#"), Outcome::Vanishing);
//! assert_eq!(classifier.classify("###"), Outcome::Blinking);
//! assert_eq!(classifier.classify("###.#"), Outcome::Gliding);
//! ```

use crate::bitline::BitLine;
use crate::canonical::normalize;
use crate::error::{LinelifeError, Result};
use crate::slice_cache::SliceCache;
use crate::stepper::Stepper;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default and maximum number of generations simulated per pattern. Also the
/// margin reserved on each side of an encoded row, since the pattern front
/// advances at most one cell per generation.
pub const MAX_STEPS: usize = 100;

/// Rows with this many live cells or fewer cannot survive under the rule
/// table and are classified as vanishing on the spot.
pub const EXTINCTION_THRESHOLD: usize = 2;

/// Terminal classification of one pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Live-cell count dropped to the extinction threshold or below.
    Vanishing,
    /// Repeated an earlier state with no net translation.
    Blinking,
    /// Repeated an earlier state after a net translation.
    Gliding,
    /// Neither repeated nor died within the step bound.
    Other,
}

impl Outcome {
    /// The fixed output label for this outcome.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Vanishing => "vanishing",
            Outcome::Blinking => "blinking",
            Outcome::Gliding => "gliding",
            Outcome::Other => "other",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One step's entry in the recurrence history: the canonical row plus the
/// cheap signature (live-cell count) and the translation offset recorded
/// while normalizing.
#[derive(Clone, Debug)]
struct StepRecord {
    canonical: BitLine,
    num_set: usize,
    shift: usize,
}

/// Pattern fate classifier.
///
/// Owns the stepper (and through it the slice cache, which stays warm across
/// every pattern this classifier processes). History is rebuilt per pattern.
#[derive(Clone, Debug)]
pub struct Classifier {
    stepper: Stepper,
    max_steps: usize,
}

impl Classifier {
    /// Create a classifier with the default step bound of [`MAX_STEPS`].
    pub fn new() -> Self {
        Self {
            stepper: Stepper::new(SliceCache::new()),
            max_steps: MAX_STEPS,
        }
    }

    /// Create a classifier with a custom step bound.
    ///
    /// # Errors
    ///
    /// Returns [`LinelifeError::InvalidParameter`] if `max_steps` is 0.
    pub fn with_limit(max_steps: usize) -> Result<Self> {
        if max_steps == 0 {
            return Err(LinelifeError::InvalidParameter(
                "step limit must be nonzero".to_string(),
            ));
        }
        Ok(Self {
            stepper: Stepper::new(SliceCache::new()),
            max_steps,
        })
    }

    /// The step bound in force.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Classify pattern text. The live-cell character is `#`; everything
    /// else is dead.
    pub fn classify(&mut self, text: &str) -> Outcome {
        let line = BitLine::encode(text, self.max_steps);
        self.classify_line(line)
    }

    /// Classify an already-encoded row.
    ///
    /// The row's margins must be wide enough for this classifier's step
    /// bound; rows built by [`Classifier::classify`] always are.
    pub fn classify_line(&mut self, mut line: BitLine) -> Outcome {
        let mut history: Vec<StepRecord> = Vec::with_capacity(self.max_steps);

        for _ in 0..self.max_steps {
            let num_set = line.num_set();
            if num_set <= EXTINCTION_THRESHOLD {
                return Outcome::Vanishing;
            }

            let canonical = normalize(&line);
            // Most recent first; at most one entry can match under a
            // deterministic rule, so scan order does not affect the result.
            for record in history.iter().rev() {
                if record.num_set == num_set && record.canonical == canonical.line {
                    if record.shift == canonical.shift {
                        return Outcome::Blinking;
                    }
                    return Outcome::Gliding;
                }
            }
            history.push(StepRecord {
                canonical: canonical.line,
                num_set,
                shift: canonical.shift,
            });

            line = self.stepper.advance(&line);
        }

        Outcome::Other
    }

    /// Classify every line of `reader`, one pattern per line, in order.
    ///
    /// # Errors
    ///
    /// Returns [`LinelifeError::Io`] if reading fails.
    pub fn classify_reader<R: BufRead>(&mut self, reader: R) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        for line in reader.lines() {
            outcomes.push(self.classify(&line?));
        }
        Ok(outcomes)
    }

    /// Classify every line of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LinelifeError::Io`] if the file cannot be opened or read.
    pub fn classify_path<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<Outcome>> {
        let file = File::open(path)?;
        self.classify_reader(BufReader::new(file))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

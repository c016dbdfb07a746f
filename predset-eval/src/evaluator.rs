//! The implementation of the bounded set operations.


use std::collections::HashSet;

use predset_types::Set;

use crate::constants::DEFAULT_BOUND;
use crate::error::Error;

/// Evaluates the exhaustive set operations over a fixed integer range.
///
/// The scanned range is `[1, bound]`, both ends inclusive. The bound is
/// copied out of the [`EvaluatorConfig`] when the evaluator is constructed,
/// so a running scan always observes a single bound value; replacing the
/// bound requires exclusive access through [`Evaluator::set_config`].
#[derive(Clone, Debug)]
pub struct Evaluator {
    bound: i64,
}

/// Configuration for an [`Evaluator`].
#[derive(Clone, Debug)]
pub struct EvaluatorConfig {
    /// Inclusive upper limit of the scanned range. Must be at least 1.
    pub bound: i64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            bound: DEFAULT_BOUND,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            bound: DEFAULT_BOUND,
        }
    }
}

impl Evaluator {
    /// Returns a new `Evaluator` scanning `[1, config.bound]`.
    pub fn new(config: EvaluatorConfig) -> Result<Self, Error> {
        let bound = Self::validated_bound(&config)?;
        log::debug!("Initialized with scan range [1, {}]", bound);
        Ok(Evaluator { bound })
    }

    /// Replaces the configuration. Taking `&mut self` guarantees that no
    /// scan is in flight while the bound changes.
    pub fn set_config(&mut self, config: EvaluatorConfig) -> Result<(), Error> {
        let bound = Self::validated_bound(&config)?;
        log::debug!("Scan range changed to [1, {}]", bound);
        self.bound = bound;
        Ok(())
    }

    /// The inclusive upper limit of the scanned range.
    pub fn bound(&self) -> i64 {
        self.bound
    }

    fn validated_bound(config: &EvaluatorConfig) -> Result<i64, Error> {
        if config.bound < 1 {
            return Err(Error::InvalidBound(config.bound));
        }
        Ok(config.bound)
    }

    /// Returns whether every member of `set` within the scanned range
    /// satisfies `predicate`.
    ///
    /// Vacuously true when `set` has no members in range. The scan stops at
    /// the first counterexample.
    pub fn for_all(&self, set: &Set, predicate: impl Fn(i64) -> bool) -> bool {
        (1..=self.bound).all(|i| !set.contains(i) || predicate(i))
    }

    /// Returns whether at least one member of `set` within the scanned range
    /// satisfies `predicate`.
    pub fn exists(&self, set: &Set, predicate: impl Fn(i64) -> bool) -> bool {
        // The logical dual of `for_all`.
        !self.for_all(set, |i| !predicate(i))
    }

    /// Returns the set of all values produced by applying `transform` to the
    /// members of `set` within the scanned range.
    ///
    /// Only the construction scan is bounded. The returned set answers
    /// membership queries for any integer, so a transform is free to map
    /// members to values outside the scanned range.
    pub fn map(&self, set: &Set, transform: impl Fn(i64) -> i64) -> Set {
        let image: HashSet<i64> = (1..=self.bound)
            .filter(|&i| set.contains(i))
            .map(transform)
            .collect();
        Set::from_fn(move |j| image.contains(&j))
    }

    /// Returns whether every member of `a` within the scanned range is also
    /// a member of `b`.
    pub fn is_subset(&self, a: &Set, b: &Set) -> bool {
        self.for_all(a, |i| b.contains(i))
    }

    /// Returns whether `a` and `b` agree on every integer in the scanned
    /// range.
    pub fn same_members(&self, a: &Set, b: &Set) -> bool {
        self.is_subset(a, b) && self.is_subset(b, a)
    }
}

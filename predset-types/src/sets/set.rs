use std::{collections::HashSet, fmt, sync::Arc};

/// A set of integers, represented by its membership predicate.
///
/// A `Set` answers exactly one question: is a given integer a member? It has
/// no enumerable contents. Combinators never inspect the sets they are given;
/// they close over them and defer every membership decision to query time.
/// Sets are immutable, and cloning one shares the underlying predicate.
#[derive(Clone)]
pub struct Set {
    contains: Arc<dyn Fn(i64) -> bool + Send + Sync>,
}

impl Set {
    /// Wraps an arbitrary membership predicate. The predicate must be pure:
    /// repeated queries for the same integer must return the same verdict.
    pub fn from_fn(contains: impl Fn(i64) -> bool + Send + Sync + 'static) -> Self {
        Set {
            contains: Arc::new(contains),
        }
    }

    /// Returns whether `i` is a member of this set.
    pub fn contains(&self, i: i64) -> bool {
        (self.contains)(i)
    }

    /// The set with no members.
    pub fn empty() -> Self {
        Set::from_fn(|_| false)
    }

    /// The set of all integers.
    pub fn universal() -> Self {
        Set::from_fn(|_| true)
    }

    /// The set whose only member is `element`.
    pub fn singleton(element: i64) -> Self {
        Set::from_fn(move |i| i == element)
    }

    /// The finite set holding exactly `members`.
    pub fn of(members: &[i64]) -> Self {
        let members: HashSet<i64> = members.iter().copied().collect();
        Set::from_fn(move |i| members.contains(&i))
    }

    /// The set of all integers that are in `self` or in `other`.
    pub fn union(&self, other: &Set) -> Set {
        let (a, b) = (self.clone(), other.clone());
        Set::from_fn(move |i| a.contains(i) || b.contains(i))
    }

    /// The set of all integers that are in both `self` and `other`.
    pub fn intersect(&self, other: &Set) -> Set {
        let (a, b) = (self.clone(), other.clone());
        Set::from_fn(move |i| a.contains(i) && b.contains(i))
    }

    /// The set of all integers that are in `self` but not in `other`.
    ///
    /// This is the asymmetric difference: an integer outside both sets is
    /// not a member of the result, which distinguishes the difference from
    /// the complement of the union.
    pub fn diff(&self, other: &Set) -> Set {
        let (a, b) = (self.clone(), other.clone());
        Set::from_fn(move |i| a.contains(i) && !b.contains(i))
    }

    /// The subset of `self` for which `predicate` holds.
    pub fn filter(&self, predicate: impl Fn(i64) -> bool + Send + Sync + 'static) -> Set {
        let a = self.clone();
        Set::from_fn(move |i| a.contains(i) && predicate(i))
    }
}

impl fmt::Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Set(..)")
    }
}

//! The compiled composite comparator.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::types::OrderRule;

/// An immutable composite comparison over records of type `T`.
///
/// Produced by [`OrderingBuilder::build`](crate::OrderingBuilder::build).
/// Criteria are evaluated lexicographically: the first criterion that
/// distinguishes the two records decides, criteria that tie defer to the
/// next one. With no criteria, every pair of records is equivalent.
///
/// Cloning is cheap (criteria objects are shared, not copied). A
/// comparator is `Send + Sync` and safe to use from many threads at once,
/// including concurrently with further mutation of the builder it came
/// from.
pub struct Comparator<T> {
    rules: Vec<Arc<dyn OrderRule<T>>>,
}

impl<T> Comparator<T> {
    pub(crate) fn new(rules: Vec<Arc<dyn OrderRule<T>>>) -> Self {
        Self { rules }
    }

    /// Compares two records under the full criteria chain.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for rule in &self.rules {
            match rule.compare(a, b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Strict "comes before" predicate.
    ///
    /// Satisfies strict-weak-ordering semantics: `less(a, b)` and
    /// `less(b, a)` are both false exactly when the chain considers the
    /// two records equivalent.
    pub fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns the number of captured criteria.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

// Manual impl: derive would require `T: Clone`.
impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

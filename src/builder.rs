//! Criteria accumulation and compilation.

use std::sync::Arc;

use crate::comparator::Comparator;
use crate::types::{Direction, KeyRule, OrderRule};

/// Accumulates sort criteria and compiles them into a [`Comparator`].
///
/// Criteria are consulted in the order they were added: the first `by`
/// call is the primary key, each subsequent call a tie-breaker. Duplicate
/// keys are permitted and kept verbatim.
///
/// The builder is a single-threaded configuration object; once
/// [`build`](OrderingBuilder::build) has produced a [`Comparator`], that
/// comparator is independent of the builder and freely shareable.
///
/// # Examples
///
/// ```
/// use u_ordering::OrderingBuilder;
///
/// let cmp = OrderingBuilder::new()
///     .by(|p: &(u32, &str)| p.0)
///     .by(|p: &(u32, &str)| p.1.to_owned())
///     .build();
///
/// assert!(cmp.less(&(1, "b"), &(2, "a")));
/// assert!(cmp.less(&(1, "a"), &(1, "b")));
/// ```
pub struct OrderingBuilder<T> {
    rules: Vec<Arc<dyn OrderRule<T>>>,
}

impl<T> OrderingBuilder<T> {
    /// Creates a builder with no criteria.
    ///
    /// Building at this point yields a comparator that treats every pair
    /// of records as equivalent.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends an ascending criterion on the given key.
    ///
    /// The key function must be deterministic and side-effect-free;
    /// correctness of the composite ordering depends on it.
    pub fn by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.by_with(key, Direction::Ascending)
    }

    /// Appends a descending criterion on the given key.
    pub fn by_desc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.by_with(key, Direction::Descending)
    }

    /// Appends a criterion on the given key with an explicit direction.
    pub fn by_with<K, F>(self, key: F, direction: Direction) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.by_rule(KeyRule::new(key, direction))
    }

    /// Appends a custom criterion.
    ///
    /// Useful when a single extracted key cannot express the rule; see
    /// [`OrderRule`].
    pub fn by_rule<R>(mut self, rule: R) -> Self
    where
        R: OrderRule<T> + 'static,
    {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Returns the number of criteria added so far.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Compiles the current criteria into a [`Comparator`].
    ///
    /// The comparator captures its own snapshot of the criteria sequence:
    /// chaining further `by` calls onto this builder afterwards never
    /// affects comparators already built. Callable any number of times,
    /// each call producing an independent comparator.
    pub fn build(&self) -> Comparator<T> {
        Comparator::new(self.rules.clone())
    }
}

impl<T> Default for OrderingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: u32,
        label: String,
    }

    fn entry(id: u32, label: &str) -> Entry {
        Entry {
            id,
            label: label.into(),
        }
    }

    #[test]
    fn test_new_has_no_rules() {
        let builder = OrderingBuilder::<Entry>::new();
        assert_eq!(builder.rule_count(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(OrderingBuilder::<Entry>::default().rule_count(), 0);
    }

    #[test]
    fn test_chaining_accumulates_in_order() {
        let builder = OrderingBuilder::new()
            .by(|e: &Entry| e.id)
            .by(|e: &Entry| e.label.clone());
        assert_eq!(builder.rule_count(), 2);
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let builder = OrderingBuilder::new().by(|e: &Entry| e.id).by(|e: &Entry| e.id);
        assert_eq!(builder.rule_count(), 2);
    }

    #[test]
    fn test_build_does_not_consume_rules() {
        let builder = OrderingBuilder::new().by(|e: &Entry| e.id);
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first.rule_count(), 1);
        assert_eq!(second.rule_count(), 1);
    }

    #[test]
    fn test_built_comparator_is_a_snapshot() {
        let builder = OrderingBuilder::new().by(|e: &Entry| e.id);
        let by_id = builder.build();

        // Chain another criterion afterwards; the earlier comparator
        // must keep ordering by id alone.
        let builder = builder.by_desc(|e: &Entry| e.label.clone());
        let by_id_then_label = builder.build();

        let a = entry(1, "a");
        let z = entry(1, "z");
        assert!(!by_id.less(&a, &z));
        assert!(!by_id.less(&z, &a));
        assert!(by_id_then_label.less(&z, &a));
    }

    #[test]
    fn test_by_with_explicit_direction() {
        let cmp = OrderingBuilder::new()
            .by_with(|e: &Entry| e.id, Direction::Descending)
            .build();
        assert!(cmp.less(&entry(2, "a"), &entry(1, "a")));
    }

    #[test]
    fn test_by_rule_custom_criterion() {
        struct LabelLength;
        impl OrderRule<Entry> for LabelLength {
            fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
                a.label.len().cmp(&b.label.len())
            }
        }

        let cmp = OrderingBuilder::new().by_rule(LabelLength).build();
        assert!(cmp.less(&entry(9, "ab"), &entry(1, "abc")));
        assert!(!cmp.less(&entry(1, "ab"), &entry(9, "xy")));
    }
}

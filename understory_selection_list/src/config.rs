// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration and the capacity policy.

/// Default number of slots added whenever a [`SelectionList`](crate::SelectionList) grows.
pub const DEFAULT_GROWTH_INCREMENT: usize = 32;

/// Configuration for a [`SelectionList`](crate::SelectionList).
///
/// The list manages its own logical capacity in fixed steps of
/// [`growth_increment`](Self::growth_increment) slots. It grows when an insertion
/// needs more room and shrinks after a removal once at least two increments are
/// unused, back down to `len + growth_increment`. This keeps insertion amortized
/// O(1) and bounds wasted memory to roughly two increments.
///
/// ```rust
/// use understory_selection_list::{ListConfig, SelectionList};
///
/// let config = ListConfig::new()
///     .with_growth_increment(8)
///     .with_initial_capacity(4);
/// let list = SelectionList::<u32>::with_config(config);
/// assert_eq!(list.capacity(), 4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListConfig {
    growth_increment: usize,
    initial_capacity: usize,
}

impl ListConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            growth_increment: DEFAULT_GROWTH_INCREMENT,
            initial_capacity: DEFAULT_GROWTH_INCREMENT,
        }
    }

    /// Sets the growth increment. Values below `1` are treated as `1`.
    #[must_use]
    pub const fn with_growth_increment(mut self, increment: usize) -> Self {
        self.growth_increment = if increment == 0 { 1 } else { increment };
        self
    }

    /// Sets the capacity reserved when the list is created.
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the growth increment.
    #[must_use]
    pub const fn growth_increment(&self) -> usize {
        self.growth_increment
    }

    /// Returns the initial capacity.
    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the new logical capacity for a request of `requested` slots.
///
/// Returns `None` when the capacity should stay as it is. A request below the
/// current length is always ignored, so the result is never smaller than `len`.
pub(crate) fn next_capacity(
    requested: usize,
    capacity: usize,
    len: usize,
    increment: usize,
) -> Option<usize> {
    if requested < len {
        return None;
    }
    let grow = requested > capacity;
    let shrink = capacity
        .checked_sub(2 * increment)
        .is_some_and(|limit| requested <= limit);
    (grow || shrink).then(|| requested + increment)
}

#[cfg(test)]
mod tests {
    use super::{ListConfig, next_capacity};

    #[test]
    fn zero_increment_is_bumped_to_one() {
        let config = ListConfig::new().with_growth_increment(0);
        assert_eq!(config.growth_increment(), 1);
    }

    #[test]
    fn grows_only_past_capacity() {
        assert_eq!(next_capacity(32, 32, 31, 32), None);
        assert_eq!(next_capacity(33, 32, 32, 32), Some(65));
    }

    #[test]
    fn shrinks_once_two_increments_are_unused() {
        // 128 slots, 64 would be exactly two increments of slack.
        assert_eq!(next_capacity(64, 128, 64, 32), Some(96));
        assert_eq!(next_capacity(65, 128, 65, 32), None);
    }

    #[test]
    fn never_goes_below_len() {
        assert_eq!(next_capacity(3, 100, 10, 4), None);
    }

    #[test]
    fn small_capacity_never_shrinks() {
        // Capacity smaller than two increments cannot underflow.
        assert_eq!(next_capacity(0, 40, 0, 32), None);
    }
}

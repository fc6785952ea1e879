// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index repair rules shared by the structural operations.
//!
//! Each rule is a pure function from an old index (plus a description of the
//! affected range) to the new index, so the arithmetic can be tested apart
//! from the element shuffling in [`SelectionList`](crate::SelectionList).

/// Shifts `index` right by `n` when it sits at or after an insertion at `at`.
pub(crate) fn shift_for_insert(index: Option<usize>, at: usize, n: usize) -> Option<usize> {
    index.map(|i| if i >= at { i + n } else { i })
}

/// Outcome of remapping an index across the removal of `start..start + n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Removed {
    /// The index survived, possibly shifted.
    Kept(usize),
    /// The index pointed into the removed block.
    Swallowed,
}

/// Remaps `index` across the removal of the block `start..start + n`.
pub(crate) fn remap_for_remove(index: usize, start: usize, n: usize) -> Removed {
    if index < start {
        Removed::Kept(index)
    } else if index < start + n {
        Removed::Swallowed
    } else {
        Removed::Kept(index - n)
    }
}

/// Describes a block move of `len` items starting at `from` to the target `to`.
///
/// For a move to the left the block ends up starting at `to`; for a move to the
/// right it ends up ending at `to`. Targets inside the block are not moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BlockMove {
    pub(crate) from: usize,
    pub(crate) len: usize,
    pub(crate) to: usize,
}

impl BlockMove {
    /// Returns `true` if `to` falls inside the block, so nothing would move.
    pub(crate) fn is_degenerate(&self) -> bool {
        self.to >= self.from && self.to < self.from + self.len
    }

    /// Index where the block starts after the move.
    pub(crate) fn new_start(&self) -> usize {
        if self.to < self.from {
            self.to
        } else {
            self.to + 1 - self.len
        }
    }

    /// Remaps an index through the move.
    ///
    /// Three disjoint cases: inside the block (shifted with the block), inside
    /// the window the block passes over (shifted the other way by `len`), and
    /// everything else (unchanged).
    pub(crate) fn remap(&self, index: usize) -> usize {
        let Self { from, len, to } = *self;
        if index >= from && index < from + len {
            index - from + self.new_start()
        } else if to < from && index >= to && index < from {
            index + len
        } else if to > from && index >= from + len && index <= to {
            index - len
        } else {
            index
        }
    }
}

/// Clamps `index` into `0..len`, or clears it when the list is empty.
pub(crate) fn clamp_to_len(index: Option<usize>, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    index.map(|i| i.min(last))
}

/// Clears `index` when it no longer points into `0..len`.
pub(crate) fn drop_past_end(index: Option<usize>, len: usize) -> Option<usize> {
    index.filter(|&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::{BlockMove, Removed, clamp_to_len, drop_past_end, remap_for_remove, shift_for_insert};

    #[test]
    fn insert_shifts_at_and_after() {
        assert_eq!(shift_for_insert(Some(1), 2, 3), Some(1));
        assert_eq!(shift_for_insert(Some(2), 2, 3), Some(5));
        assert_eq!(shift_for_insert(Some(7), 2, 3), Some(10));
        assert_eq!(shift_for_insert(None, 0, 3), None);
    }

    #[test]
    fn remove_keeps_before_swallows_inside_shifts_after() {
        assert_eq!(remap_for_remove(0, 1, 2), Removed::Kept(0));
        assert_eq!(remap_for_remove(1, 1, 2), Removed::Swallowed);
        assert_eq!(remap_for_remove(2, 1, 2), Removed::Swallowed);
        assert_eq!(remap_for_remove(3, 1, 2), Removed::Kept(1));
    }

    #[test]
    fn move_left_remaps_block_and_window() {
        // [A B C D] with [B C] moved to 0 -> [B C A D].
        let mv = BlockMove { from: 1, len: 2, to: 0 };
        assert!(!mv.is_degenerate());
        assert_eq!(mv.new_start(), 0);
        assert_eq!(mv.remap(0), 2);
        assert_eq!(mv.remap(1), 0);
        assert_eq!(mv.remap(2), 1);
        assert_eq!(mv.remap(3), 3);
    }

    #[test]
    fn move_right_block_ends_at_target() {
        // [A B C D E] with [A B] moved to 3 -> [C D A B E].
        let mv = BlockMove { from: 0, len: 2, to: 3 };
        assert_eq!(mv.new_start(), 2);
        assert_eq!(mv.remap(0), 2);
        assert_eq!(mv.remap(1), 3);
        assert_eq!(mv.remap(2), 0);
        assert_eq!(mv.remap(3), 1);
        assert_eq!(mv.remap(4), 4);
    }

    #[test]
    fn target_inside_block_is_degenerate() {
        let mv = BlockMove { from: 2, len: 3, to: 4 };
        assert!(mv.is_degenerate());
        let mv = BlockMove { from: 2, len: 3, to: 5 };
        assert!(!mv.is_degenerate());
    }

    #[test]
    fn clamp_and_drop() {
        assert_eq!(clamp_to_len(Some(9), 3), Some(2));
        assert_eq!(clamp_to_len(Some(1), 3), Some(1));
        assert_eq!(clamp_to_len(Some(0), 0), None);
        assert_eq!(drop_past_end(Some(3), 3), None);
        assert_eq!(drop_past_end(Some(2), 3), Some(2));
    }
}

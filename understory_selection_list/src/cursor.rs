// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detached, fail-fast iteration.
//!
//! A borrowing iterator from [`SelectionList::iter`] can never observe a
//! mutation. Hosts that walk the list across calls (for example, a view that
//! binds rows lazily between frames) keep a [`Cursor`] instead and hand the
//! list back in on every step. The cursor remembers the modification version
//! it started at and refuses to continue once the list was structurally
//! changed.

use crate::{ListError, SelectionList};

/// A position into a [`SelectionList`] that detects structural changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    next: usize,
    version: u64,
}

impl Cursor {
    /// Creates a cursor at the start of `list`.
    #[must_use]
    pub fn new<E>(list: &SelectionList<E>) -> Self {
        Self {
            next: 0,
            version: list.version(),
        }
    }

    /// Index of the element the next call to [`Cursor::next`] will yield.
    #[must_use]
    pub fn position(&self) -> usize {
        self.next
    }

    /// Returns the next element, `Ok(None)` at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Stale`] if `list` was inserted into, removed from,
    /// sorted, moved, or cleared since the cursor was created.
    pub fn next<'a, E>(&mut self, list: &'a SelectionList<E>) -> Result<Option<&'a E>, ListError> {
        if list.version() != self.version {
            tracing::debug!(
                expected = self.version,
                found = list.version(),
                "stale selection list cursor"
            );
            return Err(ListError::Stale {
                expected: self.version,
                found: list.version(),
            });
        }
        let item = list.get(self.next);
        if item.is_some() {
            self.next += 1;
        }
        Ok(item)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for checked access.

use core::fmt;

/// Error returned by checked accessors and [`Cursor`](crate::Cursor).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListError {
    /// `index` is not inside `0..len`.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// The list was structurally modified after the cursor was created.
    Stale {
        /// Modification version the cursor was created at.
        expected: u64,
        /// Modification version of the list now.
        found: u64,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for a list of length {len}")
            }
            Self::Stale { expected, found } => write!(
                f,
                "list was modified during iteration (version {expected}, now {found})"
            ),
        }
    }
}

impl core::error::Error for ListError {}

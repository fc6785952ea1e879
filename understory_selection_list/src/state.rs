// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row state handed to rendering collaborators.

use alloc::string::{String, ToString};
use core::fmt;

bitflags::bitflags! {
    /// Rendering state of a single row.
    ///
    /// [`SELECTED`](Self::SELECTED) marks the anchor of the selection and takes
    /// precedence over [`MULTI_SELECTED`](Self::MULTI_SELECTED): a row never
    /// carries both.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemState: u8 {
        /// Row is the current item.
        const CURRENT        = 0b0000_0001;
        /// Row is the selection anchor.
        const SELECTED       = 0b0000_0010;
        /// Row is inside the selection range but is not the anchor.
        const MULTI_SELECTED = 0b0000_0100;
        /// The element asked to be highlighted.
        const HIGHLIGHTED    = 0b0000_1000;
    }
}

/// Elements stored in a [`SelectionList`](crate::SelectionList) that take part
/// in identity and rendering contracts.
///
/// The identifier must stay stable for the lifetime of the element; list views
/// rely on it to match rows across changes.
pub trait ListItem {
    /// Stable, caller-meaningful identifier.
    fn id(&self) -> u64;

    /// Whether the element wants to be drawn highlighted.
    fn is_highlighted(&self) -> bool {
        false
    }
}

/// A borrowed row: an element plus its derived [`ItemState`].
#[derive(Debug)]
pub struct RowView<'a, E> {
    /// The element at this row.
    pub item: &'a E,
    /// State flags, including [`ItemState::HIGHLIGHTED`].
    pub state: ItemState,
}

impl<E: fmt::Display> RowView<'_, E> {
    /// Display text for the row.
    #[must_use]
    pub fn label(&self) -> String {
        self.item.to_string()
    }
}

// `Clone`/`Copy` without requiring `E: Clone`.
impl<E> Clone for RowView<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RowView<'_, E> {}

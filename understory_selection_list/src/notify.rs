// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications emitted by [`SelectionList`](crate::SelectionList).
//!
//! A list supports exactly one [`ListObserver`] and one [`VisibleWindow`] at a
//! time. Registering another one replaces the previous registration; there is
//! no subscriber list. Hosts that need to fan out should do so inside their
//! own observer.

/// What kind of change a notification describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Only selection, anchor, or current item changed; element order is intact.
    SelectionChanged,
    /// Elements were inserted, removed, or reordered.
    ContentsChanged,
    /// The list was emptied. Observers can take a full-reset path.
    ListCleared,
}

/// A single change notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Change {
    /// What happened.
    pub kind: ChangeKind,
    /// Index the viewport should be centered on, if any.
    pub goto: Option<usize>,
}

impl Change {
    /// Creates a change without a goto index.
    #[must_use]
    pub const fn new(kind: ChangeKind) -> Self {
        Self { kind, goto: None }
    }

    /// Creates a change with an optional goto index.
    #[must_use]
    pub const fn with_goto(kind: ChangeKind, goto: Option<usize>) -> Self {
        Self { kind, goto }
    }
}

/// Receives one [`Change`] after every notifying call on the list.
///
/// Any `FnMut(Change)` closure is an observer.
pub trait ListObserver {
    /// Called after the list changed.
    fn on_changed(&mut self, change: Change);
}

impl<F> ListObserver for F
where
    F: FnMut(Change),
{
    fn on_changed(&mut self, change: Change) {
        self(change);
    }
}

/// The visible-window collaborator, typically a scrolling list view.
///
/// It only hears about goto indices, decoupled from the generic change event.
pub trait VisibleWindow {
    /// Scrolls so that `index` is centered in the viewport.
    fn center_on_index(&mut self, index: usize, animate: bool);
}

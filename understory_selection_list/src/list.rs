// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`SelectionList`] container.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Index, RangeInclusive};

use crate::config::{ListConfig, next_capacity};
use crate::cursor::Cursor;
use crate::error::ListError;
use crate::notify::{Change, ChangeKind, ListObserver, VisibleWindow};
use crate::repair::{self, BlockMove, Removed};
use crate::state::{ItemState, ListItem, RowView};

/// Who asked for a selection change.
///
/// Changes made by the user do not request a scroll: the user is already
/// looking at the row they picked, and forcing the viewport to center it would
/// fight their own scrolling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionOrigin {
    /// The change comes from application logic; a goto index is reported.
    #[default]
    Program,
    /// The change comes from direct user interaction; no goto index is reported.
    User,
}

/// An ordered list that keeps a current item, a contiguous selection range, and
/// a selection anchor consistent across structural edits.
///
/// All positions are indices into the list. After every public call:
///
/// - the selection is either empty or `first <= last < len`,
/// - the current item is `None` or `< len`,
/// - the anchor is `None` or inside the selection range,
/// - `len <= capacity`.
///
/// Out-of-range positions passed to insertion and selection methods are
/// clamped. Direct element access ([`item`](Self::item), [`item_id`](Self::item_id),
/// indexing) panics on an invalid index, like slice indexing does.
///
/// ## Ownership
///
/// The list is meant to be driven by a single owner. There is no internal
/// locking, and every mutating call runs to completion and then emits one
/// notification. Callers that share a list between threads must wrap each
/// call in a single lock of their own.
pub struct SelectionList<E> {
    items: Vec<E>,
    config: ListConfig,
    capacity: usize,
    current: Option<usize>,
    first_sel: Option<usize>,
    last_sel: Option<usize>,
    original_sel: Option<usize>,
    last_deleted: Option<usize>,
    version: u64,
    observer: Option<Box<dyn ListObserver>>,
    window: Option<Box<dyn VisibleWindow>>,
}

impl<E> SelectionList<E> {
    /// Creates an empty list with the default [`ListConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Creates an empty list with an explicit configuration.
    #[must_use]
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity()),
            config,
            capacity: config.initial_capacity(),
            current: None,
            first_sel: None,
            last_sel: None,
            original_sel: None,
            last_deleted: None,
            version: 0,
            observer: None,
            window: None,
        }
    }

    /// Returns the configuration the list was created with.
    #[must_use]
    pub fn config(&self) -> ListConfig {
        self.config
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the managed capacity. Always at least [`len`](Self::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the modification version.
    ///
    /// Bumped by every insertion, removal, sort, move, and clear. Selection and
    /// current-item changes leave it alone.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Index of the current item.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Index of the selection anchor.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.original_sel
    }

    /// First index of the selection range.
    #[must_use]
    pub fn first_selected(&self) -> Option<usize> {
        self.first_sel
    }

    /// Last index of the selection range.
    #[must_use]
    pub fn last_selected(&self) -> Option<usize> {
        self.last_sel
    }

    /// The selection range, if any.
    #[must_use]
    pub fn selected_range(&self) -> Option<RangeInclusive<usize>> {
        self.selection_bounds().map(|(first, last)| first..=last)
    }

    /// Returns `true` if `index` lies inside the selection range.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection_bounds()
            .is_some_and(|(first, last)| index >= first && index <= last)
    }

    /// Where the most recent removal swallowed the current item.
    ///
    /// Owners use this to pick a fallback when the current item disappears.
    /// Reset to `None` by every removal that leaves the current item alive.
    #[must_use]
    pub fn last_deleted(&self) -> Option<usize> {
        self.last_deleted
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    pub fn item(&self, index: usize) -> &E {
        &self.items[index]
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] if `index >= len`.
    pub fn try_item(&self, index: usize) -> Result<&E, ListError> {
        self.items.get(index).ok_or(ListError::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Creates a [`Cursor`] at the start of the list.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    /// Rendering state of the row at `index`, without the element's own highlight.
    #[must_use]
    pub fn item_state(&self, index: usize) -> ItemState {
        let mut state = ItemState::empty();
        if self.current == Some(index) {
            state |= ItemState::CURRENT;
        }
        if self.original_sel == Some(index) {
            state |= ItemState::SELECTED;
        } else if self.is_selected(index) {
            state |= ItemState::MULTI_SELECTED;
        }
        state
    }

    /// Registers the change observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl ListObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes and returns the change observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn ListObserver>> {
        self.observer.take()
    }

    /// Registers the visible-window collaborator, replacing any previous one.
    pub fn set_window(&mut self, window: impl VisibleWindow + 'static) {
        self.window = Some(Box::new(window));
    }

    /// Removes and returns the visible-window collaborator.
    pub fn take_window(&mut self) -> Option<Box<dyn VisibleWindow>> {
        self.window.take()
    }

    /// Appends `item`.
    pub fn push(&mut self, item: E) {
        self.insert(self.items.len(), item);
    }

    /// Inserts `item` at `position`, appending when `position` is past the end.
    ///
    /// A multi-item selection is first collapsed to its first index, so that no
    /// range spans the insertion point. Indices at or after `position` move right.
    pub fn insert(&mut self, position: usize, item: E) {
        if self.first_sel != self.last_sel {
            self.collapse_selection();
        }
        let len = self.items.len();
        let position = position.min(len);
        self.request_capacity(len + 1);

        self.bump_version();
        self.items.insert(position, item);
        let len = self.items.len();
        self.current =
            repair::clamp_to_len(repair::shift_for_insert(self.current, position, 1), len);
        self.first_sel = repair::shift_for_insert(self.first_sel, position, 1);
        self.last_sel = repair::shift_for_insert(self.last_sel, position, 1);
        self.original_sel = repair::shift_for_insert(self.original_sel, position, 1);

        tracing::trace!(position, len, "inserted into selection list");
        self.notify(Change::new(ChangeKind::ContentsChanged));
    }

    /// Inserts every element of `items` at `position`, preserving their order.
    ///
    /// Unlike [`insert`](Self::insert), the selection is not collapsed; a range
    /// spanning `position` grows to cover the new block. Does nothing when
    /// `items` is empty.
    pub fn insert_many<I>(&mut self, position: usize, items: I)
    where
        I: IntoIterator<Item = E>,
    {
        let block: Vec<E> = items.into_iter().collect();
        self.insert_block(position, block);
    }

    /// Inserts the first `n` elements of `items` at `position`.
    ///
    /// `n` is clamped to `items.len()`; nothing happens when it ends up `0`.
    pub fn insert_from_slice(&mut self, position: usize, items: &[E], n: usize)
    where
        E: Clone,
    {
        let n = n.min(items.len());
        self.insert_block(position, items[..n].to_vec());
    }

    /// Removes every element and resets all positional state.
    ///
    /// The capacity is kept. Emits [`ChangeKind::ListCleared`].
    pub fn clear(&mut self) {
        self.bump_version();
        self.items.clear();
        self.reset_positions();
        tracing::trace!("cleared selection list");
        self.notify(Change::new(ChangeKind::ListCleared));
    }

    /// Removes the selected range.
    ///
    /// Afterwards the selection collapses to a single point at the old start
    /// (clamped to the new end), which also becomes the anchor and the goto
    /// index. If the current item was removed, it becomes `None` and
    /// [`last_deleted`](Self::last_deleted) records where the range started.
    ///
    /// Returns `false` without touching anything when there is no selection
    /// inside the list.
    pub fn remove_selection(&mut self) -> bool {
        let len = self.items.len();
        let Some((first, last)) = self.selection_bounds().filter(|&(first, _)| first < len)
        else {
            tracing::debug!(len, "nothing selected to remove");
            return false;
        };
        let n = (last - first + 1).min(len - first);
        if first != last {
            self.collapse_selection();
        }

        self.bump_version();
        self.items.drain(first..first + n);
        let len = self.items.len();

        self.last_deleted = None;
        if let Some(current) = self.current {
            self.current = match repair::remap_for_remove(current, first, n) {
                Removed::Kept(index) => Some(index),
                Removed::Swallowed => {
                    self.last_deleted = Some(first);
                    None
                }
            };
        }
        self.current = repair::drop_past_end(self.current, len);
        self.first_sel = repair::clamp_to_len(self.first_sel, len);
        self.last_sel = self.first_sel;
        self.original_sel = self.first_sel;
        self.request_capacity(len);

        tracing::trace!(start = first, removed = n, len, "removed selection");
        self.notify(Change::with_goto(
            ChangeKind::ContentsChanged,
            self.original_sel,
        ));
        true
    }

    /// Sorts the list with `compare`.
    ///
    /// Positions lose their meaning after a reorder, so the current item, the
    /// selection, the anchor, and the last deleted index are all cleared.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.bump_version();
        self.items.sort_by(compare);
        self.reset_positions();
        tracing::trace!(len = self.items.len(), "sorted selection list");
        self.notify(Change::new(ChangeKind::ContentsChanged));
    }

    /// Sorts the list by a key extracted from each element.
    ///
    /// See [`sort_by`](Self::sort_by).
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        F: FnMut(&E) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Sorts the list by the elements' natural order.
    ///
    /// See [`sort_by`](Self::sort_by).
    pub fn sort(&mut self)
    where
        E: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Moves the selected block to `to`, clamped to the last index.
    ///
    /// Moving left places the block so it starts at `to`; moving right places it
    /// so it ends at `to`. The anchor becomes `to` in both cases, and the
    /// selection range and current item follow the elements they pointed at.
    ///
    /// When `to` already lies inside the selection nothing is moved: only the
    /// anchor is set to `to`, with a [`ChangeKind::SelectionChanged`]
    /// notification if it actually changed.
    ///
    /// Returns `true` if elements were reordered.
    pub fn move_selection(&mut self, to: usize) -> bool {
        let len = self.items.len();
        let Some((from, last)) = self.selection_bounds() else {
            tracing::debug!(len, "nothing selected to move");
            return false;
        };
        let n = (last - from + 1).min(len).min(len.saturating_sub(from));
        if n == 0 {
            return false;
        }
        let to = to.min(len - 1);
        let block = BlockMove { from, len: n, to };

        if block.is_degenerate() {
            if self.original_sel != Some(to) {
                self.original_sel = Some(to);
                self.notify(Change::new(ChangeKind::SelectionChanged));
            }
            return false;
        }

        self.bump_version();
        if to < from {
            self.items[to..from + n].rotate_right(n);
        } else {
            self.items[from..=to].rotate_left(n);
        }
        self.current = self.current.map(|index| block.remap(index));
        self.first_sel = Some(block.remap(from));
        self.last_sel = Some(block.remap(last));
        self.original_sel = Some(to);

        tracing::trace!(from, to, moved = n, "moved selection");
        self.notify(Change::new(ChangeKind::ContentsChanged));
        true
    }

    /// Selects the single index `position`, or clears the selection on `None`.
    ///
    /// Always notifies. A program-driven selection reports the selected index
    /// as the goto index.
    pub fn set_selection(&mut self, position: Option<usize>, origin: SelectionOrigin) {
        let goto = self.apply_selection(position.map(|p| (p, p)), position);
        self.notify_selection(goto, origin);
    }

    /// Selects the range between `from` and `to`, in either order.
    ///
    /// Both ends are clamped to the last index; on an empty list the selection
    /// is cleared. A single-point range also becomes the anchor and the goto
    /// index. For a wider range the previous anchor is kept if it still falls
    /// inside, and cleared otherwise.
    pub fn set_selection_range(
        &mut self,
        from: usize,
        to: usize,
        notify: bool,
        origin: SelectionOrigin,
    ) {
        self.set_selection_range_with_original(from, to, None, notify, origin);
    }

    /// Like [`set_selection_range`](Self::set_selection_range), with an explicit anchor.
    ///
    /// If `original` lies inside the resulting range it becomes the anchor and
    /// the goto index, whether the range is a single point or not.
    pub fn set_selection_range_with_original(
        &mut self,
        from: usize,
        to: usize,
        original: Option<usize>,
        notify: bool,
        origin: SelectionOrigin,
    ) {
        let goto = self.apply_selection(Some((from, to)), original);
        if notify {
            self.notify_selection(goto, origin);
        }
    }

    /// Sets the current item. Indices past the end clear it.
    ///
    /// Emits [`ChangeKind::SelectionChanged`] when the value changes.
    pub fn set_current(&mut self, index: Option<usize>) {
        let index = repair::drop_past_end(index, self.items.len());
        if index == self.current {
            return;
        }
        self.current = index;
        self.notify(Change::new(ChangeKind::SelectionChanged));
    }

    /// Always `true`: element identifiers come from [`ListItem::id`], which is stable.
    #[must_use]
    pub fn has_stable_ids(&self) -> bool {
        true
    }

    fn insert_block(&mut self, position: usize, block: Vec<E>) {
        let n = block.len();
        if n == 0 {
            tracing::debug!("ignored empty bulk insert");
            return;
        }
        let len = self.items.len();
        let position = position.min(len);
        self.request_capacity(len + n);

        self.bump_version();
        self.items.splice(position..position, block);
        self.current = repair::shift_for_insert(self.current, position, n);
        self.first_sel = repair::shift_for_insert(self.first_sel, position, n);
        self.last_sel = repair::shift_for_insert(self.last_sel, position, n);
        self.original_sel = repair::shift_for_insert(self.original_sel, position, n);

        tracing::trace!(position, inserted = n, len = self.items.len(), "bulk inserted");
        self.notify(Change::new(ChangeKind::ContentsChanged));
    }

    /// Applies a new selection and returns the goto index it implies.
    fn apply_selection(
        &mut self,
        range: Option<(usize, usize)>,
        original: Option<usize>,
    ) -> Option<usize> {
        let bounds = range.and_then(|(from, to)| {
            let end = self.items.len().checked_sub(1)?;
            let (from, to) = (from.min(end), to.min(end));
            Some(if from > to { (to, from) } else { (from, to) })
        });
        let Some((first, last)) = bounds else {
            self.first_sel = None;
            self.last_sel = None;
            self.original_sel = None;
            return None;
        };

        self.first_sel = Some(first);
        self.last_sel = Some(last);
        let inside = |index: usize| index >= first && index <= last;
        if let Some(original) = original.filter(|&o| inside(o)) {
            self.original_sel = Some(original);
            Some(original)
        } else if first == last {
            self.original_sel = Some(first);
            Some(first)
        } else {
            self.original_sel = self.original_sel.filter(|&o| inside(o));
            None
        }
    }

    /// Collapses the selection to its first index without notifying.
    fn collapse_selection(&mut self) {
        if let Some(first) = self.first_sel {
            self.apply_selection(Some((first, first)), None);
        }
    }

    fn selection_bounds(&self) -> Option<(usize, usize)> {
        match (self.first_sel, self.last_sel) {
            (Some(first), Some(last)) if first <= last => Some((first, last)),
            _ => None,
        }
    }

    fn reset_positions(&mut self) {
        self.current = None;
        self.first_sel = None;
        self.last_sel = None;
        self.original_sel = None;
        self.last_deleted = None;
    }

    fn request_capacity(&mut self, requested: usize) {
        let Some(capacity) = next_capacity(
            requested,
            self.capacity,
            self.items.len(),
            self.config.growth_increment(),
        ) else {
            return;
        };
        if capacity > self.items.capacity() {
            self.items.reserve_exact(capacity - self.items.len());
        } else {
            self.items.shrink_to(capacity);
        }
        tracing::trace!(from = self.capacity, to = capacity, "resized selection list");
        self.capacity = capacity;
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn notify_selection(&mut self, goto: Option<usize>, origin: SelectionOrigin) {
        let goto = match origin {
            SelectionOrigin::Program => goto,
            SelectionOrigin::User => None,
        };
        self.notify(Change::with_goto(ChangeKind::SelectionChanged, goto));
    }

    fn notify(&mut self, change: Change) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_changed(change);
        }
        if let (Some(window), Some(goto)) = (self.window.as_mut(), change.goto) {
            window.center_on_index(goto, false);
        }
    }
}

impl<E: ListItem> SelectionList<E> {
    /// Stable identifier of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    pub fn item_id(&self, index: usize) -> u64 {
        self.items[index].id()
    }

    /// The element at `index` together with its full rendering state.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    pub fn row(&self, index: usize) -> RowView<'_, E> {
        let item = &self.items[index];
        let mut state = self.item_state(index);
        state.set(ItemState::HIGHLIGHTED, item.is_highlighted());
        RowView { item, state }
    }
}

impl<E> Default for SelectionList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Index<usize> for SelectionList<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.items[index]
    }
}

impl<'a, E> IntoIterator for &'a SelectionList<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E> FromIterator<E> for SelectionList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        list.items.extend(iter);
        let len = list.items.len();
        list.request_capacity(len);
        list
    }
}

impl<E: fmt::Debug> fmt::Debug for SelectionList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionList")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("capacity", &self.capacity)
            .field("current", &self.current)
            .field("first_sel", &self.first_sel)
            .field("last_sel", &self.last_sel)
            .field("original_sel", &self.original_sel)
            .field("last_deleted", &self.last_deleted)
            .field("version", &self.version)
            .field("observer", &self.observer.is_some())
            .field("window", &self.window.is_some())
            .finish()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection_list --heading-base-level=0

//! Understory Selection List: an ordered list with selection bookkeeping.
//!
//! [`SelectionList`] is the data side of a classic list view. Next to the
//! elements themselves it tracks:
//!
//! - a **current** item (for example, the track that is playing or the document
//!   that is open), independent of the selection,
//! - a contiguous **selection range** `first..=last`,
//! - an **anchor** inside that range, the representative row used for
//!   "scroll to this item",
//! - the **last deleted** position, set when a removal swallowed the current item,
//! - a **modification version** that bumps on every structural change.
//!
//! Every insertion, bulk insertion, removal, sort, and move repairs those
//! indices so they keep pointing at the same elements, or clears them when the
//! element they pointed at is gone.
//!
//! The crate does not render anything. Hosts register a [`ListObserver`] to
//! hear about changes and a [`VisibleWindow`] to be asked to center the
//! viewport on an index, and they query per-row [`ItemState`] flags when
//! drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_selection_list::{SelectionList, SelectionOrigin};
//!
//! let mut list = SelectionList::new();
//! list.insert_many(0, ['a', 'b', 'c', 'd']);
//!
//! // Select `b..=c` and drag it to the front.
//! list.set_selection_range(1, 2, true, SelectionOrigin::User);
//! assert!(list.move_selection(0));
//! assert_eq!(list.as_slice(), &['b', 'c', 'a', 'd']);
//! assert_eq!(list.selected_range(), Some(0..=1));
//! assert_eq!(list.selection(), Some(0));
//!
//! // Delete it again; the selection collapses onto the old start.
//! assert!(list.remove_selection());
//! assert_eq!(list.as_slice(), &['a', 'd']);
//! assert_eq!(list.selected_range(), Some(0..=0));
//! ```
//!
//! ## Notifications
//!
//! Each notifying call emits exactly one [`Change`]. Only one observer and one
//! window can be registered; registering again replaces the previous one.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_selection_list::{Change, ChangeKind, SelectionList, SelectionOrigin};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut list = SelectionList::new();
//! let sink = Rc::clone(&seen);
//! list.set_observer(move |change: Change| sink.borrow_mut().push(change));
//!
//! list.push(10_u32);
//! list.set_selection(Some(0), SelectionOrigin::Program);
//! list.clear();
//!
//! let kinds: Vec<_> = seen.borrow().iter().map(|c| c.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [ChangeKind::ContentsChanged, ChangeKind::SelectionChanged, ChangeKind::ListCleared]
//! );
//! assert_eq!(seen.borrow()[1].goto, Some(0));
//! ```
//!
//! ## Threading
//!
//! The list is a single-owner structure. It performs no locking and does no
//! I/O; every call is a bounded, synchronous array transformation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod cursor;
mod error;
mod list;
mod notify;
mod repair;
mod state;

pub use config::{DEFAULT_GROWTH_INCREMENT, ListConfig};
pub use cursor::Cursor;
pub use error::ListError;
pub use list::{SelectionList, SelectionOrigin};
pub use notify::{Change, ChangeKind, ListObserver, VisibleWindow};
pub use state::{ItemState, ListItem, RowView};

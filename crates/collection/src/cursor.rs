//! Traversal handles over an [`OrderedCollection`].
//!
//! Cursors are plain integer positions borrowed from the collection. The
//! mutating cursors hold the collection's `&mut` borrow for their whole
//! lifetime, so nothing else can change the collection while one is open;
//! removal through the cursor is the only way to delete mid-traversal.

use core::iter::FusedIterator;
use core::slice;

use armory_core::{DomainError, DomainResult, ItemRef};

use crate::ordered::OrderedCollection;

/// One-shot permission for remove/replace at a cursor.
///
/// `Fresh` until the cursor yields an element; `Advanced` remembers which
/// index was yielded. Any mutation through the cursor returns it to `Fresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Fresh,
    Advanced { last: usize },
}

impl CursorState {
    /// Consume the permission, returning the last yielded index.
    fn take(&mut self, op: &str) -> DomainResult<usize> {
        match core::mem::replace(self, CursorState::Fresh) {
            CursorState::Advanced { last } => Ok(last),
            CursorState::Fresh => Err(DomainError::illegal_state(format!(
                "{op}() requires a preceding next() or previous() since the last mutation"
            ))),
        }
    }
}

/// Read-only forward iterator over the live elements.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Option<ItemRef>>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(live: &'a [Option<ItemRef>]) -> Self {
        Self { inner: live.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ItemRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(Option::as_ref)
    }
}

// Every slot in the live range is occupied, so the slot count is exact.
impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Forward cursor that can remove the element it last yielded.
///
/// Iterating yields cloned handles; `None` signals exhaustion.
#[derive(Debug)]
pub struct Cursor<'a> {
    list: &'a mut OrderedCollection,
    position: usize,
    state: CursorState,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(list: &'a mut OrderedCollection) -> Self {
        Self {
            list,
            position: 0,
            state: CursorState::Fresh,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    /// Remove the element most recently yielded by `next()`.
    ///
    /// Fails with `IllegalState` before the first `next()` and when called
    /// twice without an intervening `next()`.
    pub fn remove(&mut self) -> DomainResult<ItemRef> {
        let last = self.state.take("remove")?;
        let removed = self.list.remove_at(last)?;
        self.position = last;
        Ok(removed)
    }
}

impl Iterator for Cursor<'_> {
    type Item = ItemRef;

    fn next(&mut self) -> Option<ItemRef> {
        let item = self.list.get(self.position).ok()?.clone();
        self.state = CursorState::Advanced {
            last: self.position,
        };
        self.position += 1;
        Some(item)
    }
}

/// Bidirectional cursor with remove, replace and insert.
///
/// The cursor sits *between* elements: `next()` yields the element at
/// `next_index()` and `previous()` the one at `previous_index()`.
#[derive(Debug)]
pub struct ListCursor<'a> {
    list: &'a mut OrderedCollection,
    position: usize,
    state: CursorState,
}

impl<'a> ListCursor<'a> {
    pub(crate) fn new(list: &'a mut OrderedCollection, start: usize) -> Self {
        Self {
            list,
            position: start,
            state: CursorState::Fresh,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Index of the element the next `next()` would yield.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the element the next `previous()` would yield, if any.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Step backwards, yielding the element before the cursor.
    pub fn previous(&mut self) -> Option<ItemRef> {
        let index = self.previous_index()?;
        let item = self.list.get(index).ok()?.clone();
        self.position = index;
        self.state = CursorState::Advanced { last: index };
        Some(item)
    }

    /// Remove the element last yielded by `next()` or `previous()`.
    pub fn remove(&mut self) -> DomainResult<ItemRef> {
        let last = self.state.take("remove")?;
        let removed = self.list.remove_at(last)?;
        if last < self.position {
            self.position -= 1;
        }
        Ok(removed)
    }

    /// Replace the element last yielded by `next()` or `previous()`,
    /// returning the replaced one.
    pub fn set(&mut self, item: ItemRef) -> DomainResult<ItemRef> {
        let last = self.state.take("set")?;
        self.list.set(last, item)
    }

    /// Insert before the cursor. A following `next()` is unaffected and a
    /// following `previous()` yields the inserted element.
    pub fn insert(&mut self, item: ItemRef) -> DomainResult<()> {
        self.list.insert_at(self.position, item)?;
        self.position += 1;
        self.state = CursorState::Fresh;
        Ok(())
    }
}

impl Iterator for ListCursor<'_> {
    type Item = ItemRef;

    fn next(&mut self) -> Option<ItemRef> {
        let item = self.list.get(self.position).ok()?.clone();
        self.state = CursorState::Advanced {
            last: self.position,
        };
        self.position += 1;
        Some(item)
    }
}

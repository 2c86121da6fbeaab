//! Array-backed ordered collection of equipment items.
//!
//! Live elements occupy slots `[0, len)` of an owned buffer; slots
//! `[len, capacity)` are always `None`. Every positional operation is derived
//! from those two numbers.

use core::cmp::Ordering;
use core::fmt;

use armory_core::{DomainError, DomainResult, Item, ItemRef};

use crate::cursor::{Cursor, Iter, ListCursor};

/// Capacity of a freshly created (or cleared) collection.
pub const INITIAL_CAPACITY: usize = 15;

/// Over-allocation applied on growth, in percent of the current length.
const GROWTH_PERCENT: usize = 30;

/// Growable, index-addressable sequence of [`ItemRef`]s.
///
/// Element equality is handle identity (see [`ItemRef`]): searching for an
/// item finds that exact item, not another one with the same fields.
#[derive(Clone)]
pub struct OrderedCollection {
    buf: Box<[Option<ItemRef>]>,
    len: usize,
}

fn empty_buffer(capacity: usize) -> Box<[Option<ItemRef>]> {
    vec![None; capacity].into_boxed_slice()
}

impl OrderedCollection {
    pub fn new() -> Self {
        Self {
            buf: empty_buffer(INITIAL_CAPACITY),
            len: 0,
        }
    }

    /// A collection holding a single item.
    pub fn with_item(item: ItemRef) -> Self {
        let mut list = Self::new();
        list.append(item);
        list
    }

    /// A collection holding `items` in order.
    pub fn from_items(items: &[ItemRef]) -> Self {
        let mut list = Self::new();
        list.append_all(items);
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn contains(&self, item: &ItemRef) -> bool {
        self.index_of(item).is_some()
    }

    /// True when every element of `items` is present. Vacuously true for an
    /// empty slice.
    pub fn contains_all(&self, items: &[ItemRef]) -> bool {
        items.iter().all(|item| self.contains(item))
    }

    pub fn append(&mut self, item: ItemRef) {
        self.ensure_capacity(self.len + 1);
        self.buf[self.len] = Some(item);
        self.len += 1;
    }

    /// Insert `item` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` is allowed and appends.
    pub fn insert_at(&mut self, index: usize, item: ItemRef) -> DomainResult<()> {
        if index > self.len {
            return Err(DomainError::index_out_of_range(index, self.len));
        }
        self.ensure_capacity(self.len + 1);
        // Slot `len` is empty, so rotating moves it down to `index`.
        self.buf[index..=self.len].rotate_right(1);
        self.buf[index] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Append `items` in order, growing at most once. Returns whether anything
    /// was appended.
    pub fn append_all(&mut self, items: &[ItemRef]) -> bool {
        self.ensure_capacity(self.len + items.len());
        for item in items {
            self.buf[self.len] = Some(item.clone());
            self.len += 1;
        }
        !items.is_empty()
    }

    /// Insert `items` in order starting at `index`. Returns `false` and leaves
    /// the collection untouched when `items` is empty.
    pub fn insert_all_at(&mut self, index: usize, items: &[ItemRef]) -> DomainResult<bool> {
        if index > self.len {
            return Err(DomainError::index_out_of_range(index, self.len));
        }
        if items.is_empty() {
            return Ok(false);
        }

        let count = items.len();
        self.ensure_capacity(self.len + count);
        self.buf[index..self.len + count].rotate_right(count);
        for (slot, item) in self.buf[index..index + count].iter_mut().zip(items) {
            *slot = Some(item.clone());
        }
        self.len += count;
        Ok(true)
    }

    /// Remove the first element equal to `item`.
    pub fn remove_value(&mut self, item: &ItemRef) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> DomainResult<ItemRef> {
        if index >= self.len {
            return Err(DomainError::index_out_of_range(index, self.len));
        }
        let removed = self.buf[index].take();
        // The emptied slot rotates to the end of the live range.
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        removed.ok_or_else(|| DomainError::index_out_of_range(index, self.len))
    }

    /// Remove every element equal to some element of `items`.
    pub fn remove_all(&mut self, items: &[ItemRef]) -> bool {
        self.retain(|item| !items.contains(item))
    }

    /// Remove every element not equal to some element of `items`.
    pub fn retain_all(&mut self, items: &[ItemRef]) -> bool {
        self.retain(|item| items.contains(item))
    }

    /// Keep only the elements for which `keep` returns true, preserving their
    /// order. Returns whether anything was removed.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&ItemRef) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if let Some(item) = self.buf[read].take() {
                if keep(&item) {
                    self.buf[write] = Some(item);
                    write += 1;
                }
            }
        }
        let removed = write != self.len;
        self.len = write;
        removed
    }

    /// Drop every element and shrink back to the initial capacity.
    pub fn clear(&mut self) {
        self.buf = empty_buffer(INITIAL_CAPACITY);
        self.len = 0;
    }

    pub fn get(&self, index: usize) -> DomainResult<&ItemRef> {
        self.buf[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| DomainError::index_out_of_range(index, self.len))
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: ItemRef) -> DomainResult<ItemRef> {
        let len = self.len;
        self.buf[..len]
            .get_mut(index)
            .and_then(|slot| slot.replace(item))
            .ok_or_else(|| DomainError::index_out_of_range(index, len))
    }

    pub fn index_of(&self, item: &ItemRef) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    pub fn last_index_of(&self, item: &ItemRef) -> Option<usize> {
        self.iter().rposition(|candidate| candidate == item)
    }

    /// Copy `[from, to)` into a new, independent collection.
    pub fn subrange(&self, from: usize, to: usize) -> DomainResult<OrderedCollection> {
        if from > to || to > self.len {
            return Err(DomainError::range_out_of_bounds(from, to, self.len));
        }
        Ok(self.iter().skip(from).take(to - from).cloned().collect())
    }

    /// A new collection with the elements matching `pred`, in order.
    pub fn filter<P>(&self, mut pred: P) -> OrderedCollection
    where
        P: FnMut(&ItemRef) -> bool,
    {
        self.iter().filter(|item| pred(item)).cloned().collect()
    }

    /// Stable in-place sort of the live elements.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Item, &Item) -> Ordering,
    {
        self.buf[..self.len].sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => cmp(a.item(), b.item()),
            // Unreachable under the live-range invariant; keeps the sort total.
            (a, b) => a.is_some().cmp(&b.is_some()).reverse(),
        });
    }

    /// Copy of the live elements, in order.
    pub fn to_vec(&self) -> Vec<ItemRef> {
        self.iter().cloned().collect()
    }

    /// Read-only forward traversal. Each call starts again from index 0.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buf[..self.len])
    }

    /// Forward cursor that can remove the element it last yielded.
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Bidirectional cursor positioned before the first element.
    pub fn list_cursor(&mut self) -> ListCursor<'_> {
        ListCursor::new(self, 0)
    }

    /// Bidirectional cursor whose first `next()` yields the element at `start`.
    pub fn list_cursor_at(&mut self, start: usize) -> DomainResult<ListCursor<'_>> {
        if start > self.len {
            return Err(DomainError::index_out_of_range(start, self.len));
        }
        Ok(ListCursor::new(self, start))
    }

    fn ensure_capacity(&mut self, required: usize) {
        if required > self.buf.len() {
            self.grow(required);
        }
    }

    fn grow(&mut self, required: usize) {
        let new_capacity = required.max(self.len + self.len * GROWTH_PERCENT / 100);
        tracing::trace!(
            "growing collection buffer from {} to {} slots",
            self.buf.len(),
            new_capacity
        );

        let mut buf = empty_buffer(new_capacity);
        for (dst, src) in buf.iter_mut().zip(self.buf[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.buf = buf;
    }
}

impl Default for OrderedCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// Element-wise identity comparison.
impl PartialEq for OrderedCollection {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for OrderedCollection {}

impl FromIterator<ItemRef> for OrderedCollection {
    fn from_iter<I: IntoIterator<Item = ItemRef>>(iter: I) -> Self {
        let items: Vec<ItemRef> = iter.into_iter().collect();
        Self::from_items(&items)
    }
}

impl Extend<ItemRef> for OrderedCollection {
    fn extend<I: IntoIterator<Item = ItemRef>>(&mut self, iter: I) {
        let items: Vec<ItemRef> = iter.into_iter().collect();
        self.append_all(&items);
    }
}

impl<'a> IntoIterator for &'a OrderedCollection {
    type Item = &'a ItemRef;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for OrderedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderedCollection { ")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str(" }")
    }
}

impl fmt::Debug for OrderedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedCollection")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &self.to_vec())
            .finish()
    }
}

//! `armory-collection` — the hand-built ordered collection that stores
//! equipment.
//!
//! [`OrderedCollection`] is a growable, index-addressable sequence backed by an
//! owned buffer. It offers value-style insert/remove/replace, identity-based
//! search, independent sub-range copies, and three traversal handles:
//!
//! - [`Iter`]: read-only, restartable forward iteration.
//! - [`Cursor`]: forward traversal that can remove what it just yielded.
//! - [`ListCursor`]: bidirectional traversal with remove, replace and insert.

pub mod cursor;
pub mod ordered;

pub use cursor::{Cursor, Iter, ListCursor};
pub use ordered::{INITIAL_CAPACITY, OrderedCollection};

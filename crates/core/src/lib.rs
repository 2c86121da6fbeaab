//! `armory-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives: the error model and the
//! validated equipment item types. No IO, no logging.

pub mod error;
pub mod item;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemKind, ItemRef};
pub use value_object::ValueObject;

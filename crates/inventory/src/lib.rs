//! Inventory domain module.
//!
//! A thin consumer of the ordered collection: it stores a knight's equipment
//! and exposes cost, weight ordering and price filtering on top of it. Pure
//! domain logic (no IO, no storage).

pub mod equipment;

pub use equipment::KnightEquipment;

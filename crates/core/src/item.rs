//! Equipment items: validated, immutable-after-construction values.

use core::fmt;
use core::ops::Deref;
use std::rc::Rc;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// The kind of an item plus its kind-specific attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A plain item with no extra attribute.
    Basic,
    Weapon { sharpness: i32 },
    Shield { defense: i32 },
    Armor { durability: i32 },
    Helmet { durability: i32 },
}

impl ItemKind {
    /// Display label and value of the kind-specific attribute, if any.
    pub fn attribute(&self) -> Option<(&'static str, i32)> {
        match *self {
            ItemKind::Basic => None,
            ItemKind::Weapon { sharpness } => Some(("Sharpness", sharpness)),
            ItemKind::Shield { defense } => Some(("Defense", defense)),
            ItemKind::Armor { durability } => Some(("Durability", durability)),
            ItemKind::Helmet { durability } => Some(("Durability", durability)),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ItemKind::Basic => "item",
            ItemKind::Weapon { .. } => "weapon",
            ItemKind::Shield { .. } => "shield",
            ItemKind::Armor { .. } => "armor",
            ItemKind::Helmet { .. } => "helmet",
        }
    }

    fn validate(&self) -> DomainResult<()> {
        match self.attribute() {
            Some((attr, value)) if value < 0 => Err(DomainError::validation(format!(
                "{} {} cannot be negative: {value}",
                self.label(),
                attr.to_lowercase()
            ))),
            _ => Ok(()),
        }
    }
}

/// A piece of equipment.
///
/// All fields are checked by the constructors and read-only afterwards. There
/// are no setters: to change an item, build a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    weight: f64,
    price: f64,
    kind: ItemKind,
}

impl ValueObject for Item {}

impl Item {
    /// Create a basic item.
    pub fn new(name: impl Into<String>, weight: f64, price: f64) -> DomainResult<Self> {
        Self::with_kind(name, weight, price, ItemKind::Basic)
    }

    pub fn weapon(
        name: impl Into<String>,
        weight: f64,
        price: f64,
        sharpness: i32,
    ) -> DomainResult<Self> {
        Self::with_kind(name, weight, price, ItemKind::Weapon { sharpness })
    }

    pub fn shield(
        name: impl Into<String>,
        weight: f64,
        price: f64,
        defense: i32,
    ) -> DomainResult<Self> {
        Self::with_kind(name, weight, price, ItemKind::Shield { defense })
    }

    pub fn armor(
        name: impl Into<String>,
        weight: f64,
        price: f64,
        durability: i32,
    ) -> DomainResult<Self> {
        Self::with_kind(name, weight, price, ItemKind::Armor { durability })
    }

    pub fn helmet(
        name: impl Into<String>,
        weight: f64,
        price: f64,
        durability: i32,
    ) -> DomainResult<Self> {
        Self::with_kind(name, weight, price, ItemKind::Helmet { durability })
    }

    /// Validate base fields first, then the kind-specific attribute.
    pub fn with_kind(
        name: impl Into<String>,
        weight: f64,
        price: f64,
        kind: ItemKind,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if weight.is_nan() || weight < 0.0 {
            return Err(DomainError::validation(format!(
                "weight cannot be negative: {weight}"
            )));
        }
        if price.is_nan() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative: {price}"
            )));
        }
        kind.validate()?;

        Ok(Self {
            name,
            weight,
            price,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// See [`ItemKind::attribute`].
    pub fn attribute(&self) -> Option<(&'static str, i32)> {
        self.kind.attribute()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the fractional part on whole numbers (5.0, not 5).
        // Very large or small values switch to exponent form (1e16, 1e-7).
        write!(
            f,
            "Name: {}, Weight: {:?}, Price: {:?}",
            self.name, self.weight, self.price
        )?;
        if let Some((attr, value)) = self.kind.attribute() {
            write!(f, ", {attr}: {value}")?;
        }
        Ok(())
    }
}

/// Shared handle to an [`Item`].
///
/// Handles compare by identity: two handles are equal only when they point at
/// the same allocation, regardless of the item values behind them.
#[derive(Debug, Clone)]
pub struct ItemRef(Rc<Item>);

impl ItemRef {
    pub fn new(item: Item) -> Self {
        Self(Rc::new(item))
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &ItemRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn item(&self) -> &Item {
        &self.0
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ItemRef {}

impl Deref for ItemRef {
    type Target = Item;

    fn deref(&self) -> &Item {
        &self.0
    }
}

impl From<Item> for ItemRef {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

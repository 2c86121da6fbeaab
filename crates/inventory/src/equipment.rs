use core::fmt;

use armory_collection::OrderedCollection;
use armory_core::{DomainError, DomainResult, ItemRef};

/// A knight's equipment: one ordered collection plus a few aggregate views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnightEquipment {
    equipment: OrderedCollection,
}

impl KnightEquipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the backing collection.
    pub fn equipment(&self) -> &OrderedCollection {
        &self.equipment
    }

    pub fn add_item(&mut self, item: ItemRef) {
        tracing::debug!("adding item to equipment: {}", item.name());
        self.equipment.append(item);
    }

    /// Sum of all prices.
    pub fn total_cost(&self) -> f64 {
        self.equipment.iter().map(|item| item.price()).sum()
    }

    /// Stable sort by ascending weight; equal weights keep their order.
    pub fn sort_by_weight(&mut self) {
        tracing::debug!("sorting {} items by weight", self.equipment.len());
        self.equipment.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    }

    /// Items whose price lies in `[min, max]`, in their current order.
    ///
    /// An inverted range matches nothing. NaN bounds are rejected.
    pub fn filter_by_price_range(&self, min: f64, max: f64) -> DomainResult<OrderedCollection> {
        if min.is_nan() || max.is_nan() {
            return Err(DomainError::invalid_argument(format!(
                "price range bounds must be numbers: {min}..={max}"
            )));
        }
        let matched = self
            .equipment
            .filter(|item| (min..=max).contains(&item.price()));
        tracing::debug!(
            "{} of {} items priced within {}..={}",
            matched.len(),
            self.equipment.len(),
            min,
            max
        );
        Ok(matched)
    }
}

impl fmt::Display for KnightEquipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Knight Equipment:")?;
        for item in &self.equipment {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

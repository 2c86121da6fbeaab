//! The equipment walkthrough printed by the `armory` binary.

use core::fmt::Write as _;

use anyhow::Context;

use armory_core::{DomainResult, Item, ItemRef};
use armory_inventory::KnightEquipment;

use crate::config::DemoConfig;

/// The sample equipment.
pub struct SampleEquipment {
    /// Every item in the order it is added. `armor` appears twice.
    pub items: Vec<ItemRef>,
    /// Handle to the duplicated armor.
    pub armor: ItemRef,
}

pub fn sample_equipment() -> DomainResult<SampleEquipment> {
    let sword = ItemRef::new(Item::weapon("Excalibur", 5.0, 200.0, 10)?);
    let shield = ItemRef::new(Item::shield("Steel Shield", 8.0, 100.0, 8)?);
    let armor = ItemRef::new(Item::armor("Knight Armor", 15.0, 300.0, 15)?);
    let helmet = ItemRef::new(Item::helmet("Knight Helmet", 2.0, 150.0, 15)?);
    let golden_shield = ItemRef::new(Item::shield("Golden Shield", 8.0, 600.0, 8)?);

    Ok(SampleEquipment {
        items: vec![
            sword,
            shield,
            golden_shield,
            armor.clone(),
            armor.clone(),
            helmet,
        ],
        armor,
    })
}

/// Run the walkthrough and return the report text.
pub fn run(config: &DemoConfig) -> anyhow::Result<String> {
    let SampleEquipment { items, armor } =
        sample_equipment().context("building sample equipment")?;

    let mut equipment = KnightEquipment::new();
    for item in &items {
        equipment.add_item(item.clone());
    }

    let mut out = String::new();
    writeln!(out, "{equipment}")?;
    writeln!(out, "Equipment cost: {:.2} $", equipment.total_cost())?;

    let list = equipment.equipment();
    if let (Some(first), Some(last)) = (list.index_of(&armor), list.last_index_of(&armor)) {
        writeln!(out, "{} is stored at slots {first} and {last}", armor.name())?;
    }
    let head = list
        .subrange(0, list.len().min(2))
        .context("taking the first two slots")?;
    writeln!(out, "First slots: {head}")?;

    equipment.sort_by_weight();
    writeln!(out, "\nSorted Equipment by Weight:\n{equipment}")?;

    let in_range = equipment
        .filter_by_price_range(config.min_price, config.max_price)
        .context("filtering by price range")?;
    writeln!(
        out,
        "Equipment in price range {:.2}$ - {:.2}$ :",
        config.min_price, config.max_price
    )?;
    for item in &in_range {
        writeln!(out, "{item}")?;
    }

    tracing::info!("demo finished: {} items in price range", in_range.len());
    Ok(out)
}

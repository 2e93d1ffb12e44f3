use anyhow::{Context, Result};
use log::debug;

use crate::entities::{FrameItem, SizeType};
use crate::io::ext_repr::{ExtFrameItem, ExtOrder};
use crate::pricing::PriceConfig;

/// Reads the size type as the extraction step reports it. Unknown values fall back to outer diameter.
pub fn parse_size_type(raw: Option<&str>) -> SizeType {
    match raw.map(str::trim) {
        Some("ID" | "id" | "内径") => SizeType::ID,
        _ => SizeType::OD,
    }
}

/// Imports a single item. `index` is its position in the order, used for the generated id.
pub fn import_item(ext_item: &ExtFrameItem, index: usize) -> Result<FrameItem> {
    let id = ext_item
        .id
        .clone()
        .unwrap_or_else(|| format!("item-{index}"));
    let quantity = match ext_item.quantity {
        None | Some(0) => 1,
        Some(q) => usize::try_from(q).context("quantity out of range")?,
    };

    let item = FrameItem::new(
        id,
        ext_item.model.trim(),
        ext_item.color.trim(),
        parse_size_type(ext_item.size_type.as_deref()),
        ext_item.width,
        ext_item.height,
        quantity,
    );
    item.validate()?;
    Ok(item)
}

/// Imports all items of an order. A single invalid item rejects the whole order.
pub fn import_order(ext_order: &ExtOrder) -> Result<(Vec<FrameItem>, PriceConfig)> {
    let items = ext_order
        .items
        .iter()
        .enumerate()
        .map(|(i, ext_item)| {
            import_item(ext_item, i).with_context(|| format!("invalid item at position {i}"))
        })
        .collect::<Result<Vec<FrameItem>>>()
        .with_context(|| format!("could not import order '{}'", ext_order.name))?;

    let price_config = ext_order.price_config.unwrap_or_default();
    price_config.validate()?;

    debug!(
        "[IO] imported order '{}' with {} items",
        ext_order.name,
        items.len()
    );

    Ok((items, price_config))
}

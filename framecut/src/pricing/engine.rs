use anyhow::{Result, ensure};

use crate::entities::{FrameGroup, FrameItem, QuotationLineItem};
use crate::pricing::{PriceConfig, PricingMode};
use crate::util::CutConfig;
use crate::util::rounding::{round_meters, round_money};

/// Surcharge applied to the perimeter of a frame in retail mode to cover offcuts
pub const RETAIL_LOSS_FACTOR: f64 = 1.2;

/// Quotation of a single group, before it is combined with the cutting plan
#[derive(Debug, Clone, PartialEq)]
pub struct GroupQuote {
    pub line_items: Vec<QuotationLineItem>,
    pub total_price: f64,
    pub unit_price: f64,
    pub avg_meters_per_frame: f64,
}

/// Price of one frame consuming `meters` of profile
pub fn frame_price(meters: f64, config: &PriceConfig) -> f64 {
    (meters * config.material_price + config.accessory_price + config.cutting_fee)
        * config.tax_rate
}

/// Billable meters of a single frame in retail mode
pub fn retail_meters(item: &FrameItem) -> f64 {
    item.perimeter() * RETAIL_LOSS_FACTOR
}

/// Prices a group.
/// `total_bars` is the number of bars of the group's cutting plan and is only used in [`PricingMode::Batch`].
pub fn price_group(
    group: &FrameGroup,
    total_bars: usize,
    price_config: &PriceConfig,
    cut_config: &CutConfig,
) -> Result<GroupQuote> {
    let total_quantity = group.total_quantity();
    ensure!(
        total_quantity > 0,
        "group {} ({}) has no frames to price",
        group.model,
        group.color
    );
    let qty = total_quantity as f64;

    //unrounded unit price per item and the group's average meters per frame
    let (unit_prices, avg_meters): (Vec<f64>, f64) = match price_config.mode {
        PricingMode::Retail => {
            let unit_prices = group
                .items
                .iter()
                .map(|item| frame_price(retail_meters(item), price_config))
                .collect();
            let weighted_meters = group
                .items
                .iter()
                .map(|item| retail_meters(item) * item.quantity as f64)
                .sum::<f64>();
            (unit_prices, weighted_meters / qty)
        }
        PricingMode::Batch => {
            let total_meters = total_bars as f64 * cut_config.bar_full_length;
            let avg_meters = total_meters / qty;
            let unit_price = frame_price(avg_meters, price_config);
            (vec![unit_price; group.items.len()], avg_meters)
        }
    };

    let mut total_price = 0.0;
    let line_items = group
        .items
        .iter()
        .zip(unit_prices)
        .map(|(item, unit_price)| {
            let item_total = unit_price * item.quantity as f64;
            total_price += item_total;
            QuotationLineItem {
                id: item.id.clone(),
                model: item.model.clone(),
                color: item.color.clone(),
                size: item.size_label(),
                unit_price: round_money(unit_price),
                quantity: item.quantity,
                total_price: round_money(item_total),
            }
        })
        .collect();

    Ok(GroupQuote {
        line_items,
        total_price: round_money(total_price),
        unit_price: round_money(total_price / qty),
        avg_meters_per_frame: round_meters(avg_meters),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SizeType;
    use float_cmp::approx_eq;

    fn group(items: Vec<FrameItem>) -> FrameGroup {
        FrameGroup {
            model: "D1822".into(),
            color: "黑色".into(),
            items,
        }
    }

    fn config(mode: PricingMode) -> PriceConfig {
        PriceConfig {
            mode,
            ..PriceConfig::default()
        }
    }

    #[test]
    fn retail_single_frame() {
        let g = group(vec![FrameItem::new(
            "a", "D1822", "黑色", SizeType::OD, 80.0, 60.0, 2,
        )]);
        let quote =
            price_group(&g, 1, &config(PricingMode::Retail), &CutConfig::default()).unwrap();

        // 2.8m perimeter * 1.2 = 3.36m, 3.36 * 45 + 15 + 10 = 176.2
        let line = &quote.line_items[0];
        assert!(approx_eq!(f64, line.unit_price, 176.2, epsilon = 1e-9));
        assert!(approx_eq!(f64, line.total_price, 352.4, epsilon = 1e-9));
        assert!(approx_eq!(f64, quote.total_price, 352.4, epsilon = 1e-9));
        assert!(approx_eq!(f64, quote.avg_meters_per_frame, 3.36, epsilon = 1e-9));
        assert_eq!(line.size, "80x60 (外径)");
    }

    #[test]
    fn retail_unit_price_only_depends_on_own_geometry() {
        let a = FrameItem::new("a", "D1822", "黑色", SizeType::OD, 80.0, 60.0, 1);
        let b = FrameItem::new("b", "D1822", "黑色", SizeType::OD, 30.0, 20.0, 7);
        let cfg = config(PricingMode::Retail);
        let alone = price_group(&group(vec![a.clone()]), 1, &cfg, &CutConfig::default()).unwrap();
        let mixed = price_group(&group(vec![b, a]), 3, &cfg, &CutConfig::default()).unwrap();
        assert_eq!(alone.line_items[0].unit_price, mixed.line_items[1].unit_price);
    }

    #[test]
    fn batch_amortizes_whole_bars() {
        let g = group(vec![
            FrameItem::new("a", "D1822", "黑色", SizeType::OD, 80.0, 60.0, 3),
            FrameItem::new("b", "D1822", "黑色", SizeType::OD, 40.0, 40.0, 1),
        ]);
        let cut = CutConfig::default();
        let quote = price_group(&g, 4, &config(PricingMode::Batch), &cut).unwrap();

        // 4 bars * 3.15m / 4 frames = 3.15m per frame
        let unit = 3.15 * 45.0 + 25.0;
        assert!(
            quote
                .line_items
                .iter()
                .all(|l| l.unit_price == quote.line_items[0].unit_price)
        );
        assert!(approx_eq!(f64, quote.line_items[0].unit_price, unit, epsilon = 1e-9));
        assert!(approx_eq!(f64, quote.total_price, unit * 4.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, quote.unit_price, unit, epsilon = 1e-9));
        assert!(approx_eq!(f64, quote.avg_meters_per_frame, 3.15, epsilon = 1e-9));
    }

    #[test]
    fn tax_is_multiplicative() {
        let g = group(vec![FrameItem::new(
            "a", "D1822", "黑色", SizeType::OD, 80.0, 60.0, 1,
        )]);
        let taxed = PriceConfig {
            tax_rate: 1.13,
            ..config(PricingMode::Retail)
        };
        let quote = price_group(&g, 1, &taxed, &CutConfig::default()).unwrap();
        assert!(approx_eq!(f64, quote.line_items[0].unit_price, 199.11, epsilon = 1e-9));
    }

    #[test]
    fn empty_group_is_rejected() {
        let g = group(vec![]);
        assert!(price_group(&g, 0, &PriceConfig::default(), &CutConfig::default()).is_err());
    }
}

use crate::entities::{BarPlan, FrameGroup, FrameItem};
use crate::pricing::GroupQuote;

/// Priced quotation line of a single [`FrameItem`]
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationLineItem {
    pub id: String,
    pub model: String,
    pub color: String,
    /// Formatted size, e.g. `80x60 (外径)`
    pub size: String,
    pub unit_price: f64,
    pub quantity: usize,
    pub total_price: f64,
}

/// Cutting plan and quotation of one (model, color) group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult {
    pub model: String,
    pub color: String,
    /// Number of stock bars needed for the group
    pub total_bars: usize,
    pub plans: Vec<BarPlan>,
    pub original_items: Vec<FrameItem>,
    pub line_items: Vec<QuotationLineItem>,
    pub total_price: f64,
    /// Average price per frame over the whole group
    pub unit_price: f64,
    pub total_quantity: usize,
    /// Average billed meters of profile per frame
    pub avg_meters_per_frame: f64,
}

impl GroupResult {
    /// Combines the cutting plan and the quotation of a group
    pub fn assemble(group: FrameGroup, plans: Vec<BarPlan>, quote: GroupQuote) -> Self {
        let total_quantity = group.total_quantity();
        let FrameGroup {
            model,
            color,
            items,
        } = group;
        let GroupQuote {
            line_items,
            total_price,
            unit_price,
            avg_meters_per_frame,
        } = quote;

        Self {
            model,
            color,
            total_bars: plans.len(),
            plans,
            original_items: items,
            line_items,
            total_price,
            unit_price,
            total_quantity,
            avg_meters_per_frame,
        }
    }

    /// Fraction of the usable bar length that ends up in edges
    pub fn usage(&self) -> f64 {
        let usable = self
            .plans
            .iter()
            .map(|p| p.total_usable_length)
            .sum::<f64>();
        let used = self.plans.iter().map(|p| p.used_length()).sum::<f64>();
        match usable > 0.0 {
            true => used / usable,
            false => 0.0,
        }
    }
}

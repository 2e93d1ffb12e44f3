use serde::{Deserialize, Serialize};

use crate::pricing::PriceConfig;

/// An order as delivered by the extraction step (manual entry, text or image recognition)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOrder {
    /// The name of the order
    #[serde(default)]
    pub name: String,
    /// Frames in the order
    pub items: Vec<ExtFrameItem>,
    /// Prices to quote with, the defaults are used if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_config: Option<PriceConfig>,
}

/// External representation of a [`FrameItem`](crate::entities::FrameItem).
/// Only the dimensions are mandatory, extraction tends to miss the rest.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFrameItem {
    /// Identifier of the item, generated on import if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub color: String,
    /// `OD`/`外径` or `ID`/`内径`. Anything else (or nothing) is read as outer diameter
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size_type: Option<String>,
    /// Width in cm
    pub width: f64,
    /// Height in cm
    pub height: f64,
    /// Number of frames, 1 if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quantity: Option<u64>,
}

/// Quotation and cutting plan of an order
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtQuotation {
    pub groups: Vec<ExtGroupResult>,
    pub summary: ExtOrderSummary,
}

/// External representation of a [`GroupResult`](crate::entities::GroupResult)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtGroupResult {
    pub model: String,
    pub color: String,
    pub total_bars: usize,
    pub plans: Vec<ExtBarPlan>,
    pub original_items: Vec<ExtFrameItem>,
    pub line_items: Vec<ExtLineItem>,
    pub total_price: f64,
    /// Average price per frame
    pub unit_price: f64,
    pub total_quantity: usize,
    pub avg_meters_per_frame: f64,
    /// Fraction of the usable bar length cut into edges
    pub usage: f64,
}

/// External representation of a [`BarPlan`](crate::entities::BarPlan)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBarPlan {
    pub total_usable_length: f64,
    pub segments: Vec<ExtSegment>,
    pub remaining: f64,
    /// The bar written as a formula, e.g. `0.810m × 2 + 0.610m × 2 | 余料 0.160m`
    pub formula: String,
}

/// A cut edge on a bar
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSegment {
    pub length: f64,
    pub source_id: String,
    pub description: String,
}

/// External representation of a [`QuotationLineItem`](crate::entities::QuotationLineItem)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLineItem {
    pub id: String,
    pub model: String,
    pub color: String,
    pub size: String,
    pub unit_price: f64,
    pub quantity: usize,
    pub total_price: f64,
}

/// Totals over all groups of an order
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtOrderSummary {
    /// Stock bars to prepare
    pub total_bars: usize,
    /// Frames to produce
    pub total_quantity: usize,
    /// Nominal length of all stock bars (m)
    pub billed_meters: f64,
    pub total_price: f64,
}

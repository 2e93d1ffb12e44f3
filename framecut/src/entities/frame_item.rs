use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// How the ordered width and height of a frame were measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeType {
    /// Outer diameter: the dimensions are the outside of the finished frame
    #[serde(alias = "外径")]
    OD,
    /// Inner diameter: the dimensions are the visible opening of the frame
    #[serde(alias = "内径")]
    ID,
}

impl SizeType {
    /// Label used on quotations and cut diagrams
    pub fn label(&self) -> &'static str {
        match self {
            SizeType::OD => "外径",
            SizeType::ID => "内径",
        }
    }
}

impl Display for SizeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Largest quantity of a single item, every frame expands into four edges
pub const MAX_QUANTITY: usize = 100_000;

/// A rectangular frame ordered in a certain quantity.
/// Dimensions are in centimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameItem {
    /// Opaque identifier, only used to refer back to the item
    pub id: String,
    /// Profile model, e.g. `D1822`
    pub model: String,
    pub color: String,
    pub size_type: SizeType,
    pub width: f64,
    pub height: f64,
    /// Number of identical frames ordered
    pub quantity: usize,
}

impl FrameItem {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        size_type: SizeType,
        width: f64,
        height: f64,
        quantity: usize,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            color: color.into(),
            size_type,
            width,
            height,
            quantity,
        }
    }

    /// Verifies the numeric preconditions of the item: finite positive dimensions and a positive quantity.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width.is_finite() && self.width > 0.0,
            "item {}: width must be positive, got {}",
            self.id,
            self.width
        );
        ensure!(
            self.height.is_finite() && self.height > 0.0,
            "item {}: height must be positive, got {}",
            self.id,
            self.height
        );
        ensure!(
            self.quantity > 0,
            "item {}: quantity must be at least 1",
            self.id
        );
        ensure!(
            self.quantity <= MAX_QUANTITY,
            "item {}: quantity {} exceeds the maximum of {MAX_QUANTITY}",
            self.id,
            self.quantity
        );
        Ok(())
    }

    /// Size as printed on a quotation line, e.g. `80x60 (外径)`
    pub fn size_label(&self) -> String {
        format!("{}x{} ({})", self.width, self.height, self.size_type)
    }

    /// Perimeter of a single frame in meters
    pub fn perimeter(&self) -> f64 {
        (self.width + self.height) * 2.0 / 100.0
    }
}

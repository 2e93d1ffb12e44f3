use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use log::warn;
use serde::{Deserialize, Serialize};

/// How material is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PricingMode {
    /// Per item: perimeter plus a flat loss surcharge
    Retail,
    /// Per group: whole stock bars, amortized over all frames of the group
    Batch,
}

impl Display for PricingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingMode::Retail => f.write_str("零散单(按周长)"),
            PricingMode::Batch => f.write_str("批量单(按整料)"),
        }
    }
}

/// Prices used to turn material and labor into a quotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceConfig {
    /// Price per meter of profile
    pub material_price: f64,
    /// Price of the corner pieces and hardware of one frame
    pub accessory_price: f64,
    /// Labor per frame
    pub cutting_fee: f64,
    /// Multiplicative tax factor, `1.13` for 13% tax, `1.0` for none
    pub tax_rate: f64,
    pub mode: PricingMode,
}

impl PriceConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("material_price", self.material_price),
            ("accessory_price", self.accessory_price),
            ("cutting_fee", self.cutting_fee),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{name} must be a non-negative amount, got {value}"
            );
        }
        ensure!(
            self.tax_rate.is_finite() && self.tax_rate > 0.0,
            "tax rate must be a positive factor, got {}",
            self.tax_rate
        );
        if self.tax_rate < 1.0 {
            warn!(
                "[PRICE] tax rate {} is below 1.0, prices will be discounted",
                self.tax_rate
            );
        }
        Ok(())
    }
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            material_price: 45.0,
            accessory_price: 15.0,
            cutting_fee: 10.0,
            tax_rate: 1.0,
            mode: PricingMode::Batch,
        }
    }
}

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Nominal length of a raw stock bar (m)
pub const BAR_FULL_LENGTH: f64 = 3.15;
/// Length of a stock bar that remains after trimming both ends (m)
pub const BAR_USABLE_LENGTH: f64 = 3.10;
/// Material lost to the saw blade, added to every cut (m)
pub const CUTTING_LOSS: f64 = 0.01;
/// Wall thickness of the frame profile, added to every cut of an inner-diameter frame (m)
pub const WALL_THICKNESS: f64 = 0.02;

///Configuration of the stock bars and the cut allowances, all lengths in meters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CutConfig {
    ///Nominal length of a stock bar, used to bill material in batch mode
    pub bar_full_length: f64,
    ///Length of a stock bar available for cutting
    pub bar_usable_length: f64,
    ///Kerf allowance added to every edge
    pub cutting_loss: f64,
    ///Profile wall thickness added once to every edge of an [`ID`](crate::entities::SizeType::ID) frame
    pub wall_thickness: f64,
}

impl CutConfig {
    /// Checks that all lengths are finite, positive and that the usable length does not exceed the nominal length.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("bar_full_length", self.bar_full_length),
            ("bar_usable_length", self.bar_usable_length),
        ] {
            ensure!(
                value.is_finite() && value > 0.0,
                "{name} must be a positive length, got {value}"
            );
        }
        for (name, value) in [
            ("cutting_loss", self.cutting_loss),
            ("wall_thickness", self.wall_thickness),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{name} must be a non-negative length, got {value}"
            );
        }
        ensure!(
            self.bar_usable_length <= self.bar_full_length,
            "usable bar length ({}) exceeds the full bar length ({})",
            self.bar_usable_length,
            self.bar_full_length
        );
        Ok(())
    }
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            bar_full_length: BAR_FULL_LENGTH,
            bar_usable_length: BAR_USABLE_LENGTH,
            cutting_loss: CUTTING_LOSS,
            wall_thickness: WALL_THICKNESS,
        }
    }
}

/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

/// Rounding of lengths and monetary amounts
pub mod rounding;

mod config;

#[doc(inline)]
pub use config::BAR_FULL_LENGTH;
#[doc(inline)]
pub use config::BAR_USABLE_LENGTH;
#[doc(inline)]
pub use config::CUTTING_LOSS;
#[doc(inline)]
pub use config::CutConfig;
#[doc(inline)]
pub use config::WALL_THICKNESS;

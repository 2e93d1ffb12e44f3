mod config;
mod engine;

#[doc(inline)]
pub use config::PriceConfig;
#[doc(inline)]
pub use config::PricingMode;
#[doc(inline)]
pub use engine::GroupQuote;
#[doc(inline)]
pub use engine::RETAIL_LOSS_FACTOR;
#[doc(inline)]
pub use engine::frame_price;
#[doc(inline)]
pub use engine::price_group;
#[doc(inline)]
pub use engine::retail_meters;

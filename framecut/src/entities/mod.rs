mod bar_plan;
mod edge;
mod frame_item;
mod group;
mod group_result;

#[doc(inline)]
pub use bar_plan::BarPlan;
#[doc(inline)]
pub use bar_plan::SegmentStat;
#[doc(inline)]
pub use edge::CalculatedEdge;
#[doc(inline)]
pub use edge::Side;
#[doc(inline)]
pub use frame_item::FrameItem;
#[doc(inline)]
pub use frame_item::MAX_QUANTITY;
#[doc(inline)]
pub use frame_item::SizeType;
#[doc(inline)]
pub use group::FrameGroup;
#[doc(inline)]
pub use group::group_items;
#[doc(inline)]
pub use group_result::GroupResult;
#[doc(inline)]
pub use group_result::QuotationLineItem;

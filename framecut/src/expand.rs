use crate::entities::{CalculatedEdge, FrameItem, Side, SizeType};
use crate::util::CutConfig;
use crate::util::rounding::round_length;

/// Length (m) of the cut for one side of a frame measuring `cm` centimeters along that side.
/// Every cut carries the kerf allowance, inner-diameter sizes additionally carry one wall thickness.
pub fn adjusted_length(cm: f64, size_type: SizeType, config: &CutConfig) -> f64 {
    let m = cm / 100.0;
    match size_type {
        SizeType::OD => m + config.cutting_loss,
        SizeType::ID => m + config.cutting_loss + config.wall_thickness,
    }
}

/// Expands a single item into its edges: two width and two height edges per frame.
/// Edges are emitted as alternating width/height pairs.
pub fn expand_item(item: &FrameItem, config: &CutConfig) -> Vec<CalculatedEdge> {
    let width_adj = round_length(adjusted_length(item.width, item.size_type, config));
    let height_adj = round_length(adjusted_length(item.height, item.size_type, config));

    let edge = |length: f64, side: Side| CalculatedEdge {
        length,
        source_id: item.id.clone(),
        side,
        description: format!(
            "{}x{} {} ({})",
            item.width, item.height, item.size_type, side
        ),
    };

    (0..item.quantity * 2)
        .flat_map(|_| {
            [
                edge(width_adj, Side::Width),
                edge(height_adj, Side::Height),
            ]
        })
        .collect()
}

/// Expands all items of a group into a flat collection of edges
pub fn expand_items<'a>(
    items: impl IntoIterator<Item = &'a FrameItem>,
    config: &CutConfig,
) -> Vec<CalculatedEdge> {
    items
        .into_iter()
        .flat_map(|item| expand_item(item, config))
        .collect()
}

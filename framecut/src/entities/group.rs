use std::collections::HashMap;

use crate::entities::FrameItem;

/// Frames sharing the same profile model and color, which are cut from the same stock bars.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGroup {
    pub model: String,
    pub color: String,
    /// Items of the group, in order of appearance in the order
    pub items: Vec<FrameItem>,
}

impl FrameGroup {
    pub fn total_quantity(&self) -> usize {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Partitions the items into (model, color) groups.
/// Groups are ordered by the first appearance of their key, items keep their relative order.
pub fn group_items(items: &[FrameItem]) -> Vec<FrameGroup> {
    let mut groups: Vec<FrameGroup> = vec![];
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for item in items {
        let key = (item.model.as_str(), item.color.as_str());
        let g_idx = *index.entry(key).or_insert_with(|| {
            groups.push(FrameGroup {
                model: item.model.clone(),
                color: item.color.clone(),
                items: vec![],
            });
            groups.len() - 1
        });
        groups[g_idx].items.push(item.clone());
    }

    groups
}

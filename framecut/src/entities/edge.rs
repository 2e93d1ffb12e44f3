use std::fmt::{Display, Formatter};

/// Which side of a frame an edge forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Width,
    Height,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Width => f.write_str("宽"),
            Side::Height => f.write_str("高"),
        }
    }
}

/// A single linear cut required to build one side of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedEdge {
    /// Length to cut (m), including the allowances
    pub length: f64,
    /// Id of the [`FrameItem`](crate::entities::FrameItem) this edge belongs to
    pub source_id: String,
    pub side: Side,
    /// Human-readable origin of the edge, e.g. `80x60 外径 (宽)`
    pub description: String,
}

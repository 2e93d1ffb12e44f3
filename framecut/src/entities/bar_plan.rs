use itertools::Itertools;

use crate::entities::CalculatedEdge;
use crate::util::rounding::{round_length, round_to};

/// Cutting plan of a single stock bar: the edges cut from it, in cutting order, and the offcut.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPlan {
    /// Length of the bar available for cutting (m)
    pub total_usable_length: f64,
    pub segments: Vec<CalculatedEdge>,
    /// Unused length of the bar (m), never negative
    pub remaining: f64,
}

impl BarPlan {
    /// Opens an empty bar
    pub fn new(total_usable_length: f64) -> Self {
        Self {
            total_usable_length,
            segments: vec![],
            remaining: total_usable_length,
        }
    }

    pub fn fits(&self, edge: &CalculatedEdge) -> bool {
        edge.length <= self.remaining
    }

    /// Appends an edge to the bar. The edge must fit in the remaining length.
    pub fn place(&mut self, edge: CalculatedEdge) {
        assert!(
            self.fits(&edge),
            "edge of {}m does not fit in the remaining {}m",
            edge.length,
            self.remaining
        );
        self.remaining = round_length(self.remaining - edge.length);
        self.segments.push(edge);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total length of the edges cut from this bar
    pub fn used_length(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Fraction of the usable length that ends up in edges
    pub fn usage(&self) -> f64 {
        self.used_length() / self.total_usable_length
    }

    /// Groups the segments by length (at mm resolution), in order of first appearance.
    /// Used to print a bar as a formula, e.g. `0.810m × 2 + 0.610m × 2`.
    pub fn segment_stats(&self) -> Vec<SegmentStat> {
        let mut stats: Vec<SegmentStat> = vec![];
        for segment in &self.segments {
            let key = round_to(segment.length, 3);
            match stats.iter_mut().find(|s| round_to(s.length, 3) == key) {
                Some(stat) => stat.count += 1,
                None => stats.push(SegmentStat {
                    length: segment.length,
                    count: 1,
                }),
            }
        }
        stats
    }

    /// Formula representation of the bar, e.g. `0.810m × 2 + 0.610m × 2 | 余料 0.160m`
    pub fn formula(&self) -> String {
        let cuts = self
            .segment_stats()
            .iter()
            .map(|s| format!("{:.3}m × {}", s.length, s.count))
            .join(" + ");
        match self.remaining > 0.0 {
            true => format!("{cuts} | 余料 {:.3}m", self.remaining),
            false => cuts,
        }
    }
}

/// Number of segments of one length on a bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStat {
    /// Length of the first segment in the group (m)
    pub length: f64,
    pub count: usize,
}

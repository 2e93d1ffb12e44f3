use std::cmp::Reverse;
use std::time::Instant;

use anyhow::{Result, ensure};
use framecut::entities::{BarPlan, CalculatedEdge};
use framecut::util::assertions;
use log::{debug, info};
use ordered_float::OrderedFloat;

/// Sorted-Greedy-Fill (SGF) packer for cutting edges from stock bars.
///
/// Edges are sorted longest first. Every bar is filled with a single left-to-right sweep over the
/// remaining edges, taking each edge that still fits. Bars are opened until no edge remains.
/// Not optimal: the number of bars is an upper bound of the true minimum.
pub struct SGFPacker {
    /// Edges still to be placed, longest first
    pub edges: Vec<CalculatedEdge>,
    /// Usable length of every stock bar (m)
    pub usable_length: f64,
}

impl SGFPacker {
    /// Fails if an edge can never be placed, i.e. it does not fit in an empty bar.
    pub fn new(mut edges: Vec<CalculatedEdge>, usable_length: f64) -> Result<Self> {
        ensure!(
            usable_length.is_finite() && usable_length > 0.0,
            "usable bar length must be positive, got {usable_length}"
        );
        for edge in &edges {
            ensure!(
                edge.length.is_finite() && edge.length > 0.0,
                "edge {} of item {} has an invalid length: {}",
                edge.description,
                edge.source_id,
                edge.length
            );
            ensure!(
                edge.length <= usable_length,
                "edge {} of item {} ({}m) is longer than a stock bar ({}m)",
                edge.description,
                edge.source_id,
                edge.length,
                usable_length
            );
        }

        //stable: equally long edges keep their emission order
        edges.sort_by_key(|e| Reverse(OrderedFloat(e.length)));

        Ok(Self {
            edges,
            usable_length,
        })
    }

    pub fn solve(self) -> Vec<BarPlan> {
        let start = Instant::now();
        let n_edges = self.edges.len();

        #[cfg(debug_assertions)]
        let input = self.edges.clone();

        let mut pool = self.edges;
        let mut plans = vec![];

        while !pool.is_empty() {
            let mut bar = BarPlan::new(self.usable_length);
            let mut leftover = Vec::with_capacity(pool.len());
            for edge in pool {
                match bar.fits(&edge) {
                    true => bar.place(edge),
                    false => leftover.push(edge),
                }
            }
            //the longest remaining edge always fits an empty bar
            debug_assert!(!bar.is_empty());
            debug_assert!(assertions::bar_plan_is_consistent(&bar));

            debug!(
                "[SGF] bar {}: {} ({} edges left)",
                plans.len(),
                bar.formula(),
                leftover.len()
            );
            plans.push(bar);
            pool = leftover;
        }

        #[cfg(debug_assertions)]
        debug_assert!(assertions::plans_cover_edges(&plans, &input));

        info!(
            "[SGF] packed {} edges into {} bars in {:.3}ms",
            n_edges,
            plans.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        plans
    }
}

use float_cmp::approx_eq;
use itertools::Itertools;

use crate::entities::{BarPlan, CalculatedEdge, GroupResult};

//Various checks to verify the correctness of cutting plans.
//Used in debug_assert!() blocks and tests

/// Tolerance on summed lengths, absorbs the 0.1 mm rounding of each cut
pub const LENGTH_TOLERANCE: f64 = 1e-3;

pub fn bar_plan_is_consistent(plan: &BarPlan) -> bool {
    plan.remaining >= 0.0
        && approx_eq!(
            f64,
            plan.used_length() + plan.remaining,
            plan.total_usable_length,
            epsilon = LENGTH_TOLERANCE
        )
}

/// Every edge of `edges` is assigned to exactly one bar and nothing else was assigned.
pub fn plans_cover_edges(plans: &[BarPlan], edges: &[CalculatedEdge]) -> bool {
    let n_segments = plans.iter().map(|p| p.segments.len()).sum::<usize>();
    if n_segments != edges.len() {
        return false;
    }
    let planned_length = plans.iter().map(|p| p.used_length()).sum::<f64>();
    let edge_length = edges.iter().map(|e| e.length).sum::<f64>();
    if !approx_eq!(
        f64,
        planned_length,
        edge_length,
        epsilon = LENGTH_TOLERANCE
    ) {
        return false;
    }

    //multisets of (source, side, length) have to match
    let key = |e: &CalculatedEdge| (e.source_id.clone(), e.side, e.length.to_bits());
    let planned = plans
        .iter()
        .flat_map(|p| p.segments.iter())
        .map(key)
        .counts();
    let required = edges.iter().map(key).counts();
    planned == required
}

pub fn group_result_is_consistent(result: &GroupResult) -> bool {
    result.total_bars == result.plans.len()
        && result.plans.iter().all(bar_plan_is_consistent)
        && result.plans.iter().all(|p| !p.is_empty())
        && result.line_items.len() == result.original_items.len()
        && result.total_quantity == result.original_items.iter().map(|i| i.quantity).sum::<usize>()
}

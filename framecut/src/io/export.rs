use crate::entities::{BarPlan, FrameItem, GroupResult, QuotationLineItem};
use crate::io::ext_repr::{
    ExtBarPlan, ExtFrameItem, ExtGroupResult, ExtLineItem, ExtOrderSummary, ExtQuotation,
    ExtSegment,
};
use crate::util::CutConfig;
use crate::util::rounding::{round_length, round_money};

/// Exports the results of a computation out of the library
pub fn export_quotation(results: &[GroupResult], cut_config: &CutConfig) -> ExtQuotation {
    ExtQuotation {
        groups: results.iter().map(export_group_result).collect(),
        summary: summarize(results, cut_config),
    }
}

pub fn export_group_result(result: &GroupResult) -> ExtGroupResult {
    ExtGroupResult {
        model: result.model.clone(),
        color: result.color.clone(),
        total_bars: result.total_bars,
        plans: result.plans.iter().map(export_bar_plan).collect(),
        original_items: result.original_items.iter().map(export_item).collect(),
        line_items: result.line_items.iter().map(export_line_item).collect(),
        total_price: result.total_price,
        unit_price: result.unit_price,
        total_quantity: result.total_quantity,
        avg_meters_per_frame: result.avg_meters_per_frame,
        usage: result.usage(),
    }
}

pub fn export_bar_plan(plan: &BarPlan) -> ExtBarPlan {
    ExtBarPlan {
        total_usable_length: plan.total_usable_length,
        segments: plan
            .segments
            .iter()
            .map(|s| ExtSegment {
                length: s.length,
                source_id: s.source_id.clone(),
                description: s.description.clone(),
            })
            .collect(),
        remaining: plan.remaining,
        formula: plan.formula(),
    }
}

pub fn export_line_item(line: &QuotationLineItem) -> ExtLineItem {
    ExtLineItem {
        id: line.id.clone(),
        model: line.model.clone(),
        color: line.color.clone(),
        size: line.size.clone(),
        unit_price: line.unit_price,
        quantity: line.quantity,
        total_price: line.total_price,
    }
}

/// Converts an item back to its external representation
pub fn export_item(item: &FrameItem) -> ExtFrameItem {
    ExtFrameItem {
        id: Some(item.id.clone()),
        model: item.model.clone(),
        color: item.color.clone(),
        size_type: Some(format!("{:?}", item.size_type)),
        width: item.width,
        height: item.height,
        quantity: Some(item.quantity as u64),
    }
}

/// Totals of an order over all of its groups. Billed meters count the nominal length of every bar.
pub fn summarize(results: &[GroupResult], cut_config: &CutConfig) -> ExtOrderSummary {
    let total_bars = results.iter().map(|g| g.total_bars).sum::<usize>();
    ExtOrderSummary {
        total_bars,
        total_quantity: results.iter().map(|g| g.total_quantity).sum(),
        billed_meters: round_length(total_bars as f64 * cut_config.bar_full_length),
        total_price: round_money(results.iter().map(|g| g.total_price).sum()),
    }
}

use std::time::Instant;

use anyhow::{Context, Result};
use framecut::entities::{FrameGroup, FrameItem, GroupResult, group_items};
use framecut::expand::expand_items;
use framecut::pricing::{PriceConfig, price_group};
use framecut::util::CutConfig;
use framecut::util::assertions;
use log::info;
use rayon::prelude::*;
use thousands::Separable;

use crate::opt::SGFPacker;

/// Computes the cutting plan and the quotation of every (model, color) group of `items`.
///
/// Groups are returned in order of first appearance. All inputs are validated before anything is
/// packed or priced, invalid input is rejected as a whole.
pub fn compute_results(
    items: &[FrameItem],
    price_config: &PriceConfig,
    cut_config: &CutConfig,
) -> Result<Vec<GroupResult>> {
    compute(items, price_config, cut_config, false)
}

/// Same as [`compute_results`], but solves the groups in parallel
pub fn compute_results_par(
    items: &[FrameItem],
    price_config: &PriceConfig,
    cut_config: &CutConfig,
) -> Result<Vec<GroupResult>> {
    compute(items, price_config, cut_config, true)
}

fn compute(
    items: &[FrameItem],
    price_config: &PriceConfig,
    cut_config: &CutConfig,
    parallel: bool,
) -> Result<Vec<GroupResult>> {
    let start = Instant::now();

    cut_config.validate().context("invalid cut configuration")?;
    price_config
        .validate()
        .context("invalid price configuration")?;
    for item in items {
        item.validate()?;
    }

    let groups = group_items(items);
    let results = match parallel {
        true => groups
            .into_par_iter()
            .map(|g| solve_group(g, price_config, cut_config))
            .collect::<Result<Vec<GroupResult>>>()?,
        false => groups
            .into_iter()
            .map(|g| solve_group(g, price_config, cut_config))
            .collect::<Result<Vec<GroupResult>>>()?,
    };

    info!(
        "[SGF] quoted {} items in {} groups in {:.3}ms",
        items.len().separate_with_commas(),
        results.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(results)
}

/// Expands, packs and prices a single group
pub fn solve_group(
    group: FrameGroup,
    price_config: &PriceConfig,
    cut_config: &CutConfig,
) -> Result<GroupResult> {
    let edges = expand_items(&group.items, cut_config);
    let n_edges = edges.len();

    let plans = SGFPacker::new(edges, cut_config.bar_usable_length)
        .with_context(|| format!("cannot cut group {} ({})", group.model, group.color))?
        .solve();

    let quote = price_group(&group, plans.len(), price_config, cut_config)?;
    let result = GroupResult::assemble(group, plans, quote);

    debug_assert!(assertions::group_result_is_consistent(&result));

    info!(
        "[SGF] group {} ({}): {} frames, {} edges, {} bars, usage {:.1}%, total {}",
        result.model,
        result.color,
        result.total_quantity,
        n_edges,
        result.total_bars,
        result.usage() * 100.0,
        result.total_price.separate_with_commas()
    );
    Ok(result)
}

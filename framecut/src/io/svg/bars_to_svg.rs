use svg::Document;
use svg::node::element::{Group, Title};

use crate::entities::{BarPlan, GroupResult};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Remainders shorter than this (m) are not labeled
const REMAINDER_LABEL_THRESHOLD: f64 = 0.1;

//all dimensions below are in drawing units, 1 unit = 1 cm of profile
const BAR_HEIGHT: f64 = 8.0;
const ROW_SPACING: f64 = 10.0;
const FORMULA_HEIGHT: f64 = 5.0;
const MARGIN: f64 = 6.0;

/// Draws the cutting plan of a group: one row per stock bar, segments in cutting order.
pub fn group_to_svg(result: &GroupResult, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;
    let bar_width = result
        .plans
        .iter()
        .map(|p| p.total_usable_length)
        .fold(0.0, f64::max)
        * 100.0;

    let n_drawn = options
        .max_bars
        .map_or(result.plans.len(), |m| m.min(result.plans.len()));
    let n_hidden = result.plans.len() - n_drawn;

    let row_height = BAR_HEIGHT
        + ROW_SPACING
        + match options.formulas {
            true => FORMULA_HEIGHT,
            false => 0.0,
        };
    let label_size = BAR_HEIGHT * 0.4;
    let stroke_width = 0.1 * theme.stroke_width_multiplier;

    let label = {
        //print a summary above the bars
        let content = format!(
            "{} ({}) | bars: {} | usage: {:.1}% | {}",
            result.model,
            result.color,
            result.total_bars,
            result.usage() * 100.0,
            title
        );
        svg_util::text(
            content,
            0.0,
            -label_size,
            label_size * 1.2,
            &[
                ("font-weight", "500"),
                ("fill", &*format!("{}", theme.label_color)),
            ],
        )
    };

    let mut bars_group = Group::new().set("id", "bars");
    for (i, plan) in result.plans.iter().take(n_drawn).enumerate() {
        let y = i as f64 * row_height;
        bars_group = bars_group.add(bar_group(plan, i, y, stroke_width, &options));
    }

    let mut height = n_drawn as f64 * row_height;
    let hidden_note = match n_hidden {
        0 => None,
        n => {
            height += row_height;
            Some(svg_util::text(
                format!("+ {n} 种更多排料方案"),
                0.0,
                height - ROW_SPACING,
                label_size,
                &[("fill", &*format!("{}", theme.label_color))],
            ))
        }
    };

    let vbox = (
        -MARGIN,
        -MARGIN - 2.0 * label_size,
        bar_width + 2.0 * MARGIN,
        height + 2.0 * MARGIN + 2.0 * label_size,
    );

    let document = Document::new()
        .set("viewBox", vbox)
        .add(label)
        .add(bars_group);

    match hidden_note {
        Some(note) => document.add(note),
        None => document,
    }
}

fn bar_group(
    plan: &BarPlan,
    index: usize,
    y: f64,
    stroke_width: f64,
    options: &SvgDrawOptions,
) -> Group {
    let theme = &options.theme;
    let bar_width = plan.total_usable_length * 100.0;
    let label_size = BAR_HEIGHT * 0.4;
    let label_fill = format!("{}", theme.label_color);
    let stroke = format!("{stroke_width}");

    let mut group = Group::new()
        .set("id", format!("bar_{index}"))
        .add(Title::new(format!(
            "bar {}: {}",
            bar_letter(index),
            plan.formula()
        )))
        .add(svg_util::rect(
            0.0,
            y,
            bar_width,
            BAR_HEIGHT,
            &[
                ("fill", &*format!("{}", theme.bar_fill)),
                ("stroke", "black"),
                ("stroke-width", &*stroke),
            ],
        ));

    let mut x = 0.0;
    for (s_idx, segment) in plan.segments.iter().enumerate() {
        let width = segment.length * 100.0;
        group = group.add(
            svg_util::rect(
                x,
                y,
                width,
                BAR_HEIGHT,
                &[
                    ("fill", &*format!("{}", theme.segment_fill(s_idx))),
                    ("stroke", "white"),
                    ("stroke-width", &*stroke),
                ],
            )
            .add(Title::new(segment.description.clone())),
        );
        if options.segment_labels {
            group = group.add(svg_util::text(
                format!("{:.3}", segment.length),
                x + width / 2.0,
                y + BAR_HEIGHT / 2.0,
                label_size,
                &[
                    ("fill", "white"),
                    ("text-anchor", "middle"),
                    ("dominant-baseline", "central"),
                ],
            ));
        }
        x += width;
    }

    if plan.remaining > 0.0 {
        let width = plan.remaining * 100.0;
        group = group.add(svg_util::rect(
            x,
            y,
            width,
            BAR_HEIGHT,
            &[
                ("fill", &*format!("{}", theme.remainder_fill)),
                ("stroke", "black"),
                ("stroke-width", &*stroke),
                ("stroke-dasharray", &*format!("{}", 4.0 * stroke_width)),
            ],
        ));
        if plan.remaining > REMAINDER_LABEL_THRESHOLD {
            group = group.add(svg_util::text(
                format!("余 {:.2}", plan.remaining),
                x + width / 2.0,
                y + BAR_HEIGHT / 2.0,
                label_size,
                &[
                    ("fill", &*label_fill),
                    ("text-anchor", "middle"),
                    ("dominant-baseline", "central"),
                ],
            ));
        }
    }

    //letter index left of the bar
    group = group.add(svg_util::text(
        bar_letter(index).to_string(),
        -MARGIN / 2.0,
        y + BAR_HEIGHT / 2.0,
        label_size,
        &[
            ("fill", &*label_fill),
            ("text-anchor", "middle"),
            ("dominant-baseline", "central"),
            ("font-weight", "700"),
        ],
    ));

    if options.formulas {
        group = group.add(svg_util::text(
            plan.formula(),
            0.0,
            y + BAR_HEIGHT + FORMULA_HEIGHT,
            label_size,
            &[("fill", &*label_fill)],
        ));
    }

    group
}

/// A, B, ..., Z, A, ...
fn bar_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

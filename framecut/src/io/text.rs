use std::fmt::Write;

use anyhow::{Context, Result};
use thousands::Separable;

use crate::entities::GroupResult;
use crate::pricing::PriceConfig;
use crate::util::rounding::round_money;

/// Byte order mark, lets spreadsheet applications detect UTF-8
const UTF8_BOM: &str = "\u{FEFF}";

const COLUMNS: [&str; 5] = ["型号", "尺寸", "单价", "数量", "总价"];

/// Formats an amount with thousands separators, e.g. `12,345.6`
pub fn format_amount(amount: f64) -> String {
    round_money(amount).separate_with_commas()
}

/// Plain text quotation, meant to be pasted into a chat or an email.
pub fn quotation_text(results: &[GroupResult], price_config: &PriceConfig) -> String {
    let mut text = String::new();
    //writing to a String cannot fail
    let _ = writeln!(text, "铝合金切框报价单");
    let _ = writeln!(text, "报价模式: {}", price_config.mode);
    let _ = writeln!(text, "税率: {}", price_config.tax_rate);
    text.push('\n');

    for (g_idx, group) in results.iter().enumerate() {
        let _ = writeln!(
            text,
            "--- 项目 {}: {} ({}) ---",
            g_idx + 1,
            group.model,
            group.color
        );
        let _ = writeln!(text, "{}", COLUMNS.join("\t"));
        for line in &group.line_items {
            let _ = writeln!(
                text,
                "{}\t{}\t¥{}\t{}\t¥{}",
                line.model, line.size, line.unit_price, line.quantity, line.total_price
            );
        }
        let _ = writeln!(text, "小计: ¥{}", group.total_price);
        text.push('\n');
    }

    let grand_total = results.iter().map(|g| g.total_price).sum::<f64>();
    let _ = write!(text, "总金额结算: ¥{}", format_amount(grand_total));
    text
}

/// CSV export of all quotation lines of all groups.
/// The header is bare, model and size are always quoted, amounts never are.
pub fn quotation_csv(results: &[GroupResult]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(UTF8_BOM.as_bytes().to_vec());

    writer.write_record(COLUMNS)?;
    for line in results.iter().flat_map(|g| g.line_items.iter()) {
        writer.write_record([
            quoted(&line.model),
            quoted(&line.size),
            line.unit_price.to_string(),
            line.quantity.to_string(),
            line.total_price.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().context("could not flush csv writer")?;
    String::from_utf8(bytes).context("csv output is not valid UTF-8")
}

/// Wraps a field in double quotes, doubling the quotes inside it
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// File name of a CSV export made on `date`
pub fn csv_file_name(date: impl std::fmt::Display) -> String {
    format!("报价清单_{date}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::QuotationLineItem;
    use crate::pricing::PricingMode;

    fn result(total_price: f64) -> GroupResult {
        GroupResult {
            model: "D1822".into(),
            color: "黑色".into(),
            total_bars: 1,
            plans: vec![],
            original_items: vec![],
            line_items: vec![QuotationLineItem {
                id: "a".into(),
                model: "D1822".into(),
                color: "黑色".into(),
                size: "80x60 (外径)".into(),
                unit_price: 176.2,
                quantity: 1,
                total_price,
            }],
            total_price,
            unit_price: total_price,
            total_quantity: 1,
            avg_meters_per_frame: 3.36,
        }
    }

    #[test]
    fn amounts_get_separators() {
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(176.2), "176.2");
    }

    #[test]
    fn text_lists_groups_and_total() {
        let config = PriceConfig {
            mode: PricingMode::Retail,
            ..PriceConfig::default()
        };
        let text = quotation_text(&[result(176.2), result(1000.0)], &config);
        assert!(text.starts_with("铝合金切框报价单\n报价模式: 零散单(按周长)\n税率: 1\n\n"));
        assert!(text.contains("--- 项目 2: D1822 (黑色) ---"));
        assert!(text.contains("D1822\t80x60 (外径)\t¥176.2\t1\t¥176.2\n"));
        assert!(text.contains("小计: ¥1000\n"));
        assert!(text.ends_with("总金额结算: ¥1,176.2"));
    }

    #[test]
    fn csv_quotes_text_columns() {
        let csv = quotation_csv(&[result(176.2)]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("\u{FEFF}型号,尺寸,单价,数量,总价"));
        assert_eq!(lines.next(), Some("\"D1822\",\"80x60 (外径)\",176.2,1,176.2"));
    }

    #[test]
    fn csv_quotes_numeric_models() {
        let mut numeric = result(176.2);
        numeric.line_items[0].model = "1822".into();
        let mut with_quote = result(10.0);
        with_quote.line_items[0].model = "D18\"22".into();

        let csv = quotation_csv(&[numeric, with_quote]).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "\"1822\",\"80x60 (外径)\",176.2,1,176.2");
        assert_eq!(lines[2], "\"D18\"\"22\",\"80x60 (外径)\",176.2,1,10");
    }
}

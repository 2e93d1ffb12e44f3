use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use framecut::io::export::export_quotation;
use framecut::io::import::import_order;
use framecut::io::svg::group_to_svg;
use framecut::io::text::{csv_file_name, format_amount, quotation_csv, quotation_text};
use log::{info, warn};
use sgf::config::SGFConfig;
use sgf::io;
use sgf::io::cli::Cli;
use sgf::io::output::QuoteOutput;
use sgf::quote::{compute_results, compute_results_par};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SGFConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed SGFConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    fs::create_dir_all(&args.output_folder).with_context(|| {
        format!(
            "could not create output folder: {}",
            args.output_folder.display()
        )
    })?;

    let mut ext_order = io::read_order(&args.input_file)?;
    let (items, mut price_config) = import_order(&ext_order)?;
    if let Some(mode) = args.mode {
        price_config.mode = mode.into();
    }
    if let Some(tax_rate) = args.tax_rate {
        price_config.tax_rate = tax_rate;
    }
    info!(
        "[MAIN] quoting {} items, mode: {:?}, tax rate: {}",
        items.len(),
        price_config.mode,
        price_config.tax_rate
    );

    let results = match config.parallel_groups {
        true => compute_results_par(&items, &price_config, &config.cut_config)?,
        false => compute_results(&items, &price_config, &config.cut_config)?,
    };

    let quotation = export_quotation(&results, &config.cut_config);
    info!(
        "[MAIN] {} bars ({}m) for {} frames, total: {}",
        quotation.summary.total_bars,
        quotation.summary.billed_meters,
        quotation.summary.total_quantity,
        format_amount(quotation.summary.total_price)
    );

    ext_order.price_config = Some(price_config);
    let output_folder = args.output_folder.as_path();

    {
        let output = QuoteOutput {
            order: ext_order,
            quotation,
            config,
        };
        let json_path = output_folder.join(format!("quote_{input_stem}.json"));
        io::write_json(&output, Path::new(&json_path))?;
    }

    {
        let text_path = output_folder.join(format!("quote_{input_stem}.txt"));
        io::write_text(&quotation_text(&results, &price_config), &text_path)?;

        let today = jiff::Zoned::now().date();
        let csv_path = output_folder.join(csv_file_name(today));
        io::write_text(&quotation_csv(&results)?, &csv_path)?;
    }

    for (i, result) in results.iter().enumerate() {
        let svg_path = output_folder.join(format!("quote_{input_stem}_{i}.svg"));
        let svg = group_to_svg(result, config.svg_draw_options, input_stem);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use framecut::pricing::PricingMode;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Order to quote (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the pricing mode of the order
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Overrides the tax rate of the order, e.g. 1.13
    #[arg(short, long)]
    pub tax_rate: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Retail,
    Batch,
}

impl From<ModeArg> for PricingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Retail => PricingMode::Retail,
            ModeArg::Batch => PricingMode::Batch,
        }
    }
}

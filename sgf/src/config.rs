use serde::{Deserialize, Serialize};

use framecut::io::svg::SvgDrawOptions;
use framecut::util::CutConfig;

/// Configuration for the SGF packer and the quotation pipeline around it
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SGFConfig {
    /// Stock bar dimensions and cutting allowances
    #[serde(default)]
    pub cut_config: CutConfig,
    /// Solve the (model, color) groups in parallel. Results are identical to a sequential run
    #[serde(default)]
    pub parallel_groups: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for SGFConfig {
    fn default() -> Self {
        Self {
            cut_config: CutConfig::default(),
            parallel_groups: false,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

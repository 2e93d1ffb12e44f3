use framecut::io::ext_repr::{ExtOrder, ExtQuotation};
use serde::{Deserialize, Serialize};

use crate::config::SGFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct QuoteOutput {
    /// The order as quoted, with the price configuration actually used
    pub order: ExtOrder,
    pub quotation: ExtQuotation,
    pub config: SGFConfig,
}

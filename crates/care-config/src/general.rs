//! General application configuration.

use care_core::enums::SortOrder;
use care_core::pagination::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Sort direction used when a list command names `--sort-by` only.
    #[serde(default)]
    pub default_sort_order: SortOrder,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_sort_order: SortOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.default_sort_order, SortOrder::Desc);
    }
}

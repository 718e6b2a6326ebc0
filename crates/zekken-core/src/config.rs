use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Engine-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeConfig {
    /// Category substituted when a request omits the badge type.
    ///
    /// Out of the box this is [`Category::Classic`], the "eight big races"
    /// cloth. `classic` and `g1` render identically, so deployments that
    /// prefer the `g1` spelling can set it here without a visual change.
    pub default_category: Category,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            default_category: Category::Classic,
        }
    }
}

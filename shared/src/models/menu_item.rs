//! Menu Item Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category tag that enables half-and-half pricing.
pub const PIZZA_CATEGORY: &str = "pizzas";

/// Menu item entity (admin-managed, long-lived)
///
/// Price maps distinguish two roles: `sizes` entries are full replacement
/// prices, while the option maps (`flavor_options`, `border_options`,
/// `extra_options`) are increments added on top of the resolved base.
/// Legacy documents use camelCase keys; serde aliases absorb them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Category tag; the literal `"pizzas"` enables half-and-half pricing.
    pub category: String,
    /// Price in currency units, charged when no size is selected.
    #[serde(alias = "basePrice")]
    pub base_price: f64,
    /// Size label -> full replacement price. A stored `0.0` is a valid price.
    #[serde(default)]
    pub sizes: Option<BTreeMap<String, f64>>,
    /// Flavor label -> price increment.
    #[serde(default, alias = "flavorOptions")]
    pub flavor_options: Option<BTreeMap<String, f64>>,
    /// Border label -> price increment.
    #[serde(default, alias = "borderOptions")]
    pub border_options: Option<BTreeMap<String, f64>>,
    /// Extra label -> price increment.
    #[serde(default, alias = "extraOptions")]
    pub extra_options: Option<BTreeMap<String, f64>>,
    /// Display titles (pass-through, no pricing impact).
    #[serde(default, alias = "sizesTitle")]
    pub sizes_title: Option<String>,
    #[serde(default, alias = "flavorsTitle")]
    pub flavors_title: Option<String>,
    #[serde(default, alias = "borderTitle")]
    pub border_title: Option<String>,
    #[serde(default, alias = "extrasTitle")]
    pub extras_title: Option<String>,
}

impl MenuItem {
    pub fn is_pizza(&self) -> bool {
        self.category == PIZZA_CATEGORY
    }

    /// Price of this item at the given size label.
    ///
    /// Falls back to `base_price` when the item has no `sizes` map or the
    /// label is not a key in it. `sizes["P"] == 0.0` resolves to `0.0`.
    pub fn price_at_size(&self, size: &str) -> f64 {
        self.sizes
            .as_ref()
            .and_then(|m| m.get(size))
            .copied()
            .unwrap_or(self.base_price)
    }
}

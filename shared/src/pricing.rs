//! Unit price calculation for cart lines
//!
//! The calculator is total by policy: missing maps, unknown labels and empty
//! selections degrade to "contributes nothing" so a stale or misconfigured
//! option reference can never block checkout.

use crate::models::{HalfAndHalf, ItemSelection, MenuItem, OrderItem};
use tracing::trace;

/// Legacy marker for half-and-half pizzas inside the free-text observation,
/// e.g. `"Meio a meio: Calabresa / Frango"`. New clients send the structured
/// `half_and_half` field instead; this prefix is matched ASCII
/// case-insensitively for stored orders only.
const HALF_MARKER: &str = "meio a meio:";

/// Compute the unit price for one cart line.
///
/// Resolution order:
/// 1. base price: `sizes[size]` when the key exists (a stored `0.0` counts),
///    otherwise `base_price`;
/// 2. half-and-half override for pizza items: replaces the base with the
///    more expensive half at the selected size;
/// 3. border, extras and flavor increments added on top. Duplicate extra
///    labels add again; unknown labels add `0`.
pub fn compute_unit_price(
    item: &MenuItem,
    selection: &ItemSelection,
    all_pizza_items: &[MenuItem],
) -> f64 {
    let mut price = match selection.size.as_deref() {
        Some(size) => item.price_at_size(size),
        None => item.base_price,
    };

    let mut half_applied = false;
    if item.is_pizza()
        && let Some(half) = half_and_half_of(selection)
        && let Some(size) = selection.size.as_deref()
        && let Some(override_price) = half_and_half_price(&half, size, all_pizza_items)
    {
        trace!(
            flavor_a = %half.flavor_a,
            flavor_b = %half.flavor_b,
            size,
            override_price,
            "half-and-half price override"
        );
        price = override_price;
        half_applied = true;
    }

    if let (Some(border), Some(options)) = (selection.border.as_deref(), &item.border_options) {
        price += options.get(border).copied().unwrap_or(0.0);
    }

    if let Some(options) = &item.extra_options {
        for extra in &selection.extras {
            price += options.get(extra).copied().unwrap_or(0.0);
        }
    }

    // Half-and-half pizzas are priced purely by size tier; flavor-level
    // increments only apply when the override did not fire.
    if !half_applied && let Some(options) = &item.flavor_options {
        for flavor in &selection.flavors {
            price += options.get(flavor).copied().unwrap_or(0.0);
        }
    }

    price
}

/// Assemble an order line from a selection, copying the labels and display
/// titles so the stored order stays stable if the menu changes later.
pub fn build_order_item(
    item: &MenuItem,
    selection: &ItemSelection,
    all_pizza_items: &[MenuItem],
) -> OrderItem {
    OrderItem {
        name: item.name.clone(),
        quantity: selection.quantity,
        unit_price: compute_unit_price(item, selection, all_pizza_items),
        size: selection.size.clone(),
        sizes_title: item.sizes_title.clone(),
        border: selection.border.clone(),
        border_title: item.border_title.clone(),
        flavors: selection.flavors.clone(),
        flavors_title: item.flavors_title.clone(),
        extras: selection.extras.clone(),
        extras_title: item.extras_title.clone(),
        observation: selection.observation.clone(),
    }
}

/// The half-and-half choice of a selection: the structured field when
/// present, otherwise the legacy observation marker.
pub fn half_and_half_of(selection: &ItemSelection) -> Option<HalfAndHalf> {
    if let Some(half) = &selection.half_and_half {
        return Some(half.clone());
    }
    parse_half_marker(selection.observation.as_deref()?)
}

/// Legacy-compatibility decoder for `"Meio a meio: A / B"` observation lines.
pub fn parse_half_marker(observation: &str) -> Option<HalfAndHalf> {
    for line in observation.lines() {
        let Some(at) = find_marker(line) else {
            continue;
        };
        let rest = &line[at + HALF_MARKER.len()..];
        let mut parts = rest.splitn(2, '/');
        let flavor_a = parts.next().map(str::trim).unwrap_or_default();
        let Some(flavor_b) = parts.next().map(str::trim) else {
            continue;
        };
        if flavor_a.is_empty() || flavor_b.is_empty() {
            continue;
        }
        return Some(HalfAndHalf {
            flavor_a: flavor_a.to_string(),
            flavor_b: flavor_b.to_string(),
        });
    }
    None
}

/// Find the marker ASCII case-insensitively. The marker is pure ASCII, so a
/// matching window always starts on a char boundary.
fn find_marker(line: &str) -> Option<usize> {
    let marker = HALF_MARKER.as_bytes();
    line.as_bytes()
        .windows(marker.len())
        .position(|w| w.eq_ignore_ascii_case(marker))
}

/// Price of the more expensive half at the selected size. `None` when either
/// named pizza is missing from the catalog, which keeps the normal base
/// price in effect.
fn half_and_half_price(half: &HalfAndHalf, size: &str, all_pizza_items: &[MenuItem]) -> Option<f64> {
    let a = find_by_name(all_pizza_items, &half.flavor_a)?;
    let b = find_by_name(all_pizza_items, &half.flavor_b)?;
    Some(a.price_at_size(size).max(b.price_at_size(size)))
}

fn find_by_name<'a>(items: &'a [MenuItem], name: &str) -> Option<&'a MenuItem> {
    let name = name.trim();
    items.iter().find(|i| i.name.eq_ignore_ascii_case(name))
}

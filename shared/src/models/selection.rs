//! Cart line selection

use serde::{Deserialize, Serialize};

/// The customer's choices for one cart line.
///
/// Never validated against the menu item: unknown labels simply contribute
/// nothing at pricing time so a stale cart can always check out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSelection {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    /// Free-text note. Legacy orders also encode the half-and-half choice
    /// here as a `"Meio a meio: A / B"` marker line.
    #[serde(default)]
    pub observation: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Structured half-and-half choice, set by new clients. Takes precedence
    /// over the legacy observation marker.
    #[serde(default, alias = "halfAndHalf")]
    pub half_and_half: Option<HalfAndHalf>,
}

fn default_quantity() -> u32 {
    1
}

impl Default for ItemSelection {
    fn default() -> Self {
        Self {
            size: None,
            border: None,
            flavors: Vec::new(),
            extras: Vec::new(),
            observation: None,
            quantity: default_quantity(),
            half_and_half: None,
        }
    }
}

/// Half-and-half pizza: two flavors, priced by the more expensive half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfAndHalf {
    #[serde(alias = "flavorA")]
    pub flavor_a: String,
    #[serde(alias = "flavorB")]
    pub flavor_b: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sel: ItemSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(sel.quantity, 1);
        assert!(sel.size.is_none());
        assert!(sel.extras.is_empty());
        assert!(sel.half_and_half.is_none());
        assert_eq!(ItemSelection::default().quantity, 1);
    }

    #[test]
    fn test_half_and_half_camel_case() {
        let sel: ItemSelection = serde_json::from_str(
            r#"{"quantity": 2, "halfAndHalf": {"flavorA": "Calabresa", "flavorB": "Frango"}}"#,
        )
        .unwrap();
        let half = sel.half_and_half.unwrap();
        assert_eq!(half.flavor_a, "Calabresa");
        assert_eq!(half.flavor_b, "Frango");
    }
}

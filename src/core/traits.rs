use serde::{Deserialize, Serialize};

/// A matchable trait dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    SporePrintColor,
    Hymenium,
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SporePrintColor => write!(f, "spore print color"),
            Self::Hymenium => write!(f, "hymenium"),
        }
    }
}

/// Observed or known trait values for a fungus.
///
/// Used both to describe a catalog record and to express a search query.
/// An empty string means the trait is unspecified: it neither matches nor
/// penalizes anything during scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitSet {
    /// Color of the spore print (e.g., "white", "brown")
    pub spore_print_color: String,

    /// Spore-bearing surface structure (e.g., "gills", "pores", "ridges")
    pub hymenium: String,
}

impl TraitSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_spore_print_color(mut self, color: impl Into<String>) -> Self {
        self.spore_print_color = color.into();
        self
    }

    #[must_use]
    pub fn with_hymenium(mut self, hymenium: impl Into<String>) -> Self {
        self.hymenium = hymenium.into();
        self
    }

    /// All trait dimensions paired with their values, in a fixed order
    #[must_use]
    pub fn dimensions(&self) -> [(Trait, &str); 2] {
        [
            (Trait::SporePrintColor, self.spore_print_color.as_str()),
            (Trait::Hymenium, self.hymenium.as_str()),
        ]
    }

    /// Value for a single dimension
    #[must_use]
    pub fn get(&self, t: Trait) -> &str {
        match t {
            Trait::SporePrintColor => &self.spore_print_color,
            Trait::Hymenium => &self.hymenium,
        }
    }

    /// Dimensions that carry a value
    pub fn specified(&self) -> impl Iterator<Item = (Trait, &str)> + '_ {
        self.dimensions().into_iter().filter(|(_, v)| !v.is_empty())
    }

    /// True when no dimension is specified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specified().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(TraitSet::new().is_empty());
        assert!(!TraitSet::new().with_hymenium("gills").is_empty());
    }

    #[test]
    fn test_specified_skips_empty() {
        let traits = TraitSet::new().with_hymenium("pores");
        let specified: Vec<_> = traits.specified().collect();
        assert_eq!(specified, vec![(Trait::Hymenium, "pores")]);
    }

    #[test]
    fn test_get_matches_dimensions() {
        let traits = TraitSet::new()
            .with_spore_print_color("white")
            .with_hymenium("gills");
        for (t, value) in traits.dimensions() {
            assert_eq!(traits.get(t), value);
        }
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let traits: TraitSet = serde_json::from_str(r#"{"hymenium": "gills"}"#).unwrap();
        assert_eq!(traits.spore_print_color, "");
        assert_eq!(traits.hymenium, "gills");
    }
}

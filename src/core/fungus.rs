use serde::{Deserialize, Serialize};

use crate::core::traits::TraitSet;
use crate::core::types::Edibility;

/// A single identifiable fungus species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungusRecord {
    /// Human-readable names; the first one is the primary display name
    #[serde(default)]
    pub common_names: Vec<String>,

    pub genus_name: String,

    pub species_name: String,

    pub edibility: Edibility,

    /// Known traits used for matching
    #[serde(default)]
    pub traits: TraitSet,
}

impl FungusRecord {
    pub fn new(
        genus_name: impl Into<String>,
        species_name: impl Into<String>,
        edibility: Edibility,
    ) -> Self {
        Self {
            common_names: Vec::new(),
            genus_name: genus_name.into(),
            species_name: species_name.into(),
            edibility,
            traits: TraitSet::default(),
        }
    }

    #[must_use]
    pub fn with_common_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: TraitSet) -> Self {
        self.traits = traits;
        self
    }

    /// Genus and species joined by a single space.
    ///
    /// No trimming or validation is applied; an empty genus yields a leading space.
    #[must_use]
    pub fn taxonomic_name(&self) -> String {
        format!("{} {}", self.genus_name, self.species_name)
    }

    /// First common name, if any
    #[must_use]
    pub fn primary_name(&self) -> Option<&str> {
        self.common_names.first().map(String::as_str)
    }
}

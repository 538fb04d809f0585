use serde::{Deserialize, Serialize};

/// Edibility classification of a fungus
///
/// Only the exact canonical spellings map to known categories; anything else
/// (other casing, surrounding whitespace, new labels) is preserved verbatim in
/// [`Edibility::Other`] so catalog round-trips are lossless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Edibility {
    Edible,
    ChoiceEdible,
    Inedible,
    Poisonous,
    DeadlyToxic,
    Other(String),
}

impl Edibility {
    /// True for categories that should never be eaten
    #[must_use]
    pub fn is_toxic(&self) -> bool {
        matches!(self, Self::Poisonous | Self::DeadlyToxic)
    }
}

impl From<&str> for Edibility {
    fn from(s: &str) -> Self {
        match s {
            "Edible" => Self::Edible,
            "Choice Edible" => Self::ChoiceEdible,
            "Inedible" => Self::Inedible,
            "Poisonous" => Self::Poisonous,
            "Deadly Toxic" => Self::DeadlyToxic,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for Edibility {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Edibility> for String {
    fn from(e: Edibility) -> Self {
        e.to_string()
    }
}

impl std::fmt::Display for Edibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Edible => write!(f, "Edible"),
            Self::ChoiceEdible => write!(f, "Choice Edible"),
            Self::Inedible => write!(f, "Inedible"),
            Self::Poisonous => write!(f, "Poisonous"),
            Self::DeadlyToxic => write!(f, "Deadly Toxic"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_spellings_parse() {
        assert_eq!(Edibility::from("Choice Edible"), Edibility::ChoiceEdible);
        assert_eq!(Edibility::from("Deadly Toxic"), Edibility::DeadlyToxic);
        assert_eq!(Edibility::from("Poisonous"), Edibility::Poisonous);
    }

    #[test]
    fn test_non_canonical_spellings_round_trip_verbatim() {
        for raw in ["poisonous", " Poisonous ", "DEADLY TOXIC", "choice edible"] {
            let e = Edibility::from(raw);
            assert_eq!(e, Edibility::Other(raw.to_string()));
            assert_eq!(String::from(e), raw);
        }
    }

    #[test]
    fn test_unknown_category_preserved() {
        let e = Edibility::from("Edible when cooked");
        assert_eq!(e, Edibility::Other("Edible when cooked".to_string()));
        assert_eq!(e.to_string(), "Edible when cooked");
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&Edibility::DeadlyToxic).unwrap();
        assert_eq!(json, "\"Deadly Toxic\"");

        let parsed: Edibility = serde_json::from_str("\"Inedible\"").unwrap();
        assert_eq!(parsed, Edibility::Inedible);
    }

    #[test]
    fn test_is_toxic() {
        assert!(Edibility::Poisonous.is_toxic());
        assert!(Edibility::DeadlyToxic.is_toxic());
        assert!(!Edibility::ChoiceEdible.is_toxic());
        assert!(!Edibility::Other("Unknown".to_string()).is_toxic());
    }
}

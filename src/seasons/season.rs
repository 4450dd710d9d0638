use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A meteorological season name.
///
/// The string form (`Display`, `FromStr`, serde) is the lower-case name,
/// which is also the label applied to targets before prefixing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    Monsoon,
}

impl Season {
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn string_forms_are_lowercase() {
        let names: Vec<&str> = Season::iter().map(Season::as_str).collect();
        assert_eq!(
            names,
            vec!["winter", "spring", "summer", "autumn", "monsoon"]
        );
        assert_eq!(Season::Monsoon.to_string(), "monsoon");
    }

    #[test]
    fn parses_and_serializes_lowercase() {
        assert_eq!(Season::from_str("autumn").unwrap(), Season::Autumn);
        assert!(Season::from_str("fall").is_err());

        let json = serde_json::to_string(&Season::Spring).unwrap();
        assert_eq!(json, "\"spring\"");
        let back: Season = serde_json::from_str("\"winter\"").unwrap();
        assert_eq!(back, Season::Winter);
    }
}

use std::fs;
use std::path::Path;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use crate::applicator::SeasonApplicator;
use crate::config::ConfigError;
use crate::labels::LabelTarget;
use crate::seasons::Location;

/// Serializable settings for a [`SeasonApplicator`].
///
/// ```json
/// { "location": "south", "label_prefix": "app-" }
/// ```
///
/// Both fields are optional and default to the Northern Hemisphere and an
/// empty prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ApplicatorConfig {
    #[schemars(
        title = "Location",
        description = "Convention used to map months to seasons"
    )]
    pub location: Location,

    #[schemars(
        title = "Label Prefix",
        description = "Prepended to every label the applicator adds or removes"
    )]
    pub label_prefix: String,
}

impl ApplicatorConfig {
    pub fn schema() -> Schema {
        schema_for!(ApplicatorConfig)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Applicator with these settings and no target.
    pub fn build<'a, T: LabelTarget>(&self) -> SeasonApplicator<'a, T> {
        SeasonApplicator::with_location(self.location).with_prefix(self.label_prefix.clone())
    }
}

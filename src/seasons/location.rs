use std::str::FromStr;

use chrono::Month;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::error::SeasonError;
use crate::seasons::{MonthTable, QuarterTable, Season, SeasonConvention};

use crate::seasons::Season::{Autumn, Monsoon, Spring, Summer, Winter};

pub static NORTHERN: QuarterTable =
    QuarterTable::from_static("north", [Winter, Spring, Summer, Autumn]);

/// Northern quarters shifted by two: the hemispheres' seasons are inverted.
pub static SOUTHERN: QuarterTable =
    QuarterTable::from_static("south", [Summer, Autumn, Winter, Spring]);

/// Four seasons of uneven length: monsoon spans June to September, autumn
/// only October and November.
pub static INDIA: MonthTable = MonthTable::from_static(
    "india",
    [
        Winter, Winter, Summer, Summer, Summer, Monsoon, Monsoon, Monsoon, Monsoon, Autumn, Autumn,
        Winter,
    ],
);

/// Built-in location conventions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    EnumMessage,
)]
pub enum Location {
    #[default]
    #[serde(rename = "north")]
    #[strum(serialize = "north", message = "Northern Hemisphere")]
    NorthernHemisphere,

    #[serde(rename = "south")]
    #[strum(serialize = "south", message = "Southern Hemisphere")]
    SouthernHemisphere,

    #[serde(rename = "india")]
    #[strum(serialize = "india", message = "India")]
    India,
}

impl Location {
    /// Looks a location up by its symbolic name (`"north"`, `"south"`, `"india"`).
    pub fn from_name(name: &str) -> Result<Self, SeasonError> {
        Location::from_str(name).map_err(|_| SeasonError::UnsupportedConvention(name.to_string()))
    }

    fn table(self) -> &'static dyn SeasonConvention {
        match self {
            Location::NorthernHemisphere => &NORTHERN,
            Location::SouthernHemisphere => &SOUTHERN,
            Location::India => &INDIA,
        }
    }
}

impl SeasonConvention for Location {
    fn name(&self) -> &str {
        let name: &'static str = (*self).into();
        name
    }

    fn season(&self, month: Month) -> Season {
        self.table().season(month)
    }
}

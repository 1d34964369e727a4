use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Oldest age still treated as a child reader.
const CHILD_MAX_AGE: u32 = 12;
/// Youngest age treated as a senior reader.
const SENIOR_MIN_AGE: u32 = 65;

/// Display font size preference stored under `settings.font_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    /// Default font size for a reader of the given age.
    ///
    /// Children (12 and under) and seniors (65 and over) get `Large`,
    /// everyone else `Medium`.
    pub fn for_age(age: u32) -> Self {
        if age <= CHILD_MAX_AGE || age >= SENIOR_MIN_AGE {
            Self::Large
        } else {
            Self::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for FontSize {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(CoreError::InvalidFontSize {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

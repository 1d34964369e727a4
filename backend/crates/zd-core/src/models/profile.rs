//! Locally owned user profile, linked 1:1 to an identity at the provider.

use crate::FontSize;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Settings key holding the display font size.
pub const FONT_SIZE_SETTING: &str = "font_size";

/// Open string-keyed settings document.
pub type Settings = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Local primary key, assigned by the store on insert
    pub id: i64,
    /// Subject id of the linked identity. Set once at creation.
    pub idp_uid: String,
    /// Mirror of the identity's email
    pub email: String,
    pub name: String,
    pub name_kana: String,
    /// 0 means "not entered yet"
    pub age: u32,
    pub sex: String,
    pub settings: Settings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Age has never been entered.
    pub fn is_age_unset(&self) -> bool {
        self.age == 0
    }

    /// Font size from settings, if one is stored and recognised.
    pub fn font_size(&self) -> Option<FontSize> {
        self.settings
            .get(FONT_SIZE_SETTING)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
    }

    pub fn set_font_size(&mut self, font_size: FontSize) {
        self.settings.insert(
            FONT_SIZE_SETTING.to_string(),
            Value::String(font_size.as_str().to_string()),
        );
    }
}

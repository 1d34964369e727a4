//! Partial profile update.
//!
//! Every field is independently optional: `None` leaves the stored value
//! untouched. Email is deliberately not applied here because it must be
//! changed at the identity provider before the local copy may follow.

use crate::{Profile, Settings};

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub name_kana: Option<String>,
    pub age: Option<u32>,
    pub sex: Option<String>,
    pub email: Option<String>,
    pub settings: Option<Settings>,
}

impl ProfileUpdate {
    /// Apply every present field except `email` to `profile`.
    ///
    /// The first age ever entered (transition from 0) seeds
    /// `settings.font_size` from the age. Later age edits leave it alone.
    /// Incoming settings are merged key by key afterwards, so an explicit
    /// `font_size` in the same update wins over the age default.
    pub fn apply_local_changes(&self, profile: &mut Profile) {
        if let Some(ref name) = self.name {
            profile.name = name.clone();
        }
        if let Some(ref name_kana) = self.name_kana {
            profile.name_kana = name_kana.clone();
        }
        if let Some(ref sex) = self.sex {
            profile.sex = sex.clone();
        }

        if let Some(age) = self.age {
            let was_first_age_input = profile.is_age_unset();
            profile.age = age;
            if was_first_age_input && age > 0 {
                profile.set_font_size(crate::FontSize::for_age(age));
            }
        }

        if let Some(ref settings) = self.settings {
            for (key, value) in settings {
                profile.settings.insert(key.clone(), value.clone());
            }
        }
    }

    /// The requested email when it differs from the profile's current one.
    pub fn email_change<'a>(&'a self, profile: &Profile) -> Option<&'a str> {
        self.email
            .as_deref()
            .filter(|email| *email != profile.email)
    }
}

mod font_size;
mod profile_update;

use crate::{Profile, Settings};

use chrono::Utc;

pub(crate) fn blank_profile() -> Profile {
    let now = Utc::now();
    Profile {
        id: 1,
        idp_uid: "uid-123".to_string(),
        email: "a@x.com".to_string(),
        name: String::new(),
        name_kana: String::new(),
        age: 0,
        sex: String::new(),
        settings: Settings::new(),
        created_at: now,
        updated_at: now,
    }
}

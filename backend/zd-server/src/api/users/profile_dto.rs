use zd_core::{Profile, Settings};

use serde::Serialize;

/// Profile DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: i64,
    pub idp_uid: String,
    pub email: String,
    pub name: String,
    pub name_kana: String,
    pub age: u32,
    pub sex: String,
    pub settings: Settings,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            idp_uid: p.idp_uid,
            email: p.email,
            name: p.name,
            name_kana: p.name_kana,
            age: p.age,
            sex: p.sex,
            settings: p.settings,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}

//! SQLite-backed profile store.
//!
//! Timestamps are stored as unix seconds and `settings` as a JSON object in a
//! TEXT column. Reads go through [`ProfileRepository::map_row`] so every query
//! produces identically decoded profiles.

use crate::{DbError, ProfileStore, Result as DbErrorResult};

use zd_core::{NewProfile, Profile, Settings};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const PROFILE_COLUMNS: &str =
    "id, idp_uid, email, name, name_kana, age, sex, settings, created_at, updated_at";

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Profile> {
        let age: i64 = row.try_get("age")?;
        let settings_json: String = row.try_get("settings")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        let settings: Settings = serde_json::from_str(&settings_json)?;

        Ok(Profile {
            id: row.try_get("id")?,
            idp_uid: row.try_get("idp_uid")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            name_kana: row.try_get("name_kana")?,
            age: u32::try_from(age).map_err(|_| DbError::Initialization {
                message: format!("Invalid value in profiles.age: {}", age),
                location: ErrorLocation::from(Location::caller()),
            })?,
            sex: row.try_get("sex")?,
            settings,
            created_at: Self::timestamp(created_at, "created_at")?,
            updated_at: Self::timestamp(updated_at, "updated_at")?,
        })
    }

    #[track_caller]
    fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Initialization {
            message: format!("Invalid timestamp in profiles.{}", column),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn create(&self, new_profile: &NewProfile) -> DbErrorResult<Profile> {
        if new_profile.idp_uid.trim().is_empty() {
            return Err(DbError::InvalidProfile {
                message: "idp_uid cannot be blank".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO profiles (idp_uid, email, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new_profile.idp_uid)
        .bind(&new_profile.email)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Created profile {} for uid {}", id, new_profile.idp_uid);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("Profile {} missing after insert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM profiles WHERE id = ?",
            PROFILE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_idp_uid(&self, idp_uid: &str) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM profiles WHERE idp_uid = ?",
            PROFILE_COLUMNS
        ))
        .bind(idp_uid)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_all(&self) -> DbErrorResult<Vec<Profile>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM profiles ORDER BY id ASC",
            PROFILE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn update(&self, profile: &Profile) -> DbErrorResult<()> {
        let settings = serde_json::to_string(&profile.settings)?;

        let result = sqlx::query(
            r#"
                UPDATE profiles
                SET email = ?, name = ?, name_kana = ?, age = ?, sex = ?,
                    settings = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&profile.email)
        .bind(&profile.name)
        .bind(&profile.name_kana)
        .bind(i64::from(profile.age))
        .bind(&profile.sex)
        .bind(settings)
        .bind(profile.updated_at.timestamp())
        .bind(profile.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::ProfileNotFound {
                id: profile.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::ProfileNotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

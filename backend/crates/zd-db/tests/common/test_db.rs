use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    zd_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a row directly, bypassing the repository
pub async fn insert_raw_profile(pool: &SqlitePool, idp_uid: &str, age: i64, settings: &str) -> i64 {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query(
        "INSERT INTO profiles (idp_uid, email, age, settings, created_at, updated_at) VALUES (?, ?, ?, ?, 0, 0)",
    )
    .bind(idp_uid)
    .bind(format!("{}@example.com", idp_uid))
    .bind(age)
    .bind(settings)
    .execute(pool)
    .await
    .expect("Failed to insert raw profile")
    .last_insert_rowid()
}

use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Runs the forward-only schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    // Version 1: topics.
    if !is_applied(pool, 1).await? {
        let mut tx = pool.begin().await?;

        // `seq` preserves first-insert order; upserts conflict on `id` and keep it.
        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS topics (
                    seq INTEGER PRIMARY KEY AUTOINCREMENT,
                    id TEXT NOT NULL UNIQUE,
                    name TEXT NOT NULL,
                    description TEXT NOT NULL,
                    difficulty TEXT,
                    status TEXT NOT NULL,
                    progress INTEGER NOT NULL CHECK (progress >= 0),
                    problems_solved INTEGER NOT NULL CHECK (problems_solved >= 0),
                    total_problems INTEGER NOT NULL CHECK (total_problems >= problems_solved),
                    estimated_time TEXT NOT NULL,
                    exam_score INTEGER CHECK (exam_score BETWEEN 0 AND 100),
                    last_activity_at TEXT
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(1_i64)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(version = 1, "applied sqlite migration");
    }

    Ok(())
}

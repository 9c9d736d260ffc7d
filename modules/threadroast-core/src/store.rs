//! Roast cache: one record per (username, lang), written once.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

/// A cached roast. `username` is the lowercased canonical key.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RoastRecord {
    pub username: String,
    pub lang: String,
    pub result: String,
}

#[async_trait]
pub trait RoastStore: Send + Sync {
    async fn get(&self, username: &str, lang: &str) -> Result<Option<RoastRecord>>;
    async fn set(&self, record: RoastRecord) -> Result<()>;
}

// --- Postgres implementation ---

pub struct PgRoastStore {
    pool: PgPool,
}

impl PgRoastStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the embedded SQL migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl RoastStore for PgRoastStore {
    async fn get(&self, username: &str, lang: &str) -> Result<Option<RoastRecord>> {
        let record = sqlx::query_as::<_, RoastRecord>(
            "SELECT username, lang, result FROM roasts WHERE username = $1 AND lang = $2",
        )
        .bind(username)
        .bind(lang)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn set(&self, record: RoastRecord) -> Result<()> {
        // Cached roasts are immutable: the first persisted write wins.
        sqlx::query(
            "INSERT INTO roasts (username, lang, result) VALUES ($1, $2, $3) \
             ON CONFLICT (username, lang) DO NOTHING",
        )
        .bind(&record.username)
        .bind(&record.lang)
        .bind(&record.result)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

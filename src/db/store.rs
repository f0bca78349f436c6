//! Key-value persistence of the mood history.
//!
//! The whole history is one serialized value under a fixed key in the
//! `kv_store` table. Reads and writes always move the full list.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::models::mood_entry::{decode_history, encode_history, MoodEntry};

#[derive(Clone)]
pub struct EntryStore {
    pool: SqlitePool,
    key: Arc<str>,
    // Serializes read-modify-write cycles issued through this handle.
    write_lock: Arc<Mutex<()>>,
}

impl EntryStore {
    pub fn new(pool: SqlitePool, key: impl Into<Arc<str>>) -> Self {
        Self {
            pool,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the stored history in stored order, or an empty list when
    /// nothing has been saved under the key.
    pub async fn load(&self) -> AppResult<Vec<MoodEntry>> {
        let raw = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?1")
            .bind(&*self.key)
            .fetch_optional(&self.pool)
            .await?;

        match raw {
            Some(raw) => Ok(decode_history(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the whole stored history.
    pub async fn save(&self, entries: &[MoodEntry]) -> AppResult<()> {
        let value = encode_history(entries)?;

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&*self.key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(&*self.key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Prepends `entry` and writes the list back. A history that fails to
    /// parse is left untouched and the error is returned.
    pub async fn append(&self, entry: MoodEntry) -> AppResult<Vec<MoodEntry>> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(0, entry);
        self.save(&entries).await?;

        Ok(entries)
    }

    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}

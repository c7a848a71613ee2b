//! Typed JSON document collections

use std::marker::PhantomData;

use mediahub_common::RepositoryError;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A type stored as one JSON document per row of its collection table
pub trait Document: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Table holding this document type
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// Typed handle over one collection table
pub struct Collection<T> {
    pool: SqlitePool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Document> Collection<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new document; unique index violations map to `AlreadyExists`
    pub async fn insert(&self, doc: &T) -> Result<(), RepositoryError> {
        let body = serde_json::to_string(doc)?;
        let sql = format!("INSERT INTO {} (id, doc) VALUES (?, ?)", T::COLLECTION);

        sqlx::query(&sql)
            .bind(doc.id().to_string())
            .bind(body)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// All documents in insertion order
    pub async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        let sql = format!("SELECT doc FROM {} ORDER BY rowid", T::COLLECTION);

        let rows: Vec<String> = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(|row| decode(row)).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError> {
        let sql = format!("SELECT doc FROM {} WHERE id = ?", T::COLLECTION);

        let row: Option<String> = sqlx::query_scalar(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_deref().map(decode).transpose()
    }

    /// First document whose top-level `field` equals `value`
    pub async fn find_one_by(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<Option<T>, RepositoryError> {
        let sql = format!(
            "SELECT doc FROM {} WHERE json_extract(doc, ?) = ? ORDER BY rowid LIMIT 1",
            T::COLLECTION
        );

        let row: Option<String> = sqlx::query_scalar(&sql)
            .bind(format!("$.{}", field))
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.as_deref().map(decode).transpose()
    }

    /// Overwrite the stored document with the same id.
    ///
    /// Returns `false` when no such document exists.
    pub async fn replace(&self, doc: &T) -> Result<bool, RepositoryError> {
        let body = serde_json::to_string(doc)?;
        let sql = format!("UPDATE {} SET doc = ? WHERE id = ?", T::COLLECTION);

        let result = sqlx::query(&sql)
            .bind(body)
            .bind(doc.id().to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when no such document exists
    pub async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::COLLECTION);

        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every document, returning how many were deleted
    pub async fn clear(&self) -> Result<u64, RepositoryError> {
        let sql = format!("DELETE FROM {}", T::COLLECTION);

        let result = sqlx::query(&sql).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}

fn decode<T: DeserializeOwned>(row: &str) -> Result<T, RepositoryError> {
    Ok(serde_json::from_str(row)?)
}

//! PostgreSQL song store built on a sqlx connection pool.

use super::SongRepository;
use crate::domain::{Page, RepositoryError, Song, SongFilter, SongRecord, SongUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

const SONG_COLUMNS: &str = "id, group_name, title, release_date, text, link, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresSongStore {
    pool: PgPool,
}

impl PostgresSongStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects and makes sure the `songs` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        // gen_random_uuid() is built in since Postgres 13.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS songs (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                group_name TEXT NOT NULL,
                title TEXT NOT NULL,
                release_date TEXT NOT NULL,
                text TEXT NOT NULL,
                link TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS songs_group_title_idx ON songs (group_name, title)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn song_from_row(row: &PgRow) -> Result<Song, sqlx::Error> {
    Ok(Song {
        id: row.try_get("id")?,
        group: row.try_get("group_name")?,
        title: row.try_get("title")?,
        release_date: row.try_get("release_date")?,
        text: row.try_get("text")?,
        link: row.try_get("link")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// `SELECT` with one equality predicate per filter plus pagination.
pub(crate) fn list_query<'a>(filters: &'a [SongFilter], page: Page) -> QueryBuilder<'a, Postgres> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(format!("SELECT {} FROM songs", SONG_COLUMNS));
    for (idx, filter) in filters.iter().enumerate() {
        qb.push(if idx == 0 { " WHERE " } else { " AND " });
        qb.push(filter.column()).push(" = ").push_bind(filter.value());
    }
    qb.push(" ORDER BY created_at, id LIMIT ")
        .push_bind(i64::from(page.limit))
        .push(" OFFSET ")
        .push_bind(i64::from(page.offset));
    qb
}

/// `UPDATE` for the set fields; `updated_at` is always assigned.
pub(crate) fn update_query<'a>(
    id: Uuid,
    update: &'a SongUpdate,
    now: DateTime<Utc>,
) -> QueryBuilder<'a, Postgres> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE songs SET ");
    {
        let mut assignments = qb.separated(", ");
        for (column, value) in update.assignments() {
            assignments
                .push(column)
                .push_unseparated(" = ")
                .push_bind_unseparated(value);
        }
        assignments.push("updated_at = ").push_bind_unseparated(now);
    }
    qb.push(" WHERE id = ").push_bind(id);
    qb
}

#[async_trait]
impl SongRepository for PostgresSongStore {
    async fn create(&self, record: &SongRecord) -> Result<Song, RepositoryError> {
        const OP: &str = "storage.Create";

        let sql = format!(
            "INSERT INTO songs (group_name, title, release_date, text, link, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            SONG_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&record.group)
            .bind(&record.title)
            .bind(&record.release_date)
            .bind(&record.text)
            .bind(&record.link)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::database(OP))?;

        song_from_row(&row).map_err(RepositoryError::database(OP))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Song, RepositoryError> {
        const OP: &str = "storage.GetByID";

        let sql = format!("SELECT {} FROM songs WHERE id = $1", SONG_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::database(OP))?
            .ok_or(RepositoryError::NotFound { op: OP })?;

        song_from_row(&row).map_err(RepositoryError::database(OP))
    }

    async fn get_all(&self, filters: &[SongFilter], page: Page) -> Result<Vec<Song>, RepositoryError> {
        const OP: &str = "storage.GetAll";

        let rows = list_query(filters, page)
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::database(OP))?;

        rows.iter()
            .map(song_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::database(OP))
    }

    async fn update(&self, id: Uuid, update: &SongUpdate) -> Result<(), RepositoryError> {
        const OP: &str = "storage.Update";

        let result = update_query(id, update, Utc::now())
            .build()
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database(OP))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { op: OP });
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        const OP: &str = "storage.Delete";

        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database(OP))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { op: OP });
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database("storage.Ping"))?;
        Ok(())
    }
}

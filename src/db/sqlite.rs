use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::models::{Article, ArticleDraft};
use crate::db::schema::SQLITE_INIT;
use crate::error::NewsdeskError;

pub type SqlitePool = Pool<Sqlite>;

/// Open the SQLite pool, creating the database file if absent.
pub async fn connect(database_url: &str) -> Result<SqlitePool, NewsdeskError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct ArticleStorage {
    pool: SqlitePool,
}

impl ArticleStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), NewsdeskError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new article. Returns the id assigned by AUTOINCREMENT.
    pub async fn insert(&self, draft: &ArticleDraft) -> Result<i64, NewsdeskError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("INSERT INTO articles (title, content, category) VALUES (?, ?, ?)")
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(&draft.category)
            .execute(&mut *conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// List every article, optionally restricted to one category.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Article>, NewsdeskError> {
        let mut conn = self.pool.acquire().await?;
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, Article>(
                    "SELECT id, title, content, category FROM articles WHERE category = ? ORDER BY id",
                )
                .bind(category)
                .fetch_all(&mut *conn)
                .await?
            }
            None => {
                sqlx::query_as::<_, Article>(
                    "SELECT id, title, content, category FROM articles ORDER BY id",
                )
                .fetch_all(&mut *conn)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Article>, NewsdeskError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Article>(
            "SELECT id, title, content, category FROM articles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Overwrite all fields of the row matching `id` (id itself is immutable).
    /// Returns the number of rows affected; 0 means no such article.
    pub async fn update(&self, id: i64, draft: &ArticleDraft) -> Result<u64, NewsdeskError> {
        let mut conn = self.pool.acquire().await?;
        let result =
            sqlx::query("UPDATE articles SET title = ?, content = ?, category = ? WHERE id = ?")
                .bind(&draft.title)
                .bind(&draft.content)
                .bind(&draft.category)
                .bind(id)
                .execute(&mut *conn)
                .await?;
        Ok(result.rows_affected())
    }

    /// Remove the row matching `id`. Returns the number of rows affected.
    pub async fn delete(&self, id: i64) -> Result<u64, NewsdeskError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}

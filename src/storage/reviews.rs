// src/storage/reviews.rs
use log::{ debug, info };
use sqlx::sqlite::{ SqliteConnectOptions, SqlitePool, SqlitePoolOptions };
use std::path::Path;
use std::str::FromStr;
use crate::models::review::{ NewReview, Review };

const CREATE_REVIEWS_TABLE: &str =
    r#"
    CREATE TABLE IF NOT EXISTS reviews (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      author TEXT NOT NULL,
      content TEXT NOT NULL,
      rating INTEGER NOT NULL,
      created_at TEXT DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// SQLite-backed review storage. Independent from the server registry.
pub struct ReviewStore {
    pool: SqlitePool,
}

impl ReviewStore {
    /// Opens (creating if needed) the database at `database_url` and makes
    /// sure the reviews table exists.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        if let Some(parent) = database_dir(database_url) {
            tokio::fs::create_dir_all(&parent).await.map_err(sqlx::Error::Io)?;
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().max_connections(5).connect_with(options).await?;
        info!("Opened review database {}", database_url);

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(CREATE_REVIEWS_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn insert(&self, review: &NewReview) -> Result<i64, sqlx::Error> {
        let result = sqlx
            ::query("INSERT INTO reviews (author, content, rating) VALUES (?, ?, ?)")
            .bind(&review.author)
            .bind(&review.content)
            .bind(review.rating)
            .execute(&self.pool).await?;
        let id = result.last_insert_rowid();
        debug!("Stored review {} by {}", id, review.author);
        Ok(id)
    }

    pub async fn list_all(&self) -> Result<Vec<Review>, sqlx::Error> {
        sqlx
            ::query_as::<_, Review>(
                "SELECT id, author, content, rating, created_at FROM reviews ORDER BY id"
            )
            .fetch_all(&self.pool).await
    }

    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:").await?;
        Self::from_pool(pool).await
    }
}

/// Directory that must exist before SQLite can create the file behind
/// `database_url`. `None` for in-memory databases.
fn database_dir(database_url: &str) -> Option<std::path::PathBuf> {
    let path = database_url.strip_prefix("sqlite:")?;
    if path.starts_with(':') {
        return None;
    }
    let path = path.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

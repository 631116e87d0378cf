// File: src/database.rs
// Purpose: SQLx book storage with connection pooling and schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Longest accepted book name, in characters
pub const MAX_NAME_LEN: usize = 64;

/// Book model representing a row in the books table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub add_time: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("book name is required")]
    MissingName,

    #[error("book name is {0} characters long, the limit is 64")]
    NameTooLong(usize),

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

/// Initialize the SQLite database and create the schema
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(64) NOT NULL,
            add_time DATETIME NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

/// Get all books, oldest first
pub async fn list_books(pool: &SqlitePool) -> Result<Vec<Book>, BookError> {
    let books = sqlx::query_as::<_, Book>("SELECT id, name, add_time FROM books ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(books)
}

/// Create a new book stamped with the current time
///
/// An empty name is stored as is; only an absent name is rejected.
pub async fn create_book(pool: &SqlitePool, name: Option<&str>) -> Result<Book, BookError> {
    let name = name.ok_or(BookError::MissingName)?;

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(BookError::NameTooLong(len));
    }

    let add_time = Utc::now();
    let result = sqlx::query("INSERT INTO books (name, add_time) VALUES (?, ?)")
        .bind(name)
        .bind(add_time)
        .execute(pool)
        .await?;

    Ok(Book {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        add_time,
    })
}

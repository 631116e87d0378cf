// File: src/handlers/books.rs
// Purpose: JSON book endpoints
//
// Every outcome is HTTP 200; success or failure is carried in `code`.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{self, Book};
use crate::AppState;

pub const CODE_OK: i32 = 0;
pub const CODE_FAILED: i32 = -1;

const MODEL_LABEL: &str = "approot.book";

/// Envelope shared by all book endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    pub data: Vec<T>,
}

impl<T> ApiResponse<T> {
    fn new(code: i32, msg: &str, data: Vec<T>) -> Self {
        Self {
            code,
            msg: msg.to_string(),
            data,
        }
    }
}

/// One serialized book: `{"model", "pk", "fields": {...}}`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    pub model: String,
    pub pk: i64,
    pub fields: BookFields,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BookFields {
    pub name: String,
    /// RFC 3339 with `Z`; milliseconds only when the sub-second part is non-zero
    pub add_time: String,
}

/// Formats `add_time` for the book list
///
/// Whole seconds carry no fraction (`08:30:00Z`); anything else is cut to
/// milliseconds (`08:30:00.123Z`).
pub fn format_add_time(time: &DateTime<Utc>) -> String {
    let precision = if time.nanosecond() / 1_000 == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Millis
    };
    time.to_rfc3339_opts(precision, true)
}

impl From<Book> for BookRecord {
    fn from(book: Book) -> Self {
        Self {
            model: MODEL_LABEL.to_string(),
            pk: book.id,
            fields: BookFields {
                name: book.name,
                add_time: format_add_time(&book.add_time),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateParams {
    pub name: Option<String>,
}

/// GET /book/list/
pub async fn list_books(State(state): State<AppState>) -> Json<ApiResponse<BookRecord>> {
    let response = match database::list_books(&state.pool).await {
        Ok(books) => ApiResponse::new(
            CODE_OK,
            "查询成功",
            books.into_iter().map(BookRecord::from).collect(),
        ),
        Err(e) => {
            tracing::error!("Failed to list books: {}", e);
            ApiResponse::new(CODE_FAILED, "查询失败", Vec::new())
        }
    };

    Json(response)
}

/// GET /book/create/?name=...
pub async fn create_book(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
) -> Json<ApiResponse<BookRecord>> {
    let response = match database::create_book(&state.pool, params.name.as_deref()).await {
        Ok(book) => {
            tracing::info!(id = book.id, name = %book.name, "book created");
            ApiResponse::new(CODE_OK, "添加成功", Vec::new())
        }
        Err(e) => {
            tracing::warn!("Failed to create book: {}", e);
            ApiResponse::new(CODE_FAILED, "添加失败", Vec::new())
        }
    };

    Json(response)
}

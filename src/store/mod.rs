//! Row store adapter.
//!
//! The member table lives in an external tabular source: rows of strings,
//! 0-indexed after the header, with fixed column meanings (see
//! [`crate::models::member::columns`]). Every backend exposes the same two
//! operations and none of them retry: a failed call surfaces as a
//! [`StoreError`] and the caller decides what to do with it.

pub mod memory;
pub mod postgres;
pub mod sheets;

use thiserror::Error;

use crate::config::Backend;

pub use memory::MemoryStore;
pub use postgres::PgRowStore;
pub use sheets::SheetsStore;

/// One data row, cells in column order.
pub type Row = Vec<String>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Row store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Row store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid row store URL: {0}")]
    BadUrl(String),
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("Seed file error: {0}")]
    Seed(String),
    #[error("Row {row} is out of range ({len} rows)")]
    RowOutOfRange { row: usize, len: usize },
    #[error("Column span {span} takes {expected} values, got {got}")]
    Width {
        span: ColumnSpan,
        expected: usize,
        got: usize,
    },
}

/// Inclusive, 0-based range of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub first: usize,
    pub last: usize,
}

impl ColumnSpan {
    pub const fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last);
        ColumnSpan { first, last }
    }

    /// Number of columns covered; 0 for an inverted span.
    pub fn width(&self) -> usize {
        (self.last + 1).saturating_sub(self.first)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Cut this span out of a raw row, trimming cells and filling missing
    /// ones with empty strings.
    pub fn project(&self, raw: &[String]) -> Row {
        (self.first..=self.last)
            .map(|i| raw.get(i).map(|c| c.trim().to_string()).unwrap_or_default())
            .collect()
    }
}

impl std::fmt::Display for ColumnSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", column_letter(self.first), column_letter(self.last))
    }
}

/// Overwrite `span` of `row` with `values`, padding a short row with empty
/// cells first. `values` must be exactly `span.width()` long.
pub(crate) fn splice_row(row: &mut Row, span: ColumnSpan, values: &[String]) {
    if row.len() <= span.last {
        row.resize(span.last + 1, String::new());
    }
    row[span.first..=span.last].clone_from_slice(values);
}

/// Spreadsheet column letter for a 0-based index (0 = A, 25 = Z, 26 = AA).
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

pub enum RowStore {
    Sheets(SheetsStore),
    Postgres(PgRowStore),
    Memory(MemoryStore),
}

impl RowStore {
    /// Open the configured backend.
    pub async fn connect(backend: &Backend) -> Result<Self, StoreError> {
        match backend {
            Backend::Sheets(config) => {
                log::info!(
                    "Using Google Sheets store (spreadsheet {}, tab {})",
                    config.spreadsheet_id,
                    config.sheet_name
                );
                Ok(RowStore::Sheets(SheetsStore::new(config.clone())))
            }
            Backend::Postgres { database_url } => {
                log::info!("Using Postgres row store");
                Ok(RowStore::Postgres(PgRowStore::connect(database_url).await?))
            }
            Backend::Memory { seed: Some(path) } => {
                let store = MemoryStore::from_seed_file(path)?;
                log::info!("Using in-memory store seeded from {}", path.display());
                Ok(RowStore::Memory(store))
            }
            Backend::Memory { seed: None } => {
                log::warn!("Using empty in-memory store (no MEMBERS_SEED set)");
                Ok(RowStore::Memory(MemoryStore::default()))
            }
        }
    }

    /// Read every data row, restricted to `span`. Cells are trimmed and
    /// missing cells come back as empty strings.
    pub async fn fetch_rows(&self, span: ColumnSpan) -> Result<Vec<Row>, StoreError> {
        let raw = match self {
            RowStore::Sheets(s) => s.fetch_rows(span).await?,
            RowStore::Postgres(s) => s.fetch_rows().await?,
            RowStore::Memory(s) => s.fetch_rows().await,
        };
        // Sheets only returns the requested range, so its cell 0 is `span.first`.
        let offset = match self {
            RowStore::Sheets(_) => span.first,
            _ => 0,
        };
        let local = ColumnSpan::new(span.first - offset, span.last - offset);
        Ok(raw.iter().map(|r| local.project(r)).collect())
    }

    /// Overwrite the cells of one data row inside `span` in a single call.
    pub async fn write_row(
        &self,
        row: usize,
        span: ColumnSpan,
        values: &[String],
    ) -> Result<(), StoreError> {
        if span.is_empty() || values.len() != span.width() {
            return Err(StoreError::Width {
                span,
                expected: span.width(),
                got: values.len(),
            });
        }
        match self {
            RowStore::Sheets(s) => s.write_row(row, span, values).await,
            RowStore::Postgres(s) => s.write_row(row, span, values).await,
            RowStore::Memory(s) => s.write_row(row, span, values).await,
        }
    }
}

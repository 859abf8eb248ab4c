use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{ColumnSpan, Row, StoreError, splice_row};

/// Self-hosted mirror of the member sheet in `sheet_rows`. Row position is
/// the rank of `row_index`, matching how the sheet is addressed.
pub struct PgRowStore {
    pool: PgPool,
}

impl PgRowStore {
    /// Connect and apply pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(8)
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        log::info!("Database migrations complete");
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        PgRowStore { pool }
    }

    pub(super) async fn fetch_rows(&self) -> Result<Vec<Row>, StoreError> {
        let rows: Vec<(Vec<Option<String>>,)> =
            sqlx::query_as("SELECT cells FROM sheet_rows ORDER BY row_index")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(cells,)| cells.into_iter().map(Option::unwrap_or_default).collect())
            .collect())
    }

    pub(super) async fn write_row(
        &self,
        row: usize,
        span: ColumnSpan,
        values: &[String],
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        let found: Option<(i32, Vec<Option<String>>)> = sqlx::query_as(
            "SELECT row_index, cells FROM sheet_rows \
             ORDER BY row_index OFFSET $1 LIMIT 1 FOR UPDATE",
        )
        .bind(row as i64)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((row_index, cells)) = found else {
            let (len,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sheet_rows")
                .fetch_one(&mut *tx)
                .await?;
            return Err(StoreError::RowOutOfRange {
                row,
                len: len as usize,
            });
        };

        // The whole array is rewritten so it always starts at index 1.
        let mut cells: Row = cells.into_iter().map(Option::unwrap_or_default).collect();
        splice_row(&mut cells, span, values);
        sqlx::query("UPDATE sheet_rows SET cells = $2 WHERE row_index = $1")
            .bind(row_index)
            .bind(cells)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}

use std::path::Path;

use tokio::sync::RwLock;

use super::{ColumnSpan, Row, StoreError, splice_row};

/// Process-local row store. Backs demos (seeded from a JSON file) and tests.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Row>>,
}

impl MemoryStore {
    pub fn new(rows: Vec<Row>) -> Self {
        MemoryStore {
            rows: RwLock::new(rows),
        }
    }

    /// Load rows from a JSON file holding an array of string arrays
    /// (header excluded).
    pub fn from_seed_file(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Seed(format!("{}: {e}", path.display())))?;
        let rows: Vec<Row> = serde_json::from_str(&json)
            .map_err(|e| StoreError::Seed(format!("{}: {e}", path.display())))?;
        log::info!("Seeded {} rows from {}", rows.len(), path.display());
        Ok(Self::new(rows))
    }

    /// Copy of the current rows, untrimmed.
    pub async fn snapshot(&self) -> Vec<Row> {
        self.rows.read().await.clone()
    }

    pub(super) async fn fetch_rows(&self) -> Vec<Row> {
        self.snapshot().await
    }

    pub(super) async fn write_row(
        &self,
        row: usize,
        span: ColumnSpan,
        values: &[String],
    ) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let len = rows.len();
        let target = rows
            .get_mut(row)
            .ok_or(StoreError::RowOutOfRange { row, len })?;
        splice_row(target, span, values);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn write_pads_short_rows() {
        let store = MemoryStore::new(vec![vec!["North".into(), "Asha".into()]]);
        store
            .write_row(0, ColumnSpan::new(8, 9), &["no_answer".into(), "try later".into()])
            .await
            .unwrap();
        let rows = store.snapshot().await;
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[0][8], "no_answer");
        assert_eq!(rows[0][9], "try later");
        assert_eq!(rows[0][5], "");
    }

    #[tokio::test]
    async fn write_out_of_range() {
        let store = MemoryStore::new(vec![]);
        let err = store
            .write_row(3, ColumnSpan::new(0, 0), &["x".into()])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::RowOutOfRange { row: 3, len: 0 }));
    }

    #[tokio::test]
    async fn seed_file_loads_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[["North","Asha",""],["South","Ben","9876543210"]]"#).unwrap();
        let store = MemoryStore::from_seed_file(file.path()).unwrap();
        let rows = store.snapshot().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], "9876543210");
    }

    #[test]
    fn seed_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = MemoryStore::from_seed_file(file.path()).err().unwrap();
        assert!(matches!(err, StoreError::Seed(_)));
    }
}

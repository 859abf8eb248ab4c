use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use super::{ColumnSpan, Row, StoreError, column_letter};
use crate::config::SheetsConfig;

/// Google Sheets v4 `values` API client for a single tab.
pub struct SheetsStore {
    client: Client,
    config: SheetsConfig,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueUpdate<'a> {
    range: &'a str,
    major_dimension: &'static str,
    values: [&'a [String]; 1],
}

impl SheetsStore {
    pub fn new(config: SheetsConfig) -> Self {
        SheetsStore {
            client: Client::new(),
            config,
        }
    }

    /// A1 range covering `span` from the first data row to the end of the sheet.
    pub fn read_range(&self, span: ColumnSpan) -> String {
        format!(
            "{}!{}{}:{}",
            self.quoted_sheet(),
            column_letter(span.first),
            self.config.header_rows + 1,
            column_letter(span.last)
        )
    }

    /// A1 range covering `span` on a single data row.
    pub fn write_range(&self, row: usize, span: ColumnSpan) -> String {
        let sheet_row = row + self.config.header_rows + 1;
        format!(
            "{}!{}{sheet_row}:{}{sheet_row}",
            self.quoted_sheet(),
            column_letter(span.first),
            column_letter(span.last)
        )
    }

    fn quoted_sheet(&self) -> String {
        let name = &self.config.sheet_name;
        if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            name.clone()
        } else {
            format!("'{}'", name.replace('\'', "''"))
        }
    }

    fn values_url(&self, range: &str) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.config.api_base)
            .map_err(|e| StoreError::BadUrl(format!("{}: {e}", self.config.api_base)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::BadUrl(self.config.api_base.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.config.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }

    pub(super) async fn fetch_rows(&self, span: ColumnSpan) -> Result<Vec<Row>, StoreError> {
        let range = self.read_range(span);
        let url = self.values_url(&range)?;
        log::debug!("Fetching {range}");

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        let body: ValueRange = resp.json().await?;
        Ok(body.values)
    }

    pub(super) async fn write_row(
        &self,
        row: usize,
        span: ColumnSpan,
        values: &[String],
    ) -> Result<(), StoreError> {
        let range = self.write_range(row, span);
        let mut url = self.values_url(&range)?;
        // RAW: cells are stored as the literal strings sent, never parsed as
        // numbers or formulas.
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW");
        log::debug!("Writing {range}");

        let body = ValueUpdate {
            range: &range,
            major_dimension: "ROWS",
            values: [values],
        };
        let resp = self
            .client
            .put(url)
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

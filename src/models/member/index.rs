use std::collections::HashMap;

use super::columns;
use crate::store::Row;

/// Normalized `(zone, name)` identity: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberKey {
    zone: String,
    name: String,
}

impl MemberKey {
    pub fn new(zone: &str, name: &str) -> Self {
        MemberKey {
            zone: normalize(zone),
            name: normalize(name),
        }
    }
}

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Row positions keyed by identity, built from one fetched snapshot.
///
/// Rows are 0-based data rows as returned by the store. When the same
/// identity appears twice the first row wins, matching a top-down scan.
#[derive(Debug, Default)]
pub struct MemberIndex {
    positions: HashMap<MemberKey, usize>,
}

impl MemberIndex {
    /// Index every row. Rows must start with the zone and name columns.
    pub fn from_rows(rows: &[Row]) -> Self {
        Self::from_rows_where(rows, |_| true)
    }

    /// Index only the rows accepted by `keep`.
    pub fn from_rows_where<F>(rows: &[Row], keep: F) -> Self
    where
        F: Fn(&Row) -> bool,
    {
        let mut positions = HashMap::with_capacity(rows.len());
        for (pos, row) in rows.iter().enumerate() {
            if !keep(row) {
                continue;
            }
            let zone = row.get(columns::ZONE).map(String::as_str).unwrap_or("");
            let name = row.get(columns::NAME).map(String::as_str).unwrap_or("");
            if zone.trim().is_empty() && name.trim().is_empty() {
                continue;
            }
            positions.entry(MemberKey::new(zone, name)).or_insert(pos);
        }
        MemberIndex { positions }
    }

    pub fn position(&self, zone: &str, name: &str) -> Option<usize> {
        self.positions.get(&MemberKey::new(zone, name)).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

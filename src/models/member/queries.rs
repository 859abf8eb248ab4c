use serde::{Deserialize, Deserializer};

use super::columns;
use super::index::MemberIndex;
use super::types::{CallStatus, MemberRecord, RegistrationStatus};
use crate::store::{Row, RowStore, StoreError};

/// Fields submitted by the public registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRegistration {
    #[serde(rename = "mandalam")]
    pub zone: String,
    pub name: String,
    pub mobile: String,
    #[serde(default, deserialize_with = "flag_text")]
    pub participated: String,
}

/// The form sends either a yes/no string or a JSON boolean.
fn flag_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Text(String),
        Bool(bool),
    }
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Text(text) => text,
        Flag::Bool(true) => "Yes".to_string(),
        Flag::Bool(false) => "No".to_string(),
    })
}

/// Typed records for every row that is not on leave, in sheet order.
pub fn active_members(rows: &[Row]) -> Vec<MemberRecord> {
    rows.iter()
        .map(|r| MemberRecord::from_row(r))
        .filter(|m| !m.is_on_leave() && !(m.zone.is_empty() && m.name.is_empty()))
        .collect()
}

/// Fetch the sheet and return all active members. Rebuilt on every call.
pub async fn list_active(store: &RowStore) -> Result<Vec<MemberRecord>, StoreError> {
    let rows = store.fetch_rows(columns::RECORD).await?;
    Ok(active_members(&rows))
}

/// Active members who have not registered yet.
pub async fn list_unregistered(store: &RowStore) -> Result<Vec<MemberRecord>, StoreError> {
    Ok(list_active(store)
        .await?
        .into_iter()
        .filter(|m| !m.is_registered())
        .collect())
}

/// Mark a member as registered, writing mobile, participation and status in
/// one call. Returns the row position, or `None` when no active member
/// matches `(zone, name)`.
///
/// There is no lock between the lookup and the write: two registrations for
/// the same member both land and the later one wins.
pub async fn register(
    store: &RowStore,
    registration: &NewRegistration,
) -> Result<Option<usize>, StoreError> {
    let rows = store.fetch_rows(columns::IDENTITY_WITH_STATUS).await?;
    let index = MemberIndex::from_rows_where(&rows, |row| {
        let status = row.get(columns::STATUS).map(String::as_str).unwrap_or("");
        RegistrationStatus::from_cell(status) != RegistrationStatus::Leave
    });

    let Some(pos) = index.position(&registration.zone, &registration.name) else {
        log::warn!(
            "Registration lookup missed: zone={:?} name={:?}",
            registration.zone,
            registration.name
        );
        return Ok(None);
    };

    let values = [
        registration.mobile.trim().to_string(),
        registration.participated.trim().to_string(),
        RegistrationStatus::Success.as_cell().to_string(),
    ];
    store.write_row(pos, columns::REGISTRATION, &values).await?;
    log::info!(
        "Registered {} / {} (row {pos})",
        registration.zone.trim(),
        registration.name.trim()
    );
    Ok(Some(pos))
}

/// Record a call outcome. Any registration state is accepted, and `None`
/// clears the status back to "not called". Returns the row position, or
/// `None` when no row matches `(zone, name)`.
pub async fn set_call_status(
    store: &RowStore,
    zone: &str,
    name: &str,
    status: Option<CallStatus>,
    remarks: &str,
) -> Result<Option<usize>, StoreError> {
    let rows = store.fetch_rows(columns::IDENTITY).await?;
    let index = MemberIndex::from_rows(&rows);

    let Some(pos) = index.position(zone, name) else {
        log::warn!("Call status lookup missed: zone={zone:?} name={name:?}");
        return Ok(None);
    };

    let values = [
        status.map(|s| s.code()).unwrap_or("").to_string(),
        remarks.trim().to_string(),
    ];
    store.write_row(pos, columns::CALL, &values).await?;
    log::info!(
        "Call status for {} / {} set to {:?} (row {pos})",
        zone.trim(),
        name.trim(),
        status.map(|s| s.code()).unwrap_or("")
    );
    Ok(Some(pos))
}

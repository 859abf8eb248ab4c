use serde::Serialize;

use super::columns;

/// Registration state stored in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RegistrationStatus {
    /// Not registered yet (empty cell, or anything unrecognised).
    #[default]
    #[serde(rename = "")]
    Empty,
    Success,
    /// Excluded from every directory and stats view.
    Leave,
}

impl RegistrationStatus {
    pub fn from_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.eq_ignore_ascii_case("success") {
            RegistrationStatus::Success
        } else if cell.eq_ignore_ascii_case("leave") {
            RegistrationStatus::Leave
        } else {
            RegistrationStatus::Empty
        }
    }

    /// Literal written to the sheet.
    pub fn as_cell(&self) -> &'static str {
        match self {
            RegistrationStatus::Empty => "",
            RegistrationStatus::Success => "Success",
            RegistrationStatus::Leave => "Leave",
        }
    }
}

/// Outcome of an outreach call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    WillAttend,
    WillNotAttend,
    NoAnswerMessaged,
    NoAnswer,
    Unreachable,
    Other,
}

impl CallStatus {
    pub const ALL: [CallStatus; 6] = [
        CallStatus::WillAttend,
        CallStatus::WillNotAttend,
        CallStatus::NoAnswerMessaged,
        CallStatus::NoAnswer,
        CallStatus::Unreachable,
        CallStatus::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CallStatus::WillAttend => "will_attend",
            CallStatus::WillNotAttend => "will_not_attend",
            CallStatus::NoAnswerMessaged => "no_answer_messaged",
            CallStatus::NoAnswer => "no_answer",
            CallStatus::Unreachable => "unreachable",
            CallStatus::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallStatus::WillAttend => "Answered, will attend",
            CallStatus::WillNotAttend => "Answered, will not attend",
            CallStatus::NoAnswerMessaged => "No answer, message sent",
            CallStatus::NoAnswer => "No answer",
            CallStatus::Unreachable => "Unreachable",
            CallStatus::Other => "Other",
        }
    }

    /// Strict parse of a canonical code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }

    /// Lenient parse of a stored cell: empty means "not called yet", and
    /// text written by hand that is not a known code counts as `Other`.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if cell.is_empty() {
            return None;
        }
        Some(Self::from_code(cell).unwrap_or(CallStatus::Other))
    }
}

/// A member row, typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub zone: String,
    pub name: String,
    pub mobile: String,
    pub participated_previously: String,
    pub status: RegistrationStatus,
    pub is_secretariat: bool,
    pub is_executive: bool,
    pub call_status: Option<CallStatus>,
    pub call_remarks: String,
}

impl MemberRecord {
    /// Build from a raw row. Missing cells read as empty.
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).map(|c| c.trim()).unwrap_or("");

        let mobile = match cell(columns::MOBILE) {
            "" => cell(columns::FALLBACK_MOBILE),
            m => m,
        };

        MemberRecord {
            zone: cell(columns::ZONE).to_string(),
            name: cell(columns::NAME).to_string(),
            mobile: mobile.to_string(),
            participated_previously: cell(columns::PARTICIPATED).to_string(),
            status: RegistrationStatus::from_cell(cell(columns::STATUS)),
            is_secretariat: is_truthy(cell(columns::SECRETARIAT)),
            is_executive: is_truthy(cell(columns::EXECUTIVE)),
            call_status: CallStatus::from_cell(cell(columns::CALL_STATUS)),
            call_remarks: cell(columns::CALL_REMARKS).to_string(),
        }
    }

    pub fn is_registered(&self) -> bool {
        self.status == RegistrationStatus::Success
    }

    pub fn is_on_leave(&self) -> bool {
        self.status == RegistrationStatus::Leave
    }
}

/// Role flag cells are filled in by hand, so accept the usual spellings.
pub fn is_truthy(cell: &str) -> bool {
    matches!(
        cell.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1" | "x" | "✓"
    )
}

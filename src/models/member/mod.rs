pub mod filter;
pub mod index;
pub mod queries;
pub mod types;

pub use filter::{MemberFilter, RoleFilter, StatusFilter, filter_members};
pub use index::{MemberIndex, MemberKey};
pub use queries::{
    NewRegistration, active_members, list_active, list_unregistered, register, set_call_status,
};
pub use types::{CallStatus, MemberRecord, RegistrationStatus};

/// Positional column layout of the member sheet.
pub mod columns {
    use crate::store::ColumnSpan;

    pub const ZONE: usize = 0;
    pub const NAME: usize = 1;
    pub const MOBILE: usize = 2;
    pub const PARTICIPATED: usize = 3;
    pub const STATUS: usize = 4;
    pub const SECRETARIAT: usize = 5;
    pub const EXECUTIVE: usize = 6;
    pub const FALLBACK_MOBILE: usize = 7;
    pub const CALL_STATUS: usize = 8;
    pub const CALL_REMARKS: usize = 9;

    /// Every column a member record is built from.
    pub const RECORD: ColumnSpan = ColumnSpan::new(ZONE, CALL_REMARKS);
    /// Zone and name, the lookup key.
    pub const IDENTITY: ColumnSpan = ColumnSpan::new(ZONE, NAME);
    /// Zone through status, enough to skip members on leave during lookup.
    pub const IDENTITY_WITH_STATUS: ColumnSpan = ColumnSpan::new(ZONE, STATUS);
    /// Mobile, participated, status: written together on registration.
    pub const REGISTRATION: ColumnSpan = ColumnSpan::new(MOBILE, STATUS);
    /// Call status and remarks.
    pub const CALL: ColumnSpan = ColumnSpan::new(CALL_STATUS, CALL_REMARKS);
}

//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

use crate::auth::token::AuthUser;
use crate::models::member::MemberRecord;
use crate::models::stats::{ZoneRoleStats, ZoneStats};

/// Entry in the public registration dropdown.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PendingMember {
    pub mandalam: String,
    pub name: String,
}

impl From<MemberRecord> for PendingMember {
    fn from(m: MemberRecord) -> Self {
        PendingMember {
            mandalam: m.zone,
            name: m.name,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        StatusResponse { status: "success" }
    }
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: AuthUser,
}

#[derive(Serialize, Debug)]
pub struct ZonesResponse {
    pub zones: Vec<ZoneStats>,
}

#[derive(Serialize, Debug)]
pub struct MembersResponse {
    pub members: Vec<MemberRecord>,
}

#[derive(Serialize, Debug)]
pub struct RoleStatsResponse {
    pub stats: Vec<ZoneRoleStats>,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string for the member listing. Empty values mean "no filter".
#[derive(Deserialize, Debug, Default)]
pub struct MembersQuery {
    pub zone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ZoneQuery {
    pub zone: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CallStatusRequest {
    pub zone: String,
    pub name: String,
    #[serde(default)]
    pub call_status: String,
    #[serde(default)]
    pub remarks: String,
}

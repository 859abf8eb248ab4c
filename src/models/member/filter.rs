use std::str::FromStr;

use super::index::normalize;
use super::types::MemberRecord;

/// Which role group a listing or report is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Secretariat,
    Executive,
}

impl RoleFilter {
    pub fn matches(&self, member: &MemberRecord) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Secretariat => member.is_secretariat,
            RoleFilter::Executive => member.is_executive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleFilter::All => "All",
            RoleFilter::Secretariat => "Secretariat",
            RoleFilter::Executive => "Executive",
        }
    }
}

impl FromStr for RoleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(RoleFilter::All),
            "secretariat" => Ok(RoleFilter::Secretariat),
            "executive" => Ok(RoleFilter::Executive),
            other => Err(format!(
                "Unknown role '{other}' (expected All, Secretariat or Executive)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Registered,
    NotRegistered,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "registered" | "success" => Ok(StatusFilter::Registered),
            "not_registered" | "notregistered" | "unregistered" | "pending" => {
                Ok(StatusFilter::NotRegistered)
            }
            other => Err(format!(
                "Unknown status '{other}' (expected all, registered or not_registered)"
            )),
        }
    }
}

/// Directory filter. Each part is applied independently; callers decide
/// which parts make sense together.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub zone: Option<String>,
    pub role: RoleFilter,
    pub status: StatusFilter,
}

impl MemberFilter {
    pub fn matches(&self, member: &MemberRecord) -> bool {
        let zone_ok = match &self.zone {
            Some(zone) => normalize(zone) == normalize(&member.zone),
            None => true,
        };
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Registered => member.is_registered(),
            StatusFilter::NotRegistered => !member.is_registered(),
        };
        zone_ok && status_ok && self.role.matches(member)
    }
}

/// Members matching `filter`, in sheet order. Members on leave never match.
pub fn filter_members(members: &[MemberRecord], filter: &MemberFilter) -> Vec<MemberRecord> {
    members
        .iter()
        .filter(|m| !m.is_on_leave() && filter.matches(m))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::RegistrationStatus;

    fn member(zone: &str, name: &str, status: &str, sec: bool, exe: bool) -> MemberRecord {
        MemberRecord {
            zone: zone.into(),
            name: name.into(),
            mobile: String::new(),
            participated_previously: String::new(),
            status: RegistrationStatus::from_cell(status),
            is_secretariat: sec,
            is_executive: exe,
            call_status: None,
            call_remarks: String::new(),
        }
    }

    fn sample() -> Vec<MemberRecord> {
        vec![
            member("North", "Asha", "", true, false),
            member("North", "Ben", "Success", false, true),
            member("north", "Chitra", "Leave", true, true),
            member("South", "Dev", "", false, true),
        ]
    }

    #[test]
    fn zone_filter_is_case_insensitive() {
        let filter = MemberFilter {
            zone: Some("NORTH".into()),
            ..Default::default()
        };
        let names: Vec<_> = filter_members(&sample(), &filter)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Asha", "Ben"]);
    }

    #[test]
    fn leave_never_matches() {
        let filter = MemberFilter {
            role: RoleFilter::Secretariat,
            ..Default::default()
        };
        let names: Vec<_> = filter_members(&sample(), &filter)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Asha"]);
    }

    #[test]
    fn status_filter() {
        let filter = MemberFilter {
            status: StatusFilter::NotRegistered,
            ..Default::default()
        };
        let names: Vec<_> = filter_members(&sample(), &filter)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Asha", "Dev"]);
    }

    #[test]
    fn parse_filters() {
        assert_eq!("".parse::<RoleFilter>().unwrap(), RoleFilter::All);
        assert_eq!("EXECUTIVE".parse::<RoleFilter>().unwrap(), RoleFilter::Executive);
        assert!("board".parse::<RoleFilter>().is_err());
        assert_eq!("not_registered".parse::<StatusFilter>().unwrap(), StatusFilter::NotRegistered);
        assert!("maybe".parse::<StatusFilter>().is_err());
    }
}

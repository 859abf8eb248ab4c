//! Registration counts by zone and role.
//!
//! Everything here is a pure reduction over one snapshot of member records.
//! Members on leave are skipped even if the caller forgot to filter them.
//! Zones come out in the order they first appear in the sheet.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::member::index::normalize;
use crate::models::member::{CallStatus, MemberRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total: usize,
    pub registered: usize,
    pub not_registered: usize,
    pub percentage_registered: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStats {
    pub name: String,
    pub total: usize,
    pub registered: usize,
    pub not_registered: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStats {
    pub total: usize,
    pub registered: usize,
    pub percentage: String,
    pub is_complete: bool,
}

impl RoleStats {
    pub fn new(total: usize, registered: usize) -> Self {
        RoleStats {
            total,
            registered,
            percentage: percentage(registered, total),
            is_complete: total > 0 && registered == total,
        }
    }

    /// Completion as reported, i.e. rounded to one decimal.
    pub fn completion(&self) -> f64 {
        reported_completion(self.registered, self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRoleStats {
    pub name: String,
    pub secretariat: RoleStats,
    pub executive: RoleStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallCount {
    pub code: &'static str,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSummary {
    pub total: usize,
    pub not_called: usize,
    pub statuses: Vec<CallCount>,
}

pub fn completion(registered: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        registered as f64 * 100.0 / total as f64
    }
}

/// `registered / total` as a percentage with one decimal, or `"0"` for an
/// empty group.
pub fn percentage(registered: usize, total: usize) -> String {
    if total == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", completion(registered, total))
    }
}

/// The value shown by [`percentage`], as a number. Zones that print the
/// same percentage compare equal.
pub fn reported_completion(registered: usize, total: usize) -> f64 {
    percentage(registered, total).parse().unwrap_or(0.0)
}

/// Active members grouped by zone, first spelling of each zone kept.
fn group_by_zone(members: &[MemberRecord]) -> Vec<(String, Vec<&MemberRecord>)> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&MemberRecord>)> = Vec::new();
    for m in members.iter().filter(|m| !m.is_on_leave()) {
        let slot = *slots.entry(normalize(&m.zone)).or_insert_with(|| {
            groups.push((m.zone.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(m);
    }
    groups
}

pub fn overall_stats(members: &[MemberRecord]) -> OverallStats {
    let active = members.iter().filter(|m| !m.is_on_leave());
    let (total, registered) = active.fold((0, 0), |(t, r), m| (t + 1, r + m.is_registered() as usize));
    OverallStats {
        total,
        registered,
        not_registered: total - registered,
        percentage_registered: percentage(registered, total),
    }
}

pub fn aggregate_zone_stats(members: &[MemberRecord]) -> Vec<ZoneStats> {
    group_by_zone(members)
        .into_iter()
        .map(|(name, group)| {
            let registered = group.iter().filter(|m| m.is_registered()).count();
            ZoneStats {
                name,
                total: group.len(),
                registered,
                not_registered: group.len() - registered,
            }
        })
        .collect()
}

pub fn aggregate_role_stats(members: &[MemberRecord]) -> Vec<ZoneRoleStats> {
    group_by_zone(members)
        .into_iter()
        .map(|(name, group)| {
            let role = |has_role: fn(&MemberRecord) -> bool| {
                let in_role: Vec<_> = group.iter().filter(|m| has_role(m)).collect();
                let registered = in_role.iter().filter(|m| m.is_registered()).count();
                RoleStats::new(in_role.len(), registered)
            };
            ZoneRoleStats {
                secretariat: role(|m| m.is_secretariat),
                executive: role(|m| m.is_executive),
                name,
            }
        })
        .collect()
}

/// How far the call campaign has got among active members.
pub fn call_summary(members: &[MemberRecord]) -> CallSummary {
    let active: Vec<_> = members.iter().filter(|m| !m.is_on_leave()).collect();
    let statuses = CallStatus::ALL
        .into_iter()
        .map(|status| CallCount {
            code: status.code(),
            label: status.label(),
            count: active.iter().filter(|m| m.call_status == Some(status)).count(),
        })
        .collect();
    CallSummary {
        total: active.len(),
        not_called: active.iter().filter(|m| m.call_status.is_none()).count(),
        statuses,
    }
}

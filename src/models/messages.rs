//! Outreach text for the dashboard's "copy message" buttons.

use std::cmp::Ordering;

use crate::models::member::index::normalize;
use crate::models::member::{MemberRecord, RoleFilter};
use crate::models::stats::{RoleStats, ZoneRoleStats, reported_completion};

const CALL_TO_ACTION: &str = "Please complete your registration at the earliest.";

/// Numbered list of members in `zone` (and `role`) who have not registered.
///
/// Returns an empty string when no zone is selected or nobody in the
/// selection is left to register, so there is nothing to copy.
pub fn format_unregistered_message(
    zone: Option<&str>,
    role: RoleFilter,
    members: &[MemberRecord],
) -> String {
    let Some(zone) = zone.map(str::trim).filter(|z| !z.is_empty()) else {
        return String::new();
    };

    let pending: Vec<&MemberRecord> = members
        .iter()
        .filter(|m| !m.is_on_leave() && !m.is_registered())
        .filter(|m| normalize(&m.zone) == normalize(zone) && role.matches(m))
        .collect();
    if pending.is_empty() {
        return String::new();
    }

    let group = match role {
        RoleFilter::All => "members".to_string(),
        other => format!("{} members", other.label()),
    };
    let mut lines = vec![format!("*{zone}: {group} yet to register*"), String::new()];
    lines.extend(
        pending
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {}", i + 1, m.name)),
    );
    lines.push(String::new());
    lines.push(CALL_TO_ACTION.to_string());
    lines.join("\n")
}

/// Zones where `role` still has members to register, best-progressing first.
///
/// Only zones with at least one member in the role are considered. For
/// [`RoleFilter::All`] a zone is listed when either role is incomplete; the
/// line shows the counts of each incomplete role and the zone is ranked by
/// the combined completion of both roles. Ranking uses the one-decimal
/// percentage, and zones showing the same figure keep sheet order.
pub fn format_incomplete_zones_message(role: RoleFilter, stats: &[ZoneRoleStats]) -> String {
    let mut rows: Vec<(f64, String)> = stats
        .iter()
        .filter_map(|zone| incomplete_line(role, zone))
        .collect();
    if rows.is_empty() {
        return String::new();
    }
    rows.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let heading = match role {
        RoleFilter::All => "*Zones with pending registrations*".to_string(),
        other => format!("*Zones with pending {} registrations*", other.label()),
    };
    let mut lines = vec![heading, String::new()];
    lines.extend(
        rows.iter()
            .enumerate()
            .map(|(i, (_, line))| format!("{}. {line}", i + 1)),
    );
    lines.join("\n")
}

fn is_pending(stats: &RoleStats) -> bool {
    stats.total > 0 && !stats.is_complete
}

fn incomplete_line(role: RoleFilter, zone: &ZoneRoleStats) -> Option<(f64, String)> {
    match role {
        RoleFilter::Secretariat | RoleFilter::Executive => {
            let stats = if role == RoleFilter::Secretariat {
                &zone.secretariat
            } else {
                &zone.executive
            };
            is_pending(stats).then(|| {
                (
                    stats.completion(),
                    format!("{} - {}/{}", zone.name, stats.registered, stats.total),
                )
            })
        }
        RoleFilter::All => {
            let parts: Vec<String> = [
                (RoleFilter::Secretariat, &zone.secretariat),
                (RoleFilter::Executive, &zone.executive),
            ]
            .into_iter()
            .filter(|(_, stats)| is_pending(stats))
            .map(|(r, stats)| format!("{}: {}/{}", r.label(), stats.registered, stats.total))
            .collect();
            if parts.is_empty() {
                return None;
            }
            let combined = reported_completion(
                zone.secretariat.registered + zone.executive.registered,
                zone.secretariat.total + zone.executive.total,
            );
            Some((combined, format!("{} - {}", zone.name, parts.join(" "))))
        }
    }
}

use actix_web::{HttpResponse, web};

use crate::api_types::{MembersQuery, MembersResponse, RoleStatsResponse, ZoneQuery, ZonesResponse};
use crate::errors::AppError;
use crate::models::member::{self, MemberFilter, RoleFilter, StatusFilter};
use crate::models::stats;
use crate::store::RowStore;

/// Treat a missing, blank or "all" zone parameter as no zone filter.
pub(crate) fn zone_param(zone: Option<&str>) -> Option<String> {
    zone.map(str::trim)
        .filter(|z| !z.is_empty() && !z.eq_ignore_ascii_case("all"))
        .map(String::from)
}

pub(crate) fn role_param(role: Option<&str>) -> Result<RoleFilter, AppError> {
    role.unwrap_or("").parse().map_err(AppError::Validation)
}

/// GET /api/dashboard/stats
pub async fn overall(store: web::Data<RowStore>) -> Result<HttpResponse, AppError> {
    let members = member::list_active(&store).await?;
    Ok(HttpResponse::Ok().json(stats::overall_stats(&members)))
}

/// GET /api/dashboard/zones
pub async fn zones(store: web::Data<RowStore>) -> Result<HttpResponse, AppError> {
    let members = member::list_active(&store).await?;
    Ok(HttpResponse::Ok().json(ZonesResponse {
        zones: stats::aggregate_zone_stats(&members),
    }))
}

/// GET /api/dashboard/members?zone=&role=&status=
///
/// The role filter only applies together with a zone; without one it is
/// ignored.
pub async fn members(
    store: web::Data<RowStore>,
    query: web::Query<MembersQuery>,
) -> Result<HttpResponse, AppError> {
    let zone = zone_param(query.zone.as_deref());
    let role = match zone {
        Some(_) => role_param(query.role.as_deref())?,
        None => RoleFilter::All,
    };
    let status: StatusFilter = query
        .status
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(AppError::Validation)?;

    let all = member::list_active(&store).await?;
    let filter = MemberFilter { zone, role, status };
    Ok(HttpResponse::Ok().json(MembersResponse {
        members: member::filter_members(&all, &filter),
    }))
}

/// GET /api/dashboard/role-stats
pub async fn role_stats(store: web::Data<RowStore>) -> Result<HttpResponse, AppError> {
    let members = member::list_active(&store).await?;
    Ok(HttpResponse::Ok().json(RoleStatsResponse {
        stats: stats::aggregate_role_stats(&members),
    }))
}

/// GET /api/dashboard/call-stats?zone=
pub async fn call_stats(
    store: web::Data<RowStore>,
    query: web::Query<ZoneQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = MemberFilter {
        zone: zone_param(query.zone.as_deref()),
        ..Default::default()
    };
    let members = member::filter_members(&member::list_active(&store).await?, &filter);
    Ok(HttpResponse::Ok().json(stats::call_summary(&members)))
}

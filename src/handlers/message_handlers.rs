use actix_web::{HttpResponse, web};

use super::dashboard::{role_param, zone_param};
use crate::api_types::{MessageResponse, ZoneQuery};
use crate::errors::AppError;
use crate::models::{member, messages, stats};
use crate::store::RowStore;

/// GET /api/dashboard/messages/unregistered?zone=&role=
pub async fn unregistered(
    store: web::Data<RowStore>,
    query: web::Query<ZoneQuery>,
) -> Result<HttpResponse, AppError> {
    let zone = zone_param(query.zone.as_deref());
    let role = role_param(query.role.as_deref())?;
    // No zone selected: nothing to build, skip the fetch.
    let message = match zone.as_deref() {
        None => String::new(),
        Some(zone) => {
            let members = member::list_active(&store).await?;
            messages::format_unregistered_message(Some(zone), role, &members)
        }
    };
    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

/// GET /api/dashboard/messages/incomplete-zones?role=
pub async fn incomplete_zones(
    store: web::Data<RowStore>,
    query: web::Query<ZoneQuery>,
) -> Result<HttpResponse, AppError> {
    let role = role_param(query.role.as_deref())?;
    let members = member::list_active(&store).await?;
    let message =
        messages::format_incomplete_zones_message(role, &stats::aggregate_role_stats(&members));
    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

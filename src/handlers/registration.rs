use actix_web::{HttpResponse, web};

use crate::api_types::{PendingMember, StatusResponse};
use crate::auth::validate;
use crate::errors::AppError;
use crate::models::member::{self, NewRegistration};
use crate::store::RowStore;

/// GET /api/data - members who can still register
pub async fn pending(store: web::Data<RowStore>) -> Result<HttpResponse, AppError> {
    let members: Vec<PendingMember> = member::list_unregistered(&store)
        .await?
        .into_iter()
        .map(PendingMember::from)
        .collect();
    Ok(HttpResponse::Ok().json(members))
}

/// POST /api/register
pub async fn register(
    store: web::Data<RowStore>,
    body: web::Json<NewRegistration>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.zone, "Mandalam", 100));
    errors.extend(validate::validate_required(&body.name, "Name", 100));
    errors.extend(validate::validate_mobile(&body.mobile));
    errors.extend(validate::validate_optional(&body.participated, "Participated", 50));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    member::register(&store, &body)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("User not found. Please check the mandalam and name.".to_string())
        })?;

    Ok(HttpResponse::Ok().json(StatusResponse::success()))
}

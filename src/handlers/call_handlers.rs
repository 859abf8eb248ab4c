use actix_web::{HttpResponse, web};

use crate::api_types::{CallStatusRequest, StatusResponse};
use crate::auth::token::AuthUser;
use crate::auth::validate;
use crate::errors::AppError;
use crate::models::member::{self, CallStatus};
use crate::store::RowStore;

/// POST /api/call-status
///
/// An empty `callStatus` resets the member to "not called yet".
pub async fn update(
    store: web::Data<RowStore>,
    user: web::ReqData<AuthUser>,
    body: web::Json<CallStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.zone, "Zone", 100));
    errors.extend(validate::validate_required(&body.name, "Name", 100));
    errors.extend(validate::validate_optional(&body.remarks, "Remarks", 500));

    let status = match body.call_status.trim() {
        "" => None,
        code => {
            let parsed = CallStatus::from_code(code);
            if parsed.is_none() {
                errors.push(format!("Unknown call status '{code}'"));
            }
            parsed
        }
    };
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    member::set_call_status(&store, &body.zone, &body.name, status, &body.remarks)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    log::info!(
        "{} recorded call status for {} / {}",
        user.username,
        body.zone.trim(),
        body.name.trim()
    );
    Ok(HttpResponse::Ok().json(StatusResponse::success()))
}

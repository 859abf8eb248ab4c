use actix_web::{
    Error, HttpMessage, HttpResponse, ResponseError,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header},
    middleware::Next,
    web,
};

use crate::auth::token::TokenStore;
use crate::errors::{AppError, ApiErrorResponse};

/// Token presented by the caller, stashed in request extensions next to
/// the resolved [`AuthUser`](crate::auth::token::AuthUser).
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Extract the token from an `Authorization: Bearer ...` header.
pub fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

/// Middleware function that requires a live bearer token.
/// Responds 401 without calling the handler otherwise.
pub async fn require_bearer(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let user = match (bearer_token(&req), req.app_data::<web::Data<TokenStore>>()) {
        (Some(token), Some(tokens)) => tokens.resolve(&token).map(|user| (token, user)),
        _ => None,
    };

    let Some((token, user)) = user else {
        log::debug!("Rejected {} {}: missing or invalid token", req.method(), req.path());
        let response = AppError::Unauthorized.error_response();
        return Ok(req.into_response(response).map_into_right_body());
    };

    req.extensions_mut().insert(user);
    req.extensions_mut().insert(BearerToken(token));
    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Rejects POST/PUT/DELETE requests whose Content-Type is not JSON.
/// GET requests pass through.
pub async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == Method::POST || method == Method::PUT || method == Method::DELETE {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let response = HttpResponse::BadRequest().json(ApiErrorResponse {
                status: "error",
                message: "Content-Type must be application/json".to_string(),
            });
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

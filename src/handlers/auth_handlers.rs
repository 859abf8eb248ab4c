use std::net::{IpAddr, Ipv4Addr};

use actix_web::{HttpRequest, HttpResponse, web};

use crate::api_types::{LoginRequest, LoginResponse, StatusResponse};
use crate::auth::AdminAccount;
use crate::auth::middleware::BearerToken;
use crate::auth::rate_limit::RateLimiter;
use crate::auth::token::{AuthUser, TokenStore};
use crate::errors::AppError;

/// POST /api/auth/login
pub async fn login(
    req: HttpRequest,
    admin: web::Data<AdminAccount>,
    tokens: web::Data<TokenStore>,
    limiter: web::Data<RateLimiter>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // Rate-limit check BEFORE hashing anything
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Login blocked for {ip}: too many failures");
        return Err(AppError::RateLimited);
    }

    match admin.verify(&body.username, &body.password) {
        Some(user) => {
            limiter.clear(ip);
            let token = tokens.issue(user.clone());
            log::info!("{} logged in from {ip}", user.username);
            Ok(HttpResponse::Ok().json(LoginResponse {
                success: true,
                token,
                user,
            }))
        }
        None => {
            limiter.record_failure(ip);
            log::warn!("Failed login for {:?} from {ip}", body.username);
            Err(AppError::InvalidCredentials)
        }
    }
}

/// POST /api/auth/logout
pub async fn logout(
    tokens: web::Data<TokenStore>,
    token: web::ReqData<BearerToken>,
    user: web::ReqData<AuthUser>,
) -> HttpResponse {
    tokens.revoke(&token.0);
    log::info!("{} logged out", user.username);
    HttpResponse::Ok().json(StatusResponse::success())
}

/// GET /api/auth/me
pub async fn me(user: web::ReqData<AuthUser>) -> HttpResponse {
    HttpResponse::Ok().json(user.into_inner())
}

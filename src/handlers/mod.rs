pub mod auth_handlers;
pub mod call_handlers;
pub mod dashboard;
pub mod message_handlers;
pub mod registration;

use actix_web::{HttpResponse, middleware::from_fn, web};

use crate::auth::middleware::{require_bearer, require_json_content_type};
use crate::errors::{ApiErrorResponse, AppError};

/// Fallback for unmatched routes. Register with `App::default_service`.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorResponse {
        status: "error",
        message: "Not found".to_string(),
    })
}

/// Configure the `/api` routes. Application data (row store, token store,
/// admin account, rate limiter) is registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and query strings get the same JSON error shape.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.service(
        web::scope("/api")
            // Public registration form
            .route("/data", web::get().to(registration::pending))
            .service(
                web::resource("/register")
                    .wrap(from_fn(require_json_content_type))
                    .route(web::post().to(registration::register)),
            )
            // Auth
            .service(
                web::resource("/auth/login")
                    .wrap(from_fn(require_json_content_type))
                    .route(web::post().to(auth_handlers::login)),
            )
            .service(
                web::resource("/auth/logout")
                    .wrap(from_fn(require_bearer))
                    .route(web::post().to(auth_handlers::logout)),
            )
            .service(
                web::resource("/auth/me")
                    .wrap(from_fn(require_bearer))
                    .route(web::get().to(auth_handlers::me)),
            )
            // Call campaign
            .service(
                web::resource("/call-status")
                    .wrap(from_fn(require_json_content_type))
                    .wrap(from_fn(require_bearer))
                    .route(web::post().to(call_handlers::update)),
            )
            // Admin dashboard
            .service(
                web::scope("/dashboard")
                    .wrap(from_fn(require_bearer))
                    .route("/stats", web::get().to(dashboard::overall))
                    .route("/zones", web::get().to(dashboard::zones))
                    .route("/members", web::get().to(dashboard::members))
                    .route("/role-stats", web::get().to(dashboard::role_stats))
                    .route("/call-stats", web::get().to(dashboard::call_stats))
                    .route(
                        "/messages/unregistered",
                        web::get().to(message_handlers::unregistered),
                    )
                    .route(
                        "/messages/incomplete-zones",
                        web::get().to(message_handlers::incomplete_zones),
                    ),
            ),
    );
}

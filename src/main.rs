use std::io;

use actix_web::{App, HttpServer, middleware, web};

use regdesk::auth::AdminAccount;
use regdesk::auth::rate_limit::RateLimiter;
use regdesk::auth::token::TokenStore;
use regdesk::config::Config;
use regdesk::handlers;
use regdesk::store::RowStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Read .env before the logger so RUST_LOG can live there too.
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Ok(path) = dotenv {
        log::info!("Loaded {}", path.display());
    }

    let config = Config::from_env().map_err(io::Error::other)?;

    let store = RowStore::connect(&config.backend)
        .await
        .map_err(io::Error::other)?;

    let admin = AdminAccount::new(&config.admin_username, &config.admin_password)
        .map_err(io::Error::other)?;
    let tokens = TokenStore::new(chrono::Duration::hours(config.token_ttl_hours));

    let store = web::Data::new(store);
    let admin = web::Data::new(admin);
    let tokens = web::Data::new(tokens);
    let limiter = web::Data::new(RateLimiter::default());

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(admin.clone())
            .app_data(tokens.clone())
            .app_data(limiter.clone())
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}

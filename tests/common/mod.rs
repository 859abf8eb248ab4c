//! Shared test infrastructure: a sample member sheet held in a memory store,
//! and an actix app wired the same way `main` wires it.
#![allow(dead_code)]

use std::sync::OnceLock;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use regdesk::auth::AdminAccount;
use regdesk::auth::rate_limit::RateLimiter;
use regdesk::auth::token::{AuthUser, TokenStore};
use regdesk::handlers;
use regdesk::store::{MemoryStore, Row, RowStore};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";

// ============================================================================
// SAMPLE SHEET
// ============================================================================

pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Columns: zone, name, mobile, participated, status, secretariat,
/// executive, fallback mobile, call status, call remarks.
///
/// - North: Asha (sec, pending), Ben (exe, registered), Chitra (on leave)
/// - South: Dev (exe, pending), Esha (sec, registered), Gita (sec, pending,
///   zone spelled in lower case)
/// - East: Farid (no role, pending)
pub fn sample_rows() -> Vec<Row> {
    vec![
        row(&["North", "Asha", "", "", "", "Yes", "", "", "", ""]),
        row(&["North", "Ben", "9000000001", "yes", "Success", "", "Yes"]),
        row(&["North", "Chitra", "", "", "Leave", "Yes", "Yes"]),
        row(&["South", "Dev", "", "", "", "", "Yes", "9000000003"]),
        row(&["South", "Esha", "9000000002", "no", "Success", "Yes", ""]),
        row(&["East", "Farid"]),
        row(&["south", "Gita", "", "", "", "Yes", "", "", "no_answer", ""]),
    ]
}

pub fn memory_store(rows: Vec<Row>) -> RowStore {
    RowStore::Memory(MemoryStore::new(rows))
}

/// Current rows of a memory-backed store.
pub async fn snapshot(store: &RowStore) -> Vec<Row> {
    match store {
        RowStore::Memory(memory) => memory.snapshot().await,
        _ => panic!("snapshot is only available for the memory store"),
    }
}

// ============================================================================
// APP SETUP
// ============================================================================

/// Hashing is slow in debug builds, so the admin account is built once.
pub fn admin_account() -> AdminAccount {
    static ADMIN: OnceLock<AdminAccount> = OnceLock::new();
    ADMIN
        .get_or_init(|| AdminAccount::new(ADMIN_USER, ADMIN_PASS).expect("hash admin password"))
        .clone()
}

pub struct TestState {
    pub store: web::Data<RowStore>,
    pub admin: web::Data<AdminAccount>,
    pub tokens: web::Data<TokenStore>,
    pub limiter: web::Data<RateLimiter>,
}

impl TestState {
    pub fn new(rows: Vec<Row>) -> Self {
        TestState {
            store: web::Data::new(memory_store(rows)),
            admin: web::Data::new(admin_account()),
            tokens: web::Data::new(TokenStore::new(chrono::Duration::hours(1))),
            limiter: web::Data::new(RateLimiter::default()),
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.store.clone())
            .app_data(self.admin.clone())
            .app_data(self.tokens.clone())
            .app_data(self.limiter.clone())
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    }

    /// A live bearer token for the admin user.
    pub fn token(&self) -> String {
        self.tokens.issue(AuthUser {
            username: ADMIN_USER.to_string(),
            role: AdminAccount::ROLE.to_string(),
        })
    }

    pub fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token()))
    }

    pub async fn rows(&self) -> Vec<Row> {
        snapshot(&self.store).await
    }
}

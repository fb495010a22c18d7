use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::web::handlers::{get_mobile_account, get_mobile_accounts, health_check, SharedBankData};

/// Router over an injected bank data service so tests can substitute a
/// double for the upstream.
pub fn create_router(service: SharedBankData) -> Router {
    Router::new()
        .route("/mobile/accounts", get(get_mobile_accounts))
        .route("/mobile/accounts/{account_number}", get(get_mobile_account))
        .route("/health", get(health_check))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

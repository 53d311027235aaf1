use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::db::UserStorage;
use crate::handlers::{admin, login, meta};
use crate::service::CredentialTable;

/// Local frontend origins; hosted deployments are matched by suffix below.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Clone)]
pub struct HuntState {
    pub storage: UserStorage,
    pub credentials: Arc<CredentialTable>,
}

impl HuntState {
    pub fn new(storage: UserStorage, credentials: Arc<CredentialTable>) -> Self {
        Self {
            storage,
            credentials,
        }
    }
}

pub fn hunt_router(state: HuntState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            origin.to_str().is_ok_and(origin_allowed)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .route("/", get(meta::root_handler))
        .route("/health", get(meta::health_handler))
        .route("/api/login", post(login::login_handler))
        .route("/api/admin/users", get(admin::list_users_handler))
        .route(
            "/api/admin/declare-winner",
            post(admin::declare_winner_handler),
        )
        .layer(cors)
        .with_state(state)
}

fn origin_allowed(origin: &str) -> bool {
    ALLOWED_ORIGINS.contains(&origin)
        || (origin.starts_with("https://")
            && (origin.ends_with(".vercel.app") || origin.ends_with(".railway.app")))
}

pub mod health;
pub mod users;

use axum::{routing::get, Router};

use crate::AppState;

/// Static dispatch table; shared by `main` and the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(users::welcome))
        .route("/health", get(health::health))
        .route(
            "/api/users",
            get(users::get_all_users).post(users::create_user),
        )
        .route(
            "/api/users/:id",
            get(users::get_user_by_id)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .fallback(users::route_not_found)
        .with_state(state)
}

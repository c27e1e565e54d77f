use axum::{Router, http::Uri};

use crate::{error::AppError, state::AppState};

pub mod catalog;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/favorite", favorites::router())
        .nest("/people", catalog::people_router())
        .nest("/planets", catalog::planets_router())
        .nest("/starships", catalog::starships_router())
}

/// Fallback for paths no router matched.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    extract::{AppJson, AppPath},
    dto::users::{CreateUserRequest, UserList},
    error::AppResult,
    models::User,
    response::{ApiResponse, Empty, Meta},
    routes::favorites::list_favorites,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/favorites", get(list_favorites))
        .route("/{id}", get(get_user).delete(delete_user))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List users with their favorites", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UserList>>> {
    let items = user_service::list_users(&state).await?;
    let total = items.len();
    Ok(Json(ApiResponse::list("Users", UserList { items }, total)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = user_service::get_user(&state, id).await?;
    Ok(Json(ApiResponse::success("User", user, None)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Invalid or duplicate username")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = user_service::create_user(&state, &payload.username).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "User created",
            user,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User and favorites deleted", body = ApiResponse<Empty>),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    user_service::delete_user(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "User deleted",
        Empty::default(),
        Some(Meta::empty()),
    )))
}

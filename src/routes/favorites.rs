use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};

use crate::{
    extract::{AppJson, AppPath, AppQuery},
    dto::favorites::{AddFavoriteRequest, FavoriteList, UsernameQuery},
    error::AppResult,
    models::{CatalogKind, Favorite, FavoriteTarget},
    response::{ApiResponse, Empty, Meta},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{kind}/{id}", post(add_favorite).delete(remove_favorite))
}

#[utoipa::path(
    get,
    path = "/api/users/favorites",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Favorites of the user", body = ApiResponse<FavoriteList>),
        (status = 400, description = "Username missing"),
        (status = 404, description = "User not found")
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UsernameQuery>,
) -> AppResult<Json<ApiResponse<FavoriteList>>> {
    let username = query.require()?;
    let items = favorite_service::list_favorites(&state, &username).await?;
    let total = items.len();
    Ok(Json(ApiResponse::list("OK", FavoriteList { items }, total)))
}

#[utoipa::path(
    post,
    path = "/api/favorite/{kind}/{id}",
    params(
        ("kind" = CatalogKind, Path, description = "Catalog kind: people, planet or starship"),
        ("id" = i32, Path, description = "Catalog entity ID")
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Favorite added", body = ApiResponse<Favorite>),
        (status = 400, description = "Favorite already exists or username missing"),
        (status = 404, description = "User or catalog entity not found")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    AppPath((kind, id)): AppPath<(CatalogKind, i32)>,
    AppJson(payload): AppJson<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Favorite>>)> {
    let username = payload.require()?;
    let favorite =
        favorite_service::add_favorite(&state, &username, FavoriteTarget::new(kind, id)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Favorite added",
            favorite,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/favorite/{kind}/{id}",
    params(
        ("kind" = CatalogKind, Path, description = "Catalog kind: people, planet or starship"),
        ("id" = i32, Path, description = "Catalog entity ID"),
        UsernameQuery
    ),
    responses(
        (status = 200, description = "Favorite removed", body = ApiResponse<Empty>),
        (status = 404, description = "User or favorite not found")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AppPath((kind, id)): AppPath<(CatalogKind, i32)>,
    AppQuery(query): AppQuery<UsernameQuery>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let username = query.require()?;
    favorite_service::remove_favorite(&state, &username, FavoriteTarget::new(kind, id)).await?;

    Ok(Json(ApiResponse::success(
        format!("Favorite {kind} removed"),
        Empty::default(),
        Some(Meta::empty()),
    )))
}

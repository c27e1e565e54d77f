use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    extract::AppPath,
    dto::catalog::{PersonList, PlanetList, StarshipList},
    error::AppResult,
    models::{Person, Planet, Starship},
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn people_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people))
        .route("/{id}", get(get_person))
}

pub fn planets_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets))
        .route("/{id}", get(get_planet))
}

pub fn starships_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_starships))
        .route("/{id}", get(get_starship))
}

#[utoipa::path(
    get,
    path = "/api/people",
    responses(
        (status = 200, description = "List people", body = ApiResponse<PersonList>)
    ),
    tag = "Catalog"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PersonList>>> {
    let items = catalog_service::list_people(&state).await?;
    let total = items.len();
    Ok(Json(ApiResponse::list("People", PersonList { items }, total)))
}

#[utoipa::path(
    get,
    path = "/api/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = ApiResponse<Person>),
        (status = 404, description = "Person not found")
    ),
    tag = "Catalog"
)]
pub async fn get_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<Person>>> {
    let person = catalog_service::get_person(&state, id).await?;
    Ok(Json(ApiResponse::success("Person", person, None)))
}

#[utoipa::path(
    get,
    path = "/api/planets",
    responses(
        (status = 200, description = "List planets", body = ApiResponse<PlanetList>)
    ),
    tag = "Catalog"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PlanetList>>> {
    let items = catalog_service::list_planets(&state).await?;
    let total = items.len();
    Ok(Json(ApiResponse::list("Planets", PlanetList { items }, total)))
}

#[utoipa::path(
    get,
    path = "/api/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = ApiResponse<Planet>),
        (status = 404, description = "Planet not found")
    ),
    tag = "Catalog"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let planet = catalog_service::get_planet(&state, id).await?;
    Ok(Json(ApiResponse::success("Planet", planet, None)))
}

#[utoipa::path(
    get,
    path = "/api/starships",
    responses(
        (status = 200, description = "List starships", body = ApiResponse<StarshipList>)
    ),
    tag = "Catalog"
)]
pub async fn list_starships(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<StarshipList>>> {
    let items = catalog_service::list_starships(&state).await?;
    let total = items.len();
    Ok(Json(ApiResponse::list("Starships", StarshipList { items }, total)))
}

#[utoipa::path(
    get,
    path = "/api/starships/{id}",
    params(
        ("id" = i32, Path, description = "Starship ID")
    ),
    responses(
        (status = 200, description = "Get starship", body = ApiResponse<Starship>),
        (status = 404, description = "Starship not found")
    ),
    tag = "Catalog"
)]
pub async fn get_starship(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<Starship>>> {
    let starship = catalog_service::get_starship(&state, id).await?;
    Ok(Json(ApiResponse::success("Starship", starship, None)))
}

use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        catalog::{PersonList, PlanetList, StarshipList},
        favorites::{AddFavoriteRequest, FavoriteList, UsernameQuery},
        users::{CreateUserRequest, UserList},
    },
    models::{CatalogEntity, CatalogKind, Favorite, Person, Planet, Starship, User},
    response::{ApiResponse, Meta},
    routes::{catalog, favorites, health, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::delete_user,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        catalog::list_people,
        catalog::get_person,
        catalog::list_planets,
        catalog::get_planet,
        catalog::list_starships,
        catalog::get_starship
    ),
    components(
        schemas(
            User,
            Person,
            Planet,
            Starship,
            CatalogEntity,
            CatalogKind,
            Favorite,
            AddFavoriteRequest,
            UsernameQuery,
            CreateUserRequest,
            UserList,
            FavoriteList,
            PersonList,
            PlanetList,
            StarshipList,
            Meta,
            ApiResponse<User>,
            ApiResponse<Favorite>,
            ApiResponse<Person>,
            ApiResponse<Planet>,
            ApiResponse<Starship>,
            ApiResponse<UserList>,
            ApiResponse<FavoriteList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
        (name = "Catalog", description = "People, planets and starships"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

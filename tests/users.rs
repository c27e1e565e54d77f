mod common;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use starwars_favorites_api::{
    entity::{Favorites, Users, favorites},
    error::AppError,
    models::FavoriteTarget,
    services::{favorite_service, user_service},
};

#[tokio::test]
async fn deleting_a_user_removes_its_favorites() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let luke = user_service::create_user(&state, "luke").await?;
    user_service::create_user(&state, "leia").await?;
    let tatooine = common::insert_planet(&state, "Tatooine").await?;
    let xwing = common::insert_starship(&state, "X-wing").await?;

    favorite_service::add_favorite(&state, "luke", FavoriteTarget::Planet(tatooine.id)).await?;
    favorite_service::add_favorite(&state, "luke", FavoriteTarget::Starship(xwing.id)).await?;
    favorite_service::add_favorite(&state, "leia", FavoriteTarget::Planet(tatooine.id)).await?;

    user_service::delete_user(&state, luke.id).await?;

    let err = favorite_service::list_favorites(&state, "luke").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let orphans = Favorites::find()
        .filter(favorites::Column::UserId.eq(luke.id))
        .count(&state.orm)
        .await?;
    assert_eq!(orphans, 0);

    assert_eq!(favorite_service::list_favorites(&state, "leia").await?.len(), 1);

    let err = user_service::delete_user(&state, luke.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn usernames_are_unique_and_required() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = user_service::create_user(&state, "  vader ").await?;
    assert_eq!(user.username, "vader");
    assert!(user.is_active);

    let err = user_service::create_user(&state, "vader").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref msg) if msg == "Username already exists"));

    let err = user_service::create_user(&state, "").await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = user_service::create_user(&state, &"x".repeat(81)).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn users_are_listed_with_their_favorites() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let luke = user_service::create_user(&state, "luke").await?;
    user_service::create_user(&state, "leia").await?;
    let hoth = common::insert_planet(&state, "Hoth").await?;
    favorite_service::add_favorite(&state, "luke", FavoriteTarget::Planet(hoth.id)).await?;

    let users = user_service::list_users(&state).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "luke");
    assert_eq!(users[0].favorites.len(), 1);
    assert!(users[1].favorites.is_empty());

    let fetched = user_service::get_user(&state, luke.id).await?;
    assert_eq!(fetched.favorites[0].planet.as_ref().map(|p| p.name.as_str()), Some("Hoth"));

    let err = user_service::get_user(&state, 4242).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn foreign_key_cascades_raw_user_deletes() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let luke = user_service::create_user(&state, "luke").await?;
    let tatooine = common::insert_planet(&state, "Tatooine").await?;
    let leia = common::insert_person(&state, "Leia Organa").await?;
    favorite_service::add_favorite(&state, "luke", FavoriteTarget::Planet(tatooine.id)).await?;
    favorite_service::add_favorite(&state, "luke", FavoriteTarget::Person(leia.id)).await?;

    let deleted = Users::delete_by_id(luke.id).exec(&state.orm).await?;
    assert_eq!(deleted.rows_affected, 1);

    let orphans = Favorites::find()
        .filter(favorites::Column::UserId.eq(luke.id))
        .count(&state.orm)
        .await?;
    assert_eq!(orphans, 0);
    Ok(())
}

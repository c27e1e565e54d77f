use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, sea_query::SimpleExpr,
};

use crate::{
    entity::{Favorites, favorites},
    error::{AppError, AppResult},
    models::{Favorite, FavoriteTarget},
    services::{catalog_service, user_service},
    state::AppState,
};

const DUPLICATE_FAVORITE: &str = "Favorite already exists";
const MISSING_FAVORITE: &str = "Favorite not found";

/// Mark `target` as a favorite of `username`.
///
/// The lookup before the insert only exists to give a friendly error; the
/// unique indexes on the favorite table decide the outcome when two requests
/// race, and their violation is reported as [`AppError::Conflict`] too.
pub async fn add_favorite(
    state: &AppState,
    username: &str,
    target: FavoriteTarget,
) -> AppResult<Favorite> {
    let user = user_service::find_by_username(&state.orm, username).await?;
    let entity = catalog_service::get_by_id(&state.orm, target.kind(), target.id()).await?;

    if find_row(&state.orm, user.id, target).await?.is_some() {
        return Err(AppError::Conflict(DUPLICATE_FAVORITE.into()));
    }

    let (person_id, planet_id, starship_id) = target.columns();
    let row = favorites::ActiveModel {
        id: NotSet,
        user_id: Set(user.id),
        person_id: Set(person_id),
        planet_id: Set(planet_id),
        starship_id: Set(starship_id),
        created_at: Set(Utc::now()),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| {
        AppError::from_write(
            err,
            || AppError::Conflict(DUPLICATE_FAVORITE.into()),
            || AppError::not_found(target.kind().not_found_message()),
        )
    })?;

    tracing::info!(
        favorite_id = row.id,
        user_id = user.id,
        kind = %target.kind(),
        target_id = target.id(),
        "favorite added"
    );

    Ok(Favorite::resolved(&row, entity))
}

/// Remove the favorite `username` holds on `target`. Repeating the call fails
/// with [`AppError::NotFound`].
pub async fn remove_favorite(
    state: &AppState,
    username: &str,
    target: FavoriteTarget,
) -> AppResult<()> {
    let user = user_service::find_by_username(&state.orm, username).await?;

    let result = Favorites::delete_many()
        .filter(favorites::Column::UserId.eq(user.id))
        .filter(target_filter(target))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(MISSING_FAVORITE));
    }

    tracing::info!(
        user_id = user.id,
        kind = %target.kind(),
        target_id = target.id(),
        "favorite removed"
    );
    Ok(())
}

pub async fn list_favorites(state: &AppState, username: &str) -> AppResult<Vec<Favorite>> {
    let user = user_service::find_by_username(&state.orm, username).await?;
    let rows = Favorites::find()
        .filter(favorites::Column::UserId.eq(user.id))
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;
    resolve_rows(&state.orm, rows).await
}

/// Attach catalog payloads to favorite rows, keeping row order.
pub async fn resolve_rows<C: ConnectionTrait>(
    db: &C,
    rows: Vec<favorites::Model>,
) -> AppResult<Vec<Favorite>> {
    let targets: Vec<FavoriteTarget> = rows.iter().filter_map(favorites::Model::target).collect();
    let resolved = catalog_service::resolve_targets(db, &targets).await?;

    let favorites = rows
        .iter()
        .filter_map(|row| {
            let entity = row.target().and_then(|target| resolved.get(target));
            if entity.is_none() {
                tracing::warn!(favorite_id = row.id, "favorite has no resolvable target");
            }
            entity.map(|entity| Favorite::resolved(row, entity))
        })
        .collect();
    Ok(favorites)
}

async fn find_row<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<Option<favorites::Model>> {
    let row = Favorites::find()
        .filter(favorites::Column::UserId.eq(user_id))
        .filter(target_filter(target))
        .one(db)
        .await?;
    Ok(row)
}

fn target_filter(target: FavoriteTarget) -> SimpleExpr {
    match target {
        FavoriteTarget::Person(id) => favorites::Column::PersonId.eq(id),
        FavoriteTarget::Planet(id) => favorites::Column::PlanetId.eq(id),
        FavoriteTarget::Starship(id) => favorites::Column::StarshipId.eq(id),
    }
}

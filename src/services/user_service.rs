use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    entity::{Favorites, Users, favorites, users},
    error::{AppError, AppResult},
    models::User,
    services::favorite_service,
    state::AppState,
};

const USER_NOT_FOUND: &str = "User not found";
const DUPLICATE_USERNAME: &str = "Username already exists";
const MAX_USERNAME_LEN: usize = 80;

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> AppResult<users::Model> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".into()));
    }
    Users::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
}

/// All users in id order, each with its favorites resolved.
pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(users::Column::Id)
        .all(&state.orm)
        .await?;
    let rows = Favorites::find()
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;

    let mut by_user: HashMap<i32, Vec<_>> = HashMap::new();
    for favorite in favorite_service::resolve_rows(&state.orm, rows).await? {
        by_user.entry(favorite.user_id).or_default().push(favorite);
    }

    let items = users
        .into_iter()
        .map(|user| {
            let favorites = by_user.remove(&user.id).unwrap_or_default();
            User::with_favorites(user, favorites)
        })
        .collect();
    Ok(items)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;
    let rows = Favorites::find()
        .filter(favorites::Column::UserId.eq(user.id))
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;
    let favorites = favorite_service::resolve_rows(&state.orm, rows).await?;
    Ok(User::with_favorites(user, favorites))
}

pub async fn create_user(state: &AppState, username: &str) -> AppResult<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".into()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }

    let existing = Users::find()
        .filter(users::Column::Username.eq(username))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(DUPLICATE_USERNAME.into()));
    }

    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        is_active: Set(true),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| {
        AppError::from_write(
            err,
            || AppError::Conflict(DUPLICATE_USERNAME.into()),
            || AppError::Internal(anyhow::anyhow!("unexpected foreign key on user insert")),
        )
    })?;

    tracing::info!(user_id = user.id, username = %user.username, "user created");
    Ok(User::with_favorites(user, Vec::new()))
}

/// Delete a user together with every favorite it owns.
pub async fn delete_user(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    let user = Users::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

    let removed = Favorites::delete_many()
        .filter(favorites::Column::UserId.eq(user.id))
        .exec(&txn)
        .await?;
    Users::delete_by_id(user.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        user_id = user.id,
        favorites = removed.rows_affected,
        "user deleted"
    );
    Ok(())
}

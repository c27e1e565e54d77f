use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::{People, Planets, Starships, people, planets, starships},
    error::{AppError, AppResult},
    models::{CatalogEntity, CatalogKind, FavoriteTarget, Person, Planet, Starship},
    state::AppState,
};

pub async fn list_people(state: &AppState) -> AppResult<Vec<Person>> {
    let items = People::find()
        .order_by_asc(people::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Person::from)
        .collect();
    Ok(items)
}

pub async fn get_person(state: &AppState, id: i32) -> AppResult<Person> {
    People::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Person::from)
        .ok_or_else(|| AppError::not_found(CatalogKind::Person.not_found_message()))
}

pub async fn list_planets(state: &AppState) -> AppResult<Vec<Planet>> {
    let items = Planets::find()
        .order_by_asc(planets::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(items)
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<Planet> {
    Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Planet::from)
        .ok_or_else(|| AppError::not_found(CatalogKind::Planet.not_found_message()))
}

pub async fn list_starships(state: &AppState) -> AppResult<Vec<Starship>> {
    let items = Starships::find()
        .order_by_asc(starships::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Starship::from)
        .collect();
    Ok(items)
}

pub async fn get_starship(state: &AppState, id: i32) -> AppResult<Starship> {
    Starships::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Starship::from)
        .ok_or_else(|| AppError::not_found(CatalogKind::Starship.not_found_message()))
}

/// Fetch any catalog entity by kind and id.
pub async fn get_by_id<C: ConnectionTrait>(
    db: &C,
    kind: CatalogKind,
    id: i32,
) -> AppResult<CatalogEntity> {
    let entity = match kind {
        CatalogKind::Person => People::find_by_id(id)
            .one(db)
            .await?
            .map(|m| CatalogEntity::Person(m.into())),
        CatalogKind::Planet => Planets::find_by_id(id)
            .one(db)
            .await?
            .map(|m| CatalogEntity::Planet(m.into())),
        CatalogKind::Starship => Starships::find_by_id(id)
            .one(db)
            .await?
            .map(|m| CatalogEntity::Starship(m.into())),
    };
    entity.ok_or_else(|| AppError::not_found(kind.not_found_message()))
}

/// Every entity of one kind, in id order.
pub async fn list_all(state: &AppState, kind: CatalogKind) -> AppResult<Vec<CatalogEntity>> {
    let items = match kind {
        CatalogKind::Person => list_people(state)
            .await?
            .into_iter()
            .map(CatalogEntity::Person)
            .collect(),
        CatalogKind::Planet => list_planets(state)
            .await?
            .into_iter()
            .map(CatalogEntity::Planet)
            .collect(),
        CatalogKind::Starship => list_starships(state)
            .await?
            .into_iter()
            .map(CatalogEntity::Starship)
            .collect(),
    };
    Ok(items)
}

/// Catalog rows loaded for a batch of favorite targets, one query per kind.
#[derive(Debug, Default)]
pub struct ResolvedTargets {
    people: HashMap<i32, Person>,
    planets: HashMap<i32, Planet>,
    starships: HashMap<i32, Starship>,
}

impl ResolvedTargets {
    pub fn get(&self, target: FavoriteTarget) -> Option<CatalogEntity> {
        match target {
            FavoriteTarget::Person(id) => self.people.get(&id).cloned().map(CatalogEntity::Person),
            FavoriteTarget::Planet(id) => self.planets.get(&id).cloned().map(CatalogEntity::Planet),
            FavoriteTarget::Starship(id) => {
                self.starships.get(&id).cloned().map(CatalogEntity::Starship)
            }
        }
    }
}

pub async fn resolve_targets<C: ConnectionTrait>(
    db: &C,
    targets: &[FavoriteTarget],
) -> AppResult<ResolvedTargets> {
    let mut person_ids = Vec::new();
    let mut planet_ids = Vec::new();
    let mut starship_ids = Vec::new();
    for target in targets {
        match *target {
            FavoriteTarget::Person(id) => person_ids.push(id),
            FavoriteTarget::Planet(id) => planet_ids.push(id),
            FavoriteTarget::Starship(id) => starship_ids.push(id),
        }
    }

    let mut resolved = ResolvedTargets::default();
    if !person_ids.is_empty() {
        resolved.people = People::find()
            .filter(people::Column::Id.is_in(person_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, Person::from(m)))
            .collect();
    }
    if !planet_ids.is_empty() {
        resolved.planets = Planets::find()
            .filter(planets::Column::Id.is_in(planet_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, Planet::from(m)))
            .collect();
    }
    if !starship_ids.is_empty() {
        resolved.starships = Starships::find()
            .filter(starships::Column::Id.is_in(starship_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, Starship::from(m)))
            .collect();
    }

    tracing::debug!(
        people = resolved.people.len(),
        planets = resolved.planets.len(),
        starships = resolved.starships.len(),
        "resolved favorite targets"
    );
    Ok(resolved)
}

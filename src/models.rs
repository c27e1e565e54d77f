use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{favorites, people, planets, starships, users};

/// Which catalog table a favorite points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[serde(alias = "people")]
    Person,
    #[serde(alias = "planets")]
    Planet,
    #[serde(alias = "starships")]
    Starship,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Person => "person",
            CatalogKind::Planet => "planet",
            CatalogKind::Starship => "starship",
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            CatalogKind::Person => "Person not found",
            CatalogKind::Planet => "Planet not found",
            CatalogKind::Starship => "Starship not found",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one catalog entity a favorite refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
    Starship(i32),
}

impl FavoriteTarget {
    pub fn new(kind: CatalogKind, id: i32) -> Self {
        match kind {
            CatalogKind::Person => FavoriteTarget::Person(id),
            CatalogKind::Planet => FavoriteTarget::Planet(id),
            CatalogKind::Starship => FavoriteTarget::Starship(id),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        match self {
            FavoriteTarget::Person(_) => CatalogKind::Person,
            FavoriteTarget::Planet(_) => CatalogKind::Planet,
            FavoriteTarget::Starship(_) => CatalogKind::Starship,
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            FavoriteTarget::Person(id) | FavoriteTarget::Planet(id) | FavoriteTarget::Starship(id) => {
                id
            }
        }
    }

    /// Storage layout: `(person_id, planet_id, starship_id)`.
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            FavoriteTarget::Person(id) => (Some(id), None, None),
            FavoriteTarget::Planet(id) => (None, Some(id), None),
            FavoriteTarget::Starship(id) => (None, None, Some(id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: f64,
    pub mass: f64,
    pub skin_color: String,
    pub homeworld: String,
}

impl From<people::Model> for Person {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            birth_year: model.birth_year,
            eye_color: model.eye_color,
            gender: model.gender,
            hair_color: model.hair_color,
            height: model.height,
            mass: model.mass,
            skin_color: model.skin_color,
            homeworld: model.homeworld,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub diameter: f64,
    pub gravity: String,
    pub orbital_period: f64,
    pub population: f64,
    pub rotation_period: f64,
    pub surface_water: f64,
    pub terrain: String,
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            diameter: model.diameter,
            gravity: model.gravity,
            orbital_period: model.orbital_period,
            population: model.population,
            rotation_period: model.rotation_period,
            surface_water: model.surface_water,
            terrain: model.terrain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Starship {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub manufacturer: String,
    pub cost_in_credits: f64,
    pub length: f64,
    pub crew: String,
    pub passengers: String,
    pub max_atmosphering_speed: String,
    pub cargo_capacity: f64,
    pub consumables: String,
}

impl From<starships::Model> for Starship {
    fn from(model: starships::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model,
            starship_class: model.starship_class,
            manufacturer: model.manufacturer,
            cost_in_credits: model.cost_in_credits,
            length: model.length,
            crew: model.crew,
            passengers: model.passengers,
            max_atmosphering_speed: model.max_atmosphering_speed,
            cargo_capacity: model.cargo_capacity,
            consumables: model.consumables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CatalogEntity {
    Person(Person),
    Planet(Planet),
    Starship(Starship),
}

impl CatalogEntity {
    pub fn id(&self) -> i32 {
        match self {
            CatalogEntity::Person(p) => p.id,
            CatalogEntity::Planet(p) => p.id,
            CatalogEntity::Starship(s) => s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogEntity::Person(p) => &p.name,
            CatalogEntity::Planet(p) => &p.name,
            CatalogEntity::Starship(s) => &s.name,
        }
    }
}

/// A favorite with its target resolved; the two unused slots serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub person: Option<Person>,
    pub planet: Option<Planet>,
    pub starship: Option<Starship>,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn resolved(row: &favorites::Model, entity: CatalogEntity) -> Self {
        let mut favorite = Self {
            id: row.id,
            user_id: row.user_id,
            person: None,
            planet: None,
            starship: None,
            created_at: row.created_at,
        };
        match entity {
            CatalogEntity::Person(p) => favorite.person = Some(p),
            CatalogEntity::Planet(p) => favorite.planet = Some(p),
            CatalogEntity::Starship(s) => favorite.starship = Some(s),
        }
        favorite
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub is_active: bool,
    pub favorites: Vec<Favorite>,
}

impl User {
    pub fn with_favorites(model: users::Model, favorites: Vec<Favorite>) -> Self {
        Self {
            id: model.id,
            username: model.username,
            is_active: model.is_active,
            favorites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_columns_set_exactly_one_slot() {
        assert_eq!(FavoriteTarget::Person(3).columns(), (Some(3), None, None));
        assert_eq!(FavoriteTarget::Planet(1).columns(), (None, Some(1), None));
        assert_eq!(FavoriteTarget::Starship(7).columns(), (None, None, Some(7)));
    }

    #[test]
    fn kind_round_trips_through_target() {
        for kind in [CatalogKind::Person, CatalogKind::Planet, CatalogKind::Starship] {
            let target = FavoriteTarget::new(kind, 42);
            assert_eq!(target.kind(), kind);
            assert_eq!(target.id(), 42);
        }
    }

    #[test]
    fn kind_accepts_plural_path_segments() {
        let kind: CatalogKind = serde_json::from_str("\"people\"").unwrap();
        assert_eq!(kind, CatalogKind::Person);
        let kind: CatalogKind = serde_json::from_str("\"planets\"").unwrap();
        assert_eq!(kind, CatalogKind::Planet);
        let kind: CatalogKind = serde_json::from_str("\"starship\"").unwrap();
        assert_eq!(kind, CatalogKind::Starship);
    }
}

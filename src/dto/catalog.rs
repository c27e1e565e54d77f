use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Person, Planet, Starship};

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PersonList {
    #[schema(value_type = Vec<Person>)]
    pub items: Vec<Person>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PlanetList {
    #[schema(value_type = Vec<Planet>)]
    pub items: Vec<Planet>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct StarshipList {
    #[schema(value_type = Vec<Starship>)]
    pub items: Vec<Starship>,
}

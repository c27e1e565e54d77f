#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use starwars_favorites_api::{
    db::{create_orm_conn, run_migrations},
    entity::{people, planets, starships},
    state::AppState,
};

/// Fresh in-memory database with every migration applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn insert_person(state: &AppState, name: &str) -> anyhow::Result<people::Model> {
    let person = people::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        birth_year: Set("19BBY".into()),
        eye_color: Set("blue".into()),
        gender: Set("male".into()),
        hair_color: Set("blond".into()),
        height: Set(172.0),
        mass: Set(77.0),
        skin_color: Set("fair".into()),
        homeworld: Set("https://www.swapi.tech/api/planets/1".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(person)
}

pub async fn insert_planet(state: &AppState, name: &str) -> anyhow::Result<planets::Model> {
    let planet = planets::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        climate: Set("arid".into()),
        diameter: Set(10465.0),
        gravity: Set("1 standard".into()),
        orbital_period: Set(304.0),
        population: Set(200000.0),
        rotation_period: Set(23.0),
        surface_water: Set(1.0),
        terrain: Set("desert".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(planet)
}

pub async fn insert_starship(state: &AppState, name: &str) -> anyhow::Result<starships::Model> {
    let starship = starships::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        model: Set("T-65 X-wing".into()),
        starship_class: Set("Starfighter".into()),
        manufacturer: Set("Incom Corporation".into()),
        cost_in_credits: Set(149999.0),
        length: Set(12.5),
        crew: Set("1".into()),
        passengers: Set("0".into()),
        max_atmosphering_speed: Set("1050".into()),
        cargo_capacity: Set(110.0),
        consumables: Set("1 week".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(starship)
}

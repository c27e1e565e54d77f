use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};
use starwars_favorites_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Favorites, People, Planets, Starships, Users, people, planets, starships},
    models::FavoriteTarget,
    services::{favorite_service, user_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    clear(&orm).await?;
    let people = seed_people(&orm).await?;
    let planets = seed_planets(&orm).await?;
    let starships = seed_starships(&orm).await?;
    println!(
        "Seeded {} people, {} planets, {} starships",
        people.len(),
        planets.len(),
        starships.len()
    );

    let state = AppState { orm };
    let favorites = [
        (
            "luke_skywalker",
            vec![
                FavoriteTarget::Planet(planets[0]),
                FavoriteTarget::Person(people[1]),
                FavoriteTarget::Starship(starships[0]),
            ],
        ),
        (
            "leia_organa",
            vec![
                FavoriteTarget::Planet(planets[1]),
                FavoriteTarget::Starship(starships[2]),
            ],
        ),
        (
            "vader",
            vec![
                FavoriteTarget::Person(people[0]),
                FavoriteTarget::Starship(starships[1]),
            ],
        ),
    ];

    for (username, targets) in favorites {
        let user = user_service::create_user(&state, username).await?;
        for target in targets {
            favorite_service::add_favorite(&state, &user.username, target).await?;
        }
        println!("Ensured user {username} with favorites");
    }

    println!("Seed completed");
    Ok(())
}

async fn clear(db: &DatabaseConnection) -> anyhow::Result<()> {
    Favorites::delete_many().exec(db).await?;
    Users::delete_many().exec(db).await?;
    People::delete_many().exec(db).await?;
    Planets::delete_many().exec(db).await?;
    Starships::delete_many().exec(db).await?;
    Ok(())
}

async fn seed_people(db: &DatabaseConnection) -> anyhow::Result<Vec<i32>> {
    let people = vec![
        ("Luke Skywalker", "19BBY", "blue", "male", "blond", 172.0, 77.0, "fair", 1),
        ("Leia Organa", "19BBY", "brown", "female", "brown", 150.0, 49.0, "light", 2),
        ("Darth Vader", "41.9BBY", "yellow", "male", "none", 202.0, 136.0, "white", 1),
    ];

    let mut ids = Vec::with_capacity(people.len());
    for (name, birth_year, eye_color, gender, hair_color, height, mass, skin_color, world) in people
    {
        let person = people::ActiveModel {
            id: NotSet,
            name: Set(name.into()),
            birth_year: Set(birth_year.into()),
            eye_color: Set(eye_color.into()),
            gender: Set(gender.into()),
            hair_color: Set(hair_color.into()),
            height: Set(height),
            mass: Set(mass),
            skin_color: Set(skin_color.into()),
            homeworld: Set(format!("https://www.swapi.tech/api/planets/{world}")),
        }
        .insert(db)
        .await?;
        ids.push(person.id);
    }
    Ok(ids)
}

async fn seed_planets(db: &DatabaseConnection) -> anyhow::Result<Vec<i32>> {
    let planets = vec![
        ("Tatooine", "arid", 10465.0, "1 standard", 304.0, 200000.0, 23.0, 1.0, "desert"),
        (
            "Alderaan",
            "temperate",
            12500.0,
            "1 standard",
            364.0,
            2000000000.0,
            24.0,
            40.0,
            "grasslands, mountains",
        ),
        (
            "Hoth",
            "frozen",
            7200.0,
            "1.1 standard",
            549.0,
            0.0,
            23.0,
            100.0,
            "tundra, ice caves, mountain ranges",
        ),
    ];

    let mut ids = Vec::with_capacity(planets.len());
    for (name, climate, diameter, gravity, orbital, population, rotation, water, terrain) in planets
    {
        let planet = planets::ActiveModel {
            id: NotSet,
            name: Set(name.into()),
            climate: Set(climate.into()),
            diameter: Set(diameter),
            gravity: Set(gravity.into()),
            orbital_period: Set(orbital),
            population: Set(population),
            rotation_period: Set(rotation),
            surface_water: Set(water),
            terrain: Set(terrain.into()),
        }
        .insert(db)
        .await?;
        ids.push(planet.id);
    }
    Ok(ids)
}

struct StarshipSeed {
    name: &'static str,
    model: &'static str,
    class: &'static str,
    manufacturer: &'static str,
    cost: f64,
    length: f64,
    crew: &'static str,
    passengers: &'static str,
    speed: &'static str,
    cargo: f64,
    consumables: &'static str,
}

async fn seed_starships(db: &DatabaseConnection) -> anyhow::Result<Vec<i32>> {
    let starships = [
        StarshipSeed {
            name: "X-wing",
            model: "T-65 X-wing",
            class: "Starfighter",
            manufacturer: "Incom Corporation",
            cost: 149999.0,
            length: 12.5,
            crew: "1",
            passengers: "0",
            speed: "1050",
            cargo: 110.0,
            consumables: "1 week",
        },
        StarshipSeed {
            name: "TIE Advanced x1",
            model: "Twin Ion Engine Advanced x1",
            class: "Starfighter",
            manufacturer: "Sienar Fleet Systems",
            cost: 0.0,
            length: 9.2,
            crew: "1",
            passengers: "0",
            speed: "1200",
            cargo: 150.0,
            consumables: "5 days",
        },
        StarshipSeed {
            name: "Millennium Falcon",
            model: "YT-1300 light freighter",
            class: "Light freighter",
            manufacturer: "Corellian Engineering Corporation",
            cost: 100000.0,
            length: 34.37,
            crew: "4",
            passengers: "6",
            speed: "1050",
            cargo: 100000.0,
            consumables: "2 months",
        },
    ];

    let mut ids = Vec::with_capacity(starships.len());
    for seed in starships {
        let starship = starships::ActiveModel {
            id: NotSet,
            name: Set(seed.name.into()),
            model: Set(seed.model.into()),
            starship_class: Set(seed.class.into()),
            manufacturer: Set(seed.manufacturer.into()),
            cost_in_credits: Set(seed.cost),
            length: Set(seed.length),
            crew: Set(seed.crew.into()),
            passengers: Set(seed.passengers.into()),
            max_atmosphering_speed: Set(seed.speed.into()),
            cargo_capacity: Set(seed.cargo),
            consumables: Set(seed.consumables.into()),
        }
        .insert(db)
        .await?;
        ids.push(starship.id);
    }
    Ok(ids)
}

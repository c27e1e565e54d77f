use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_len(Person::Name, 100))
                    .col(string_len(Person::BirthYear, 20))
                    .col(string_len(Person::EyeColor, 50))
                    .col(string_len(Person::Gender, 20))
                    .col(string_len(Person::HairColor, 50))
                    .col(double(Person::Height))
                    .col(double(Person::Mass))
                    .col(string_len(Person::SkinColor, 50))
                    .col(string_len(Person::Homeworld, 200))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 100))
                    .col(string_len(Planet::Climate, 100))
                    .col(double(Planet::Diameter))
                    .col(string_len(Planet::Gravity, 20))
                    .col(double(Planet::OrbitalPeriod))
                    .col(double(Planet::Population))
                    .col(double(Planet::RotationPeriod))
                    .col(double(Planet::SurfaceWater))
                    .col(string_len(Planet::Terrain, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string_len(Starship::Name, 100))
                    .col(string_len(Starship::Model, 100))
                    .col(string_len(Starship::StarshipClass, 100))
                    .col(string_len(Starship::Manufacturer, 200))
                    .col(double(Starship::CostInCredits))
                    .col(double(Starship::Length))
                    .col(string_len(Starship::Crew, 50))
                    .col(string_len(Starship::Passengers, 50))
                    .col(string_len(Starship::MaxAtmospheringSpeed, 50))
                    .col(double(Starship::CargoCapacity))
                    .col(string_len(Starship::Consumables, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Name,
    BirthYear,
    EyeColor,
    Gender,
    HairColor,
    Height,
    Mass,
    SkinColor,
    Homeworld,
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Climate,
    Diameter,
    Gravity,
    OrbitalPeriod,
    Population,
    RotationPeriod,
    SurfaceWater,
    Terrain,
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    Name,
    Model,
    StarshipClass,
    Manufacturer,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    CargoCapacity,
    Consumables,
}

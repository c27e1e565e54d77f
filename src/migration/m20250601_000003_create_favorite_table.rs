use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_catalog_tables::{Person, Planet, Starship};
use super::m20250601_000002_create_user_table::User;

static UQ_USER_PERSON: &str = "uq_user_person";
static UQ_USER_PLANET: &str = "uq_user_planet";
static UQ_USER_STARSHIP: &str = "uq_user_starship";

/// A favorite must point at exactly one catalog row.
const SINGLE_TARGET_CHECK: &str = "(CASE WHEN person_id IS NULL THEN 0 ELSE 1 END \
     + CASE WHEN planet_id IS NULL THEN 0 ELSE 1 END \
     + CASE WHEN starship_id IS NULL THEN 0 ELSE 1 END) = 1";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::PersonId))
                    .col(integer_null(Favorite::PlanetId))
                    .col(integer_null(Favorite::StarshipId))
                    .col(timestamp_with_time_zone(Favorite::CreatedAt))
                    .check(Expr::cust(SINGLE_TARGET_CHECK))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user")
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_person")
                            .from(Favorite::Table, Favorite::PersonId)
                            .to(Person::Table, Person::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet")
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_starship")
                            .from(Favorite::Table, Favorite::StarshipId)
                            .to(Starship::Table, Starship::Id),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, target) in [
            (UQ_USER_PERSON, Favorite::PersonId),
            (UQ_USER_PLANET, Favorite::PlanetId),
            (UQ_USER_STARSHIP, Favorite::StarshipId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Favorite::Table)
                        .col(Favorite::UserId)
                        .col(target)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [UQ_USER_PERSON, UQ_USER_PLANET, UQ_USER_STARSHIP] {
            manager
                .drop_index(Index::drop().name(name).table(Favorite::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    PersonId,
    PlanetId,
    StarshipId,
    CreatedAt,
}

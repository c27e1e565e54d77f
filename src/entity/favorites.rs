use sea_orm::entity::prelude::*;

use crate::models::FavoriteTarget;

/// Storage row for a favorite. Exactly one of the three target columns is
/// set; [`Model::target`] turns them back into a [`FavoriteTarget`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub person_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub starship_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

impl Model {
    pub fn target(&self) -> Option<FavoriteTarget> {
        match (self.person_id, self.planet_id, self.starship_id) {
            (Some(id), None, None) => Some(FavoriteTarget::Person(id)),
            (None, Some(id), None) => Some(FavoriteTarget::Planet(id)),
            (None, None, Some(id)) => Some(FavoriteTarget::Starship(id)),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PersonId",
        to = "super::people::Column::Id"
    )]
    Person,
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetId",
        to = "super::planets::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::starships::Entity",
        from = "Column::StarshipId",
        to = "super::starships::Column::Id"
    )]
    Starship,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::starships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

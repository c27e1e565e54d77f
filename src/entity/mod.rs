pub mod favorites;
pub mod people;
pub mod planets;
pub mod starships;
pub mod users;

pub use favorites::Entity as Favorites;
pub use people::Entity as People;
pub use planets::Entity as Planets;
pub use starships::Entity as Starships;
pub use users::Entity as Users;

pub use super::reservations::Entity as Reservations;
pub use super::users::Entity as Users;

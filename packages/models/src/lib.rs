pub mod prelude;
pub mod reservations;
pub mod users;

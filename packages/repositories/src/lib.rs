pub mod database_repo;
pub mod error;
pub mod postgres;
pub mod reservation;
pub mod testing;

pub use database_repo::{DatabaseRepo, MockDatabaseRepo};
pub use error::RepoError;
pub use postgres::PostgresDbRepo;
pub use reservation::NewReservation;
pub use testing::TestingDbRepo;

#[cfg(test)]
mod test_helpers;

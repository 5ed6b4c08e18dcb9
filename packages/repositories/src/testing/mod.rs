use crate::database_repo::DatabaseRepo;
use crate::error::RepoError;
use crate::reservation::NewReservation;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory repository for tests and for running the site without a database.
pub struct TestingDbRepo {
    has_users: bool,
    reservations: Mutex<Vec<NewReservation>>,
}

impl Default for TestingDbRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestingDbRepo {
    pub fn new() -> Self {
        TestingDbRepo {
            has_users: true,
            reservations: Mutex::new(Vec::new()),
        }
    }

    pub fn with_users(mut self, has_users: bool) -> Self {
        self.has_users = has_users;
        self
    }

    /// Reservations stored so far, in insertion order.
    pub fn reservations(&self) -> Vec<NewReservation> {
        self.reservations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl DatabaseRepo for TestingDbRepo {
    async fn all_users(&self) -> bool {
        self.has_users
    }

    async fn insert_reservation(&self, reservation: NewReservation) -> Result<i32, RepoError> {
        reservation.check()?;

        let mut stored = self
            .reservations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = next_id(stored.len())?;
        stored.push(reservation);
        tracing::debug!(reservation_id = id, "reservation stored in memory");
        Ok(id)
    }
}

/// Id for the reservation stored after `stored` existing ones.
fn next_id(stored: usize) -> Result<i32, RepoError> {
    stored
        .checked_add(1)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| RepoError::Db("reservation id space exhausted".to_string()))
}

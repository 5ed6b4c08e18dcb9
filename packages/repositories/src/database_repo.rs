use crate::error::RepoError;
use crate::reservation::NewReservation;
use async_trait::async_trait;
use mockall::automock;

/// Storage operations the request handlers rely on. Pick an implementation
/// at startup and share it as `Arc<dyn DatabaseRepo>`.
#[automock]
#[async_trait]
pub trait DatabaseRepo: Send + Sync {
    /// Whether any user accounts exist.
    async fn all_users(&self) -> bool;

    /// Store a reservation and return its id.
    async fn insert_reservation(&self, reservation: NewReservation) -> Result<i32, RepoError>;
}

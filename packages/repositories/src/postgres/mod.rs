use crate::database_repo::DatabaseRepo;
use crate::error::RepoError;
use crate::reservation::NewReservation;
use async_trait::async_trait;
use chrono::Utc;
use data_access_objects::{ReservationDao, UserDao};
use models::reservations::ActiveModel;
use sea_orm::*;
use services::AppConfig;
use std::sync::Arc;

pub struct PostgresDbRepo {
    app: Arc<AppConfig>,
    db: DatabaseConnection,
}

impl PostgresDbRepo {
    pub fn new(db: DatabaseConnection, app: Arc<AppConfig>) -> Self {
        PostgresDbRepo { app, db }
    }

    fn db_error(&self, e: DbErr) -> RepoError {
        tracing::warn!(error = %e, "reservation insert failed");
        if self.app.in_production {
            RepoError::Db("could not save reservation".to_string())
        } else {
            e.into()
        }
    }
}

#[async_trait]
impl DatabaseRepo for PostgresDbRepo {
    async fn all_users(&self) -> bool {
        match UserDao::count(&self.db).await {
            Ok(count) => count > 0,
            Err(e) => {
                tracing::warn!(error = %e, "failed to count users");
                false
            }
        }
    }

    async fn insert_reservation(&self, reservation: NewReservation) -> Result<i32, RepoError> {
        reservation.check()?;

        let now = Utc::now().naive_utc();
        let model = ActiveModel {
            first_name: ActiveValue::set(reservation.first_name),
            last_name: ActiveValue::set(reservation.last_name),
            email: ActiveValue::set(reservation.email),
            phone: ActiveValue::set(reservation.phone),
            start_date: ActiveValue::set(reservation.start_date),
            end_date: ActiveValue::set(reservation.end_date),
            room_id: ActiveValue::set(reservation.room_id),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
            ..Default::default()
        };

        let id = ReservationDao::insert(&self.db, model)
            .await
            .map_err(|e| self.db_error(e))?;
        tracing::info!(reservation_id = id, "reservation stored");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[tokio::test]
    async fn test_insert_reservation_returns_id() {
        let db = mock_db()
            .append_query_results([[stored_reservation(7)]])
            .into_connection();
        let repo = PostgresDbRepo::new(db, dev_config());

        let id = repo.insert_reservation(sample_reservation()).await.unwrap();

        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn test_insert_reservation_checks_before_storing() {
        // No results queued: reaching the database would fail differently.
        let repo = PostgresDbRepo::new(mock_db().into_connection(), dev_config());
        let mut res = sample_reservation();
        res.room_id = -1;

        let err = repo.insert_reservation(res).await.unwrap_err();

        assert!(matches!(err, RepoError::InvalidReservation(_)));
    }

    #[tokio::test]
    async fn test_insert_reservation_db_error_detail_in_dev() {
        let db = mock_db()
            .append_query_errors([DbErr::Custom("relation does not exist".to_string())])
            .into_connection();
        let repo = PostgresDbRepo::new(db, dev_config());

        let err = repo.insert_reservation(sample_reservation()).await.unwrap_err();

        match err {
            RepoError::Db(message) => assert!(message.contains("relation does not exist")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_reservation_db_error_redacted_in_production() {
        let db = mock_db()
            .append_query_errors([DbErr::Custom("relation does not exist".to_string())])
            .into_connection();
        let repo = PostgresDbRepo::new(db, production_config());

        let err = repo.insert_reservation(sample_reservation()).await.unwrap_err();

        assert_eq!(err, RepoError::Db("could not save reservation".to_string()));
    }

    #[tokio::test]
    async fn test_all_users_true_when_users_exist() {
        let db = mock_db()
            .append_query_results([[count_row(2)]])
            .into_connection();
        let repo = PostgresDbRepo::new(db, dev_config());

        assert!(repo.all_users().await);
    }

    #[tokio::test]
    async fn test_all_users_false_when_table_empty() {
        let db = mock_db()
            .append_query_results([[count_row(0)]])
            .into_connection();
        let repo = PostgresDbRepo::new(db, dev_config());

        assert!(!repo.all_users().await);
    }

    #[tokio::test]
    async fn test_all_users_false_on_db_error() {
        let db = mock_db()
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let repo = PostgresDbRepo::new(db, dev_config());

        assert!(!repo.all_users().await);
    }
}

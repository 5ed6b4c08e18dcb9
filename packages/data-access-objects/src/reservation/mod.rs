use models::prelude::Reservations;
use models::reservations::ActiveModel;
use sea_orm::*;

pub struct ReservationDao;

impl ReservationDao {
    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<i32, DbErr> {
        let res = Reservations::insert(model).exec(db).await?;
        Ok(res.last_insert_id)
    }
}

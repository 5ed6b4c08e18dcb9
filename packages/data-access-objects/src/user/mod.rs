use models::prelude::Users;
use sea_orm::*;

pub struct UserDao;

impl UserDao {
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Users::find().count(db).await
    }
}

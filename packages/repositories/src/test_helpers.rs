use crate::reservation::NewReservation;
use chrono::NaiveDate;
use models::reservations;
use sea_orm::*;
use services::AppConfig;
use std::collections::BTreeMap;
use std::sync::Arc;

pub fn sample_reservation() -> NewReservation {
    NewReservation {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 4).unwrap(),
        room_id: 1,
    }
}

pub fn stored_reservation(id: i32) -> reservations::Model {
    let res = sample_reservation();
    let now = chrono::Utc::now().naive_utc();
    reservations::Model {
        id,
        first_name: res.first_name,
        last_name: res.last_name,
        email: res.email,
        phone: res.phone,
        start_date: res.start_date,
        end_date: res.end_date,
        room_id: res.room_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::from(count))])
}

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn dev_config() -> Arc<AppConfig> {
    Arc::new(AppConfig::default())
}

pub fn production_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        in_production: true,
        ..AppConfig::default()
    })
}

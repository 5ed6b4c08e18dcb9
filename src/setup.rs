// src/setup.rs

use sea_orm::*;
use services::{AppConfig, LogFormat};
use tracing_subscriber::EnvFilter;

pub(super) async fn set_up_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.sqlx_logging(!config.in_production);

    let db = Database::connect(opts).await?;
    tracing::info!("DB connected");
    Ok(db)
}

/// `RUST_LOG` selects what is logged, defaulting to `info`.
pub(super) fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

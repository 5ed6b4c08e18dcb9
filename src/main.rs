mod handlers;
mod setup;

use actix_web::{web, App, HttpServer};
use repositories::{DatabaseRepo, PostgresDbRepo, TestingDbRepo};
use services::AppConfig;
use setup::{init_tracing, set_up_db};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()
        .map(Arc::new)
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {}", err)))?;
    init_tracing(config.log_format);

    let repo: Arc<dyn DatabaseRepo> = if config.use_test_repo {
        tracing::warn!("using the in-memory repository, nothing will be persisted");
        Arc::new(TestingDbRepo::new())
    } else {
        let db = set_up_db(&config)
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
        Arc::new(PostgresDbRepo::new(db, config.clone()))
    };
    let repo = web::Data::from(repo);

    tracing::info!(host = %config.host, port = config.port, "starting server");
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(repo.clone())
            .configure(handlers::routes)
    })
    .bind(config.bind_address())?
    .run()
    .await
}

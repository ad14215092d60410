pub mod modules;
pub use modules::profile;
pub mod config;
pub mod health;
pub mod shared;

use crate::config::AppConfig;
use crate::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::{
    CreateProfileService, DeleteProfileService, GetProfileService, UpdateProfileService,
};

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting user profile service...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Adapters
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));

    // Use cases
    let state = AppState {
        profile: ProfileUseCases {
            create: Arc::new(CreateProfileService::new(
                profile_query.clone(),
                profile_repo.clone(),
            )),
            get: Arc::new(GetProfileService::new(profile_query.clone())),
            update: Arc::new(UpdateProfileService::new(
                profile_query.clone(),
                profile_repo.clone(),
            )),
            delete: Arc::new(DeleteProfileService::new(profile_query, profile_repo)),
        },
    };

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(crate::shared::api::cors_headers())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // CORS preflight
    cfg.service(crate::shared::api::preflight_handler);
    cfg.service(crate::shared::api::preflight_item_handler);
    // Profiles
    cfg.service(crate::profile::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::delete_profile_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}

use std::sync::Arc;

use dotenvy::dotenv;
use pedidos_api::application::OrderService;
use pedidos_api::config::{AppConfig, StoreBackend};
use pedidos_api::infrastructure::memory::InMemoryOrderStore;
use pedidos_api::infrastructure::postgres::DieselOrderStore;
use pedidos_api::{build_server, create_pool, run_migrations};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    let service = match config.store {
        StoreBackend::Postgres => {
            let pool = create_pool(&config.database_url);
            run_migrations(&pool);
            OrderService::new(Arc::new(DieselOrderStore::new(pool)))
        }
        StoreBackend::Memory => {
            log::warn!("Using the volatile in-memory store; orders are lost on restart");
            OrderService::new(Arc::new(InMemoryOrderStore::default()))
        }
    };

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(service, &config.host, config.port)?.await
}

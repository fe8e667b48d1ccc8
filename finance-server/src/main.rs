#[macro_use]
extern crate tracing;

use actix_web::{App, HttpServer};
use tracing::level_filters::LevelFilter;

use finance_lib::config::Config;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    finance_lib::tracing::init_subscriber(LevelFilter::INFO);
    info!("tracing initialized");

    let config = Config::load()?;

    let (transaction_repo, category_repo) =
        match finance_repo::sqlx_repo::create_repos(&config.database_url, config.max_connections)
            .await
        {
            Ok(repos) => repos,
            Err(e) => {
                error!("Error: {:#}", e);
                std::process::exit(1);
            }
        };

    let server = HttpServer::new(move || {
        App::new()
            .wrap(finance_lib::cors::create_cors())
            .wrap(finance_lib::tracing::create_middleware())
            .configure(finance_lib::app_config_func(
                transaction_repo.clone(),
                category_repo.clone(),
            ))
    })
    .bind(("0.0.0.0", config.port))?;

    info!("Server started at port {}", config.port);
    server.run().await?;

    Ok(())
}

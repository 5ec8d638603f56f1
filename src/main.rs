use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use taskbox::{config::Config, routes, store::Store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let store = Store::open();

    log::info!("Starting taskbox server at {}", config.server_url());

    let app_store = store.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_store.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await?;

    store.close();
    Ok(())
}

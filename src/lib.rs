pub mod config;
pub mod core;
pub mod database;
pub mod error;
pub mod handlers;
pub mod render;
pub mod response;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use crate::config::Config;
use crate::core::ports::repository::Manager;
use crate::error::Error;

pub async fn serve<M>(manager: M, config: Config) -> Result<(), Error>
where
    M: Manager + Clone + Send + 'static,
{
    let addr = (config.host.clone(), config.port);
    log::info!("listening on {}:{}", addr.0, addr.1);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(manager.clone()))
            .app_data(Data::new(config.clone()))
            .configure(handlers::configure::<M>)
    })
    .bind(addr)?
    .run()
    .await?;
    Ok(())
}

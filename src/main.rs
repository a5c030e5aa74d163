use env_logger::Env;
use polls::config::Config;
use polls::database::{memory::MemoryStore, sqlx::PgSqlxManager};
use polls::error::Error;

#[actix_web::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("polls=info,actix_web=info")).init();
    let config = Config::from_env()?;
    match config.database_url.clone() {
        Some(url) => {
            let manager = PgSqlxManager::connect(&url, &config).await?;
            polls::serve(manager, config).await
        }
        None => {
            log::warn!("DATABASE_URL not set, polls are kept in memory");
            polls::serve(MemoryStore::new(), config).await
        }
    }
}

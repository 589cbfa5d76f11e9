use dotenvy::dotenv;
use lambda_http::Error as LambdaError;
use tracing::info;

use todo_lambdas::common::config::Config;
use todo_lambdas::common::logging::init_tracing;
use todo_lambdas::store::postgres_from_config;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let store = postgres_from_config(&config)?;

    info!("Applying migrations");
    store.migrate().await?;
    info!("Migrations applied");

    Ok(())
}

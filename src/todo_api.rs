use dotenvy::dotenv;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};
use tracing::info;

use todo_lambdas::common::config::Config;
use todo_lambdas::common::errors::Error;
use todo_lambdas::common::logging::init_tracing;
use todo_lambdas::router::dispatch;
use todo_lambdas::store;

/// All four operations behind one function, routed by method and path.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    dotenv().ok();
    init_tracing();

    // routes are matched without the gateway stage prefix
    std::env::set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let config = Config::from_env()?;
    let store = store::from_config(&config)?;
    info!("Serving todos for owner: {}", config.owner_id);

    let store = store.as_ref();
    let owner = config.owner_id.as_str();
    run(service_fn(move |request: LambdaRequest| async move {
        dispatch(request, store, owner)
            .await
            .or_else(Error::into_lambda_result)
    }))
    .await
}

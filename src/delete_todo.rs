use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};

use todo_lambdas::common::config::Config;
use todo_lambdas::common::errors::Error;
use todo_lambdas::common::logging::init_tracing;
use todo_lambdas::common::utils::path_id;
use todo_lambdas::handlers::delete_todo;
use todo_lambdas::store::postgres_from_config;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    init_tracing();

    let config = Config::from_env()?;
    let store = postgres_from_config(&config)?;

    let store = &store;
    let owner = config.owner_id.as_str();
    run(service_fn(move |request: LambdaRequest| async move {
        let id = path_id(&request);
        delete_todo(id.as_deref(), store, owner)
            .await
            .or_else(Error::into_lambda_result)
    }))
    .await
}

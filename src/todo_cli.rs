use std::time::Duration;

use chrono::Local;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

use todo_lambdas::common::config::ClientConfig;
use todo_lambdas::common::logging::init_cli_tracing;
use todo_lambdas::view::command::{ParseCommandError, HELP};
use todo_lambdas::view::render::{clock_line, render};
use todo_lambdas::view::{App, Command, HttpTodoClient, Outcome, ViewState};

type GenericError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), GenericError> {
    dotenv().ok();
    init_cli_tracing();

    let config = ClientConfig::from_env();
    let display_name = config.display_name.as_deref();
    let client = HttpTodoClient::new(config.api_url.clone());
    let mut app = App::new(client, ViewState::new(Local::now().naive_local()));

    app.refresh().await;
    println!("{}", render(app.state(), display_name));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut clock = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = clock.tick() => {
                if app.tick(Local::now().naive_local()) {
                    println!("{}", clock_line(app.state()));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                match line.parse::<Command>() {
                    Ok(command) => match app.execute(command).await {
                        Outcome::Render => println!("{}", render(app.state(), display_name)),
                        Outcome::Help => println!("{HELP}"),
                        Outcome::NoSuchItem(n) => println!("no todo at position {n}"),
                        Outcome::Quit => break,
                    },
                    Err(ParseCommandError::Empty) => println!("{}", render(app.state(), display_name)),
                    Err(err) => println!("{err} (type `help`)"),
                }
            }
        }
    }

    Ok(())
}

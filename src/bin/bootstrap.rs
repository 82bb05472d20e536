use ct_write_handler::config::Config;
use ct_write_handler::handler::RequestHandler;
use ct_write_handler::{lambda, logs};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = Config::from_env();
    logs::init(&config)?;

    let handler = RequestHandler::new(config, log::logger());
    lambda::run(handler).await
}

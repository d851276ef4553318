mod cli;
mod commands;
mod infra;
mod render;
mod routes;
mod server;
mod terminal;

use sqs_quiz::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

mod cli;
mod infra;
mod routes;
mod server;
mod verify;

use bokaboka_verification::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

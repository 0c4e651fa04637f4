mod cli;
mod demo;
mod infra;
mod render;

use hirenow::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

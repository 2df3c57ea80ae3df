mod cli;
mod routes;
mod server;

use job_application::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

use anyhow::Result;

use crate::cli::Application;

mod batch;
mod cli;
mod kana;
mod numbers;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize_logging();

    Application::start().await
}

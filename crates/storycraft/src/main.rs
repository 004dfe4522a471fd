use clap::Parser;
use storycraft::cli::{Cli, run};
use storycraft::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a .env if present before anything reads the environment.
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    run(cli).await
}

use clap::Parser;
use cli::{Cli, CliError};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    cli::run(cli).await
}

use bindery::errors::BookResult;
use bindery_cli::Cli;
use bindery_cli::command::Commands;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> BookResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.commands {
        Commands::Build(build) => build.build()?,
    }

    Ok(())
}

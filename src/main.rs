use anyhow::Context;
use clap::Parser;
use portprobe::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli.settings().context("failed to load settings")?;
    let options = cli.options(&settings)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(options.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.execute(&options)
        .await
        .with_context(|| format!("scan of {} failed", cli.host))?;

    Ok(())
}

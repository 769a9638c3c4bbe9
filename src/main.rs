use anyhow::Context;
use clap::Parser;
use phone_directory::{serve, Config};
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over `--log-level`. Logs go to stderr, responses to stdout.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    let res = match config.json_logs {
        true => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        false => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    res.context("Install tracing subscriber")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    info!(
        max_key_len = config.max_key_len,
        prune_on_delete = config.prune_on_delete,
        "Starting phone directory"
    );

    let store = config.build_store();
    serve(&store, BufReader::new(stdin()), stdout())
        .await
        .context("Serve requests from stdin")?;

    info!(contacts = store.len().await, "Input closed, shutting down");
    Ok(())
}

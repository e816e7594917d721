use anyhow::Result;
use domaingate::{Config, DomainStore, FileDomainStore, ReloadTask, Shared, SharedDomainStore};
use is_terminal::IsTerminal;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let config = config_init(std::env::args().nth(1))?;

    let domains: SharedDomainStore = Arc::new(FileDomainStore::new(config.domains_file.clone()));
    domains.reload().await?;

    ReloadTask::new(domains.clone(), config.reload_interval).spawn();

    tracing::info!("API listening on {}", &config.api_bind_addr);
    let api_server = domaingate::api::new(config.clone(), domains);
    let api_handle = tokio::spawn(api_server);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        Ok(api_res) = api_handle => {
            if let Err(err) = api_res {
                return Err(err.into())
            }
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "domaingate=info".into()),
        )
        .init();
}

fn config_init(config_file: Option<String>) -> Result<Shared> {
    let config = match config_file {
        None => Config::default(),
        Some(config_file) => {
            tracing::debug!("loaded config from {config_file}");
            Config::try_from_file(&config_file)?
        }
    };
    Ok(Arc::new(config))
}

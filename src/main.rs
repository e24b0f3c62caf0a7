use clap::Parser;
use dotenvy::dotenv;
use s2m_invoice::{
    cli::{self, Cli},
    config,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing on stderr; stdout carries the invoice
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (non-fatal, INVOICE_CONFIG may be set externally)
    dotenv().ok();

    // 3. Parse arguments and load the configuration
    let args = Cli::parse();
    let app_config = config::load_app_configuration(args.config.as_deref())
        .inspect_err(|e| error!("Critical error loading application configuration: {e}"))?;
    info!(
        packages = app_config.catalog.packages().len(),
        "Configuration ready"
    );

    // 4. Run the selected mode
    cli::run(args, app_config)
        .await
        .inspect_err(|e| error!("{e}"))
}

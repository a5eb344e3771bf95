//! Dynamic Ansible inventory built from Scalr/Terraform outputs

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scalr_inventory::cli::Cli;
use scalr_inventory::output::OutputContext;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = OutputContext::new(cli.no_color);
    if let Err(e) = cli.run().await {
        ctx.error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

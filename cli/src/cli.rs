//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::AppContext;
use crate::commands;
use crate::domain::config::ConfigOverrides;
use crate::infra::YamlConfigStore;

/// Dynamic Ansible inventory built from Scalr/Terraform outputs
#[derive(Parser, Debug)]
#[command(name = "scalr-inventory", version)]
pub struct Cli {
    /// Print the whole inventory (default)
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print variables for a single host
    #[arg(long, value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// Configuration file
    #[arg(long, value_name = "PATH", env = "SCALR_INVENTORY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache file for provisioning output
    #[arg(long, value_name = "PATH", env = "SCALR_INVENTORY_CACHE")]
    pub cache: Option<PathBuf>,

    /// Provisioning tool executable
    #[arg(long, value_name = "PROGRAM", env = "SCALR_INVENTORY_COMMAND")]
    pub command: Option<String>,

    /// Directory holding the provisioning code (passed as -chdir=)
    #[arg(long, value_name = "DIR", env = "SCALR_INVENTORY_CHDIR")]
    pub chdir: Option<String>,

    /// Disable colored diagnostics
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}

impl Cli {
    /// Execute the requested inventory command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, acquisition, extraction or output
    /// fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            list: _,
            host,
            config,
            cache,
            command,
            chdir,
            no_color: _,
        } = self;

        let store = YamlConfigStore::new(config);
        let app = AppContext::new(
            &store,
            ConfigOverrides {
                cache_path: cache,
                command,
                chdir,
            },
        )?;

        let mut stdout = std::io::stdout().lock();
        match host {
            Some(host) => commands::host::run(&app, &host, &mut stdout).await,
            None => commands::list::run(&app, &mut stdout).await,
        }
    }
}

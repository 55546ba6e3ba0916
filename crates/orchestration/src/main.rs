//! orchestration - Resource type catalog queries
//!
//! Commands:
//! - resource show: one resource type, or a hot/cfn template skeleton for it
//! - resource list: resource type names, optionally filtered

mod cli;

use anyhow::{bail, Result};
use clap::Parser;
use colored::*;
use orchestration::{
    list_resource_types, parse_filters, parse_template_type, show_resource_type, CommandError,
};
use orchestration_core::{ClientConfig, HttpClient, OutputFormat};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConnectionArgs, ResourceCommands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        let code = err
            .downcast_ref::<CommandError>()
            .map(CommandError::exit_code)
            .unwrap_or(1);
        eprintln!("{}", format!("{:#}", err).red());
        std::process::exit(code);
    }
}

fn init_logging(debug: bool) {
    let filter = if debug && std::env::var_os("RUST_LOG").is_none() {
        EnvFilter::new("orchestration=debug,orchestration_core=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let config = match &args.config {
        Some(path) if !path.exists() => bail!("Config file not found: {}", path.display()),
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };

    Ok(config.with_env()?.with_overrides(
        args.os_orchestration_url.clone(),
        args.os_auth_token.clone(),
        args.timeout,
    ))
}

/// Reject bad arguments before any configuration is read
fn check_arguments(command: &Commands) -> Result<(), CommandError> {
    match command {
        Commands::Resource { command } => match command {
            ResourceCommands::Show { template_type, .. } => {
                parse_template_type(template_type.as_deref())?;
            }
            ResourceCommands::List { filters, .. } => {
                parse_filters(filters)?;
            }
        },
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    check_arguments(&cli.command)?;

    let config = load_config(&cli.connection)?;
    let client = HttpClient::new(&config)?;

    match cli.command {
        Commands::Resource { command } => match command {
            ResourceCommands::Show {
                resource_type,
                template_type,
                output,
            } => {
                let table = show_resource_type(&client, &resource_type, template_type.as_deref())?
                    .select(&output.columns)?;
                println!(
                    "{}",
                    table.render_one(output.format.unwrap_or(OutputFormat::Json))?
                );
            }
            ResourceCommands::List { filters, output } => {
                let table = list_resource_types(&client, &filters)?.select(&output.columns)?;
                println!(
                    "{}",
                    table.render_list(output.format.unwrap_or(OutputFormat::Table))?
                );
            }
        },
    }

    Ok(())
}

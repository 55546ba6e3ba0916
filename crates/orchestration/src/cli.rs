//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use orchestration_core::OutputFormat;
use std::path::PathBuf;

/// orchestration - Query the resource type catalog of an orchestration service
#[derive(Parser, Debug)]
#[command(name = "orchestration")]
#[command(version)]
#[command(about = "Query the resource type catalog of an orchestration service")]
#[command(after_help = "\
EXAMPLES:
    orchestration resource list                              All resource types
    orchestration resource list --filter name=Server         Types whose name matches
    orchestration resource list --filter support_status=DEPRECATED
    orchestration resource show OS::Heat::None               Schema as JSON
    orchestration resource show OS::Heat::None -f yaml       Schema as YAML
    orchestration resource show OS::Nova::Server --template-type hot
                                                             HOT template skeleton

CONFIGURATION:
    Endpoint and token come from ~/.config/orchestration/config.yaml,
    then OS_ORCHESTRATION_URL / OS_AUTH_TOKEN / OS_ORCHESTRATION_TIMEOUT,
    then the global flags below.")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Orchestration endpoint URL, including the tenant path
    #[arg(long, global = true, value_name = "URL")]
    pub os_orchestration_url: Option<String>,

    /// Auth token sent with every request
    #[arg(long, global = true, value_name = "TOKEN")]
    pub os_auth_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Client config file (default: ~/.config/orchestration/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resource type commands
    Resource {
        #[command(subcommand)]
        command: ResourceCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// Show details or optionally generate a template for a resource type
    Show {
        /// Resource type to show details or optionally generate a template for
        #[arg(value_name = "RESOURCE_TYPE")]
        resource_type: String,

        /// Optional template type to generate, hot or cfn
        #[arg(long, value_name = "TEMPLATE_TYPE")]
        template_type: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List resource types
    #[command(alias = "ls")]
    List {
        /// Filter parameters to apply on returned resource types.
        /// Can be repeated; any of name, version or support_status
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only show this column (repeatable)
    #[arg(short = 'c', long = "column", value_name = "COLUMN")]
    pub columns: Vec<String>,
}

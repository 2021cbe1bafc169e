use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "drstemplates",
    version,
    about = "Resolve Elastic Disaster Recovery launch templates by source server tag"
)]
pub struct Cli {
    /// AWS region (defaults to AWS_REGION or the profile's region)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Named AWS profile (defaults to AWS_PROFILE)
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the launch template id of every server carrying the tag
    Templates {
        /// Tag key, optionally followed by `.value` (the value is not matched)
        key: String,
    },
    /// Print the id of every source server carrying the tag
    Servers {
        /// Tag key, optionally followed by `.value` (the value is not matched)
        key: String,
    },
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Send tracing output to stderr; stdout is reserved for results.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

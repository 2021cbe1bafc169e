use clap::Parser;
use drstemplates::aws_config::configure_aws;
use drstemplates::cli::{init_tracing, Cli, Commands};
use drstemplates::templates::{matching_servers, resolve_templates};
use drstemplates::DrsClient;
use std::process::ExitCode;
use tracing::debug;

async fn run(cli: Cli) -> Result<(), drstemplates::Error> {
    let config = configure_aws(cli.region, cli.profile).await;
    let client = DrsClient::new(&config);

    match cli.command {
        Commands::Templates { key } => {
            for template_id in resolve_templates(&client, &key).await? {
                println!("{}", template_id);
            }
        }
        Commands::Servers { key } => {
            for server_id in matching_servers(&client, &key).await? {
                println!("{}", server_id);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "aborting");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use secrecy::ExposeSecret;

mod commands;
mod config;

mod errors;
use commands::register_cmd::{self, RegisterArgs};
use config::RegistrarConfig;
use hook_registrar_core::RegisterOutcome;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Hook Registrar CLI: point a GitHub repository webhook at a Jenkins server
#[derive(Parser)]
#[command(name = "hook-registrar")]
#[command(
    about = "Register or update the GitHub webhook for a Jenkins server",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure the repository webhook points at the Jenkins github-webhook endpoint
    #[command()]
    Register(RegisterArgs),

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    // A .env file in the working directory is honored, matching the deploy
    // scripts this tool is invoked from.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("HOOK_REGISTRAR_LOG"))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Register(args) => {
            let config = match RegistrarConfig::from_env(
                &args.owner,
                &args.repo,
                args.jenkins_url.as_deref(),
            ) {
                Ok(config) => config,
                Err(e) => {
                    error!("Error: {e}");
                    std::process::exit(1);
                }
            };

            if config.secret_generated {
                // The operator has to mirror the secret into Jenkins, so this
                // is the one place it is shown.
                println!(
                    "Generated webhook secret: {}",
                    config.webhook_secret.expose_secret()
                );
                println!("Configure the same secret in Jenkins so deliveries verify.");
            }

            let repository = format!("{}/{}", args.owner, args.repo);
            match register_cmd::execute(config).await {
                Ok(RegisterOutcome::Created { hook_id }) => {
                    println!(
                        "{} on {} (hook id {})",
                        "Webhook created".green(),
                        repository,
                        hook_id
                    );
                    std::process::exit(0);
                }
                Ok(RegisterOutcome::Updated { hook_id }) => {
                    println!(
                        "{} on {} (hook id {})",
                        "Webhook updated".green(),
                        repository,
                        hook_id
                    );
                    std::process::exit(0);
                }
                Ok(RegisterOutcome::NoMatchingHook) => {
                    warn!(
                        repository = repository,
                        "An update was expected but no registered hook points at Jenkins"
                    );
                    println!(
                        "{}: {} already has webhooks, but none points at a github-webhook endpoint",
                        "Nothing updated".yellow(),
                        repository
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    error!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Version => {
            // Print version info from baked-in value
            println!(
                "hook-registrar version {}",
                option_env!("HOOK_REGISTRAR_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            );
            std::process::exit(0);
        }
    }
}

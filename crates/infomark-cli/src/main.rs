//! InfoMark CLI - Command-line tool for the InfoMark course management service

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use infomark_client::InfomarkClient;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, MergedConfig};
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "infomark-cli")]
#[command(author, version, about = "InfoMark course management CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Server host name
    #[arg(long, env = "INFOMARK_HOST")]
    host: Option<String>,

    /// Server port
    #[arg(long, env = "INFOMARK_PORT")]
    port: Option<u16>,

    /// Use plain HTTP instead of HTTPS
    #[arg(long, env = "INFOMARK_INSECURE")]
    insecure: bool,

    /// Bearer token for authenticated commands
    #[arg(long, env = "INFOMARK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "INFOMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server answers
    Ping,

    /// Show server version
    Version,

    /// Show the privacy statement
    Privacy,

    /// Obtain an access/refresh token pair
    Login { email: String, password: String },

    /// Open a cookie session
    Session { email: String, password: String },

    /// End the session of --token
    Logout,

    /// Request a password reset mail
    ResetPassword { email: String },

    /// List exam enrollments of the --token user
    Enrollments,

    /// List group bids of a course
    Bids {
        /// Course ID
        course_id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(
        cli.host.as_deref(),
        cli.port,
        cli.insecure,
        cli.output.map(|format| format.as_str()),
    );

    let format = OutputFormat::from_name(&merged.output)
        .with_context(|| format!("Unknown output format: {}", merged.output))?;
    let ctx = OutputContext::new(format, cli.no_color, cli.quiet);

    if let Err(err) = run(&cli, &merged, &ctx).await {
        ctx.error(&format!("Error: {:#}", err));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli, merged: &MergedConfig, ctx: &OutputContext) -> Result<()> {
    let client = create_client(merged)?;
    let token = cli.token.as_deref();

    match &cli.command {
        Commands::Ping => commands::ping(&client, ctx).await,
        Commands::Version => commands::version(&client, ctx).await,
        Commands::Privacy => commands::privacy(&client, ctx).await,
        Commands::Login { email, password } => commands::login(&client, email, password, ctx).await,
        Commands::Session { email, password } => {
            commands::session(&client, email, password, ctx).await
        }
        Commands::Logout => commands::logout(&client, token, ctx).await,
        Commands::ResetPassword { email } => commands::reset_password(&client, email, ctx).await,
        Commands::Enrollments => commands::enrollments(&client, token, ctx).await,
        Commands::Bids { course_id } => commands::bids(&client, token, *course_id, ctx).await,
    }
}

/// Create an InfoMark client for the resolved connection settings
fn create_client(merged: &MergedConfig) -> Result<InfomarkClient> {
    tracing::debug!(host = %merged.host, port = merged.port, ssl = merged.ssl, "Resolved server");
    InfomarkClient::new(&merged.host, merged.port, merged.ssl)
        .context("Failed to create InfoMark client")
}

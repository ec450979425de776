//! pcoclient - command line access to the Planning Center API.
//!
//! Each subcommand makes one client call and prints the JSON response.
//! Credentials come from `PCO_APP_ID` / `PCO_APP_SECRET` (a `.env` file in
//! the working directory is loaded if present).

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pcoclient_core::models::CreateUserInput;
use pcoclient_core::{Config, PlanningCenterClient};

#[derive(Parser, Debug)]
#[command(name = "pcoclient", version, about = "Query the Planning Center API")]
struct Cli {
    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a group
    Group { id: String },

    /// List a group's memberships
    Members { group_id: String },

    /// Primary email addresses of a group's leaders
    LeaderEmails { group_id: String },

    /// Fetch a person
    Person { id: String },

    /// List a person's email addresses
    PersonEmails { id: String },

    /// Search people by email, name, or phone number
    FindPerson { query: String },

    /// Request enrollment in a group
    Enroll { group_id: String },

    /// Add a primary home email address to a person
    AddEmail { person_id: String, address: String },

    /// Create a person
    CreatePerson {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        given_name: Option<String>,
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },

    /// Save base URL and timeout settings to the config file; omitted
    /// settings keep their saved values
    Configure {
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    let cli = Cli::parse();

    // Environment overrides are not written back to the file
    if let Command::Configure { timeout_secs } = cli.command {
        let mut saved = Config::load_file().context("Failed to load configuration")?;
        saved.update_settings(cli.base_url.clone(), timeout_secs);
        saved.save().context("Failed to save configuration")?;
        info!(base_url = saved.base_url(), "Configuration saved");
        return Ok(());
    }

    let mut config = Config::load().context("Failed to load configuration")?;
    config.update_settings(cli.base_url, None);
    debug!(?config, "Loaded configuration");

    let client = PlanningCenterClient::new(&config).context("Failed to create API client")?;

    match cli.command {
        Command::Group { id } => print_json(&client.get_group_by_id(&id).await?),
        Command::Members { group_id } => print_json(&client.get_group_members(&group_id).await?),
        Command::LeaderEmails { group_id } => {
            print_json(&client.get_group_leader_emails(&group_id).await?)
        }
        Command::Person { id } => print_json(&client.get_person_by_id(&id).await?),
        Command::PersonEmails { id } => print_json(&client.get_persons_emails(&id).await?),
        Command::FindPerson { query } => print_json(&client.get_person_by_email(&query).await?),
        Command::Enroll { group_id } => {
            print_json(&client.request_group_enrollment(&group_id).await?)
        }
        Command::AddEmail { person_id, address } => {
            print_json(&client.update_user_email(&person_id, &address).await?)
        }
        Command::CreatePerson {
            first_name,
            last_name,
            given_name,
            nickname,
            gender,
            status,
        } => {
            let input = CreateUserInput {
                first_name,
                last_name,
                given_name,
                nickname,
                gender,
                status,
                ..Default::default()
            };
            print_json(&client.create_user(&input).await?)
        }
        Command::Configure { .. } => Ok(()),
    }
}

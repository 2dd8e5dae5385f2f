//! VK Friends Online
//!
//! Command-line tool that resolves a VK user (by id, or the account
//! behind the access token) and prints their online friends

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use vkfriends::config::LoggingConfig;
use vkfriends::{Settings, VkClient};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "vkfriends", version, about = "Show which of a VK user's friends are online")]
struct Cli {
    /// Show friends of the user with this id instead of the token's account
    #[arg(long = "id", value_name = "USER_ID")]
    user_id: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new().context("Failed to load settings")?;
    init_logging(&settings.logging);
    debug!("Configuration loaded");

    let client = VkClient::new(settings)?;

    let user = match cli.user_id {
        Some(id) => client.get_user(id).await?,
        None => client.get_current_user().await?,
    };
    let user_id = user.id.context("User record carries no id")?;

    let friends = client.get_friends_online(user_id).await?;

    println!("User:");
    println!("- {}", user);

    println!("Friends:");
    for friend in &friends {
        println!("- {}", friend);
    }

    Ok(())
}

/// Initialize logging system
///
/// Log lines go to stderr; stdout carries only the result output.
fn init_logging(config: &LoggingConfig) {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr)
                .finish(),
        )
    } else {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

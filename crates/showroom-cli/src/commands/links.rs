//! Share link management commands.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::commands::create_db_pool;
use crate::output::{self, OutputFormat};
use showroom_core::config::AppConfig;
use showroom_core::error::AppError;
use showroom_database::registry::LinkRegistry;
use showroom_database::repositories::ShareLinkRepository;
use showroom_entity::share::ShareLink;

/// Link management arguments
#[derive(Debug, Args)]
pub struct LinksArgs {
    /// Link subcommand
    #[command(subcommand)]
    pub command: LinkCommands,
}

/// Link subcommands
#[derive(Debug, Subcommand)]
pub enum LinkCommands {
    /// List all share links
    List,
    /// Disable a link without deleting it
    Deactivate {
        /// Link id
        id: String,
    },
    /// Re-enable a deactivated link
    Activate {
        /// Link id
        id: String,
    },
    /// Permanently delete a link
    Delete {
        /// Link id
        id: String,
    },
}

/// Table row for link display
#[derive(Debug, Serialize, Tabled)]
struct LinkRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Scope")]
    scope: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl LinkRow {
    fn from_link(link: &ShareLink, now: DateTime<Utc>) -> Self {
        let scope = match (link.explicit_slugs(), &link.filters) {
            (Some(slugs), _) => format!("{} template(s)", slugs.len()),
            (None, Some(filters)) if !filters.is_unrestricted() => {
                let mut parts = Vec::new();
                if !filters.branches.is_empty() {
                    parts.push(format!("branches: {}", filters.branches.join(",")));
                }
                if !filters.types.is_empty() {
                    parts.push(format!("types: {}", filters.types.join(",")));
                }
                parts.join("; ")
            }
            _ => "all".to_string(),
        };

        Self {
            id: link.id.clone(),
            name: link.name.clone(),
            scope,
            status: format!("{:?}", link.status_at(now)).to_lowercase(),
            expires: link
                .expires_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "never".to_string()),
            created: link.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute link commands
pub async fn execute(
    args: &LinksArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = create_db_pool(config).await?;
    let repo = ShareLinkRepository::new(pool.pool().clone());

    let result = match &args.command {
        LinkCommands::List => {
            let now = Utc::now();
            let rows: Vec<LinkRow> = repo
                .list()
                .await?
                .iter()
                .map(|l| LinkRow::from_link(l, now))
                .collect();
            output::print_list(&rows, format);
            Ok(())
        }
        LinkCommands::Deactivate { id } => toggle(&repo, id, false).await,
        LinkCommands::Activate { id } => toggle(&repo, id, true).await,
        LinkCommands::Delete { id } => {
            if repo.delete(id).await? {
                output::print_success(&format!("Link '{}' deleted", id));
                Ok(())
            } else {
                Err(AppError::not_found(format!("Link '{}' not found", id)))
            }
        }
    };

    pool.close().await;
    result
}

async fn toggle(repo: &ShareLinkRepository, id: &str, active: bool) -> Result<(), AppError> {
    if !repo.set_active(id, active).await? {
        return Err(AppError::not_found(format!("Link '{}' not found", id)));
    }
    let verb = if active { "activated" } else { "deactivated" };
    output::print_success(&format!("Link '{}' {}", id, verb));
    Ok(())
}

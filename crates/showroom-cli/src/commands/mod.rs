//! CLI command definitions and dispatch.

pub mod hash_password;
pub mod links;
pub mod migrate;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use showroom_core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use showroom_core::error::AppError;
use showroom_database::connection::DatabasePool;

/// Showroom: access-controlled template showroom administration
#[derive(Debug, Parser)]
#[command(name = "showroom-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Environment overlay to apply
    #[arg(short, long, env = "SHOWROOM_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hash an admin password for `auth.admin_password_hash`
    HashPassword(hash_password::HashPasswordArgs),
    /// Mint or inspect signed tokens
    Token(token::TokenArgs),
    /// Share link management (PostgreSQL backend)
    Links(links::LinksArgs),
    /// Run database migrations
    Migrate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::HashPassword(args) => hash_password::execute(args),
            Commands::Token(args) => token::execute(args, &self.load_config()?, self.format),
            Commands::Links(args) => {
                links::execute(args, &self.load_config()?, self.format).await
            }
            Commands::Migrate => migrate::execute(&self.load_config()?).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config, &self.env)
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

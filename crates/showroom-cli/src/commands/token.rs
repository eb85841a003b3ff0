//! Share token minting and inspection.

use chrono::{DateTime, Duration, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use showroom_auth::{AdminClaims, SessionClaims, ShareClaims, TokenCodec, TokenError, TokenType};
use showroom_core::config::AppConfig;
use showroom_core::error::AppError;
use showroom_entity::share::SlugGrant;

/// Token management arguments
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommands,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommands {
    /// Mint a signed share token
    Mint {
        /// Link id carried as the token subject
        #[arg(long)]
        link: String,
        /// Template slug to grant (repeatable)
        #[arg(long = "slug", conflicts_with = "all")]
        slugs: Vec<String>,
        /// Grant every template in the catalog
        #[arg(long)]
        all: bool,
        /// Display name shown on the share page
        #[arg(long)]
        name: Option<String>,
        /// Lifetime in days (defaults to `auth.share_token_ttl_days`)
        #[arg(long)]
        ttl_days: Option<u64>,
    },
    /// Verify a token and print its claims
    Inspect {
        /// The encoded token
        token: String,
    },
}

#[derive(Debug, Serialize)]
struct MintedTokenOutput {
    token: String,
    share_url: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum InspectedToken {
    Share(ShareClaims),
    Session(SessionClaims),
    Admin(AdminClaims),
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let codec = TokenCodec::new(&config.signing_secret()?);

    match &args.command {
        TokenCommands::Mint {
            link,
            slugs,
            all,
            name,
            ttl_days,
        } => {
            if !*all && slugs.is_empty() {
                return Err(AppError::validation(
                    "Pass at least one --slug, or --all for an unrestricted token",
                ));
            }
            let grant = if *all {
                SlugGrant::All
            } else {
                SlugGrant::Only(slugs.clone())
            };
            let days = ttl_days.unwrap_or(config.auth.share_token_ttl_days);
            let expires_at = Utc::now() + Duration::days(days as i64);

            let claims = ShareClaims::new(link.clone(), grant, name.clone(), expires_at);
            let token = codec.encode(&claims)?;
            let minted = MintedTokenOutput {
                share_url: config.server.share_url(&token),
                token,
                expires_at,
            };

            match format {
                OutputFormat::Json => output::print_item(&minted, format),
                OutputFormat::Table => {
                    output::print_success("Share token minted");
                    output::print_kv("Token", &minted.token);
                    output::print_kv("URL", &minted.share_url);
                    output::print_kv("Expires", &minted.expires_at.to_rfc3339());
                }
            }
        }
        TokenCommands::Inspect { token } => {
            let inspected = inspect(&codec, token)?;
            if format == OutputFormat::Table {
                output::print_success(&format!("Valid {:?} token", inspected.token_type()));
            }
            output::print_item(&inspected, format);
        }
    }

    Ok(())
}

fn inspect(codec: &TokenCodec, token: &str) -> Result<InspectedToken, AppError> {
    // Only a type mismatch falls through to the next claim set.
    let mut error = match codec.decode::<ShareClaims>(token) {
        Ok(claims) => return Ok(InspectedToken::Share(claims)),
        Err(e) => e,
    };
    if error == TokenError::Malformed {
        error = match codec.decode::<SessionClaims>(token) {
            Ok(claims) => return Ok(InspectedToken::Session(claims)),
            Err(e) => e,
        };
    }
    if error == TokenError::Malformed {
        error = match codec.decode::<AdminClaims>(token) {
            Ok(claims) => return Ok(InspectedToken::Admin(claims)),
            Err(e) => e,
        };
    }
    Err(AppError::validation(format!("Token rejected: {}", error)))
}

impl InspectedToken {
    fn token_type(&self) -> TokenType {
        match self {
            Self::Share(c) => c.typ,
            Self::Session(c) => c.typ,
            Self::Admin(c) => c.typ,
        }
    }
}

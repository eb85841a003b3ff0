//! Admin password hashing.

use clap::Args;
use dialoguer::Password;

use showroom_auth::PasswordHasher;
use showroom_core::error::AppError;

/// Arguments for `hash-password`
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Password to hash (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Print an argon2 hash suitable for `auth.admin_password_hash`
pub fn execute(args: &HashPasswordArgs) -> Result<(), AppError> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => Password::new()
            .with_prompt("Admin password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    if password.is_empty() {
        return Err(AppError::validation("Password must not be empty"));
    }

    let hash = PasswordHasher::new().hash_password(&password)?;
    println!("{}", hash);
    Ok(())
}

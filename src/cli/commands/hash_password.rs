use serde_json::json;

use crate::auth::password;
use crate::cli::OutputFormat;
use crate::config::config;

/// Uses the configured pepper, so the hash verifies against this deployment.
pub fn handle(plain: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let hash = password::hash_password(plain, config().security.password_pepper.as_deref())?;

    match output_format {
        OutputFormat::Json => println!("{}", json!({ "hash": hash })),
        OutputFormat::Text => println!("{}", hash),
    }
    Ok(())
}

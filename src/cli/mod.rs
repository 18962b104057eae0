pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "zyarat-api")]
#[command(about = "Zyarat API - museum dashboard backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Bind address, overrides HOST")]
        host: Option<String>,
        #[arg(long, help = "Bind port, overrides PORT")]
        port: Option<u16>,
    },

    #[command(about = "Print the Argon2id hash of a password")]
    HashPassword {
        #[arg(help = "Plain-text password to hash")]
        password: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        None => commands::serve::handle(None, None).await,
        Some(Commands::Serve { host, port }) => commands::serve::handle(host, port).await,
        Some(Commands::HashPassword { password }) => commands::hash_password::handle(&password, output_format),
    }
}

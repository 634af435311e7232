use clap::Parser;

use std::path::PathBuf;

use super::constants::{ENV_CONFIG, ENV_DB, ENV_HOST, ENV_PORT};

#[derive(Parser)]
#[command(name = "crimedesk")]
#[command(version, about = "Crime incident data service", long_about = None)]
pub struct Cli {
    /// Server host address
    #[arg(long, short = 'H', env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database
    #[arg(long, short = 'd', env = ENV_DB)]
    pub db: Option<PathBuf>,

    /// Create the database and its tables if the file does not exist
    #[arg(long)]
    pub create_db: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub db: Option<PathBuf>,
    pub create_db: bool,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            config: cli.config,
            db: cli.db,
            create_db: cli.create_db,
        }
    }
}

/// Parse CLI arguments
pub fn parse() -> CliConfig {
    Cli::parse().into()
}

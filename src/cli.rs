use clap::{Args, Parser, Subcommand};
use lrn_cli::auth::{Action, DEFAULT_DOMAIN};
use lrn_cli::config::DataApiConfig;
use lrn_cli::network::{DEFAULT_API_DATA_HOST, DEFAULT_API_DATA_VERSION};
use std::path::PathBuf;

// Public Learnosity demos consumer. Never put any other secret here.
const DEMO_CONSUMER_KEY: &str = "yis0TYCu7U9V4o7M";
const DEMO_CONSUMER_SECRET: &str = "74c5fd430cf1242a527f6223aebd42d30464be22";

#[derive(Args)]
pub struct DataArgs {
    /// Full URL, or REST path with or without version (`/v1/itembank/items`, `itembank/items`)
    pub endpoint_url: String,

    /// File holding the JSON request body, `-` for stdin
    #[arg(long, short, default_value = "-")]
    pub file: PathBuf,

    /// Data API action
    #[arg(long, short, value_enum, default_value_t = Action::Get)]
    pub action: Action,
}

#[derive(Subcommand)]
pub enum AppSubcommand {
    /// Make a request to the Data API
    Data(DataArgs),
}

/// Prepare and send requests to Learnosity APIs
#[derive(Parser)]
#[command(about, version)]
pub struct App {
    /// API key for the desired consumer
    #[arg(long, short = 'k', default_value = DEMO_CONSUMER_KEY)]
    pub consumer_key: String,

    /// Secret associated with the consumer key
    #[arg(long, short = 'S', default_value = DEMO_CONSUMER_SECRET, hide_default_value = true)]
    pub consumer_secret: String,

    /// Log level
    #[arg(long, short = 'l', default_value = "info")]
    pub log_level: String,

    /// Log level for the HTTP requests
    #[arg(long, short = 'L', default_value = "warning")]
    pub requests_log_level: String,

    /// Data API host
    #[arg(long, default_value = DEFAULT_API_DATA_HOST)]
    pub host: String,

    /// Data API version used when the endpoint path has none
    #[arg(long, default_value = DEFAULT_API_DATA_VERSION)]
    pub api_version: String,

    /// Domain reported in the security packet
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    #[clap(subcommand)]
    pub subcommand: AppSubcommand,
}

impl App {
    pub fn config(&self) -> DataApiConfig {
        DataApiConfig::new(&self.consumer_key, &self.consumer_secret)
            .host(&self.host)
            .version(&self.api_version)
            .domain(&self.domain)
    }
}

//! Configuration and CLI argument handling

use clap::Parser;

use crate::messages::Locale;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "tense-drill")]
#[command(about = "A state-managed HTTP service for English verb-tense practice")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Chat-completion endpoint used to generate and correct phrases
    #[arg(short, long, default_value = "http://localhost:1234/v1/chat/completions")]
    pub endpoint: String,

    /// Model name sent with each completion request
    #[arg(short, long)]
    pub model: Option<String>,

    /// Maximum number of tokens generated per request
    #[arg(long, default_value = "50")]
    pub max_tokens: u32,

    /// Language of prompts and messages
    #[arg(short, long, value_enum, default_value_t = Locale::Pt)]
    pub locale: Locale,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

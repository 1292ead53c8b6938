// CLI module for newscheck
// Author: kelexine (https://github.com/kelexine)

use crate::config::{ApiKey, AppConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newscheck - fact-check news snippets with Gemini and Google Search
#[derive(Parser, Debug)]
#[command(name = "newscheck", version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.newscheck/config.toml, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model to use
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fact-check a snippet given as an argument or on stdin
    Check {
        /// News headline or snippet (read from stdin when omitted)
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP fact-check service
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Args {
    /// Apply CLI overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(key) = &self.api_key {
            config.gemini.api_key = ApiKey::new(key.clone());
        }
        if let Some(model) = &self.model {
            config.gemini.model = model.clone();
        }
        if let Some(timeout) = self.timeout {
            config.gemini.timeout_seconds = timeout;
        }
        if let Command::Serve { host, port } = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}

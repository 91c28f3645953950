//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Meia Meia Meia stock management, in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "estoque", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/estoque/estoque.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base address
    #[arg(long, env = "ESTOQUE_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "ESTOQUE_TIMEOUT_MS", value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

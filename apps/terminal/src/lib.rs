//! # Estoque Terminal Library
//!
//! The stock management client as a line-oriented terminal app.
//!
//! ## Module Organization
//! ```text
//! estoque_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── app.rs          ◄─── App<B>: backend + state
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState
//! │   ├── session.rs  ◄─── User, views, navigation guard
//! │   ├── catalog.rs  ◄─── Sorted product list
//! │   ├── notifications.rs ◄─ Non-blocking message queue
//! │   └── config.rs   ◄─── File/env/flag configuration
//! ├── commands/
//! │   ├── auth.rs     ◄─── login, logout, navigate
//! │   ├── product.rs  ◄─── product registry operations
//! │   └── movement.rs ◄─── stock movements
//! ├── render.rs       ◄─── State ──► screen text
//! ├── shell.rs        ◄─── stdin loop, command parsing
//! └── error.rs        ◄─── AppError for commands, RunError for startup
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use error::{AppError, CommandResult, ErrorCode, RunError};

use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use estoque_api::ApiClient;
use shell::Shell;
use state::AppConfig;

/// Runs the terminal app until `fim` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,estoque=info; override with RUST_LOG                │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, estoque.toml, ESTOQUE_* env, flags                      │
/// │                                                                         │
/// │  3. Build the HTTP Client ────────────────────────────────────────────► │
/// │     • One reqwest client, base URL + timeout                            │
/// │                                                                         │
/// │  4. Run the Shell ────────────────────────────────────────────────────► │
/// │     • Starts on the login screen                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), RunError> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;
    let client = ApiClient::new(config.client_config())?;
    info!(api_url = %client.base_url(), timeout_ms = config.api.timeout_ms, "Starting estoque");
    let mut app = App::new(client);

    let mut shell = Shell::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    shell.run(&mut app).await?;

    info!("Bye");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including every request
/// - `RUST_LOG=estoque_api=trace` - Trace for the HTTP client only
/// - Default: warnings, plus info from the estoque crates
///
/// Logs go to stderr so they can be redirected away from the screen.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,estoque=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! # Estoque Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         estoque (terminal)                              │
//! │                                                                         │
//! │  main.rs ────► current-thread tokio runtime, exit code                 │
//! │  lib.rs ─────► logging, config, HTTP client, shell                     │
//! │  shell.rs ───► one command per line until `fim`                        │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                 Inventory backend (REST)                                │
//! │                 /auth/login  /produtos  /movimentacoes                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match estoque_terminal::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("estoque: {err}");
            ExitCode::FAILURE
        }
    }
}

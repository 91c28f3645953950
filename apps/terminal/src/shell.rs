//! # Interactive Shell
//!
//! Reads one command per line, runs it against the [`App`], then prints the
//! screen and any queued notifications.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shell Loop                                     │
//! │                                                                         │
//! │   "> " ──► read line ──► parse_action ──► allowed in this view?         │
//! │                                               │          │              │
//! │                                              no         yes             │
//! │                                               │          ▼              │
//! │                                               │   run command (awaited) │
//! │                                               │          │              │
//! │                                               ▼          ▼              │
//! │                                  render_view + drained notifications    │
//! │                                                                         │
//! │   One command at a time: the next line is not read until the current   │
//! │   command (and any reload it triggers) has finished.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can script a whole session.

use std::io;

use estoque_api::InventoryBackend;
use estoque_core::{Credentials, ProductId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

use crate::app::App;
use crate::commands::Confirmation;
use crate::render::{help_text, render_notifications, render_view};
use crate::state::View;

pub const DELETE_PROMPT: &str = "Excluir este produto? [s/N] ";
const UNAVAILABLE: &str = "Comando indisponível nesta tela. Digite ajuda.";

// =============================================================================
// Actions
// =============================================================================

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Empty,
    Help,
    Quit,

    // Session
    /// Debug output masks the password
    Login(Credentials),
    Go(View),
    Logout,

    // Product registry
    Search(String),
    ClearSearch,
    SetName(String),
    /// Product quantity or movement quantity, depending on the view
    SetQuantity(String),
    SetMinimum(String),
    SubmitProduct,
    Edit(ProductId),
    CancelEdit,
    Delete(ProductId),

    // Stock movements
    SelectProduct(ProductId),
    SetType(String),
    SetDate(String),
    SetObservation(String),
    RegisterMovement,

    /// Known verb, bad arguments; carries the usage line
    Invalid(&'static str),
    Unknown(String),
}

impl Action {
    /// Whether the action makes sense on `view`.
    pub fn available_in(&self, view: View) -> bool {
        match self {
            Action::Empty | Action::Help | Action::Quit | Action::Invalid(_) | Action::Unknown(_) => {
                true
            }
            Action::Login(_) => view == View::Login,
            Action::Go(_) | Action::Logout => view != View::Login,
            Action::SetQuantity(_) => matches!(view, View::Products | View::Stock),
            Action::Search(_)
            | Action::ClearSearch
            | Action::SetName(_)
            | Action::SetMinimum(_)
            | Action::SubmitProduct
            | Action::Edit(_)
            | Action::CancelEdit
            | Action::Delete(_) => view == View::Products,
            Action::SelectProduct(_)
            | Action::SetType(_)
            | Action::SetDate(_)
            | Action::SetObservation(_)
            | Action::RegisterMovement => view == View::Stock,
        }
    }
}

/// Parses one input line.
pub fn parse_action(line: &str) -> Action {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "" => Action::Empty,
        "ajuda" | "?" => Action::Help,
        "fim" => Action::Quit,

        "entrar" => {
            // The password is everything after the email, inner spaces included.
            let (email, senha) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Action::Login(Credentials {
                email: email.to_string(),
                senha: senha.trim_start().to_string(),
            })
        }
        "produtos" => Action::Go(View::Products),
        "estoque" => Action::Go(View::Stock),
        "voltar" | "inicio" | "início" => Action::Go(View::Home),
        "sair" => Action::Logout,

        "buscar" => Action::Search(rest.to_string()),
        "limpar" => Action::ClearSearch,
        "nome" => Action::SetName(rest.to_string()),
        "qtd" => Action::SetQuantity(rest.to_string()),
        "min" => Action::SetMinimum(rest.to_string()),
        "cadastrar" | "salvar" => Action::SubmitProduct,
        "cancelar" => Action::CancelEdit,
        "editar" => parse_id(rest).map_or(Action::Invalid("Uso: editar <id>"), Action::Edit),
        "excluir" => parse_id(rest).map_or(Action::Invalid("Uso: excluir <id>"), Action::Delete),

        "produto" => {
            parse_id(rest).map_or(Action::Invalid("Uso: produto <id>"), Action::SelectProduct)
        }
        "tipo" => Action::SetType(rest.to_string()),
        "data" => Action::SetDate(rest.to_string()),
        "obs" => Action::SetObservation(rest.to_string()),
        "registrar" => Action::RegisterMovement,

        other => Action::Unknown(other.to_string()),
    }
}

fn parse_id(text: &str) -> Option<ProductId> {
    text.trim().trim_start_matches('#').parse().ok()
}

// =============================================================================
// Shell
// =============================================================================

/// Whether the loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W) -> Self {
        Shell {
            lines: input.lines(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `fim` or end of input.
    pub async fn run<B: InventoryBackend>(&mut self, app: &mut App<B>) -> io::Result<()> {
        self.write(&render_view(app.state())).await?;
        self.write(&format!("{}\n", help_text(app.state().session.view()))).await?;

        loop {
            self.write("> ").await?;
            let Some(line) = self.lines.next_line().await? else {
                debug!("End of input");
                break;
            };

            let action = parse_action(&line);
            if self.dispatch(app, action).await? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Runs one action and prints the result.
    pub async fn dispatch<B: InventoryBackend>(
        &mut self,
        app: &mut App<B>,
        action: Action,
    ) -> io::Result<Flow> {
        let view = app.state().session.view();
        debug!(?action, ?view, "Dispatch");

        if !action.available_in(view) {
            self.write(&format!("{UNAVAILABLE}\n")).await?;
            return Ok(Flow::Continue);
        }

        match action {
            Action::Empty => return Ok(Flow::Continue),
            Action::Quit => return Ok(Flow::Quit),
            Action::Help => {
                self.write(&format!("{}\n", help_text(view))).await?;
                return Ok(Flow::Continue);
            }
            Action::Invalid(usage) => {
                self.write(&format!("{usage}\n")).await?;
                return Ok(Flow::Continue);
            }
            Action::Unknown(verb) => {
                self.write(&format!("Comando desconhecido: {verb}. Digite ajuda.\n"))
                    .await?;
                return Ok(Flow::Continue);
            }

            Action::Login(credentials) => {
                let result = app.login_with(&credentials.email, &credentials.senha).await;
                app.report(result);
            }
            Action::Go(target) => {
                let result = app.navigate(target).await;
                app.report(result);
            }
            Action::Logout => app.logout(),

            Action::Search(term) => {
                let result = app.search(&term).await;
                app.report(result);
            }
            Action::ClearSearch => {
                let result = app.clear_search().await;
                app.report(result);
            }
            Action::SetName(nome) => app.state.editor.form.nome = nome,
            Action::SetQuantity(value) if view == View::Stock => {
                app.state.movement.quantidade = value
            }
            Action::SetQuantity(value) => app.state.editor.form.quantidade = value,
            Action::SetMinimum(value) => app.state.editor.form.estoque_minimo = value,
            Action::SubmitProduct => {
                let result = app.submit_product().await;
                app.report(result);
            }
            Action::Edit(id) => {
                let result = app.start_edit(id);
                app.report(result);
            }
            Action::CancelEdit => app.cancel_edit(),
            Action::Delete(id) => {
                if let Some(product) = app.state().catalog.find(id) {
                    let line = format!("{}\n", product.nome);
                    self.write(&line).await?;
                }
                let answer = self.ask(DELETE_PROMPT).await?;
                let result = app.delete_product(id, Confirmation::from_answer(&answer)).await;
                app.report(result);
            }

            Action::SelectProduct(id) => {
                let result = app.select_product(id);
                app.report(result);
            }
            Action::SetType(tipo) => app.state.movement.tipo = tipo,
            Action::SetDate(data) => app.state.movement.data = data,
            Action::SetObservation(obs) => app.state.movement.observacao = obs,
            Action::RegisterMovement => {
                let result = app.submit_movement().await;
                app.report(result);
            }
        }

        let screen = render_view(app.state());
        self.write(&screen).await?;

        let notifications = app.state.notifications.drain();
        self.write(&render_notifications(&notifications)).await?;

        Ok(Flow::Continue)
    }

    /// Prompts and reads one answer. End of input reads as an empty answer.
    async fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.write(prompt).await?;
        Ok(self.lines.next_line().await?.unwrap_or_default())
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }
}

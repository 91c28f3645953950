//! # Screen Rendering
//!
//! Pure functions from state to text. The shell prints whatever these
//! return; nothing here touches the terminal.

use std::fmt::Write;

use estoque_core::form::FormMode;
use estoque_core::{MovementType, Product};

use crate::state::{AppState, Notification, View};

const HEADER: &str = "Meia Meia Meia - Gestão de Estoque";

/// The whole screen for the active view.
pub fn render_view(state: &AppState) -> String {
    let view = state.session.view();
    let mut out = String::new();

    let _ = writeln!(out, "{HEADER}");
    let _ = writeln!(out, "== {} ==", view.title());

    match view {
        View::Login => render_login(state, &mut out),
        View::Home => render_home(state, &mut out),
        View::Products => render_products(state, &mut out),
        View::Stock => render_stock(state, &mut out),
    }

    out
}

fn render_login(state: &AppState, out: &mut String) {
    let senha = "*".repeat(state.login.senha.chars().count());
    let _ = writeln!(out, "Email: {}", state.login.email);
    let _ = writeln!(out, "Senha: {senha}");
}

fn render_home(state: &AppState, out: &mut String) {
    let nome = state.session.user().map(|u| u.nome.as_str()).unwrap_or_default();
    let _ = writeln!(out, "Olá, {nome}");
    let _ = writeln!(out);
    let _ = writeln!(out, "  produtos   Cadastro de Produto");
    let _ = writeln!(out, "  estoque    Gestão de Estoque");
    let _ = writeln!(out, "  sair       Sair");
}

fn render_products(state: &AppState, out: &mut String) {
    let term = state.catalog.search_term();
    if !term.is_empty() {
        let _ = writeln!(out, "Busca: \"{term}\"");
    }

    let editor = &state.editor;
    match editor.mode() {
        FormMode::Creating => {
            let _ = writeln!(out, "Novo produto");
        }
        FormMode::Editing(id) => {
            let _ = writeln!(out, "Editando produto #{id}");
        }
    }
    let _ = writeln!(out, "  Nome:           {}", editor.form.nome);
    let _ = writeln!(out, "  Quantidade:     {}", editor.form.quantidade);
    let _ = writeln!(out, "  Estoque mínimo: {}", editor.form.estoque_minimo);
    let _ = writeln!(out);

    if state.catalog.is_loading() {
        let _ = writeln!(out, "Carregando...");
        return;
    }

    out.push_str(&product_table(state.catalog.products()));
    match state.catalog.low_stock_count() {
        0 => {}
        1 => {
            let _ = writeln!(out, "⚠️ 1 produto abaixo do estoque mínimo.");
        }
        n => {
            let _ = writeln!(out, "⚠️ {n} produtos abaixo do estoque mínimo.");
        }
    }
}

/// The registry table: id, name, quantity, minimum and the alert column.
pub fn product_table(products: &[Product]) -> String {
    let mut out = String::new();

    if products.is_empty() {
        let _ = writeln!(out, "Nenhum produto.");
        return out;
    }

    let width = products
        .iter()
        .map(|p| p.nome.chars().count())
        .max()
        .unwrap_or(0)
        .max("Nome".len());

    let _ = writeln!(out, "{:>4}  {:<width$}  {:>5}  {:>5}  Alerta", "ID", "Nome", "Qtd", "Mín");
    for p in products {
        let alert = if p.is_below_minimum() { "⚠️" } else { "—" };
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>5}  {:>5}  {alert}",
            p.id, p.nome, p.quantidade, p.estoque_minimo
        );
    }
    out
}

fn render_stock(state: &AppState, out: &mut String) {
    let _ = writeln!(out, "Produtos (ordem alfabética)");
    if state.catalog.is_loading() {
        let _ = writeln!(out, "Carregando...");
    } else if state.catalog.products().is_empty() {
        let _ = writeln!(out, "Nenhum produto.");
    }
    for p in state.catalog.products() {
        let _ = write!(out, "  #{} {}  Qtd: {}  Mín: {}", p.id, p.nome, p.quantidade, p.estoque_minimo);
        if p.is_below_minimum() {
            let _ = write!(out, "  ⚠️ Baixo");
        }
        let _ = writeln!(out);
    }

    let draft = &state.movement;
    let produto = draft
        .produto_id
        .and_then(|id| state.catalog.find(id))
        .map(|p| p.nome.as_str())
        .unwrap_or("Selecione...");
    let radio = |tipo: MovementType| if draft.tipo == tipo.as_str() { "(•)" } else { "( )" };

    let _ = writeln!(out);
    let _ = writeln!(out, "Registrar movimentação");
    let _ = writeln!(out, "  Produto:    {produto}");
    let _ = writeln!(
        out,
        "  Tipo:       {} {}  {} {}",
        radio(MovementType::Entrada),
        MovementType::Entrada.label(),
        radio(MovementType::Saida),
        MovementType::Saida.label()
    );
    let _ = writeln!(out, "  Quantidade: {}", draft.quantidade);
    let _ = writeln!(out, "  Data:       {}", draft.data);
    let _ = writeln!(out, "  Observação: {}", draft.observacao);
}

/// One line per notification, icon first.
pub fn render_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|n| format!("{} {}\n", n.severity.icon(), n.message))
        .collect()
}

/// Commands available in a view.
pub fn help_text(view: View) -> &'static str {
    match view {
        View::Login => "entrar <email> <senha>   ajuda   fim",
        View::Home => "produtos   estoque   sair   ajuda   fim",
        View::Products => {
            "buscar <termo>   limpar   nome <texto>   qtd <n>   min <n>\n\
             cadastrar   editar <id>   salvar   cancelar   excluir <id>\n\
             voltar   sair   ajuda   fim"
        }
        View::Stock => {
            "produto <id>   tipo <entrada|saida>   qtd <n>   data <AAAA-MM-DD>\n\
             obs <texto>   registrar   voltar   sair   ajuda   fim"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Severity;
    use estoque_core::User;
    use uuid::Uuid;

    fn product(id: i64, nome: &str, quantidade: u32, estoque_minimo: u32) -> Product {
        Product {
            id,
            nome: nome.to_string(),
            quantidade,
            estoque_minimo,
        }
    }

    fn logged_in(view: View) -> AppState {
        let mut state = AppState::new();
        state.session.sign_in(User {
            id: 1,
            nome: "Ana".to_string(),
            email: None,
        });
        state.session.navigate(view).unwrap();
        state
    }

    #[test]
    fn test_login_masks_password() {
        let mut state = AppState::new();
        state.login.email = "a@b.com".to_string();
        state.login.senha = "segredo".to_string();

        let screen = render_view(&state);
        assert!(screen.contains("Email: a@b.com"));
        assert!(screen.contains("Senha: *******"));
        assert!(!screen.contains("segredo"));
    }

    #[test]
    fn test_home_greeting() {
        let screen = render_view(&logged_in(View::Home));
        assert!(screen.contains("Olá, Ana"));
    }

    #[test]
    fn test_product_table_alerts() {
        let table = product_table(&[product(1, "Caneta", 10, 5), product(2, "Lápis", 2, 5)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Nome") && lines[0].contains("Alerta"));
        assert!(lines[1].contains("Caneta") && lines[1].ends_with('—'));
        assert!(lines[2].contains("Lápis") && lines[2].ends_with("⚠️"));
    }

    #[test]
    fn test_empty_and_loading() {
        assert_eq!(product_table(&[]), "Nenhum produto.\n");

        let mut state = logged_in(View::Products);
        state.catalog.begin_load();
        let screen = render_view(&state);
        assert!(screen.contains("Carregando..."));
        assert!(!screen.contains("Nenhum produto."));
    }

    #[test]
    fn test_low_stock_summary() {
        let mut state = logged_in(View::Products);
        state.catalog.finish_load(Some(vec![product(1, "Caneta", 10, 5)]));
        assert!(!render_view(&state).contains("abaixo do estoque mínimo"));

        state.catalog.finish_load(Some(vec![
            product(1, "Caneta", 10, 5),
            product(2, "Lápis", 2, 5),
        ]));
        assert!(render_view(&state).contains("⚠️ 1 produto abaixo do estoque mínimo."));

        state.catalog.finish_load(Some(vec![
            product(1, "Caneta", 0, 5),
            product(2, "Lápis", 2, 5),
        ]));
        assert!(render_view(&state).contains("⚠️ 2 produtos abaixo do estoque mínimo."));
    }

    #[test]
    fn test_editing_mode_is_shown() {
        let mut state = logged_in(View::Products);
        state.editor.start_edit(&product(7, "Caneta", 10, 5));

        let screen = render_view(&state);
        assert!(screen.contains("Editando produto #7"));
        assert!(screen.contains("Nome:           Caneta"));
    }

    #[test]
    fn test_stock_view() {
        let mut state = logged_in(View::Stock);
        state.catalog.finish_load(Some(vec![
            product(1, "Caneta", 10, 5),
            product(2, "Lápis", 2, 5),
        ]));
        state.movement.produto_id = Some(2);
        state.movement.tipo = "saida".to_string();

        let screen = render_view(&state);
        let lapis = screen.lines().find(|l| l.contains("#2 Lápis")).unwrap();
        let caneta = screen.lines().find(|l| l.contains("#1 Caneta")).unwrap();
        assert!(lapis.ends_with("⚠️ Baixo"));
        assert!(!caneta.contains("Baixo"));
        assert!(screen.contains("Produto:    Lápis"));
        assert!(screen.contains("( ) Entrada  (•) Saída"));
    }

    #[test]
    fn test_notifications() {
        let notes = vec![Notification {
            id: Uuid::new_v4(),
            severity: Severity::Success,
            message: "Movimentação registrada com sucesso.".to_string(),
        }];
        assert_eq!(
            render_notifications(&notes),
            "✅ Movimentação registrada com sucesso.\n"
        );
    }
}

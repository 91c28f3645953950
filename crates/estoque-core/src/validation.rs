//! # Validation Module
//!
//! Turns raw form text into request bodies, or explains why it can't.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal shell                                               │
//! │  └── Splits the typed line into an action + raw text                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any request is built)                    │
//! │  ├── Required fields, email shape, search length                       │
//! │  ├── Text → number coercion (finite, whole, sign)                      │
//! │  └── Date → ISO-8601 UTC timestamp                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── Everything else; its `error` message is shown verbatim            │
//! │                                                                         │
//! │  A validation failure means no request was sent.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use estoque_core::validation::{validate_credentials, validate_search_term};
//!
//! assert!(validate_credentials("a@b.com", "x").is_ok());
//! assert!(validate_search_term(" c ").is_err());
//! ```

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::form::{MovementDraft, ProductForm};
use crate::types::{Credentials, MovementType, NewMovement, ProductPayload, User};
use crate::MIN_SEARCH_CHARS;

// =============================================================================
// Text Helpers
// =============================================================================

/// True when the text has something other than whitespace.
fn not_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Parses typed text as a finite number.
///
/// Blank text, non-numbers, `inf` and `NaN` all yield `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses typed text as a stock count: a whole number, zero or more.
///
/// `"10"` and `"10.0"` are accepted; `"10.5"`, `"-1"` and `""` are not.
pub fn parse_stock_count(text: &str) -> Option<u32> {
    let n = parse_number(text)?;
    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}

// =============================================================================
// Session
// =============================================================================

/// Validates the login form.
///
/// ## Rules
/// - Email and password must both be non-blank
/// - Email must look like `local@domain.tld` (no spaces, one `@`)
///
/// The email is sent exactly as typed; the pattern already rejects any
/// surrounding whitespace.
pub fn validate_credentials(email: &str, senha: &str) -> ValidationResult<Credentials> {
    if !not_blank(email) || !not_blank(senha) {
        return Err(ValidationError::MissingCredentials);
    }

    if !email_pattern().is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(Credentials {
        email: email.to_string(),
        senha: senha.to_string(),
    })
}

// =============================================================================
// Products
// =============================================================================

/// Validates a search term.
///
/// ## Returns
/// The trimmed term, which must be at least [`MIN_SEARCH_CHARS`] characters.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.chars().count() < MIN_SEARCH_CHARS {
        return Err(ValidationError::SearchTermTooShort {
            min: MIN_SEARCH_CHARS,
        });
    }

    Ok(term.to_string())
}

/// Validates the product form, used for both create and update.
///
/// ## Rules
/// - Name non-blank after trimming (the trimmed name is sent)
/// - Quantity and minimum stock required, numeric, whole and >= 0
///
/// ## Example
/// ```rust
/// use estoque_core::form::ProductForm;
/// use estoque_core::validation::validate_product_form;
///
/// assert!(validate_product_form(&ProductForm::new("Caneta", "10", "5")).is_ok());
/// assert!(validate_product_form(&ProductForm::new("Caneta", "-1", "5")).is_err());
/// ```
pub fn validate_product_form(form: &ProductForm) -> ValidationResult<ProductPayload> {
    let nome = form.nome.trim();
    if nome.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let quantidade =
        parse_stock_count(&form.quantidade).ok_or(ValidationError::InvalidQuantity)?;

    let estoque_minimo =
        parse_stock_count(&form.estoque_minimo).ok_or(ValidationError::InvalidMinimumStock)?;

    Ok(ProductPayload {
        nome: nome.to_string(),
        quantidade,
        estoque_minimo,
    })
}

// =============================================================================
// Movements
// =============================================================================

/// Parses the movement date into a UTC timestamp.
///
/// ## Accepted Inputs
/// - `YYYY-MM-DD` (what a date picker produces) → midnight UTC
/// - RFC 3339 (`2024-05-01T14:30:00-03:00`) → converted to UTC
pub fn parse_movement_date(text: &str) -> ValidationResult<DateTime<Utc>> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::DateRequired);
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidDate {
            value: text.to_string(),
        })
}

/// Validates the movement form against the logged-in user.
///
/// ## Check Order
/// ```text
/// user? ──► product? ──► tipo ∈ {entrada, saida}? ──► quantity > 0? ──► date?
///   │          │                  │                        │              │
///   ▼          ▼                  ▼                        ▼              ▼
/// NotLoggedIn  ProductNot-   InvalidMovement-      NonPositive-     DateRequired /
///              Selected      Type                  Quantity         InvalidDate
/// ```
///
/// The observation is trimmed; a blank one is sent as `null`.
pub fn validate_movement(
    draft: &MovementDraft,
    user: Option<&User>,
) -> ValidationResult<NewMovement> {
    let user = user.ok_or(ValidationError::NotLoggedIn)?;

    let produto_id = draft
        .produto_id
        .ok_or(ValidationError::ProductNotSelected)?;

    let tipo: MovementType = draft.tipo.parse()?;

    let quantidade = parse_number(&draft.quantidade).unwrap_or(0.0);
    if quantidade <= 0.0 {
        return Err(ValidationError::NonPositiveQuantity);
    }
    if quantidade.fract() != 0.0 || quantidade > f64::from(u32::MAX) {
        return Err(ValidationError::FractionalQuantity);
    }

    let data_movimentacao = parse_movement_date(&draft.data)?;

    let observacao = Some(draft.observacao.trim())
        .filter(|obs| !obs.is_empty())
        .map(str::to_string);

    Ok(NewMovement {
        produto_id,
        usuario_id: user.id,
        tipo,
        quantidade: quantidade as u32,
        data_movimentacao,
        observacao,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

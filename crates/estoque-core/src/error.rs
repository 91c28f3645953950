//! # Error Types
//!
//! Validation errors raised by estoque-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  estoque-core errors (this file)                                       │
//! │  └── ValidationError  - Form input rejected before any request         │
//! │                                                                         │
//! │  estoque-api errors (separate crate)                                   │
//! │  └── ClientError      - Network failure or non-2xx response            │
//! │                                                                         │
//! │  Terminal errors (in app)                                              │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        ClientError ─────┴──► AppError ──► Notification queue           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Messages
//! The `Display` text of every variant is the exact sentence shown to the
//! operator, in Portuguese, so the terminal never has to translate.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant is caught before a request is built, so a `ValidationError`
/// always means "nothing was sent to the backend".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email or password left blank on the login form.
    #[error("Informe email e senha.")]
    MissingCredentials,

    /// Email does not look like `local@domain.tld`.
    #[error("Email inválido.")]
    InvalidEmail,

    /// Search term shorter than the minimum after trimming.
    #[error("Digite ao menos {min} caracteres.")]
    SearchTermTooShort { min: usize },

    /// Product name blank after trimming.
    #[error("O nome é obrigatório.")]
    NameRequired,

    /// Product quantity empty, non-numeric, fractional or negative.
    #[error("Quantidade inválida (não pode ser vazia ou negativa).")]
    InvalidQuantity,

    /// Minimum stock empty, non-numeric, fractional or negative.
    #[error("Estoque mínimo inválido (não pode ser vazio ou negativo).")]
    InvalidMinimumStock,

    /// An action that needs an identity was attempted while logged out.
    #[error("Faça login.")]
    NotLoggedIn,

    /// No product chosen on the movement form.
    #[error("Selecione um produto.")]
    ProductNotSelected,

    /// Movement type other than `entrada` / `saida`.
    #[error("Tipo inválido.")]
    InvalidMovementType { value: String },

    /// Movement quantity not a finite whole number greater than zero.
    #[error("Informe uma quantidade maior que 0.")]
    NonPositiveQuantity,

    /// Movement quantity positive but with a fractional part.
    #[error("A quantidade deve ser um número inteiro.")]
    FractionalQuantity,

    /// Movement date left blank.
    #[error("A data da movimentação é obrigatória.")]
    DateRequired,

    /// Movement date present but not a recognisable date.
    #[error("Data da movimentação inválida: {value}")]
    InvalidDate { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingCredentials.to_string(),
            "Informe email e senha."
        );
        assert_eq!(
            ValidationError::SearchTermTooShort { min: 2 }.to_string(),
            "Digite ao menos 2 caracteres."
        );
        assert_eq!(
            ValidationError::InvalidMovementType {
                value: "transferencia".to_string()
            }
            .to_string(),
            "Tipo inválido."
        );
    }

    #[test]
    fn test_invalid_date_carries_input() {
        let err = ValidationError::InvalidDate {
            value: "31/02".to_string(),
        };
        assert_eq!(err.to_string(), "Data da movimentação inválida: 31/02");
    }
}

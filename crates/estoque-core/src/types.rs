//! # Domain Types
//!
//! Types exchanged with the inventory backend. Field names are the backend's
//! (Portuguese) JSON keys, so the structs serialize without renames.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │      User       │   │    Product      │   │    NewMovement      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id             │   │  produto_id (FK)    │   │
//! │  │  nome           │   │  nome           │   │  usuario_id (FK)    │   │
//! │  │  email?         │   │  quantidade     │   │  tipo               │   │
//! │  └─────────────────┘   │  estoque_minimo │   │  quantidade (> 0)   │   │
//! │                        └─────────────────┘   │  data_movimentacao  │   │
//! │                                              │  observacao?        │   │
//! │  ┌─────────────────┐   ┌─────────────────┐   └─────────────────────┘   │
//! │  │  MovementType   │   │ MovementReceipt │                             │
//! │  │  Entrada        │   │  produto.abaixo │                             │
//! │  │  Saida          │   │  _do_minimo     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Nothing here is stored locally beyond the current session. The backend
//! is the system of record; the client only holds view-model copies.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Backend identifier of a product.
pub type ProductId = i64;

/// Backend identifier of a user.
pub type UserId = i64;

// =============================================================================
// User
// =============================================================================

/// The authenticated operator, as returned by `POST /auth/login`.
///
/// Lives only in memory and is dropped on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Display name, used in the home greeting.
    pub nome: String,

    /// Some backends omit the email from the login response.
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub senha: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("senha", &"***")
            .finish()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record.
///
/// Quantities are unsigned, so the "never negative" invariant holds by
/// construction: a backend that answered with a negative number would fail
/// to decode instead of reaching the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub nome: String,
    pub quantidade: u32,
    pub estoque_minimo: u32,
}

impl Product {
    /// Whether the product is flagged as low stock.
    ///
    /// Derived, never stored: `quantidade < estoque_minimo`. A product sitting
    /// exactly at its minimum is not flagged.
    #[inline]
    pub fn is_below_minimum(&self) -> bool {
        self.quantidade < self.estoque_minimo
    }
}

/// Body of `POST /produtos` and `PUT /produtos/{id}`.
///
/// Only produced by [`crate::validation::validate_product_form`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub nome: String,
    pub quantidade: u32,
    pub estoque_minimo: u32,
}

// =============================================================================
// Movement
// =============================================================================

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Stock coming in.
    #[default]
    Entrada,

    /// Stock going out.
    Saida,
}

impl MovementType {
    /// Wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MovementType::Entrada => "entrada",
            MovementType::Saida => "saida",
        }
    }

    /// Label shown on screen.
    pub const fn label(&self) -> &'static str {
        match self {
            MovementType::Entrada => "Entrada",
            MovementType::Saida => "Saída",
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MovementType {
    type Err = crate::ValidationError;

    /// Accepts exactly `entrada` or `saida`, nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrada" => Ok(MovementType::Entrada),
            "saida" => Ok(MovementType::Saida),
            other => Err(crate::ValidationError::InvalidMovementType {
                value: other.to_string(),
            }),
        }
    }
}

/// Body of `POST /movimentacoes`.
///
/// Only produced by [`crate::validation::validate_movement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMovement {
    pub produto_id: ProductId,
    pub usuario_id: UserId,
    pub tipo: MovementType,
    pub quantidade: u32,

    /// Sent as `2024-05-01T00:00:00.000Z`.
    #[serde(serialize_with = "serialize_iso_millis")]
    pub data_movimentacao: DateTime<Utc>,

    /// `None` is sent as JSON `null`.
    pub observacao: Option<String>,
}

fn serialize_iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Response of `POST /movimentacoes`.
///
/// Only the low-stock flag is used; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovementReceipt {
    #[serde(default)]
    pub produto: Option<StockStatus>,
}

/// Stock status of the product a movement touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StockStatus {
    /// Backends on numeric SQL columns send `1`/`0` instead of a boolean.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub abaixo_do_minimo: bool,
}

/// Reads any JSON value as a flag: `false`, `null`, `0` and `""` are false,
/// everything else true.
fn deserialize_truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let flag = match Value::deserialize(d)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    Ok(flag)
}

impl MovementReceipt {
    /// Whether the backend reports the product below its minimum.
    pub fn is_below_minimum(&self) -> bool {
        self.produto
            .as_ref()
            .map_or(false, |status| status.abaixo_do_minimo)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

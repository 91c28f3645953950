//! # Name Collation
//!
//! Ordering of product names the way a pt-BR reader expects: case and
//! accents are ignored when comparing ("base" strength), so `água`,
//! `Agulha` and `AMACIANTE` sort as `a-g-u-a`, `a-g-u-l-h-a`, `a-m-a-...`.
//!
//! ## How a Comparison Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Base-Strength Comparison                             │
//! │                                                                         │
//! │  "Ção Azul"              "cao azul"                                    │
//! │       │                       │                                         │
//! │       ▼ lowercase             ▼ lowercase                               │
//! │  "ção azul"              "cao azul"                                    │
//! │       │                       │                                         │
//! │       ▼ NFD, drop marks       ▼ NFD, drop marks                         │
//! │  "cao azul"              "cao azul"                                    │
//! │       │                       │                                         │
//! │       └──────── cmp ──────────┘                                         │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │            Ordering::Equal  → stable sort keeps server order           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decomposing first means precomposed (`É`) and decomposed (`E` + U+0301)
//! spellings compare the same. Letters with no decomposition, such as `ø`,
//! go through a small fold table.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::Product;

/// Base letters of the few accented letters NFD leaves whole.
fn fold_char(c: char) -> char {
    match c {
        'ø' => 'o',
        'đ' => 'd',
        'ħ' => 'h',
        'ł' => 'l',
        other => other,
    }
}

/// The characters a name is compared by: lowercased, decomposed, with
/// combining marks removed.
fn base_chars(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_char)
}

/// Compares two names ignoring case and accents.
///
/// ## Example
/// ```rust
/// use std::cmp::Ordering;
/// use estoque_core::collation::compare_names;
///
/// assert_eq!(compare_names("Ação", "acao"), Ordering::Equal);
/// assert_eq!(compare_names("Éter", "Zinco"), Ordering::Less);
/// ```
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_chars(a).cmp(base_chars(b))
}

/// Sorts products by name, ascending, in place.
///
/// Uses a stable sort: names that compare equal keep the order the backend
/// sent them in, which makes sorting an already-sorted list a no-op.
pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by(|a, b| compare_names(&a.nome, &b.nome));
}

// =============================================================================
// Unit Tests
// =============================================================================

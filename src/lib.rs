//! Vidminok - Ukrainian declension engine
//!
//! This crate re-exports all layers of the Vidminok system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: vidminok_phrase     — Exception cascade, phrase orchestration, facade
//! Layer 1: vidminok_grammar    — Gender, groups, noun and adjective rule sets
//! Layer 0: vidminok_foundation — Grammatical types, errors, Cyrillic helpers
//! ```
//!
//! # Example
//!
//! ```
//! use vidminok::foundation::{GrammaticalCase, Number};
//! use vidminok::phrase::Declensioner;
//!
//! let engine = Declensioner::new();
//! let declined = engine
//!     .decline("книга", GrammaticalCase::Genitive, Number::Singular, None)
//!     .unwrap();
//! assert_eq!(declined, "книги");
//! ```

pub use vidminok_foundation as foundation;
pub use vidminok_grammar as grammar;
pub use vidminok_phrase as phrase;

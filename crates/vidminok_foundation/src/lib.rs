//! Core grammatical types, errors, and Cyrillic word helpers for Vidminok.
//!
//! This crate provides:
//! - [`GrammaticalCase`], [`Number`], [`Gender`] - the closed grammatical enumerations
//! - [`Declension`] - declension group classification results
//! - [`NounSubgroup`] - the hard/soft/mixed split within a declension group
//! - [`Error`] - the single classification error type
//! - [`letters`] - char-boundary string helpers and velar alternation
//! - [`casing`] - letter-case detection and transfer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod case;
pub mod casing;
pub mod error;
pub mod gender;
pub mod letters;

pub use case::{GrammaticalCase, Number};
pub use casing::{LetterCase, copy_letter_case, is_titlecase_word, is_uppercase_word};
pub use error::{Error, Result};
pub use gender::{Declension, Gender, NounSubgroup};

#![forbid(unsafe_code)]

//! Core masking primitives for maskform.
//!
//! This crate provides the pieces a masked form field is built from:
//! - [`MaskPattern`] - a parsed mask template (`'9'` = digit placeholder,
//!   anything else is a literal)
//! - [`MaskKind`] - the fixed registry of symbolic patterns (phone, CPF,
//!   CEP, CNPJ)
//! - [`apply_mask`] / [`strip_mask`] - the pure, total conversion between
//!   raw digit strings and formatted display strings
//! - [`KeyEvent`] and [`filter_key`] - the keystroke gate that keeps
//!   non-digit characters out of a masked field
//!
//! # Example
//! ```
//! use maskform_core::{MaskKind, apply_mask, strip_mask};
//!
//! let phone = MaskKind::Phone.pattern();
//! assert_eq!(apply_mask("11987654321", &phone), "(11) 98765-4321");
//! assert_eq!(strip_mask("(11) 98765-4321"), "11987654321");
//! ```

pub mod engine;
pub mod key;
pub mod pattern;

pub use engine::{apply_mask, strip_mask};
pub use key::{KeyCode, KeyEvent, Modifiers, filter_key};
pub use pattern::{MaskKind, MaskPattern, MaskToken, resolve};

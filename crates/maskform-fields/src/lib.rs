#![forbid(unsafe_code)]

//! Field and form state for maskform.
//!
//! This crate provides the stateful layer on top of the pure engine in
//! `maskform-core`:
//! - [`MaskedField`] - owns a field's raw digit value and re-derives the
//!   display string on every read
//! - [`FieldChange`] - the plain message a field hands to its form
//! - [`ClientRecord`] - the raw-value payload exchanged with persistence
//! - [`RegistrationForm`] - the client-registration form with per-field
//!   validation errors
//! - [`postal`] - CEP normalization for the postal-code lookup path
//!
//! # Example
//! ```
//! use maskform_core::MaskKind;
//! use maskform_fields::MaskedField;
//!
//! let mut cpf = MaskedField::new("cpf", MaskKind::Cpf);
//! cpf.accept_text("529.982.247-25");
//! assert_eq!(cpf.raw(), "52998224725");
//! assert_eq!(cpf.display(), "529.982.247-25");
//! ```

pub mod field;
pub mod form;
pub mod postal;
pub mod record;

pub use field::{FieldChange, MaskedField};
pub use form::RegistrationForm;
pub use postal::{CepError, format_cep, normalize_cep};
pub use record::ClientRecord;

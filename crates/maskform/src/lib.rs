#![forbid(unsafe_code)]

//! Maskform public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use maskform::prelude::*;
//!
//! let mut form = RegistrationForm::new();
//! form.set("full_name", "Maria Souza");
//! form.set("email", "maria@example.com");
//! form.set("phone", "11987654321");
//! form.set("cpf", "52998224725");
//!
//! assert!(form.validate());
//! assert_eq!(form.cpf().display(), "529.982.247-25");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use maskform_core::engine::{apply_mask, strip_mask};
pub use maskform_core::key::{KeyCode, KeyEvent, Modifiers, filter_key};
pub use maskform_core::pattern::{MaskKind, MaskPattern, MaskToken, resolve};

// --- Field/form re-exports -------------------------------------------------

pub use maskform_fields::field::{FieldChange, MaskedField};
pub use maskform_fields::form::RegistrationForm;
pub use maskform_fields::postal::{CepError, format_cep, normalize_cep};
pub use maskform_fields::record::ClientRecord;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use maskform_core::engine::{apply_mask, strip_mask};
    pub use maskform_core::key::{KeyCode, KeyEvent, Modifiers, filter_key};
    pub use maskform_core::pattern::{MaskKind, MaskPattern};
    pub use maskform_fields::field::{FieldChange, MaskedField};
    pub use maskform_fields::form::RegistrationForm;
    pub use maskform_fields::record::ClientRecord;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_surface() {
        let pattern = resolve("cep");
        assert_eq!(apply_mask("01310100", &pattern), "01310-100");
        assert_eq!(strip_mask("01310-100"), "01310100");
        assert!(filter_key(&KeyEvent::new(KeyCode::Char('7'))));
    }

    #[test]
    fn test_prelude_compiles() {
        use crate::prelude::*;
        let field = MaskedField::new("cpf", MaskKind::Cpf);
        assert!(field.is_empty());
    }
}

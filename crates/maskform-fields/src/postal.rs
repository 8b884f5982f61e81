#![forbid(unsafe_code)]

//! CEP normalization for the postal-code lookup path.
//!
//! The lookup service itself is an external collaborator; this module only
//! prepares its input. A CEP must be exactly eight digits, and a single
//! digit repeated eight times is rejected before any request is made.

use std::error::Error;
use std::fmt;

use maskform_core::{MaskKind, apply_mask, strip_mask};

/// Why a CEP failed normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CepError {
    /// The cleaned value did not have exactly 8 digits.
    WrongLength(usize),
    /// The value is one digit repeated eight times (e.g. `00000000`).
    RepeatedDigits,
}

impl fmt::Display for CepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "CEP must have 8 digits, got {len}")
            }
            Self::RepeatedDigits => f.write_str("CEP is a repeated digit sequence"),
        }
    }
}

impl Error for CepError {}

/// Normalize a CEP for lookup.
///
/// Accepts formatted (`01310-100`) or raw (`01310100`) input; returns the
/// clean eight-digit string.
pub fn normalize_cep(text: &str) -> Result<String, CepError> {
    let clean = strip_mask(text);
    if clean.len() != 8 {
        return Err(CepError::WrongLength(clean.len()));
    }
    let mut chars = clean.chars();
    let first = chars.next();
    if chars.all(|c| Some(c) == first) {
        return Err(CepError::RepeatedDigits);
    }
    Ok(clean)
}

/// Format a CEP for display (`01310100` -> `01310-100`).
#[must_use]
pub fn format_cep(text: &str) -> String {
    apply_mask(text, &MaskKind::Cep.pattern())
}

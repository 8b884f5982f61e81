#![forbid(unsafe_code)]

//! Mask pattern model and the symbolic pattern registry.
//!
//! A pattern is an ordered token sequence parsed from a template string.
//! `'9'` marks a digit placeholder; every other character is a literal that
//! is emitted verbatim and consumes no input. Patterns are immutable after
//! parsing - a field keeps the same pattern for the whole editing session.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// The digit placeholder character in mask templates.
pub const PLACEHOLDER: char = '9';

/// One position of a mask template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskToken {
    /// Consumes exactly one input digit.
    Digit,
    /// Emitted verbatim; consumes no input.
    Literal(char),
}

/// A parsed mask template.
///
/// Longest registered template (CNPJ) is 18 positions, so token storage
/// stays inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskPattern {
    tokens: SmallVec<[MaskToken; 24]>,
}

impl MaskPattern {
    /// Parse a template string into a pattern.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let tokens = template
            .chars()
            .map(|c| {
                if c == PLACEHOLDER {
                    MaskToken::Digit
                } else {
                    MaskToken::Literal(c)
                }
            })
            .collect();
        Self { tokens }
    }

    /// The empty pattern. Masking with it always produces `""`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the pattern has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of positions (placeholders plus literals).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Number of digit placeholders - the field's raw-value capacity.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, MaskToken::Digit))
            .count()
    }

    /// The token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }
}

impl fmt::Display for MaskPattern {
    /// Reconstructs the template string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                MaskToken::Digit => f.write_str("9")?,
                MaskToken::Literal(c) => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for MaskPattern {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}

/// The fixed table of symbolic mask kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// Brazilian mobile phone: `(99) 99999-9999`.
    Phone,
    /// Individual taxpayer ID: `999.999.999-99`.
    Cpf,
    /// Postal code: `99999-999`.
    Cep,
    /// Company taxpayer ID: `99.999.999/9999-99`.
    Cnpj,
}

impl MaskKind {
    /// The template string for this kind.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Phone => "(99) 99999-9999",
            Self::Cpf => "999.999.999-99",
            Self::Cep => "99999-999",
            Self::Cnpj => "99.999.999/9999-99",
        }
    }

    /// The symbolic name used for registry lookups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Cpf => "cpf",
            Self::Cep => "cep",
            Self::Cnpj => "cnpj",
        }
    }

    /// Parse the template into a pattern.
    #[must_use]
    pub fn pattern(self) -> MaskPattern {
        MaskPattern::parse(self.template())
    }

    /// Look up a kind by symbolic name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "phone" => Some(Self::Phone),
            "cpf" => Some(Self::Cpf),
            "cep" => Some(Self::Cep),
            "cnpj" => Some(Self::Cnpj),
            _ => None,
        }
    }
}

impl FromStr for MaskKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(())
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a symbolic name to its pattern.
///
/// Unknown names degrade to the empty pattern, which makes masking a silent
/// no-op downstream. Callers seeing an unexpectedly empty display value
/// should check their pattern configuration; this is never an error.
#[must_use]
pub fn resolve(name: &str) -> MaskPattern {
    match MaskKind::from_name(name) {
        Some(kind) => kind.pattern(),
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!(name, "unknown mask name, resolving to empty pattern");
            MaskPattern::empty()
        }
    }
}

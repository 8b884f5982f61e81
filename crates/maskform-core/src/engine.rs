#![forbid(unsafe_code)]

//! The masking engine: pure conversion between raw digit strings and
//! formatted display strings.
//!
//! Both functions are total and stateless. The surrounding field owns the
//! only state (the current raw value) and re-derives the display value on
//! every change; the display string is never stored independently.

use crate::pattern::{MaskPattern, MaskToken};

/// Format a raw string against a mask pattern.
///
/// Non-digit characters in `raw` are discarded first. Cleaned digits are
/// then consumed left-to-right while walking the pattern: a placeholder
/// emits the next digit, a literal emits itself. The walk stops as soon as
/// either the digits or the pattern run out, so no trailing literals appear
/// after the last consumed digit and excess digits are silently dropped.
///
/// Returns `""` when `raw` has no digits or the pattern is empty.
#[must_use]
pub fn apply_mask(raw: &str, pattern: &MaskPattern) -> String {
    let mut digits = raw.chars().filter(char::is_ascii_digit).peekable();
    if pattern.is_empty() || digits.peek().is_none() {
        return String::new();
    }

    let mut out = String::with_capacity(pattern.len());
    for token in pattern.tokens() {
        match token {
            MaskToken::Digit => match digits.next() {
                Some(d) => out.push(d),
                None => break,
            },
            MaskToken::Literal(c) => {
                // Stop before a literal once the digits are exhausted:
                // output length tracks how much of the pattern was filled.
                if digits.peek().is_none() {
                    break;
                }
                out.push(*c);
            }
        }
    }
    out
}

/// Remove every non-digit character.
///
/// Total inverse of [`apply_mask`]: masking only inserts literals among
/// already-clean digits, so stripping recovers the raw value exactly.
#[must_use]
pub fn strip_mask(display: &str) -> String {
    display.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::MaskKind;

    #[test]
    fn test_phone_example() {
        let p = MaskKind::Phone.pattern();
        assert_eq!(apply_mask("11987654321", &p), "(11) 98765-4321");
    }

    #[test]
    fn test_cpf_example() {
        let p = MaskKind::Cpf.pattern();
        assert_eq!(apply_mask("52998224725", &p), "529.982.247-25");
    }

    #[test]
    fn test_cep_example() {
        let p = MaskKind::Cep.pattern();
        assert_eq!(apply_mask("01310100", &p), "01310-100");
    }

    #[test]
    fn test_cnpj_example() {
        let p = MaskKind::Cnpj.pattern();
        assert_eq!(apply_mask("11222333000181", &p), "11.222.333/0001-81");
    }

    #[test]
    fn test_partial_fill_stops_before_literal() {
        let p = MaskKind::Cep.pattern();
        assert_eq!(apply_mask("12", &p), "12");
        // All five leading placeholders filled, next token is the dash:
        // digits exhausted, so the dash is not emitted.
        assert_eq!(apply_mask("12345", &p), "12345");
        assert_eq!(apply_mask("123456", &p), "12345-6");
    }

    #[test]
    fn test_leading_literal_emitted_with_first_digit() {
        let p = MaskKind::Phone.pattern();
        assert_eq!(apply_mask("1", &p), "(1");
    }

    #[test]
    fn test_excess_digits_truncated() {
        let p = MaskKind::Cep.pattern();
        assert_eq!(apply_mask("0131010099999", &p), "01310-100");
    }

    #[test]
    fn test_non_digits_discarded() {
        let p = MaskKind::Cep.pattern();
        assert_eq!(apply_mask("01310-100", &p), "01310-100");
        assert_eq!(apply_mask("a0b1c3d1e0f100", &p), "01310-100");
    }

    #[test]
    fn test_empty_raw() {
        let p = MaskKind::Phone.pattern();
        assert_eq!(apply_mask("", &p), "");
        assert_eq!(apply_mask("abc", &p), "");
    }

    #[test]
    fn test_empty_pattern() {
        let p = crate::pattern::MaskPattern::empty();
        assert_eq!(apply_mask("123", &p), "");
    }

    #[test]
    fn test_strip_mask() {
        assert_eq!(strip_mask("(11) 98765-4321"), "11987654321");
        assert_eq!(strip_mask("529.982.247-25"), "52998224725");
        assert_eq!(strip_mask(""), "");
        assert_eq!(strip_mask("---"), "");
    }
}

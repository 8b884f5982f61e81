#![forbid(unsafe_code)]

//! Masked field state.
//!
//! A [`MaskedField`] owns the only piece of state the mask engine needs:
//! the current raw digit value. The display value is re-derived on every
//! read and never stored. Raw capacity is capped at the pattern's
//! placeholder count; excess digits are silently dropped.

use maskform_core::pattern::{MaskKind, MaskPattern};
use maskform_core::{KeyCode, KeyEvent, apply_mask, filter_key, strip_mask};

/// A change notification handed to the enclosing form.
///
/// A plain `(field name, raw value)` message, independent of any UI
/// runtime's event-object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChange<'a> {
    /// The field's name.
    pub name: &'a str,
    /// The new raw (digits-only) value.
    pub raw: &'a str,
}

/// A form field whose value is formatted through a mask pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedField {
    /// Field name, used in change messages and error maps.
    name: String,
    /// The fixed pattern for this field's kind.
    pattern: MaskPattern,
    /// Raw value: decimal digits only, at most `pattern.placeholder_count()`.
    raw: String,
}

impl MaskedField {
    /// Create an empty field for a registered mask kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: MaskKind) -> Self {
        Self {
            name: name.into(),
            pattern: kind.pattern(),
            raw: String::new(),
        }
    }

    /// Create an empty field from a literal mask template.
    #[must_use]
    pub fn with_template(name: impl Into<String>, template: &str) -> Self {
        Self {
            name: name.into(),
            pattern: MaskPattern::parse(template),
            raw: String::new(),
        }
    }

    // --- Value access ---

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern this field formats against.
    #[must_use]
    pub fn pattern(&self) -> &MaskPattern {
        &self.pattern
    }

    /// The raw (digits-only) value.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The formatted display value, re-derived from the raw value.
    #[must_use]
    pub fn display(&self) -> String {
        apply_mask(&self.raw, &self.pattern)
    }

    /// Whether the field holds no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether every placeholder slot is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.raw.len() >= self.pattern.placeholder_count()
    }

    /// Clear the field.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The change message for the current state.
    #[must_use]
    pub fn change(&self) -> FieldChange<'_> {
        FieldChange {
            name: &self.name,
            raw: &self.raw,
        }
    }

    // --- Mutation paths ---

    /// External reset: load a stored value, e.g. when editing an existing
    /// record. Non-digits are stripped and excess digits dropped.
    pub fn set_raw(&mut self, value: &str) {
        self.raw = strip_mask(value);
        self.truncate_to_capacity();
    }

    /// Change-event path: accept the input control's new text (typing or
    /// paste) and renormalize.
    ///
    /// Returns `true` if the raw value changed.
    pub fn accept_text(&mut self, text: &str) -> bool {
        let mut clean = strip_mask(text);
        clean.truncate(self.pattern.placeholder_count());
        if clean == self.raw {
            return false;
        }
        self.raw = clean;
        true
    }

    /// Handle a keystroke.
    ///
    /// Keys rejected by [`filter_key`] never reach the value. A digit
    /// appends (silently dropped once the field is full), Backspace removes
    /// the last digit, and navigation keys or modifier chords pass through
    /// without mutating.
    ///
    /// Returns `true` if the raw value changed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !filter_key(event) {
            return false;
        }
        match event.code {
            KeyCode::Char(c) if c.is_ascii_digit() && !event.ctrl() && !event.super_key() => {
                if self.is_full() {
                    return false;
                }
                self.raw.push(c);
                true
            }
            KeyCode::Backspace => self.raw.pop().is_some(),
            _ => false,
        }
    }

    fn truncate_to_capacity(&mut self) {
        self.raw.truncate(self.pattern.placeholder_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskform_core::Modifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn test_empty_field() {
        let field = MaskedField::new("cpf", MaskKind::Cpf);
        assert!(field.is_empty());
        assert!(!field.is_full());
        assert_eq!(field.raw(), "");
        assert_eq!(field.display(), "");
    }

    #[test]
    fn test_typing_digits() {
        let mut field = MaskedField::new("cep", MaskKind::Cep);
        for c in "01310100".chars() {
            assert!(field.handle_key(&key(KeyCode::Char(c))));
        }
        assert_eq!(field.raw(), "01310100");
        assert_eq!(field.display(), "01310-100");
        assert!(field.is_full());
    }

    #[test]
    fn test_typing_past_capacity_drops_silently() {
        let mut field = MaskedField::new("cep", MaskKind::Cep);
        for c in "013101009".chars() {
            field.handle_key(&key(KeyCode::Char(c)));
        }
        assert_eq!(field.raw(), "01310100");
    }

    #[test]
    fn test_letters_never_reach_value() {
        let mut field = MaskedField::new("cpf", MaskKind::Cpf);
        assert!(!field.handle_key(&key(KeyCode::Char('x'))));
        assert!(field.is_empty());
    }

    #[test]
    fn test_backspace_removes_last_digit() {
        let mut field = MaskedField::new("phone", MaskKind::Phone);
        field.set_raw("11987654321");
        assert!(field.handle_key(&key(KeyCode::Backspace)));
        assert_eq!(field.raw(), "1198765432");
        assert_eq!(field.display(), "(11) 98765-432");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut field = MaskedField::new("cpf", MaskKind::Cpf);
        assert!(!field.handle_key(&key(KeyCode::Backspace)));
    }

    #[test]
    fn test_navigation_does_not_mutate() {
        let mut field = MaskedField::new("cpf", MaskKind::Cpf);
        field.set_raw("529");
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Home, KeyCode::End, KeyCode::Tab] {
            assert!(!field.handle_key(&key(code)));
        }
        assert_eq!(field.raw(), "529");
    }

    #[test]
    fn test_ctrl_chord_does_not_insert() {
        let mut field = MaskedField::new("cpf", MaskKind::Cpf);
        let paste = KeyEvent::new(KeyCode::Char('5')).with_modifiers(Modifiers::CTRL);
        assert!(!field.handle_key(&paste));
        assert!(field.is_empty());
    }

    #[test]
    fn test_accept_text_paste_with_formatting() {
        let mut field = MaskedField::new("phone", MaskKind::Phone);
        assert!(field.accept_text("(11) 98765-4321"));
        assert_eq!(field.raw(), "11987654321");
        assert_eq!(field.display(), "(11) 98765-4321");
    }

    #[test]
    fn test_accept_text_unchanged_returns_false() {
        let mut field = MaskedField::new("cep", MaskKind::Cep);
        field.set_raw("01310100");
        assert!(!field.accept_text("01310-100"));
    }

    #[test]
    fn test_set_raw_external_reset() {
        let mut field = MaskedField::new("cpf", MaskKind::Cpf);
        field.set_raw("529.982.247-25");
        assert_eq!(field.raw(), "52998224725");
        assert_eq!(field.display(), "529.982.247-25");
    }

    #[test]
    fn test_set_raw_truncates_to_capacity() {
        let mut field = MaskedField::new("cep", MaskKind::Cep);
        field.set_raw("0131010012345");
        assert_eq!(field.raw(), "01310100");
    }

    #[test]
    fn test_clear() {
        let mut field = MaskedField::new("cep", MaskKind::Cep);
        field.set_raw("01310100");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.display(), "");
    }

    #[test]
    fn test_change_message() {
        let mut field = MaskedField::new("phone", MaskKind::Phone);
        field.set_raw("11987654321");
        let change = field.change();
        assert_eq!(change.name, "phone");
        assert_eq!(change.raw, "11987654321");
    }

    #[test]
    fn test_unregistered_template_field() {
        let mut field = MaskedField::with_template("year", "9999");
        field.set_raw("2026");
        assert_eq!(field.display(), "2026");
        assert!(field.is_full());
    }

    #[test]
    fn test_empty_pattern_is_silent_noop() {
        // An unknown symbolic name degrades to the empty pattern upstream;
        // a field built on it displays nothing and holds nothing.
        let mut field = MaskedField::with_template("mystery", "");
        field.set_raw("12345");
        assert_eq!(field.raw(), "");
        assert_eq!(field.display(), "");
    }
}

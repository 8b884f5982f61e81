#![forbid(unsafe_code)]

//! The client-registration form model.
//!
//! Owns one [`MaskedField`] per masked identifier and plain strings for the
//! rest, plus the per-field error map. Applying a change clears that
//! field's standing error; [`RegistrationForm::validate`] repopulates the
//! map from scratch.

use rustc_hash::FxHashMap;

use maskform_core::MaskKind;

use crate::field::{FieldChange, MaskedField};
use crate::record::ClientRecord;

/// The client-registration form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    cpf: MaskedField,
    phone: MaskedField,
    postal_code: MaskedField,
    plain: ClientRecord,
    errors: FxHashMap<&'static str, String>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cpf: MaskedField::new("cpf", MaskKind::Cpf),
            phone: MaskedField::new("phone", MaskKind::Phone),
            postal_code: MaskedField::new("postal_code", MaskKind::Cep),
            plain: ClientRecord::default(),
            errors: FxHashMap::default(),
        }
    }

    // --- Field access ---

    /// The CPF field.
    #[must_use]
    pub fn cpf(&self) -> &MaskedField {
        &self.cpf
    }

    /// The CPF field, mutable (for keystroke handling).
    pub fn cpf_mut(&mut self) -> &mut MaskedField {
        &mut self.cpf
    }

    /// The phone field.
    #[must_use]
    pub fn phone(&self) -> &MaskedField {
        &self.phone
    }

    /// The phone field, mutable.
    pub fn phone_mut(&mut self) -> &mut MaskedField {
        &mut self.phone
    }

    /// The postal-code field.
    #[must_use]
    pub fn postal_code(&self) -> &MaskedField {
        &self.postal_code
    }

    /// The postal-code field, mutable.
    pub fn postal_code_mut(&mut self) -> &mut MaskedField {
        &mut self.postal_code
    }

    // --- Change application ---

    /// Apply a field change message.
    ///
    /// Stores the new value under the named field and clears that field's
    /// standing error. Returns `false` for an unknown field name (the
    /// change is dropped).
    pub fn apply(&mut self, change: FieldChange<'_>) -> bool {
        self.set(change.name, change.raw)
    }

    /// Store a new value for the named field, clearing its standing error.
    ///
    /// Masked fields normalize through their pattern (strip plus capacity
    /// truncation); plain fields store the text as-is. Returns `false` for
    /// an unknown field name.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match name {
            "cpf" => self.cpf.set_raw(value),
            "phone" => self.phone.set_raw(value),
            "postal_code" => self.postal_code.set_raw(value),
            "full_name" => self.plain.full_name = value.to_owned(),
            "email" => self.plain.email = value.to_owned(),
            "rg" => self.plain.rg = value.to_owned(),
            "street" => self.plain.street = value.to_owned(),
            "number" => self.plain.number = value.to_owned(),
            "district" => self.plain.district = value.to_owned(),
            "city" => self.plain.city = value.to_owned(),
            "state" => self.plain.state = value.to_owned(),
            "mother_name" => self.plain.mother_name = value.to_owned(),
            "birth_date" => self.plain.birth_date = value.to_owned(),
            "gender" => self.plain.gender = value.to_owned(),
            "marital_status" => self.plain.marital_status = value.to_owned(),
            "occupation_type" => self.plain.occupation_type = value.to_owned(),
            "profession" => self.plain.profession = value.to_owned(),
            "company_name" => self.plain.company_name = value.to_owned(),
            "monthly_income" => self.plain.monthly_income = value.to_owned(),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(name, "change for unknown field dropped");
                return false;
            }
        }
        self.errors.remove(name);
        true
    }

    /// External reset: load an existing record for editing.
    ///
    /// Masked fields renormalize their values; standing errors are cleared.
    pub fn load(&mut self, record: &ClientRecord) {
        self.cpf.set_raw(&record.cpf);
        self.phone.set_raw(&record.phone);
        self.postal_code.set_raw(&record.postal_code);
        self.plain = record.clone();
        self.plain.cpf.clear();
        self.plain.phone.clear();
        self.plain.postal_code.clear();
        self.errors.clear();
    }

    /// Assemble the outgoing payload.
    #[must_use]
    pub fn to_record(&self) -> ClientRecord {
        let mut record = self.plain.clone();
        record.cpf = self.cpf.raw().to_owned();
        record.phone = self.phone.raw().to_owned();
        record.postal_code = self.postal_code.raw().to_owned();
        record
    }

    // --- Validation ---

    /// Validate the form, repopulating the error map.
    ///
    /// Returns `true` when no errors were recorded.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.plain.full_name.trim().is_empty() {
            self.errors.insert("full_name", "Name is required".to_owned());
        }
        if self.plain.email.trim().is_empty() {
            self.errors.insert("email", "Email is required".to_owned());
        } else if !looks_like_email(&self.plain.email) {
            self.errors.insert("email", "Invalid email".to_owned());
        }
        if self.cpf.is_empty() {
            self.errors.insert("cpf", "CPF is required".to_owned());
        } else if self.cpf.raw().len() != 11 {
            self.errors.insert("cpf", "CPF must have 11 digits".to_owned());
        }
        if self.phone.is_empty() {
            self.errors.insert("phone", "Phone is required".to_owned());
        }

        #[cfg(feature = "tracing")]
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "form validation failed");
        }

        self.errors.is_empty()
    }

    /// The standing error for a field, if any.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// The full error map.
    #[must_use]
    pub fn errors(&self) -> &FxHashMap<&'static str, String> {
        &self.errors
    }

    /// Whether the last validation pass recorded no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Permissive email shape check: some non-space run containing `@`
/// followed by a dot-separated tail.
fn looks_like_email(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    for (p, &c) in chars.iter().enumerate() {
        if c != '@' || p == 0 || chars[p - 1].is_whitespace() {
            continue;
        }
        // Scan the non-space run after '@' for a dot with a non-space
        // successor and at least one character before it.
        let mut q = p + 1;
        let mut seen_host = false;
        while q < chars.len() && !chars[q].is_whitespace() {
            if chars[q] == '.' && seen_host && q + 1 < chars.len() && !chars[q + 1].is_whitespace()
            {
                return true;
            }
            seen_host = true;
            q += 1;
        }
    }
    false
}

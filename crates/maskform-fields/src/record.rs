#![forbid(unsafe_code)]

//! The client record payload.
//!
//! Raw values only: masked identifiers (CPF, phone, CEP) are stored as
//! digit strings, exactly as they travel to the persistence layer. Display
//! formatting is a presentation concern and never stored here.

/// A customer record as exchanged with the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientRecord {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// CPF, digits only (11 when complete).
    pub cpf: String,
    /// RG identity document number.
    pub rg: String,
    /// Phone number, digits only (11 when complete).
    pub phone: String,
    /// CEP postal code, digits only (8 when complete).
    pub postal_code: String,
    /// Street name.
    pub street: String,
    /// Street number.
    pub number: String,
    /// District / neighborhood.
    pub district: String,
    /// City.
    pub city: String,
    /// State (UF).
    pub state: String,
    /// Mother's full name.
    pub mother_name: String,
    /// Birth date.
    pub birth_date: String,
    /// Gender.
    pub gender: String,
    /// Marital status.
    pub marital_status: String,
    /// Occupation type.
    pub occupation_type: String,
    /// Profession.
    pub profession: String,
    /// Company name.
    pub company_name: String,
    /// Monthly income.
    pub monthly_income: String,
}

//! Wire model for the upstream practitioner document.
//!
//! The upstream JSON is loosely typed: numeric fields arrive as prose
//! strings (`"13 Years of experience"`, `"₹ 500"`), specialities arrive as
//! `{name}` objects or bare strings, and almost everything can be absent.
//! This model accepts all of that verbatim; the strict typing happens in
//! [`crate::normalize`].

use serde::Deserialize;

/// A scalar that may arrive as a JSON number or a string.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

/// One speciality entry: either `{"name": "Dentist"}` or `"Dentist"`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SpecialityRef {
    Named { name: String },
    Plain(String),
}

impl SpecialityRef {
    pub fn name(&self) -> &str {
        match self {
            SpecialityRef::Named { name } => name,
            SpecialityRef::Plain(name) => name,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamAddress {
    pub locality: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamClinic {
    pub name: Option<String>,
    pub address: Option<UpstreamAddress>,
}

/// One raw practitioner entry as the upstream serves it.
///
/// Every field is optional or defaulted, so a partially filled entry still
/// deserializes; unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamPractitioner {
    pub id: Option<Scalar>,
    pub name: Option<String>,
    pub specialities: Option<Vec<SpecialityRef>>,
    pub experience: Option<Scalar>,
    pub fees: Option<Scalar>,
    pub video_consult: bool,
    pub in_clinic: bool,
    pub clinic: Option<UpstreamClinic>,
}

//! Normalization boundary: upstream wire entries become validated
//! [`Practitioner`] records.
//!
//! All defaulting lives here, in one place. Downstream code (the engine,
//! the codec) assumes records are well-formed and never re-checks:
//! - name: `"Unknown Doctor"` when absent or empty
//! - id: a generated UUIDv4 when absent or empty
//! - specialities: `["General Medicine"]` when the field is missing
//!   entirely; an array that is present keeps whatever valid tags it holds
//! - experience: digits extracted from the text, default 0
//! - fees: digits extracted from the text, default 500
//! - modes: from the `video_consult` / `in_clinic` flags

use crate::wire::{Scalar, SpecialityRef, UpstreamClinic, UpstreamPractitioner};
use healnet_core::{Clinic, ConsultationMode, Practitioner};
use healnet_types::SpecialtyTag;

const FALLBACK_NAME: &str = "Unknown Doctor";
const FALLBACK_SPECIALTY: &str = "General Medicine";
const FALLBACK_FEE: u32 = 500;

/// Normalize one upstream entry. Never fails.
pub fn normalize_practitioner(wire: UpstreamPractitioner) -> Practitioner {
    let id = wire
        .id
        .map(scalar_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            let generated = uuid::Uuid::new_v4().to_string();
            tracing::debug!(id = %generated, "upstream entry missing id; generated one");
            generated
        });

    let name = wire
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string());

    let specialties = match wire.specialities {
        Some(list) => list
            .iter()
            .filter_map(|entry| match SpecialtyTag::new(entry.name()) {
                Ok(tag) => Some(tag),
                Err(_) => {
                    tracing::debug!(value = entry.name(), "discarding unusable speciality");
                    None
                }
            })
            .collect(),
        None => vec![SpecialtyTag::new(FALLBACK_SPECIALTY).expect("fallback tag is valid")],
    };

    let experience_years = wire.experience.as_ref().and_then(scalar_digits).unwrap_or(0);
    let fee = wire
        .fees
        .as_ref()
        .and_then(scalar_digits)
        .unwrap_or(FALLBACK_FEE);

    let mut modes = Vec::new();
    if wire.video_consult {
        modes.push(ConsultationMode::VideoConsult);
    }
    if wire.in_clinic {
        modes.push(ConsultationMode::InClinic);
    }

    Practitioner {
        id,
        name,
        specialties,
        experience_years,
        fee,
        modes,
        clinic: wire.clinic.map(normalize_clinic),
    }
}

fn normalize_clinic(wire: UpstreamClinic) -> Clinic {
    let address = wire.address.unwrap_or_default();
    Clinic {
        name: wire.name.unwrap_or_default(),
        locality: address.locality.unwrap_or_default(),
        city: address.city.unwrap_or_default(),
    }
}

/// Extract a numeric value from a loosely typed scalar.
///
/// Text scalars keep only their ASCII digits (`"13 Years of experience"` →
/// 13, `"₹ 500"` → 500); a digit-free text yields `None` so the caller's
/// default applies. Negative or non-finite numbers also yield `None`.
fn scalar_digits(scalar: &Scalar) -> Option<u32> {
    match scalar {
        Scalar::Number(n) => {
            if n.is_finite() && *n >= 0.0 {
                Some(*n as u32)
            } else {
                None
            }
        }
        Scalar::Text(t) => {
            let digits: String = t.chars().filter(char::is_ascii_digit).collect();
            if digits.is_empty() {
                None
            } else {
                digits.parse().ok()
            }
        }
    }
}

fn scalar_text(scalar: Scalar) -> String {
    match scalar {
        Scalar::Number(n) => {
            if n.fract() == 0.0 {
                (n as i64).to_string()
            } else {
                n.to_string()
            }
        }
        Scalar::Text(t) => t,
    }
}

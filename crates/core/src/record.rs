//! The normalized practitioner record model.
//!
//! Records are constructed once, when the upstream directory is fetched and
//! normalized, and are immutable for the rest of the session. The engine
//! only reads and filters them.

use healnet_types::SpecialtyTag;
use serde::{Deserialize, Serialize};

/// How a practitioner can be consulted.
///
/// The wire labels (`"Video Consult"` / `"In Clinic"`) are the display
/// strings the upstream directory uses; they also appear verbatim in the
/// `consultation` URL parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsultationMode {
    /// Remote consultation over video.
    #[serde(rename = "Video Consult")]
    VideoConsult,
    /// In-person consultation at the clinic.
    #[serde(rename = "In Clinic")]
    InClinic,
}

impl ConsultationMode {
    /// Convert to the wire/display label.
    pub fn to_wire(self) -> &'static str {
        match self {
            ConsultationMode::VideoConsult => "Video Consult",
            ConsultationMode::InClinic => "In Clinic",
        }
    }

    /// Parse from a wire/display label, ignoring ASCII case.
    ///
    /// Case-insensitivity here canonicalizes, at the boundary, the loose
    /// string matching the upstream data demands; the filter engine then
    /// compares enum values exactly.
    pub fn from_wire(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("Video Consult") {
            Some(ConsultationMode::VideoConsult)
        } else if s.eq_ignore_ascii_case("In Clinic") {
            Some(ConsultationMode::InClinic)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_wire())
    }
}

/// Clinic details carried for display only; never filtered on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub name: String,
    pub locality: String,
    pub city: String,
}

/// One practitioner entry in the directory.
///
/// All fields are already normalized: numeric fields carry their defaults
/// when the upstream value was absent or unparsable (experience 0, fee 500),
/// and every specialty tag is non-empty and comma-free by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practitioner {
    /// Opaque unique key. Upstream id, or a generated UUID when absent.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Specialty tags, in upstream order. May be empty.
    pub specialties: Vec<SpecialtyTag>,

    /// Years of experience.
    pub experience_years: u32,

    /// Consultation fee in currency units.
    pub fee: u32,

    /// Supported consultation modes. Zero, one, or both.
    pub modes: Vec<ConsultationMode>,

    /// Clinic details, when the upstream supplied them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic: Option<Clinic>,
}

impl Practitioner {
    /// Whether this practitioner supports the given consultation mode.
    pub fn supports_mode(&self, mode: ConsultationMode) -> bool {
        self.modes.contains(&mode)
    }
}

#[cfg(test)]
mod consultation_mode_tests {
    use super::*;

    #[test]
    fn wire_labels_round_trip() {
        for mode in [ConsultationMode::VideoConsult, ConsultationMode::InClinic] {
            assert_eq!(ConsultationMode::from_wire(mode.to_wire()), Some(mode));
        }
    }

    #[test]
    fn from_wire_ignores_case() {
        assert_eq!(
            ConsultationMode::from_wire("video consult"),
            Some(ConsultationMode::VideoConsult)
        );
        assert_eq!(
            ConsultationMode::from_wire("IN CLINIC"),
            Some(ConsultationMode::InClinic)
        );
    }

    #[test]
    fn from_wire_rejects_unknown_labels() {
        assert_eq!(ConsultationMode::from_wire("Home Visit"), None);
        assert_eq!(ConsultationMode::from_wire(""), None);
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&ConsultationMode::VideoConsult).expect("serialize");
        assert_eq!(json, "\"Video Consult\"");
    }
}

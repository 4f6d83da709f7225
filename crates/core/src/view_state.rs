//! View state: the single source of truth for what the user wants to see.

use crate::record::ConsultationMode;
use healnet_types::SpecialtyTag;
use std::collections::BTreeSet;

/// The sort directive applied after filtering.
///
/// Held as an `Option<SortOrder>` on [`ViewState`], which makes directives
/// mutually exclusive by construction: selecting one replaces any other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// By fee, lowest first. Wire value `fees`.
    FeesAscending,
    /// By fee, highest first. Wire value `fees-desc`.
    FeesDescending,
    /// By years of experience, most first. Wire value `experience`.
    ExperienceDescending,
}

impl SortOrder {
    /// Convert to the `sortBy` URL parameter value.
    pub fn to_wire(self) -> &'static str {
        match self {
            SortOrder::FeesAscending => "fees",
            SortOrder::FeesDescending => "fees-desc",
            SortOrder::ExperienceDescending => "experience",
        }
    }

    /// Parse a `sortBy` URL parameter value. Unrecognized values yield
    /// `None` and are discarded by the decoder.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "fees" => Some(SortOrder::FeesAscending),
            "fees-desc" => Some(SortOrder::FeesDescending),
            "experience" => Some(SortOrder::ExperienceDescending),
            _ => None,
        }
    }
}

/// The complete description of the user's current search/filter/sort
/// selection.
///
/// Initialized to all-empty defaults, or by decoding the current URL at
/// startup; mutated by user interaction; serialized to the URL on every
/// change that did not itself originate from the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Free-text search query, matched against practitioner names.
    pub search_query: String,

    /// The selected consultation mode, if any.
    pub consultation_type: Option<ConsultationMode>,

    /// Selected specialty tags. Uniqueness by set; the ordering is
    /// deterministic so the encoded URL is stable.
    pub specialties: BTreeSet<SpecialtyTag>,

    /// The selected sort directive, if any.
    pub sort_by: Option<SortOrder>,
}

impl ViewState {
    /// Whether every field is at its default, i.e. no filter or sort is
    /// active. Hosts use this to decide whether to offer "clear filters".
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty()
            && self.consultation_type.is_none()
            && self.specialties.is_empty()
            && self.sort_by.is_none()
    }
}

#[cfg(test)]
mod view_state_tests {
    use super::*;

    #[test]
    fn default_state_is_default() {
        assert!(ViewState::default().is_default());
    }

    #[test]
    fn any_active_field_clears_is_default() {
        let mut state = ViewState {
            search_query: "rao".into(),
            ..ViewState::default()
        };
        assert!(!state.is_default());

        state = ViewState {
            sort_by: Some(SortOrder::FeesAscending),
            ..ViewState::default()
        };
        assert!(!state.is_default());
    }

    #[test]
    fn sort_wire_values_round_trip() {
        for order in [
            SortOrder::FeesAscending,
            SortOrder::FeesDescending,
            SortOrder::ExperienceDescending,
        ] {
            assert_eq!(SortOrder::from_wire(order.to_wire()), Some(order));
        }
    }

    #[test]
    fn sort_from_wire_is_strict() {
        assert_eq!(SortOrder::from_wire("bogus"), None);
        assert_eq!(SortOrder::from_wire("Fees"), None);
        assert_eq!(SortOrder::from_wire(""), None);
    }
}

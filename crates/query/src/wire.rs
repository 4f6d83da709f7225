//! The URL query-string wire codec.
//!
//! The query string is the one wire-level contract this workspace owns:
//!
//! | param | meaning | encoding |
//! |---|---|---|
//! | `search` | free-text query | raw string, percent-escaped |
//! | `consultation` | selected consultation mode | mode display label |
//! | `specialties` | selected specialty tags | comma-joined list |
//! | `sortBy` | sort directive | `fees`, `fees-desc`, `experience` |
//!
//! Fields at their default value are omitted entirely, never emitted as
//! empty parameters.

use healnet_core::{ConsultationMode, SortOrder, ViewState};
use healnet_types::SpecialtyTag;
use url::form_urlencoded;

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_CONSULTATION: &str = "consultation";
pub const PARAM_SPECIALTIES: &str = "specialties";
pub const PARAM_SORT_BY: &str = "sortBy";

/// Encode a view state as a query string (without the leading `?`).
///
/// Emits one parameter per non-default field, in the order `search`,
/// `consultation`, `specialties`, `sortBy`. The default state encodes to
/// the empty string.
pub fn encode(state: &ViewState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search_query.is_empty() {
        serializer.append_pair(PARAM_SEARCH, &state.search_query);
    }

    if let Some(mode) = state.consultation_type {
        serializer.append_pair(PARAM_CONSULTATION, mode.to_wire());
    }

    if !state.specialties.is_empty() {
        let joined = state
            .specialties
            .iter()
            .map(SpecialtyTag::as_str)
            .collect::<Vec<_>>()
            .join(",");
        serializer.append_pair(PARAM_SPECIALTIES, &joined);
    }

    if let Some(order) = state.sort_by {
        serializer.append_pair(PARAM_SORT_BY, order.to_wire());
    }

    serializer.finish()
}

/// Decode a query string into a complete view state.
///
/// Always builds the state from scratch: absent parameters map to their
/// defaults, there is no partial merge with any previous state. A leading
/// `?` is tolerated. For a duplicated parameter the first occurrence wins.
/// Unrecognized parameters, unknown `sortBy`/`consultation` values, and
/// malformed specialty segments are discarded silently; decoding never
/// fails.
pub fn decode(query: &str) -> ViewState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search: Option<String> = None;
    let mut consultation: Option<String> = None;
    let mut specialties: Option<String> = None;
    let mut sort_by: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PARAM_SEARCH if search.is_none() => search = Some(value.into_owned()),
            PARAM_CONSULTATION if consultation.is_none() => {
                consultation = Some(value.into_owned())
            }
            PARAM_SPECIALTIES if specialties.is_none() => specialties = Some(value.into_owned()),
            PARAM_SORT_BY if sort_by.is_none() => sort_by = Some(value.into_owned()),
            _ => {}
        }
    }

    let mut state = ViewState::default();

    if let Some(value) = search {
        state.search_query = value;
    }

    if let Some(value) = consultation {
        state.consultation_type = ConsultationMode::from_wire(&value);
        if state.consultation_type.is_none() {
            tracing::debug!(value, "discarding unknown consultation mode");
        }
    }

    if let Some(value) = specialties {
        for segment in value.split(',') {
            match SpecialtyTag::new(segment) {
                Ok(tag) => {
                    state.specialties.insert(tag);
                }
                Err(_) => tracing::debug!(segment, "discarding malformed specialty segment"),
            }
        }
    }

    if let Some(value) = sort_by {
        state.sort_by = SortOrder::from_wire(&value);
        if state.sort_by.is_none() {
            tracing::debug!(value, "discarding unknown sort directive");
        }
    }

    state
}

#[cfg(test)]
mod wire_tests {
    use super::*;
    use std::collections::BTreeSet;

    fn tags(values: &[&str]) -> BTreeSet<SpecialtyTag> {
        values
            .iter()
            .map(|s| SpecialtyTag::new(s).expect("valid tag"))
            .collect()
    }

    #[test]
    fn default_state_encodes_to_empty_string() {
        assert_eq!(encode(&ViewState::default()), "");
    }

    #[test]
    fn round_trips_with_every_field_active() {
        let state = ViewState {
            search_query: "amit rao".into(),
            consultation_type: Some(ConsultationMode::VideoConsult),
            specialties: tags(&["Dentist", "Cardiologist"]),
            sort_by: Some(SortOrder::FeesDescending),
        };

        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn encode_omits_default_fields() {
        let state = ViewState {
            search_query: "rao".into(),
            ..ViewState::default()
        };
        assert_eq!(encode(&state), "search=rao");
    }

    #[test]
    fn encode_percent_escapes_values() {
        let state = ViewState {
            consultation_type: Some(ConsultationMode::InClinic),
            ..ViewState::default()
        };
        assert_eq!(encode(&state), "consultation=In+Clinic");
    }

    #[test]
    fn decode_builds_complete_state_from_scratch() {
        let state = decode("?search=rao&sortBy=fees");
        assert_eq!(state.search_query, "rao");
        assert_eq!(state.sort_by, Some(SortOrder::FeesAscending));
        assert_eq!(state.consultation_type, None);
        assert!(state.specialties.is_empty());
    }

    #[test]
    fn decode_discards_unknown_sort_directive() {
        let state = decode("?sortBy=bogus");
        assert_eq!(state.sort_by, None);
        assert!(state.is_default());
    }

    #[test]
    fn decode_discards_unknown_consultation_mode() {
        let state = decode("consultation=Telepathy");
        assert_eq!(state.consultation_type, None);
    }

    #[test]
    fn decode_parses_consultation_label_case_insensitively() {
        let state = decode("consultation=video+consult");
        assert_eq!(state.consultation_type, Some(ConsultationMode::VideoConsult));
    }

    #[test]
    fn decode_splits_specialty_list_on_commas() {
        let state = decode("specialties=Dentist%2CCardiologist");
        assert_eq!(state.specialties, tags(&["Dentist", "Cardiologist"]));
    }

    #[test]
    fn decode_discards_empty_specialty_segments() {
        let state = decode("specialties=Dentist%2C%2C");
        assert_eq!(state.specialties, tags(&["Dentist"]));
    }

    #[test]
    fn decode_takes_the_first_duplicate_parameter() {
        let state = decode("search=first&search=second");
        assert_eq!(state.search_query, "first");
    }

    #[test]
    fn decode_ignores_unknown_parameters() {
        let state = decode("page=3&search=rao&utm_source=x");
        assert_eq!(state.search_query, "rao");
        assert_eq!(state.consultation_type, None);
    }

    #[test]
    fn decode_accepts_plus_and_percent_spaces() {
        assert_eq!(decode("search=amit+rao").search_query, "amit rao");
        assert_eq!(decode("search=amit%20rao").search_query, "amit rao");
    }

    #[test]
    fn decoding_is_idempotent() {
        let first = decode("search=rao&consultation=In+Clinic&sortBy=experience");
        let second = decode(&encode(&first));
        assert_eq!(first, second);
    }
}

//! The filter-sort engine: pure projection of the record collection
//! through the current view state.
//!
//! Filtering is a sequential conjunction of independent predicates: a
//! record survives only if every active filter accepts it. Sorting is
//! applied afterwards as a stable comparison, so ties retain their relative
//! source order and the no-sort case preserves the source order exactly.

use crate::record::Practitioner;
use crate::view_state::{SortOrder, ViewState};

/// Maximum number of entries returned by [`search_suggestions`].
pub const SUGGESTION_LIMIT: usize = 5;

/// Project the record collection through the view state.
///
/// Pure: the input slice is never reordered or mutated; the result borrows
/// from it. With a default view state this returns every record in source
/// order.
pub fn project<'a>(records: &'a [Practitioner], state: &ViewState) -> Vec<&'a Practitioner> {
    let mut projected: Vec<&Practitioner> = records.iter().collect();

    if !state.search_query.is_empty() {
        let needle = state.search_query.to_lowercase();
        projected.retain(|p| p.name.to_lowercase().contains(&needle));
        tracing::debug!(remaining = projected.len(), "after search filter");
    }

    if let Some(mode) = state.consultation_type {
        projected.retain(|p| p.supports_mode(mode));
        tracing::debug!(remaining = projected.len(), "after consultation filter");
    }

    if !state.specialties.is_empty() {
        projected.retain(|p| p.specialties.iter().any(|s| state.specialties.contains(s)));
        tracing::debug!(remaining = projected.len(), "after specialty filter");
    }

    match state.sort_by {
        Some(SortOrder::FeesAscending) => projected.sort_by(|a, b| a.fee.cmp(&b.fee)),
        Some(SortOrder::FeesDescending) => projected.sort_by(|a, b| b.fee.cmp(&a.fee)),
        Some(SortOrder::ExperienceDescending) => {
            projected.sort_by(|a, b| b.experience_years.cmp(&a.experience_years))
        }
        None => {}
    }

    projected
}

/// Autocomplete suggestions for a partially typed query.
///
/// Intentionally looser than the projection's search filter: the query
/// matches case-insensitively against the name OR any specialty tag, and
/// the result is capped at [`SUGGESTION_LIMIT`]. An empty query yields no
/// suggestions. Kept separate from the projection's search predicate; see
/// DESIGN.md before unifying the two.
pub fn search_suggestions<'a>(records: &'a [Practitioner], query: &str) -> Vec<&'a Practitioner> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.specialties
                    .iter()
                    .any(|s| s.as_str().to_lowercase().contains(&needle))
        })
        .take(SUGGESTION_LIMIT)
        .collect()
}

//! Specialty indexer: derives the set of available filter options from the
//! record collection.

use crate::record::Practitioner;
use healnet_types::SpecialtyTag;
use std::collections::BTreeSet;

/// Derive the sorted set of distinct specialty tags across all records.
///
/// The result enumerates *available* filter options, not selected ones; it
/// is recomputed whenever the record collection changes (in practice once,
/// after the initial fetch). Deterministic: duplicates collapse and the
/// output is lexicographically sorted. Empty tags cannot occur because
/// `SpecialtyTag` is non-empty by construction.
pub fn derive_specialties(records: &[Practitioner]) -> Vec<SpecialtyTag> {
    let set: BTreeSet<SpecialtyTag> = records
        .iter()
        .flat_map(|p| p.specialties.iter().cloned())
        .collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod specialty_tests {
    use super::*;
    use crate::record::Practitioner;

    fn with_specialties(id: &str, specialties: &[&str]) -> Practitioner {
        Practitioner {
            id: id.into(),
            name: format!("Doctor {id}"),
            specialties: specialties
                .iter()
                .map(|s| SpecialtyTag::new(s).expect("valid tag"))
                .collect(),
            experience_years: 0,
            fee: 500,
            modes: Vec::new(),
            clinic: None,
        }
    }

    #[test]
    fn deduplicates_and_sorts() {
        let records = vec![
            with_specialties("1", &["Dentist", "Orthopaedic"]),
            with_specialties("2", &["Cardiologist", "Dentist"]),
        ];

        let index = derive_specialties(&records);
        let names: Vec<&str> = index.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["Cardiologist", "Dentist", "Orthopaedic"]);
    }

    #[test]
    fn empty_collection_yields_empty_index() {
        assert!(derive_specialties(&[]).is_empty());
    }

    #[test]
    fn records_without_specialties_contribute_nothing() {
        let records = vec![with_specialties("1", &[]), with_specialties("2", &["Dentist"])];
        let index = derive_specialties(&records);
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].as_str(), "Dentist");
    }
}

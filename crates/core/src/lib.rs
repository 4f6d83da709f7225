//! # HealNet Core
//!
//! Core state-and-query logic for the HealNet practitioner directory.
//!
//! This crate contains pure, synchronous data operations:
//! - The normalized practitioner record model
//! - The view state describing the user's current search/filter/sort selection
//! - The filter-sort engine producing projections of the record collection
//! - The specialty indexer deriving available filter options
//!
//! **No transport or URL concerns**: fetching records belongs in
//! `healnet-source`, and mapping view state to/from the URL belongs in
//! `healnet-query`. Nothing in this crate performs I/O or returns an error;
//! malformed input is handled upstream at the normalization boundary.

pub mod projection;
pub mod record;
pub mod specialty;
pub mod view_state;

pub use projection::{project, search_suggestions, SUGGESTION_LIMIT};
pub use record::{Clinic, ConsultationMode, Practitioner};
pub use specialty::derive_specialties;
pub use view_state::{SortOrder, ViewState};

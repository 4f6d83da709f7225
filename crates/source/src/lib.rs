//! # HealNet Source
//!
//! The upstream directory data source: wire model, normalization, and HTTP
//! client.
//!
//! Responsibilities:
//! - Define a permissive wire model for the upstream practitioner document
//! - Normalize the wire shape into validated [`healnet_core::Practitioner`]
//!   records, substituting defined defaults for absent/unparsable fields
//! - Fetch the document over HTTP and return a timestamped snapshot
//!
//! Notes:
//! - Normalization never fails; a field that cannot be parsed degrades to
//!   its default and is logged at debug level.
//! - Transport and document-shape failures surface as [`SourceError`] and
//!   stop before the core is ever involved.

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod wire;

pub use client::{Directory, SourceClient};
pub use config::{SourceConfig, DEFAULT_SOURCE_URL};
pub use error::{SourceError, SourceResult};

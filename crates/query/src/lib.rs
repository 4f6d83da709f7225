//! # HealNet Query
//!
//! Bidirectional mapping between the in-memory view state and the URL
//! query string.
//!
//! Responsibilities:
//! - Define the query-string wire schema and its codec ([`wire`])
//! - Keep the addressable URL and the view state consistent in both
//!   directions without feedback loops ([`sync`])
//! - Abstract over the navigation history so the synchronizer can be
//!   driven by a browser-like host or by tests ([`history`])
//!
//! Notes:
//! - Decoding is total: malformed parameters degrade to field defaults and
//!   never produce an error.
//! - `decode(encode(v))` reproduces `v` for every view state reachable
//!   through a host.

pub mod history;
pub mod sync;
pub mod wire;

pub use history::{History, SessionHistory};
pub use sync::{SyncPhase, UrlSync};
pub use wire::{decode, encode};

//! Typed value codecs for Manticore Search's SQL wire protocol.
//!
//! Manticore speaks a MySQL-flavored SQL dialect, and the client libraries
//! that drive it only move a narrow set of scalars: integers, floats, byte
//! payloads, NULL. This crate bridges that gap for the three value kinds
//! that need richer treatment:
//!
//! - [`Multi32`] / [`Multi64`] — multi-value attribute lists, carried as a
//!   parenthesized comma-separated literal such as `(1,2,3)`.
//! - [`DocId`] — document identifiers, logically unsigned 64-bit but
//!   sometimes delivered as a wrapped signed value by the wire.
//!
//! # Example
//!
//! ```
//! use manticore_types::{ColumnCodec, DocId, Multi32, Scalar, ToQueryFragment};
//!
//! // Render a membership predicate's literal.
//! let tags = Multi32::from(vec![1, 2, 3]);
//! let frag = tags.to_query_fragment();
//! assert_eq!(format!("tags IN {}", frag.sql), "tags IN (1,2,3)");
//!
//! // Recover a large identifier that arrived through the signed wire type.
//! let id = DocId::from_scalar(&Scalar::Int(-1)).unwrap();
//! assert_eq!(id.as_u64(), u64::MAX);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core value types ([`Multi32`], [`Multi64`], [`DocId`])
//! - [`codec`] - Query-fragment and column codecs ([`ToQueryFragment`], [`ColumnCodec`])
//! - [`scalar`] - The driver-native cell representation ([`Scalar`])
//! - [`error`] - Error types ([`CodecError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod codec;
pub mod error;
pub mod scalar;
pub mod types;

// Re-export commonly used types
pub use codec::{ColumnCodec, QueryFragment, ToQueryFragment};
pub use error::CodecError;
pub use scalar::Scalar;
pub use types::{DocId, Multi32, Multi64};

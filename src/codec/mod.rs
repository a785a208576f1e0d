//! Wire codecs for the typed values.
//!
//! Two seams connect this crate to the surrounding query machinery:
//!
//! - [`ToQueryFragment`] — render a value as a query-embedded literal for
//!   use inside statement text (e.g. `tags IN (1,2,3)`).
//! - [`ColumnCodec`] — treat a value as an ordinary column: encode to the
//!   driver-native [`Scalar`](crate::Scalar) for bound parameters, decode
//!   from a raw result cell, and name the logical column type for the
//!   schema layer.
//!
//! # Example
//!
//! ```
//! use manticore_types::{ColumnCodec, Multi32, Scalar, ToQueryFragment};
//!
//! let tags = Multi32::from(vec![1, 2, 3]);
//!
//! // Query-embedded literal: text only, no bound parameters.
//! let frag = tags.to_query_fragment();
//! assert_eq!(frag.sql, "(1,2,3)");
//! assert!(frag.params.is_empty());
//!
//! // Storage round-trip through the driver-native scalar.
//! let decoded = Multi32::from_scalar(&tags.to_scalar()).unwrap();
//! assert_eq!(decoded, tags);
//! ```

mod doc_id;
pub(crate) mod list;
mod traits;


pub use traits::{ColumnCodec, QueryFragment, ToQueryFragment};

//! Core value types exchanged with Manticore.
//!
//! This module defines the three typed values that cross the SQL wire
//! boundary: the two multi-value list widths and the document identifier.

mod doc_id;
mod multi;

pub use doc_id::DocId;
pub use multi::{Multi32, Multi64};

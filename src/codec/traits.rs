//! Codec traits for query embedding and scalar storage.

use crate::error::CodecError;
use crate::scalar::Scalar;

/// A self-contained piece of SQL statement text plus its bound parameters.
///
/// For the multi-value list types the parameter vector is always empty: the
/// rendered literal's alphabet is restricted to digits, `-`, `,` and
/// parentheses, so it is value-safe by construction and is spliced directly
/// into the statement (Manticore's IN-list semantics require literal
/// embedding rather than a bound parameter).
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFragment {
    /// The statement text to splice in.
    pub sql: String,
    /// Values to bind for this fragment, in order.
    pub params: Vec<Scalar>,
}

impl QueryFragment {
    /// Create a fragment that is pure literal text with no bound parameters.
    #[must_use]
    pub fn literal(sql: String) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }
}

/// Render a value as the query-time expression a statement builder splices
/// into its SQL text.
pub trait ToQueryFragment {
    /// The literal expression for this value.
    fn to_query_fragment(&self) -> QueryFragment;
}

/// Encode and decode a value as an ordinary column value.
///
/// This is the seam the persistence layer drives: [`to_scalar`] produces the
/// driver-native scalar bound on writes, [`from_scalar`] rebuilds the typed
/// value from a raw result cell, and [`column_type`] names the logical column
/// type so the schema layer can pick the right affinity.
///
/// Decoding always produces a fully-formed new value; on failure nothing is
/// partially populated, and the caller replaces its previous value wholesale
/// on success.
///
/// [`to_scalar`]: ColumnCodec::to_scalar
/// [`from_scalar`]: ColumnCodec::from_scalar
/// [`column_type`]: ColumnCodec::column_type
pub trait ColumnCodec: Sized {
    /// Stable symbolic name for this logical column type.
    fn column_type() -> &'static str;

    /// The driver-native scalar representation of this value.
    fn to_scalar(&self) -> Scalar;

    /// Rebuild a value from a raw result cell.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TypeMismatch`] if the scalar is not a native
    /// representation this codec accepts, or [`CodecError::InvalidElement`]
    /// if a list element fails to parse.
    fn from_scalar(raw: &Scalar) -> Result<Self, CodecError>;
}

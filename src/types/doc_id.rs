//! Document identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a document in the search index.
///
/// Logically an unsigned 64-bit integer covering the full `0..=u64::MAX`
/// range. The wire protocol does not guarantee unsigned typing for 64-bit
/// columns, so an identifier ≥ 2⁶³ may arrive as a negative signed value;
/// [`DocId::from_signed`] recovers it by reinterpreting the bit pattern.
///
/// # Example
///
/// ```
/// use manticore_types::DocId;
///
/// let id = DocId::new(u64::MAX);
/// assert_eq!(id.as_signed(), -1);
/// assert_eq!(DocId::from_signed(-1), id);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct DocId(u64);

impl DocId {
    /// Create a `DocId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Reinterpret a signed 64-bit wire value as an identifier.
    ///
    /// The 64 bits are taken as-is; no range check or clamping. A negative
    /// input maps to an identifier ≥ 2⁶³.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_signed(id: i64) -> Self {
        Self(id as u64)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The identifier's bit pattern read as a signed 64-bit integer, for
    /// transports that only carry signed values.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn as_signed(self) -> i64 {
        self.0 as i64
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<DocId> for u64 {
    fn from(id: DocId) -> Self {
        id.as_u64()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

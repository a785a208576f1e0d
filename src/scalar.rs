//! The driver-native cell representation.
//!
//! Manticore speaks a MySQL-flavored text protocol, and the client libraries
//! that sit on it only move a handful of scalar shapes: integers (signed or
//! unsigned), floating-point numbers, byte payloads, and NULL. [`Scalar`]
//! models exactly that value space — it is what a bound parameter carries
//! outbound and what a result cell carries inbound.

use serde::{Deserialize, Serialize};

/// A single value as the underlying driver sees it.
///
/// # Example
///
/// ```
/// use manticore_types::Scalar;
///
/// let cell = Scalar::Bytes(b"1,2,3".to_vec());
/// assert_eq!(cell.kind(), "bytes");
/// assert_eq!(cell.as_bytes(), Some(&b"1,2,3"[..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// SQL NULL / absent cell.
    Null,
    /// Raw bytes; strings ride in this variant on the text protocol.
    Bytes(Vec<u8>),
    /// Signed 64-bit integer.
    Int(i64),
    /// Unsigned 64-bit integer.
    UInt(u64),
    /// 64-bit floating point.
    Double(f64),
}

impl Scalar {
    /// Stable name for this scalar's kind, used in type-mismatch errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bytes(_) => "bytes",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Double(_) => "double",
        }
    }

    /// Returns `true` if this is the NULL scalar.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the byte payload if this is a `Bytes` scalar.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Bytes(s.into_bytes())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

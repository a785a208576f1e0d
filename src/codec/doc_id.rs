//! The document-identifier codec.

use crate::codec::traits::ColumnCodec;
use crate::error::CodecError;
use crate::scalar::Scalar;
use crate::types::DocId;

impl ColumnCodec for DocId {
    fn column_type() -> &'static str {
        "docId"
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::UInt(self.as_u64())
    }

    /// The driver does not guarantee unsigned typing for 64-bit columns, so
    /// an identifier may arrive through either integer variant. A signed
    /// value is reinterpreted bit-for-bit; identifiers ≥ 2⁶³ arrive negative
    /// and must not be treated as errors or pushed through an arithmetic
    /// conversion.
    fn from_scalar(raw: &Scalar) -> Result<Self, CodecError> {
        match *raw {
            Scalar::UInt(v) => Ok(Self::new(v)),
            Scalar::Int(v) => Ok(Self::from_signed(v)),
            ref other => Err(CodecError::TypeMismatch {
                expected: "int or uint",
                actual: other.kind(),
            }),
        }
    }
}

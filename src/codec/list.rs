//! The multi-value list codec, generic over element width.
//!
//! The 32-bit and 64-bit list types share one textual format and one
//! algorithm; only the element type differs. Rendering and parsing are
//! written once here, parameterized by the element type, and the per-width
//! trait impls below just instantiate them.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::codec::traits::{ColumnCodec, QueryFragment, ToQueryFragment};
use crate::error::CodecError;
use crate::scalar::Scalar;
use crate::types::{Multi32, Multi64};

/// Write `items` as `(v1,v2,...,vn)`, or `()` for an empty slice.
///
/// Decimal, non-padded, sign-correct element formatting; no whitespace.
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str(")")
}

/// Parse a raw result cell into a list of integers.
///
/// NULL and empty payloads are the canonical empty list, never an error.
/// One balanced outer paren pair is stripped if present: the storage
/// encoding emits `(…)` while the wire delivers bare `1,2,3` for MVA
/// columns, and both must decode. Segments are trimmed before parsing;
/// the first segment that is not a decimal integer of width `T` aborts
/// the decode.
fn parse_list<T>(raw: &Scalar) -> Result<Vec<T>, CodecError>
where
    T: FromStr<Err = ParseIntError>,
{
    let bytes = match raw {
        Scalar::Null => return Ok(Vec::new()),
        Scalar::Bytes(b) => b,
        other => {
            return Err(CodecError::TypeMismatch {
                expected: "bytes",
                actual: other.kind(),
            })
        }
    };

    let text = String::from_utf8_lossy(bytes);
    let mut body = text.trim();
    if let Some(inner) = body
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        body = inner;
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    body.split(',')
        .map(|segment| {
            let segment = segment.trim();
            segment
                .parse::<T>()
                .map_err(|source| CodecError::InvalidElement {
                    segment: segment.to_owned(),
                    source,
                })
        })
        .collect()
}

macro_rules! list_codec_impl {
    ($name:ident, $type_name:literal) => {
        impl ToQueryFragment for $name {
            fn to_query_fragment(&self) -> QueryFragment {
                QueryFragment::literal(self.to_string())
            }
        }

        impl ColumnCodec for $name {
            fn column_type() -> &'static str {
                $type_name
            }

            fn to_scalar(&self) -> Scalar {
                Scalar::Bytes(self.to_string().into_bytes())
            }

            fn from_scalar(raw: &Scalar) -> Result<Self, CodecError> {
                parse_list(raw).map(Self)
            }
        }
    };
}

list_codec_impl!(Multi32, "multi");
list_codec_impl!(Multi64, "multi64");

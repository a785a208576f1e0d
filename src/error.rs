//! Error types for the codec layer.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while decoding a raw driver value.
///
/// All errors surface synchronously to the caller of the decode operation.
/// Nothing is retried or logged here; presentation is the caller's concern.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The raw value is not one of the native representations this codec
    /// accepts.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The representation the codec expected.
        expected: &'static str,
        /// The kind of scalar actually received.
        actual: &'static str,
    },

    /// A list element was not a valid decimal integer of the list's width.
    #[error("invalid list element {segment:?}")]
    InvalidElement {
        /// The offending comma-separated segment, after trimming.
        segment: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

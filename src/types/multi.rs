//! Multi-value list types.
//!
//! Manticore's multi-value attributes (MVA) hold an ordered set of integers
//! per document. On the SQL wire they travel as a single parenthesized,
//! comma-separated literal such as `(1,2,3)`, both when spliced into query
//! text for membership predicates and when stored as a column value.
//!
//! # Example
//!
//! ```
//! use manticore_types::Multi32;
//!
//! let tags = Multi32::from(vec![1, 2, 3]);
//! assert_eq!(tags.to_string(), "(1,2,3)");
//! assert_eq!(Multi32::new().to_string(), "()");
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::codec::list::write_list;

/// An ordered list of 32-bit signed integers.
///
/// Order is preserved because it reflects query/result order; duplicates are
/// allowed. The empty list is a valid value, distinct from an absent cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multi32(pub Vec<i32>);

/// An ordered list of 64-bit signed integers.
///
/// Same invariants as [`Multi32`], wider element range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multi64(pub Vec<i64>);

macro_rules! multi_impl {
    ($name:ident, $elem:ty) => {
        impl $name {
            /// Create an empty list.
            #[must_use]
            pub const fn new() -> Self {
                Self(Vec::new())
            }

            /// Consume the list, returning the inner vector.
            #[must_use]
            pub fn into_inner(self) -> Vec<$elem> {
                self.0
            }
        }

        impl fmt::Display for $name {
            /// Renders the parenthesized comma-joined literal, `()` if empty.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_list(f, &self.0)
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(items: Vec<$elem>) -> Self {
                Self(items)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $name {
            type Item = $elem;
            type IntoIter = std::vec::IntoIter<$elem>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $elem;
            type IntoIter = std::slice::Iter<'a, $elem>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

multi_impl!(Multi32, i32);
multi_impl!(Multi64, i64);

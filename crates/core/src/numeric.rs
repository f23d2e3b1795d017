//! Primitive-specialized pairs
//!
//! `DoublesPair`, `IntDoublePair` and `LongDoublePair` hold their elements
//! unboxed and are `Copy`. They follow the same contract as `ObjectsPair`
//! but can never hold an absent element.
//!
//! ## Double semantics
//!
//! Doubles compare by bit pattern after NaN canonicalisation, the same rule
//! `Element::Double` uses:
//!
//! - `NaN == NaN` (equality stays reflexive, pairs work as map keys)
//! - `0.0 != -0.0`
//!
//! Ordering uses `f64::total_cmp`, so every primitive pair has a total
//! natural order and sorts with `FunctionalStream::sort()`.
//!
//! ## Conversion
//!
//! `TryFrom<ObjectsPair<A, B>>` narrows a generic pair into a primitive one.
//! An absent or unrepresentable element is an `Error::InvalidConversion`,
//! never a silent default. Element types convert when their `TryInto` error
//! turns into `Error`: `Element`, and the std integer and float types.
//!
//! ## Rendering
//!
//! Doubles render through `f64`'s `Debug` format, which always keeps a
//! decimal point or exponent: `1.0`, `0.25`, `1e300`, `1e-7`, `inf`, `-inf`,
//! `NaN`.

use crate::element::{canonical, canonical_bits, Element};
use crate::error::Error;
use crate::pair::{combine_hashes, element_hash, ObjectsPair, SlotEq, Tuple2};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

#[inline]
fn double_hash(v: f64) -> u64 {
    element_hash(&canonical_bits(v))
}

#[inline]
fn double_cmp(a: f64, b: f64) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

/// Narrow one slot of a generic pair
///
/// A failed element conversion keeps its own reason; only the slot changes.
fn narrow<T, U>(value: Option<T>, slot: &'static str, repr: &str) -> Result<U, Error>
where
    T: TryInto<U>,
    T::Error: Into<Error>,
{
    let value = value.ok_or_else(|| Error::InvalidConversion {
        slot,
        reason: format!("element is absent, {} has no absent value", repr),
    })?;
    value.try_into().map_err(|e| {
        let reason = match e.into() {
            Error::InvalidConversion { reason, .. } => reason,
            other => format!("not representable as {}: {}", repr, other),
        };
        debug!(target: "lambdava::pair", slot, repr, reason = %reason, "Pair conversion failed");
        Error::InvalidConversion { slot, reason }
    })
}

/// Shared trait implementations for the primitive pairs
///
/// `$first_eq`, `$first_hash` and `$first_cmp` say how the first slot is
/// compared, hashed and ordered; the second slot is always a double.
macro_rules! primitive_pair_impls {
    ($name:ident, $first:ty, $first_eq:expr, $first_hash:expr, $first_cmp:expr, $first_fmt:literal) => {
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $first_eq(self.first, other.first)
                    && canonical_bits(self.second) == canonical_bits(other.second)
            }
        }

        impl Eq for $name {}

        impl SlotEq for $name {
            #[inline]
            fn slot_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            /// First element, then second
            fn cmp(&self, other: &Self) -> Ordering {
                $first_cmp(self.first, other.first)
                    .then_with(|| double_cmp(self.second, other.second))
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64(self.pair_hash());
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("(", $first_fmt, ", {:?})"), self.first, self.second)
            }
        }

        impl $name {
            /// First element
            #[inline]
            pub const fn first(&self) -> $first {
                self.first
            }

            /// Second element
            #[inline]
            pub const fn second(&self) -> f64 {
                self.second
            }

            /// Exclusive-or of the element hashes
            pub fn pair_hash(&self) -> u64 {
                combine_hashes(Some($first_hash(self.first)), Some(double_hash(self.second)))
            }

            /// Extract both elements as a tuple
            pub const fn into_parts(self) -> ($first, f64) {
                (self.first, self.second)
            }
        }

        impl Tuple2 for $name {
            type First = $first;
            type Second = f64;

            fn first(&self) -> Option<&$first> {
                Some(&self.first)
            }

            fn second(&self) -> Option<&f64> {
                Some(&self.second)
            }

            fn pair_hash(&self) -> u64 {
                $name::pair_hash(self)
            }
        }

        impl From<($first, f64)> for $name {
            fn from((first, second): ($first, f64)) -> Self {
                $name::of(first, second)
            }
        }

        impl<A, B> TryFrom<ObjectsPair<A, B>> for $name
        where
            A: TryInto<$first>,
            A::Error: Into<Error>,
            B: TryInto<f64>,
            B::Error: Into<Error>,
        {
            type Error = Error;

            fn try_from(pair: ObjectsPair<A, B>) -> Result<Self, Self::Error> {
                let (first, second) = pair.into_parts();
                let first = narrow(first, "first", stringify!($first))?;
                let second = narrow(second, "second", "f64")?;
                Ok($name::of(first, second))
            }
        }
    };
}

// ============================================================================
// DoublesPair
// ============================================================================

/// A pair of `f64`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DoublesPair {
    first: f64,
    second: f64,
}

impl DoublesPair {
    /// Create a pair of doubles
    pub const fn of(first: f64, second: f64) -> Self {
        DoublesPair { first, second }
    }

    /// Both elements as a fresh list `[first, second]`
    pub fn to_list(&self) -> Vec<f64> {
        vec![self.first, self.second]
    }
}

primitive_pair_impls!(
    DoublesPair,
    f64,
    |a: f64, b: f64| canonical_bits(a) == canonical_bits(b),
    double_hash,
    double_cmp,
    "{:?}"
);

// ============================================================================
// IntDoublePair
// ============================================================================

/// A pair of `i32` to `f64`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntDoublePair {
    first: i32,
    second: f64,
}

impl IntDoublePair {
    /// Create an int to double pair
    pub const fn of(first: i32, second: f64) -> Self {
        IntDoublePair { first, second }
    }

    /// Create an int to double pair from two ints
    ///
    /// The second element is widened, so `of_ints(1, 2) == of(1, 2.0)`.
    pub fn of_ints(first: i32, second: i32) -> Self {
        IntDoublePair {
            first,
            second: f64::from(second),
        }
    }

    /// Both elements as a fresh list `[Int(first), Double(second)]`
    pub fn to_list(&self) -> Vec<Element> {
        vec![Element::Int(self.first), Element::Double(self.second)]
    }
}

primitive_pair_impls!(
    IntDoublePair,
    i32,
    |a: i32, b: i32| a == b,
    |v: i32| element_hash(&v),
    |a: i32, b: i32| a.cmp(&b),
    "{}"
);

// ============================================================================
// LongDoublePair
// ============================================================================

/// A pair of `i64` to `f64`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LongDoublePair {
    first: i64,
    second: f64,
}

impl LongDoublePair {
    /// Create a long to double pair
    pub const fn of(first: i64, second: f64) -> Self {
        LongDoublePair { first, second }
    }

    /// Both elements as a fresh list `[Long(first), Double(second)]`
    pub fn to_list(&self) -> Vec<Element> {
        vec![Element::Long(self.first), Element::Double(self.second)]
    }
}

primitive_pair_impls!(
    LongDoublePair,
    i64,
    |a: i64, b: i64| a == b,
    |v: i64| element_hash(&v),
    |a: i64, b: i64| a.cmp(&b),
    "{}"
);

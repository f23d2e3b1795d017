//! Immutable two-element tuples
//!
//! A pair associates a `first` and a `second` element. When treated as a
//! key-value association, `first` is the key and `second` the value.
//!
//! ## The Contract
//!
//! Every member of the family (`ObjectsPair` here, the primitive pairs in
//! `numeric`) follows the same rules:
//!
//! - Elements are set once at construction and never change
//! - Equality is structural: both elements equal, absent equals absent.
//!   Elements compare through [`SlotEq`], so a pair is always equal to
//!   itself, even when it holds a `NaN`
//! - `pair_hash()` is `h(first) ^ h(second)`, an absent element contributes `0`
//! - `Display` is always `(first, second)`
//! - `to_list()` always yields `[first, second]` in a fresh `Vec`
//!
//! The shared part of this contract is the [`Tuple2`] trait.

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use crate::element::canonical_bits;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Token rendered in place of an absent element
pub const ABSENT: &str = "None";

/// Deterministic hash of a single element
///
/// Fx hashing has no per-process seed, so `pair_hash()` is stable across
/// runs for the same contents.
#[inline]
pub fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Combine two element hashes; `None` stands for an absent element
#[inline]
pub const fn combine_hashes(first: Option<u64>, second: Option<u64>) -> u64 {
    let a = match first {
        Some(h) => h,
        None => 0,
    };
    let b = match second {
        Some(h) => h,
        None => 0,
    };
    a ^ b
}

/// Equality of a single pair element
///
/// Matches `==` for every type except the floats, which compare by bit
/// pattern after NaN canonicalisation: `NaN` equals `NaN`, `0.0` does not
/// equal `-0.0`. This is the rule the primitive pairs use, so a generic pair
/// of doubles agrees with `DoublesPair`.
pub trait SlotEq {
    /// Whether two elements are equal
    fn slot_eq(&self, other: &Self) -> bool;
}

macro_rules! slot_eq_by_partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SlotEq for $ty {
                #[inline]
                fn slot_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

slot_eq_by_partial_eq!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl SlotEq for f64 {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }
}

impl SlotEq for f32 {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        let bits = |v: f32| if v.is_nan() { f32::NAN.to_bits() } else { v.to_bits() };
        bits(*self) == bits(*other)
    }
}

impl<T: SlotEq + ?Sized> SlotEq for &T {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other) || (**self).slot_eq(*other)
    }
}

impl<T: SlotEq + ?Sized> SlotEq for Box<T> {
    fn slot_eq(&self, other: &Self) -> bool {
        (**self).slot_eq(&**other)
    }
}

impl<T: SlotEq> SlotEq for Option<T> {
    fn slot_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.slot_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: SlotEq> SlotEq for [T] {
    fn slot_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.slot_eq(b))
    }
}

impl<T: SlotEq> SlotEq for Vec<T> {
    fn slot_eq(&self, other: &Self) -> bool {
        self.as_slice().slot_eq(other.as_slice())
    }
}

impl<A: SlotEq, B: SlotEq> SlotEq for ObjectsPair<A, B> {
    fn slot_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Order two slots so that `Equal` is returned exactly when they are equal
fn slot_partial_cmp<T: SlotEq + PartialOrd>(a: &Option<T>, b: &Option<T>) -> Option<Ordering> {
    if a.slot_eq(b) {
        return Some(Ordering::Equal);
    }
    match a.partial_cmp(b) {
        // Equal under `<` but not under `slot_eq`, e.g. 0.0 and -0.0
        Some(Ordering::Equal) => None,
        ord => ord,
    }
}

/// Shared behaviour of every pair in the family
pub trait Tuple2: PartialEq + fmt::Display {
    /// Type of the first element
    type First;
    /// Type of the second element
    type Second;

    /// First element, `None` when absent
    fn first(&self) -> Option<&Self::First>;

    /// Second element, `None` when absent
    fn second(&self) -> Option<&Self::Second>;

    /// Exclusive-or of the element hashes
    fn pair_hash(&self) -> u64;

    /// The first element viewed as a key
    fn key(&self) -> Option<&Self::First> {
        self.first()
    }

    /// The second element viewed as a value
    fn value(&self) -> Option<&Self::Second> {
        self.second()
    }
}

/// A pair of arbitrary values, either of which may be absent
///
/// Although the pair is immutable, nothing stops it from holding values with
/// interior mutability. Such a pair is only as immutable as its contents.
///
/// Pairs are ordered by first element, then second, with an absent element
/// before any present one. Doubles keep their IEEE ordering, so a pair of
/// doubles is only `PartialOrd`; `0.0` and `-0.0` are unequal and unordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObjectsPair<A, B> {
    first: Option<A>,
    second: Option<B>,
}

impl<A, B> ObjectsPair<A, B> {
    /// Create a pair with both elements present
    pub fn of(first: A, second: B) -> Self {
        ObjectsPair {
            first: Some(first),
            second: Some(second),
        }
    }

    /// Create a pair where either element may be absent
    pub fn of_optional(first: Option<A>, second: Option<B>) -> Self {
        ObjectsPair { first, second }
    }

    /// First element, `None` when absent
    #[inline]
    pub fn first(&self) -> Option<&A> {
        self.first.as_ref()
    }

    /// Second element, `None` when absent
    #[inline]
    pub fn second(&self) -> Option<&B> {
        self.second.as_ref()
    }

    /// Consume the pair and return its elements
    pub fn into_parts(self) -> (Option<A>, Option<B>) {
        (self.first, self.second)
    }

    /// Both elements converted into a common type, as a fresh list
    pub fn to_list_as<T>(&self) -> Vec<Option<T>>
    where
        A: Clone + Into<T>,
        B: Clone + Into<T>,
    {
        vec![
            self.first.clone().map(Into::into),
            self.second.clone().map(Into::into),
        ]
    }
}

impl<T: Clone> ObjectsPair<T, T> {
    /// Both elements as a fresh list `[first, second]`
    pub fn to_list(&self) -> Vec<Option<T>> {
        vec![self.first.clone(), self.second.clone()]
    }
}

impl<A: Hash, B: Hash> ObjectsPair<A, B> {
    /// Exclusive-or of the element hashes, `0` for an absent element
    pub fn pair_hash(&self) -> u64 {
        combine_hashes(
            self.first.as_ref().map(element_hash),
            self.second.as_ref().map(element_hash),
        )
    }
}

impl<A: Hash, B: Hash> Hash for ObjectsPair<A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.pair_hash());
    }
}

impl<A: SlotEq, B: SlotEq> PartialEq for ObjectsPair<A, B> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.first.slot_eq(&other.first) && self.second.slot_eq(&other.second))
    }
}

impl<A: SlotEq + Eq, B: SlotEq + Eq> Eq for ObjectsPair<A, B> {}

impl<A, B> PartialOrd for ObjectsPair<A, B>
where
    A: SlotEq + PartialOrd,
    B: SlotEq + PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match slot_partial_cmp(&self.first, &other.first)? {
            Ordering::Equal => slot_partial_cmp(&self.second, &other.second),
            ord => Some(ord),
        }
    }
}

impl<A: SlotEq + Ord, B: SlotEq + Ord> Ord for ObjectsPair<A, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first
            .cmp(&other.first)
            .then_with(|| self.second.cmp(&other.second))
    }
}

impl<A, B> From<(A, B)> for ObjectsPair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        ObjectsPair::of(first, second)
    }
}

fn write_slot<T: fmt::Display>(f: &mut fmt::Formatter<'_>, slot: Option<&T>) -> fmt::Result {
    match slot {
        Some(v) => write!(f, "{}", v),
        None => f.write_str(ABSENT),
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for ObjectsPair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_slot(f, self.first.as_ref())?;
        f.write_str(", ")?;
        write_slot(f, self.second.as_ref())?;
        f.write_str(")")
    }
}

impl<A, B> Tuple2 for ObjectsPair<A, B>
where
    A: Hash + SlotEq + fmt::Display,
    B: Hash + SlotEq + fmt::Display,
{
    type First = A;
    type Second = B;

    fn first(&self) -> Option<&A> {
        self.first.as_ref()
    }

    fn second(&self) -> Option<&B> {
        self.second.as_ref()
    }

    fn pair_hash(&self) -> u64 {
        ObjectsPair::pair_hash(self)
    }
}

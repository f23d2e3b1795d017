//! Closed sum over every pair variant
//!
//! `AnyPair` lets code hold pairs of different variants side by side.
//! Equality and hashing only ever match within the same variant:
//! `IntDouble(1, 2.0)` and `LongDouble(1, 2.0)` are different values even
//! though their contents are numerically equal.

use crate::element::Element;
use crate::numeric::{DoublesPair, IntDoublePair, LongDoublePair};
use crate::pair::{ObjectsPair, SlotEq};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any member of the pair family
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyPair {
    /// Generic pair of elements, either may be absent
    Objects(ObjectsPair<Element, Element>),
    /// Pair of doubles
    Doubles(DoublesPair),
    /// Int to double pair
    IntDouble(IntDoublePair),
    /// Long to double pair
    LongDouble(LongDoublePair),
}

impl AnyPair {
    /// Get the variant name as a string
    pub fn variant_name(&self) -> &'static str {
        match self {
            AnyPair::Objects(_) => "ObjectsPair",
            AnyPair::Doubles(_) => "DoublesPair",
            AnyPair::IntDouble(_) => "IntDoublePair",
            AnyPair::LongDouble(_) => "LongDoublePair",
        }
    }

    /// First element, `None` when absent
    pub fn first(&self) -> Option<Element> {
        match self {
            AnyPair::Objects(p) => p.first().cloned(),
            AnyPair::Doubles(p) => Some(Element::Double(p.first())),
            AnyPair::IntDouble(p) => Some(Element::Int(p.first())),
            AnyPair::LongDouble(p) => Some(Element::Long(p.first())),
        }
    }

    /// Second element, `None` when absent
    pub fn second(&self) -> Option<Element> {
        match self {
            AnyPair::Objects(p) => p.second().cloned(),
            AnyPair::Doubles(p) => Some(Element::Double(p.second())),
            AnyPair::IntDouble(p) => Some(Element::Double(p.second())),
            AnyPair::LongDouble(p) => Some(Element::Double(p.second())),
        }
    }

    /// Exclusive-or of the element hashes of the wrapped pair
    pub fn pair_hash(&self) -> u64 {
        match self {
            AnyPair::Objects(p) => p.pair_hash(),
            AnyPair::Doubles(p) => p.pair_hash(),
            AnyPair::IntDouble(p) => p.pair_hash(),
            AnyPair::LongDouble(p) => p.pair_hash(),
        }
    }

    /// Both elements as a fresh list `[first, second]`
    pub fn to_list(&self) -> Vec<Option<Element>> {
        vec![self.first(), self.second()]
    }
}

impl SlotEq for AnyPair {
    fn slot_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for AnyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPair::Objects(p) => fmt::Display::fmt(p, f),
            AnyPair::Doubles(p) => fmt::Display::fmt(p, f),
            AnyPair::IntDouble(p) => fmt::Display::fmt(p, f),
            AnyPair::LongDouble(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<ObjectsPair<Element, Element>> for AnyPair {
    fn from(p: ObjectsPair<Element, Element>) -> Self {
        AnyPair::Objects(p)
    }
}

impl From<DoublesPair> for AnyPair {
    fn from(p: DoublesPair) -> Self {
        AnyPair::Doubles(p)
    }
}

impl From<IntDoublePair> for AnyPair {
    fn from(p: IntDoublePair) -> Self {
        AnyPair::IntDouble(p)
    }
}

impl From<LongDoublePair> for AnyPair {
    fn from(p: LongDoublePair) -> Self {
        AnyPair::LongDouble(p)
    }
}

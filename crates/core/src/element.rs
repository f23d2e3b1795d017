//! Element value type for heterogeneous pairs
//!
//! This module defines:
//! - Element: closed enum of the values a mixed pair can carry
//!
//! ## Type Rules
//!
//! - Different variants are NEVER equal: `Int(1) != Long(1) != Double(1.0)`
//! - No implicit coercion on comparison; widening only happens through the
//!   explicit `TryFrom` conversions at the bottom of this file
//! - `Double` equality is bit-exact with every NaN collapsed to one canonical
//!   NaN: `NaN == NaN`, `0.0 != -0.0`. `Eq` and `Hash` stay lawful.

use crate::error::Error;
use crate::pair::SlotEq;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest magnitude an `i64` can have and still be an exact `f64`
const MAX_EXACT_DOUBLE_INT: i64 = 1 << 53;

/// Collapse every NaN payload onto `f64::NAN`
#[inline]
pub(crate) fn canonical(v: f64) -> f64 {
    if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// Bit pattern used for equality and hashing of doubles
#[inline]
pub(crate) fn canonical_bits(v: f64) -> u64 {
    canonical(v).to_bits()
}

/// A single pair element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    /// Boolean value
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 64-bit floating point (IEEE-754)
    Double(f64),
    /// UTF-8 string
    Text(String),
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Bool(a), Element::Bool(b)) => a == b,
            (Element::Int(a), Element::Int(b)) => a == b,
            (Element::Long(a), Element::Long(b)) => a == b,
            (Element::Double(a), Element::Double(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Element::Text(a), Element::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Element {}

impl SlotEq for Element {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Element::Bool(b) => b.hash(state),
            Element::Int(i) => i.hash(state),
            Element::Long(l) => l.hash(state),
            Element::Double(d) => canonical_bits(*d).hash(state),
            Element::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Bool(b) => write!(f, "{}", b),
            Element::Int(i) => write!(f, "{}", i),
            Element::Long(l) => write!(f, "{}", l),
            // Debug keeps the decimal point: 1.0 rather than 1, 1e300, inf, NaN
            Element::Double(d) => write!(f, "{:?}", d),
            Element::Text(s) => f.write_str(s),
        }
    }
}

impl Element {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Bool(_) => "Bool",
            Element::Int(_) => "Int",
            Element::Long(_) => "Long",
            Element::Double(_) => "Double",
            Element::Text(_) => "Text",
        }
    }

    /// Get as bool if this is a Bool element
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i32 if this is an Int element
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Element::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as i64 if this is a Long element
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Element::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Get as f64 if this is a Double element
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Element::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as &str if this is a Text element
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Text(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Bool(b)
    }
}

impl From<i32> for Element {
    fn from(i: i32) -> Self {
        Element::Int(i)
    }
}

impl From<i64> for Element {
    fn from(l: i64) -> Self {
        Element::Long(l)
    }
}

impl From<f64> for Element {
    fn from(d: f64) -> Self {
        Element::Double(d)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Text(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Text(s)
    }
}

// ============================================================================
// Checked conversions into primitive slots
// ============================================================================

fn unrepresentable(element: &Element, target: &str) -> Error {
    Error::InvalidConversion {
        slot: "value",
        reason: format!("{} {} is not representable as {}", element.type_name(), element, target),
    }
}

impl TryFrom<Element> for i32 {
    type Error = Error;

    fn try_from(element: Element) -> Result<Self, Self::Error> {
        match element {
            Element::Int(i) => Ok(i),
            Element::Long(l) => {
                i32::try_from(l).map_err(|_| unrepresentable(&Element::Long(l), "i32"))
            }
            other => Err(unrepresentable(&other, "i32")),
        }
    }
}

impl TryFrom<Element> for i64 {
    type Error = Error;

    fn try_from(element: Element) -> Result<Self, Self::Error> {
        match element {
            Element::Int(i) => Ok(i64::from(i)),
            Element::Long(l) => Ok(l),
            other => Err(unrepresentable(&other, "i64")),
        }
    }
}

impl TryFrom<Element> for f64 {
    type Error = Error;

    fn try_from(element: Element) -> Result<Self, Self::Error> {
        match element {
            Element::Double(d) => Ok(d),
            Element::Int(i) => Ok(f64::from(i)),
            Element::Long(l) if (-MAX_EXACT_DOUBLE_INT..=MAX_EXACT_DOUBLE_INT).contains(&l) => {
                Ok(l as f64)
            }
            other => Err(unrepresentable(&other, "f64")),
        }
    }
}

//! Binary function abstraction
//!
//! `Function2` is a callable taking two inputs and producing one output.
//! Calling code accepts it wherever a two-argument behaviour (a comparator,
//! a combinator) should be swappable. Every `Fn(A, B) -> R` closure is a
//! `Function2`, and named types can implement it directly.

/// A function of two arguments
///
/// Nothing is promised about side effects; that is up to the implementor.
pub trait Function2<A, B, R> {
    /// Apply the function
    fn execute(&self, a: A, b: B) -> R;
}

impl<A, B, R, F> Function2<A, B, R> for F
where
    F: Fn(A, B) -> R,
{
    #[inline]
    fn execute(&self, a: A, b: B) -> R {
        self(a, b)
    }
}

//! Textual rendering and list conversion.

use lambdava::{AnyPair, DoublesPair, Element, IntDoublePair, LongDoublePair, ObjectsPair};

#[test]
fn test_display_ints() {
    assert_eq!(ObjectsPair::of(1, 2).to_string(), "(1, 2)");
}

#[test]
fn test_display_uses_element_rendering() {
    assert_eq!(ObjectsPair::of("key", 'v').to_string(), "(key, v)");
    assert_eq!(
        ObjectsPair::of(Element::Double(1.0), Element::Long(2)).to_string(),
        "(1.0, 2)"
    );
    let nested = ObjectsPair::of(ObjectsPair::of(1, 2), 3);
    assert_eq!(nested.to_string(), "((1, 2), 3)");
}

#[test]
fn test_display_primitive_variants() {
    assert_eq!(DoublesPair::of(1.0, 2.0).to_string(), "(1.0, 2.0)");
    assert_eq!(IntDoublePair::of(1, 2.0).to_string(), "(1, 2.0)");
    assert_eq!(LongDoublePair::of(1, 2.0).to_string(), "(1, 2.0)");
    assert_eq!(AnyPair::from(IntDoublePair::of(1, 2.0)).to_string(), "(1, 2.0)");
}

#[test]
fn test_display_non_finite_doubles() {
    let p = ObjectsPair::of(Element::Double(f64::INFINITY), Element::Double(1e300));
    assert_eq!(p.to_string(), "(inf, 1e300)");
    assert_eq!(DoublesPair::of(f64::NAN, f64::NEG_INFINITY).to_string(), "(NaN, -inf)");
}

#[test]
fn test_to_list_order() {
    let p = ObjectsPair::of("k", "v");
    assert_eq!(p.to_list(), vec![Some("k"), Some("v")]);
}

#[test]
fn test_to_list_returns_independent_lists() {
    let p = ObjectsPair::of(vec![1], vec![2]);
    let mut a = p.to_list();
    let b = p.to_list();

    if let Some(Some(first)) = a.first_mut() {
        first.push(99);
    }
    assert_eq!(a[0], Some(vec![1, 99]));
    assert_eq!(b[0], Some(vec![1]));
    assert_eq!(p.first(), Some(&vec![1]));
}

#[test]
fn test_to_list_primitive_variants() {
    assert_eq!(DoublesPair::of(3.0, 4.0).to_list(), vec![3.0, 4.0]);
    assert_eq!(
        IntDoublePair::of(3, 4.0).to_list(),
        vec![Element::Int(3), Element::Double(4.0)]
    );
}

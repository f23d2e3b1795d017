//! Serde and blob round-trips.

use lambdava::{
    from_blob, to_blob, AnyPair, DoublesPair, Element, Error, IntDoublePair, LongDoublePair,
    ObjectsPair, SerialVersion,
};

#[test]
fn test_json_roundtrip_objects_pair() {
    let p: ObjectsPair<String, Vec<u8>> = ObjectsPair::of("k".to_string(), vec![1, 2]);
    let json = serde_json::to_string(&p).unwrap();
    let restored: ObjectsPair<String, Vec<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, restored);
}

#[test]
fn test_json_roundtrip_primitive_pairs() {
    let d = DoublesPair::of(0.5, -2.0);
    let i = IntDoublePair::of(-1, 3.25);
    let l = LongDoublePair::of(1 << 40, 0.125);

    let d2: DoublesPair = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
    let i2: IntDoublePair = serde_json::from_str(&serde_json::to_string(&i).unwrap()).unwrap();
    let l2: LongDoublePair = serde_json::from_str(&serde_json::to_string(&l).unwrap()).unwrap();

    assert_eq!((d, i, l), (d2, i2, l2));
}

#[test]
fn test_blob_roundtrip_every_variant() {
    let pairs = vec![
        AnyPair::from(ObjectsPair::of_optional(Some(Element::from("a")), None)),
        AnyPair::from(DoublesPair::of(f64::NAN, 0.0)),
        AnyPair::from(IntDoublePair::of(i32::MAX, -0.0)),
        AnyPair::from(LongDoublePair::of(i64::MIN, f64::INFINITY)),
    ];
    for p in pairs {
        let bytes = to_blob(&p).unwrap();
        let restored: AnyPair = from_blob(&bytes).unwrap();
        assert_eq!(p, restored);
        assert_eq!(p.pair_hash(), restored.pair_hash());
    }
}

#[test]
fn test_every_type_declares_version_one() {
    assert_eq!(<ObjectsPair<i32, i32> as SerialVersion>::SERIAL_VERSION, 1);
    assert_eq!(DoublesPair::SERIAL_VERSION, 1);
    assert_eq!(IntDoublePair::SERIAL_VERSION, 1);
    assert_eq!(LongDoublePair::SERIAL_VERSION, 1);
    assert_eq!(AnyPair::SERIAL_VERSION, 1);
    assert_eq!(Element::SERIAL_VERSION, 1);
}

#[test]
fn test_garbage_blob_rejected() {
    let err = from_blob::<IntDoublePair>(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, Error::SerializationError(_)));
}

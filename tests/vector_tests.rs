// tests/vector_tests.rs

use vector_patterns::prelude::*;

const EPS: f64 = 1e-12;

#[test]
fn test_new_and_components() {
    let v = Vector::planar(1.0, 2.0);
    assert_eq!(v.components(), &[1.0, 2.0]);
    assert_eq!(v.dimension(), 2);
    assert_eq!(v.z(), None);

    let w = Vector::spatial(1.0, 2.0, 3.0);
    assert_eq!(w.components(), &[1.0, 2.0, 3.0]);
    assert_eq!(w.dimension(), 3);
    assert_eq!(w.z(), Some(3.0));
}

#[test]
fn test_abs() {
    assert_eq!(Vector::planar(3.0, 4.0).abs(), 5.0);
    assert_eq!(Vector::spatial(2.0, 3.0, 6.0).abs(), 7.0);
    assert_eq!(Vector::planar(0.0, 0.0).abs(), 0.0);
    assert_eq!(Vector::spatial(0.0, 0.0, 0.0).abs(), 0.0);
    assert!((Vector::spatial(2.0, 1.0, 3.0).abs() - 14f64.sqrt()).abs() < EPS);
}

#[test]
fn test_dot_same_dimension() {
    let a = Vector::spatial(1.0, 2.0, 3.0);
    let b = Vector::spatial(4.0, -5.0, 6.0);
    // 1*4 + 2*(-5) + 3*6 = 4 -10 +18 = 12
    assert_eq!(a.dot(&b), 12.0);
    assert_eq!(b.dot(&a), 12.0);

    let p = Vector::planar(2.0, 3.0);
    let q = Vector::planar(-1.0, 4.0);
    assert_eq!(p.dot(&q), 10.0);
    assert_eq!(q.dot(&p), 10.0);
}

#[test]
fn test_dot_planar_argument_drops_receiver_z() {
    let a = Vector::spatial(2.0, 1.0, f64::INFINITY);
    let b = Vector::planar(2.0, 3.0);
    assert_eq!(a.dot(&b), 7.0);
}

#[test]
fn test_dot_is_asymmetric_across_dimensions() {
    let planar = Vector::planar(1.0, 2.0);
    let spatial = Vector::spatial(3.0, 4.0, f64::INFINITY);

    // planar receiver multiplies the argument's z by 0
    assert!(planar.dot(&spatial).is_nan());
    // spatial receiver never looks at a z
    assert_eq!(spatial.dot(&planar), 11.0);

    // with finite values both orders agree on the planar sum
    let spatial = Vector::spatial(3.0, 4.0, 5.0);
    assert_eq!(planar.dot(&spatial), 11.0);
    assert_eq!(spatial.dot(&planar), 11.0);
}

#[test]
fn test_cross() {
    let e1 = Vector::spatial(1.0, 0.0, 0.0);
    let e2 = Vector::spatial(0.0, 1.0, 0.0);
    let e3 = Vector::spatial(0.0, 0.0, 1.0);
    assert_eq!(e1.cross(&e2), e3);
    assert_eq!(e2.cross(&e3), e1);
    assert_eq!(e3.cross(&e1), e2);
    // anti-commutativity
    assert_eq!(e2.cross(&e1), Vector::spatial(0.0, 0.0, -1.0));
}

#[test]
fn test_cross_lifts_planar_argument() {
    let a = Vector::spatial(2.0, 1.0, 3.0);
    let b = Vector::planar(1.0, 2.0);
    assert_eq!(a.cross(&b), a.cross(&b.lift()));
    assert_eq!(a.cross(&b), Vector::spatial(-6.0, 3.0, 3.0));
}

#[test]
fn test_cross_lifts_planar_receiver() {
    let a = Vector::planar(2.0, 1.0);
    let b = Vector::spatial(1.0, 2.0, 4.0);
    assert_eq!(a.cross(&b), a.lift().cross(&b));
    assert_eq!(a.cross(&b), Vector::spatial(4.0, -8.0, 3.0));
}

#[test]
fn test_cross_is_always_spatial() {
    let c = Vector::planar(1.0, 0.0).cross(&Vector::planar(0.0, 1.0));
    assert_eq!(c, Vector::spatial(0.0, 0.0, 1.0));
    assert_eq!(c.dimension(), 3);
}

#[test]
fn test_round_trip_through_components() {
    for v in [Vector::planar(2.0, 3.0), Vector::spatial(-1.5, 0.0, 7.25)] {
        assert_eq!(Vector::from_components(v.components()).unwrap(), v);
        assert_eq!(Vector::try_from(v.components()).unwrap(), v);
    }
}

#[test]
fn test_from_components_rejects_other_dimensions() {
    assert!(matches!(
        Vector::from_components(&[]),
        Err(VectorError::Dimension { found: 0 })
    ));
    assert!(matches!(
        Vector::from_components(&[1.0, 2.0, 3.0, 4.0]),
        Err(VectorError::Dimension { found: 4 })
    ));
}

#[test]
fn test_from_arrays() {
    assert_eq!(Vector::from([1.0, 2.0]), Vector::planar(1.0, 2.0));
    assert_eq!(Vector::from([1.0, 2.0, 3.0]), Vector::spatial(1.0, 2.0, 3.0));
}

#[test]
fn test_xy_and_lift() {
    let v = Vector::spatial(2.0, 1.0, 3.0);
    assert_eq!(v.xy(), Vector::planar(2.0, 1.0));
    assert_eq!(v.lift(), v);
    assert_eq!(Vector::planar(2.0, 1.0).lift(), Vector::spatial(2.0, 1.0, 0.0));
}

#[test]
fn test_neg() {
    assert_eq!(-Vector::spatial(1.0, -2.0, 3.0), Vector::spatial(-1.0, 2.0, -3.0));
    assert_eq!(-Vector::planar(1.0, -2.0), Vector::planar(-1.0, 2.0));
}

#[test]
fn test_nan_propagates() {
    let v = Vector::planar(f64::NAN, 1.0);
    assert!(v.abs().is_nan());
    assert!(v.dot(&Vector::planar(1.0, 1.0)).is_nan());
}

#[test]
fn test_display() {
    assert_eq!(Vector::planar(2.0, 3.0).to_string(), "[2.0, 3.0]");
    assert_eq!(Vector::spatial(-2.0, -5.0, 3.0).to_string(), "[-2.0, -5.0, 3.0]");
    assert_eq!(format!("{}", Bracketed(&[0.5, -0.25])), "[0.5, -0.25]");
}

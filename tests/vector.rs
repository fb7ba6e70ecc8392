//! Vector construction, restricted arithmetic and algebra scenarios.

use std::f64::consts::FRAC_PI_2;

use coord_engine::{angle, cross, inner, point, vector, GeometryError, Rounded, Scalar, Vector};

const EPS: f64 = 1e-12;

#[test]
fn test_vector_initialization() {
    let x = point![1, 2, 3];
    let x_v = Vector::from_point(&x);
    assert_eq!(x_v.type_name(), "3D Vector");

    let y = vector![4, 1, 2, 3];
    assert_eq!(y.type_name(), "4D Vector");

    let moved: Vector = x.into();
    assert!(moved.try_eq(&x_v).unwrap());
}

#[test]
fn test_vector_indexing() {
    let mut x = vector![1, 2, 3];
    x.set(0, 4).unwrap();
    x.set(1, 5).unwrap();
    x.set(2, 6).unwrap();
    assert_eq!(x.get(0).unwrap(), Scalar::new(4.0, 0.0));
    assert_eq!(x.get(2).unwrap(), Scalar::new(6.0, 0.0));
    assert!(matches!(
        x.set(5, 1),
        Err(GeometryError::IndexOutOfRange { index: 5, .. })
    ));
}

#[test]
fn test_vector_key_lookup() {
    let mut x = vector![; x = 1, y = 2, z = 3].unwrap();
    assert_eq!(x.get_axis("y").unwrap(), Scalar::new(2.0, 0.0));
    x.set_axis("z", 9).unwrap();
    assert_eq!(x.get(2).unwrap(), Scalar::new(9.0, 0.0));
    assert_eq!(x.axis_names(), vec!["x", "y", "z"]);
    assert!(matches!(
        x.get_axis("q"),
        Err(GeometryError::UnknownAxis { .. })
    ));
}

#[test]
fn test_vector_mixed_addressing() {
    let mut x = vector![1; y = 2, z = 3].unwrap();
    assert_eq!(x.get(2).unwrap(), x.get_axis("z").unwrap());
    x.set(1, 4).unwrap();
    assert_eq!(x.get_axis("y").unwrap(), Scalar::new(4.0, 0.0));
}

#[test]
fn test_dimension() {
    assert_eq!(vector![1, 2, 3].dimension(), 3);
    assert_eq!(vector![1, 2; z = 3, x = 4, n = 5].unwrap().dimension(), 5);
}

#[test]
fn test_signature() {
    let x = vector![1, 2, 3];
    let y = vector![; x = 1, y = 2, z = 3].unwrap();
    assert_ne!(x.signature(), y.signature());

    let z = vector![4, 5, 6];
    let w = vector![; x = 4, y = 5, z = 6].unwrap();
    assert_eq!(x.signature(), z.signature());
    assert_eq!(y.signature(), w.signature());
    assert_ne!(x.signature(), x.point().signature());
}

#[test]
fn test_repr() {
    assert_eq!(vector![1, 2, 3].to_string(), "<1.00, 2.00, 3.00>");
    let y = vector![0, Scalar::new(4.0, 3.0), 7];
    assert_eq!(y.to_string(), "<0.00, 4.00 + 3.00j, 7.00>");
    assert_eq!(Rounded(&y, 0).to_string(), "<0, 4 + 3j, 7>");
}

#[test]
fn test_hash() {
    let x = vector![1, 2, 3];
    let y = vector![1, 2, 3];
    let w = vector![3, 4, 5, 6];
    let z = vector![; x = 1, y = 2, z = 3].unwrap();

    assert_eq!(x.fingerprint(), y.fingerprint());
    assert_ne!(x.fingerprint(), z.fingerprint());
    assert_ne!(x.fingerprint(), w.fingerprint());
    assert_ne!(x.fingerprint(), x.point().fingerprint());
}

#[test]
fn test_equality() {
    let x = vector![1, 2, 3];
    let y = vector![1, 2, 3];
    let q = vector![4, 5, 6];
    let z = vector![; x = 1, y = 2, z = 3].unwrap();

    assert!(x.try_eq(&y).unwrap());
    assert!(x.try_ne(&q).unwrap());

    // The mismatch is reported in terms of vectors, not their points.
    assert_eq!(
        x.try_eq(&z).unwrap_err(),
        GeometryError::ShapeMismatch {
            left: "3D Vector".into(),
            right: "3D Vector".into()
        }
    );

    let p = point![1, 2, 3];
    assert_eq!(
        x.try_eq(&p).unwrap_err(),
        GeometryError::CapabilityMismatch {
            operation: "comparison",
            left: "3D Vector".into(),
            right: "3D Point".into()
        }
    );
}

#[test]
fn test_add() {
    let x = vector![1, 2, 3];
    let y = vector![2, 4, 6];
    let z = vector![3, 4, 5];

    assert!((&x + &x).unwrap().try_eq(&y).unwrap());
    assert!((&x + 2).try_eq(&z).unwrap());
    assert!((2 + &x).try_eq(&z).unwrap());
    assert!((&vector![1, 2, 3] + &vector![2, 4, 6])
        .unwrap()
        .try_eq(&vector![3, 6, 9])
        .unwrap());

    let w = vector![; x = 1, y = 2, z = 3].unwrap();
    assert!(matches!(&x + &w, Err(GeometryError::ShapeMismatch { .. })));
    assert!(matches!(
        x.try_add(&point![1, 2, 3]),
        Err(GeometryError::CapabilityMismatch { .. })
    ));
}

#[test]
fn test_negative() {
    let x = vector![1, 2, 3];
    assert!((-&x).try_eq(&vector![-1, -2, -3]).unwrap());
}

#[test]
fn test_subtract() {
    let x = vector![1, 2, 3];
    let y = vector![2, 4, 6];
    let z = vector![3, 4, 5];
    let w = vector![2, 1, 0];

    assert!((&y - &x).unwrap().try_eq(&x).unwrap());
    assert!((&z - 2).try_eq(&x).unwrap());
    assert!((5 - &z).try_eq(&w).unwrap());
}

#[test]
fn test_multiplication() {
    let x = vector![1, 2, 3];
    let y = vector![2, 4, 6];

    assert!((&x * 2).try_eq(&y).unwrap());
    assert!((2 * &x).try_eq(&y).unwrap());

    match x.try_mul(&y).unwrap_err() {
        GeometryError::UndefinedOperation { operation, reason } => {
            assert_eq!(operation, "multiplication");
            assert!(reason.contains("inner()"));
            assert!(reason.contains("cross()"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_division() {
    let x = vector![1, 2, 3];
    let y = vector![2, 4, 6];
    let z = vector![6, 3, 2];

    assert!((&y / 2).try_eq(&x).unwrap());
    assert!((12 / &y).try_eq(&z).unwrap());
    assert!(matches!(
        y.try_div(&x),
        Err(GeometryError::UndefinedOperation { .. })
    ));
}

#[test]
fn test_invert() {
    let x = vector![2, 3, 4];
    let y = vector![0.5, 1.0 / 3.0, 0.25];
    assert!(x.recip().try_eq(&y).unwrap());
    assert!(x.recip().recip().try_eq(&x).unwrap());
}

#[test]
fn test_norm_and_unit() {
    let v = vector![3, 4];
    let n = v.norm();
    assert!((n.re - 5.0).abs() < EPS);
    assert_eq!(n.im, 0.0);
    assert!(v.unit().unwrap().try_eq(&vector![0.6, 0.8]).unwrap());

    assert!(matches!(
        vector![0, 0].unit(),
        Err(GeometryError::DegenerateInput { .. })
    ));
}

#[test]
fn test_inner() {
    let a = vector![1, 2, 3];
    let b = vector![4, 5, 6];
    assert_eq!(inner(&a, &b).unwrap(), Scalar::new(32.0, 0.0));
    assert_eq!(a.inner(&b).unwrap(), Scalar::new(32.0, 0.0));
    assert!(matches!(
        inner(&point![1, 2, 3], &point![4, 5, 6]),
        Err(GeometryError::CapabilityMismatch { .. })
    ));
}

#[test]
fn test_cross() {
    let c = cross(&vector![1, 2, 3], &vector![4, 5, 6]).unwrap();
    assert!(c.try_eq(&vector![-3, 6, -3]).unwrap());

    let named_a = vector![; x = 1, y = 0, z = 0].unwrap();
    let named_b = vector![; x = 0, y = 1, z = 0].unwrap();
    let k = named_a.cross(&named_b).unwrap();
    assert_eq!(k.get_axis("z").unwrap(), Scalar::new(1.0, 0.0));
    assert_eq!(k.signature(), named_a.signature());

    assert!(matches!(
        cross(&vector![1, 2, 3, 4], &vector![1, 2, 3, 4]),
        Err(GeometryError::UndefinedOperation { .. })
    ));
    assert!(matches!(
        cross(&vector![1, 2, 3], &named_b),
        Err(GeometryError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_angle() {
    let theta = angle(&vector![1, 0, 0], &vector![0, 1, 0]).unwrap();
    assert!((theta - FRAC_PI_2).abs() < EPS);
    assert!((vector![1, 0].angle(&vector![0, 5]).unwrap() - FRAC_PI_2).abs() < EPS);
    assert!(matches!(
        angle(&vector![0, 0, 0], &vector![0, 1, 0]),
        Err(GeometryError::DegenerateInput { .. })
    ));
}

#[test]
fn test_nalgebra_agrees_on_3d_cross() {
    let (a, b) = ([0.3, -1.2, 2.5], [4.0, 0.7, -0.9]);
    let ours = cross(&vector![a[0], a[1], a[2]], &vector![b[0], b[1], b[2]]).unwrap();
    let theirs = nalgebra::Vector3::new(a[0], a[1], a[2]).cross(&nalgebra::Vector3::new(b[0], b[1], b[2]));
    for i in 0..3 {
        assert!((ours.get(i).unwrap().re - theirs[i]).abs() < EPS);
    }
}

#[test]
fn test_into_point_round_trip() {
    let v = vector![; u = 1, v = 2].unwrap();
    let p = v.clone().into_point();
    assert_eq!(p.axis_names(), vec!["u", "v"]);
    assert!(Vector::from(p).try_eq(&v).unwrap());
}

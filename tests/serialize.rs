#![cfg(feature = "serde")]

use ndlayout::prelude::*;

#[test]
fn serial_position() {
    let p = Position::from([3, 1, 4]);
    let serial = serde_json::to_string(&p).unwrap();
    assert_eq!(serial, "[3,1,4]");
    let res = serde_json::from_str::<Position>(&serial);
    assert_eq!(res.unwrap(), p);
}

#[test]
fn serial_layout() {
    let (sub, _) = ArrayLayout::new((6, 4))
        .make_subset((1, 0), (5, 3), (2, 3))
        .unwrap();
    let serial = serde_json::to_string(&sub).unwrap();
    assert_eq!(
        serial,
        r#"{"shape":[3,2],"increments":[2,3],"original_shape":[6,4]}"#
    );
    let res = serde_json::from_str::<ArrayLayout>(&serial).unwrap();
    assert_eq!(res, sub);
    assert_eq!(res.steps(), sub.steps());
}

#[test]
fn serial_layout_rejects_inconsistent_parts() {
    let serial = r#"{"shape":[3],"increments":[2],"original_shape":[4]}"#;
    assert!(serde_json::from_str::<ArrayLayout>(serial).is_err());
    let serial = r#"{"shape":[3,2],"increments":[1],"original_shape":[3,2]}"#;
    assert!(serde_json::from_str::<ArrayLayout>(serial).is_err());
    let serial = r#"{"shape":[1,1,1],"increments":[1,1,1],"original_shape":[4294967296,4294967296,2]}"#;
    assert!(serde_json::from_str::<ArrayLayout>(serial).is_err());
    let serial = r#"{"shape":[2],"increments":[18446744073709551615],"original_shape":[5]}"#;
    assert!(serde_json::from_str::<ArrayLayout>(serial).is_err());
}

#[test]
fn serial_array() {
    let a = Array::from_shape_fn((2, 3), |ix| (ix[0] + 2 * ix[1]) as f32);
    let serial = serde_json::to_string(&a).unwrap();
    assert_eq!(serial, r#"{"v":1,"dim":[2,3],"data":[0.0,1.0,2.0,3.0,4.0,5.0]}"#);
    let res = serde_json::from_str::<Array<f32>>(&serial).unwrap();
    assert_eq!(res, a);
}

#[test]
fn serial_strided_view() {
    let a = Array::from_shape_fn((4, 4), |ix| ix[0] + 4 * ix[1]);
    let view = a.subset((0, 0), (3, 3), (2, 2)).unwrap();
    let serial = serde_json::to_string(&view).unwrap();
    assert_eq!(serial, r#"{"v":1,"dim":[2,2],"data":[0,2,8,10]}"#);
    let res = serde_json::from_str::<Array<usize>>(&serial).unwrap();
    assert_eq!(res, view);
    assert!(res.is_contiguous());
}

#[test]
fn serial_array_wrong_size() {
    let serial = r#"{"v":1,"dim":[2,3],"data":[0,1,2]}"#;
    assert!(serde_json::from_str::<Array<i32>>(serial).is_err());
    let serial = r#"{"v":2,"dim":[3],"data":[0,1,2]}"#;
    assert!(serde_json::from_str::<Array<i32>>(serial).is_err());
}

use ndlayout::prelude::*;

use itertools::Itertools;
use quickcheck::{quickcheck, TestResult};

/// A small shape of rank 1 to 4 from arbitrary bytes.
fn small_shape(lens: &[u8]) -> Position {
    lens.iter().take(4).map(|&len| 1 + len as usize % 5).collect()
}

#[test]
fn construct_counts_and_contiguity() {
    let shapes: [&[usize]; 7] = [&[], &[0], &[7], &[3, 4], &[1, 1, 1], &[2, 0, 5], &[2, 3, 4, 5]];
    for shape in shapes {
        let layout = ArrayLayout::new(shape);
        assert_eq!(layout.len(), Position::from(shape).product());
        assert!(layout.is_contiguous(), "{:?}", layout);
        assert_eq!(layout.shape(), shape);
    }
    assert!(ArrayLayout::new(()).is_empty());
    assert!(ArrayLayout::new((3, 0)).is_empty());
}

#[test]
fn physical_steps_column_major() {
    let layout = ArrayLayout::new((3, 4, 5));
    assert_eq!(layout.steps(), &[1, 3, 12]);
    assert_eq!(layout.offset_of(&[2, 1, 1]), 2 + 3 + 12);
    assert_eq!(layout.required_storage(), 60);
}

#[test]
fn subset_count_formula() {
    let layout = ArrayLayout::new((10, 7, 3));
    let (sub, offset) = layout.make_subset((1, 0, 2), (9, 6, 2), (3, 2, 1)).unwrap();
    assert_eq!(sub.shape(), &[3, 4, 1]);
    assert_eq!(sub.len(), 12);
    assert_eq!(offset, 1 + 2 * 70);
    assert!(!sub.is_contiguous());
}

#[test]
fn subset_errors() {
    let layout = ArrayLayout::new((4, 4));
    let e = layout.make_subset((0, 0), (4, 0), (1, 1)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    let e = layout.make_subset((2, 0), (1, 0), (1, 1)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    let e = layout.make_subset((0, 0), (1, 1), (0, 1)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    let e = layout.make_subset(0, 1, 1).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::RankMismatch);
}

#[test]
fn subset_with_huge_increment() {
    let layout = ArrayLayout::new((3, 4));
    let (sub, offset) = layout.make_subset((0, 0), (0, 0), (1, usize::MAX)).unwrap();
    assert_eq!(sub.shape(), &[1, 1]);
    assert_eq!(sub.increments(), &[1, 1]);
    assert_eq!(offset, 0);
    assert!(sub.is_consistent());

    let (every_other, _) = ArrayLayout::new(10).make_subset(0, 8, 2).unwrap();
    let (single, offset) = every_other.make_subset(3, 3, usize::MAX).unwrap();
    assert_eq!(single.shape(), &[1]);
    assert_eq!(single.steps(), &[1]);
    assert_eq!(offset, 6);

    let (first, _) = every_other.make_subset(0, 4, usize::MAX / 2).unwrap();
    assert_eq!(first.shape(), &[1]);
    assert_eq!(first.increments(), &[1]);
}

#[test]
fn reform_to_own_shape() {
    let layout = ArrayLayout::new((6, 6));
    let (sub, _) = layout.make_subset((1, 1), (5, 4), (2, 3)).unwrap();
    assert_eq!(sub.reform(sub.shape()).unwrap(), sub);
    assert_eq!(layout.reform((6, 6)).unwrap(), layout);
}

#[test]
fn reform_contiguous() {
    let layout = ArrayLayout::new((3, 4));
    let reformed = layout.reform((2, 2, 3)).unwrap();
    assert_eq!(reformed.shape(), &[2, 2, 3]);
    assert!(reformed.is_contiguous());
    let e = layout.reform((5, 2)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn reform_unchecked_changes_count() {
    let layout = ArrayLayout::new((3, 4));
    assert_eq!(layout.reform_unchecked(5).unwrap().shape(), &[5]);
    let (sub, _) = layout.make_subset((0, 0), (2, 3), (2, 1)).unwrap();
    let e = sub.reform_unchecked(5).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleLayout);
}

#[test]
fn degenerate_round_trip() {
    let layout = ArrayLayout::new((3, 4));
    let padded = layout.add_degenerate(2);
    assert_eq!(padded.shape(), &[3, 4, 1, 1]);
    assert_eq!(padded.steps()[..2], layout.steps()[..]);
    let stripped = padded.non_degenerate(&[]).unwrap();
    assert_eq!(stripped, layout);
}

#[test]
fn non_degenerate_keeps_ignored_axes() {
    let layout = ArrayLayout::new((1, 5, 1, 1));
    let stripped = layout.non_degenerate(&[2]).unwrap();
    assert_eq!(stripped.shape(), &[5, 1]);
    let all = ArrayLayout::new((1, 1, 1)).non_degenerate(&[]).unwrap();
    assert_eq!(all.shape(), &[1]);
    let e = layout.non_degenerate(&[4]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    assert_eq!(layout.non_degenerate_from(2).shape(), &[1, 5]);

    let column = ArrayLayout::new((1, 1, 5));
    assert_eq!(column.non_degenerate(&[]).unwrap().shape(), &[5]);
    assert_eq!(column.non_degenerate_from(2).shape(), &[1, 1, 5]);
}

#[test]
fn remove_single_axis() {
    let layout = ArrayLayout::new((3, 1, 4));
    let removed = layout.remove_axis(Axis(1)).unwrap();
    assert_eq!(removed.shape(), &[3, 4]);
    assert_eq!(removed.steps(), &[1, 3]);
    let e = layout.remove_axis(Axis(0)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
    let e = layout.remove_axis(Axis(3)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
}

#[test]
fn vector_shape() {
    let mut layout = ArrayLayout::new((1, 1, 7, 1));
    layout.check_vector_shape().unwrap();
    assert_eq!(layout.shape(), &[7]);
    assert_eq!(layout.steps(), &[1]);

    let mut layout = ArrayLayout::new((3, 4));
    let e = layout.check_vector_shape().unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
    assert_eq!(layout.shape(), &[3, 4]);

    let mut layout = ArrayLayout::new(());
    layout.check_vector_shape().unwrap();
    assert_eq!(layout.shape(), &[0]);

    let mut layout = ArrayLayout::new((1, 1));
    layout.check_vector_shape().unwrap();
    assert_eq!(layout.shape(), &[1]);
}

#[test]
fn vector_shape_of_strided_column() {
    let layout = ArrayLayout::new((4, 5));
    let (column, offset) = layout.make_subset((2, 0), (2, 4), (1, 1)).unwrap();
    let mut vector = column.clone();
    vector.check_vector_shape().unwrap();
    assert_eq!(vector.shape(), &[5]);
    assert_eq!(vector.steps(), &[4]);
    assert_eq!(offset, 2);
}

#[test]
fn matrix_and_cube_shapes() {
    let mut layout = ArrayLayout::new(6);
    layout.check_matrix_shape().unwrap();
    assert_eq!(layout.shape(), &[6, 1]);
    layout.check_cube_shape().unwrap();
    assert_eq!(layout.shape(), &[6, 1, 1]);

    let mut layout = ArrayLayout::new((2, 3, 1, 1));
    layout.check_cube_shape().unwrap();
    assert_eq!(layout.shape(), &[2, 3, 1]);
    layout.check_matrix_shape().unwrap();
    assert_eq!(layout.shape(), &[2, 3]);

    let mut layout = ArrayLayout::new(());
    layout.check_cube_shape().unwrap();
    assert_eq!(layout.shape(), &[0, 0, 0]);

    let mut layout = ArrayLayout::new((2, 3, 4));
    assert!(layout.check_matrix_shape().is_err());
    assert_eq!(layout.shape(), &[2, 3, 4]);
}

#[test]
fn diagonals_of_square() {
    let layout = ArrayLayout::new((5, 5));
    let (main, offset) = layout.make_diagonal(Axis(0), 0).unwrap();
    assert_eq!(main.shape(), &[5]);
    assert_eq!(main.steps(), &[6]);
    assert_eq!(offset, 0);

    let (upper, offset) = layout.make_diagonal(Axis(0), 2).unwrap();
    assert_eq!(upper.shape(), &[3]);
    assert_eq!(offset, 10);

    let (lower, offset) = layout.make_diagonal(Axis(0), -1).unwrap();
    assert_eq!(lower.shape(), &[4]);
    assert_eq!(offset, 1);

    let (outside, _) = layout.make_diagonal(Axis(0), -6).unwrap();
    assert_eq!(outside.shape(), &[0]);
    assert!(outside.is_empty());

    let e = layout.make_diagonal(Axis(1), 0).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
}

#[test]
fn diagonal_keeps_other_axes() {
    let layout = ArrayLayout::new((2, 3, 3));
    let (diag, offset) = layout.make_diagonal(Axis(1), 0).unwrap();
    assert_eq!(diag.shape(), &[2, 3]);
    assert_eq!(diag.steps(), &[1, 8]);
    assert_eq!(offset, 0);
}

#[test]
fn validate_index() {
    let layout = ArrayLayout::new((3, 4));
    let e = layout.validate_index(&[3, 0]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    layout.validate_index(&[2, 3]).unwrap();
    layout.validate_index2(2, 3).unwrap();
    let e = layout.validate_index1(0).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::RankMismatch);
    let e = layout.validate_index3(0, 0, 0).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::RankMismatch);
}

#[test]
fn conformance() {
    let a = ArrayLayout::new((3, 4));
    let (b, _) = ArrayLayout::new((6, 8)).make_subset((0, 0), (4, 6), (2, 2)).unwrap();
    assert!(a.conforms(&b));
    a.validate_conformance(&b).unwrap();
    let c = ArrayLayout::new((4, 3));
    assert!(!a.conforms(&c));
    let e = a.validate_conformance(&c).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
    let e = ndlayout::check_array_shapes(&a, &c, "addition").unwrap_err();
    assert!(e.to_string().contains("addition"), "{}", e);
}

#[test]
fn reform_or_resize_same_count() {
    for n_allocated in [0, 1, 12, 1000] {
        let mut layout = ArrayLayout::new((3, 4));
        let outcome = layout.reform_or_resize((4, 3), false, 1, n_allocated, 0).unwrap();
        assert_eq!(outcome, ReformOutcome::Reformed);
        assert!(!outcome.needs_allocation());
    }
}

#[test]
fn reform_or_resize_overflow() {
    let mut layout = ArrayLayout::new(4);
    let e = layout
        .reform_or_resize(usize::MAX / 2, true, 1, 4, 300)
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Overflow);
    assert_eq!(layout.shape(), &[4]);
}

#[test]
fn positions_visit_axis_zero_first() {
    let layout = ArrayLayout::new((2, 3));
    let positions = layout.positions().map(|p| (p[0], p[1])).collect_vec();
    assert_eq!(positions, [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    assert_eq!(layout.positions().len(), 6);
    assert_eq!(ArrayLayout::new((2, 0)).positions().count(), 0);
}

quickcheck! {
    fn fresh_layout_is_contiguous(lens: Vec<u8>) -> bool {
        let shape = small_shape(&lens);
        let layout = ArrayLayout::new(&shape);
        layout.is_contiguous()
            && layout.is_consistent()
            && layout.len() == shape.product()
            && layout.required_storage() == layout.len()
    }

    fn subset_addresses_stay_inside(lens: Vec<u8>, picks: Vec<u8>) -> TestResult {
        let shape = small_shape(&lens);
        if shape.ndim() == 0 || picks.len() < 3 * shape.ndim() {
            return TestResult::discard();
        }
        let layout = ArrayLayout::new(&shape);
        let ndim = shape.ndim();
        let mut begin = Position::zeros(ndim);
        let mut end = Position::zeros(ndim);
        let mut inc = Position::zeros(ndim);
        for axis in 0..ndim {
            let a = picks[3 * axis] as usize % shape[axis];
            let b = picks[3 * axis + 1] as usize % shape[axis];
            begin[axis] = a.min(b);
            end[axis] = a.max(b);
            inc[axis] = 1 + picks[3 * axis + 2] as usize % 3;
        }
        let (sub, offset) = layout.make_subset(&begin, &end, &inc).unwrap();
        let expected: usize = (0..ndim)
            .map(|axis| (end[axis] - begin[axis]) / inc[axis] + 1)
            .product();
        if sub.len() != expected || !sub.is_consistent() {
            return TestResult::failed();
        }
        let addresses = sub.positions().map(|p| offset + sub.offset_of(&p)).collect_vec();
        let increasing = addresses.iter().tuple_windows().all(|(a, b)| a < b);
        let inside = addresses.iter().all(|&address| address < layout.len());
        TestResult::from_bool(increasing && inside)
    }

    fn reform_own_shape_is_noop(lens: Vec<u8>, step: u8) -> TestResult {
        let shape = small_shape(&lens);
        if shape.ndim() == 0 {
            return TestResult::discard();
        }
        let layout = ArrayLayout::new(&shape);
        let inc = Position::filled(shape.ndim(), 1 + step as usize % 2);
        let begin = Position::zeros(shape.ndim());
        let (sub, _) = layout.make_subset(begin, layout.end_position(), inc).unwrap();
        TestResult::from_bool(sub.reform(sub.shape()).unwrap() == sub)
    }

    fn add_then_remove_degenerate(lens: Vec<u8>, n: u8) -> bool {
        let shape: Position = small_shape(&lens).iter().map(|&len| len + 1).collect();
        let layout = ArrayLayout::new(&shape);
        let padded = layout.add_degenerate(n as usize % 4);
        shape.ndim() == 0 || padded.non_degenerate(&[]).unwrap() == layout
    }
}

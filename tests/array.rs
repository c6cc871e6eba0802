use ndlayout::prelude::*;

use itertools::{assert_equal, Itertools};

fn grid(rows: usize, cols: usize) -> Array<usize> {
    Array::from_shape_fn((rows, cols), |ix| ix[0] + 10 * ix[1])
}

#[test]
fn index_column_major() {
    let a = Array::from_shape_vec((3, 4), (0..12).collect()).unwrap();
    assert_eq!(a[(0, 0)], 0);
    assert_eq!(a[(2, 0)], 2);
    assert_eq!(a[(0, 1)], 3);
    assert_eq!(a[[2, 3]], 11);
    assert_eq!(a.get((3, 0)), None);
    assert_eq!(a.get(1), None);
    assert_eq!(a.at((0, 4)).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.at(1).unwrap_err().kind(), ErrorKind::RankMismatch);
}

#[test]
#[should_panic]
fn index_out_of_bounds_panics() {
    let a = grid(2, 2);
    let _x = a[(2, 0)];
}

#[test]
fn subset_is_a_view() {
    let a = grid(4, 5);
    let s = a.subset((1, 0), (3, 4), (2, 2)).unwrap();
    assert_eq!(s.shape(), &[2, 3]);
    assert_eq!(s.to_vec(), [1, 3, 21, 23, 41, 43]);
    assert_eq!(s[(1, 2)], 43);
    assert!(!s.is_contiguous());
    assert_eq!(s.as_slice(), None);
    assert_eq!(s.offset(), 1);
}

#[test]
fn subset_shares_owned_storage() {
    let a = grid(4, 4);
    let s = a.clone().into_subset((1, 1), (2, 2), (1, 1)).unwrap();
    assert_eq!(a.n_references(), 2);
    assert_eq!(s.n_references(), 2);
    assert_eq!(s.to_vec(), [11, 12, 21, 22]);
    drop(a);
    assert_eq!(s.n_references(), 1);
}

#[test]
fn write_through_subset_view() {
    let mut a = Array::<i32>::zeros((4, 4));
    a.subset_mut((0, 0), (3, 3), (2, 2)).unwrap().fill(7);
    assert_eq!(a.iter().filter(|&&x| x == 7).count(), 4);
    assert_eq!(a[(2, 2)], 7);
    assert_eq!(a[(1, 2)], 0);
}

#[test]
fn copy_on_write() {
    let a = grid(3, 3);
    let mut b = a.clone();
    b[(0, 0)] = 100;
    assert_eq!(a[(0, 0)], 0);
    assert_eq!(b[(0, 0)], 100);
    assert_eq!(a.n_references(), 1);
    assert_eq!(b.n_references(), 1);
}

#[test]
fn copy_on_write_compacts_small_views() {
    let a = grid(4, 4);
    let mut corner = a.clone().into_subset((2, 2), (3, 3), (1, 1)).unwrap();
    assert!(!corner.is_contiguous());
    corner.fill(0);
    assert!(corner.is_contiguous());
    assert_eq!(corner.offset(), 0);
    assert_eq!(corner.n_allocated(), 4);
    assert_eq!(a[(2, 2)], 22);
}

#[test]
fn diagonals() {
    let a = Array::from_shape_fn((4, 4), |ix| 4 * ix[0] + ix[1]);
    assert_eq!(a.diagonal(Axis(0), 0).unwrap().to_vec(), [0, 5, 10, 15]);
    assert_eq!(a.diagonal(Axis(0), 1).unwrap().to_vec(), [1, 6, 11]);
    assert_eq!(a.diagonal(Axis(0), -2).unwrap().to_vec(), [8, 13]);
    assert!(a.diagonal(Axis(0), 4).unwrap().is_empty());
    assert!(a.diagonal(Axis(1), 0).is_err());
}

#[test]
fn diagonal_of_stack() {
    let a = Array::from_shape_fn((2, 3, 3), |ix| 100 * ix[0] + 10 * ix[1] + ix[2]);
    let d = a.diagonal(Axis(1), 0).unwrap();
    assert_eq!(d.shape(), &[2, 3]);
    assert_eq!(d.to_vec(), [0, 100, 11, 111, 22, 122]);
}

#[test]
fn diagonal_mut_sets_identity() {
    let mut a = Array::<f64>::zeros((3, 3));
    a.diagonal_mut(Axis(0), 0).unwrap().fill(1.);
    for (i, j) in (0..3usize).cartesian_product(0..3usize) {
        assert_eq!(a[(i, j)], if i == j { 1. } else { 0. });
    }
}

#[test]
fn degenerate_axes() {
    let a = grid(3, 2);
    let b = a.add_degenerate(2);
    assert_eq!(b.shape(), &[3, 2, 1, 1]);
    assert_eq!(b[(2, 1, 0, 0)], 12);
    let c = b.non_degenerate(&[]).unwrap();
    assert_eq!(c, a);
    let d = b.non_degenerate(&[3]).unwrap();
    assert_eq!(d.shape(), &[3, 2, 1]);

    let row = a.clone().into_subset((1, 0), (1, 1), (1, 1)).unwrap();
    let row = row.into_non_degenerate(&[]).unwrap();
    assert_eq!(row.shape(), &[2]);
    assert_eq!(row.to_vec(), [1, 11]);

    let kept = a.into_add_degenerate(1).into_non_degenerate_from(3);
    assert_eq!(kept.shape(), &[3, 2, 1]);
}

#[test]
fn vector_matrix_cube() {
    let a = grid(1, 5).into_add_degenerate(1);
    let v = a.clone().into_vector().unwrap();
    assert_eq!(v.shape(), &[5]);
    assert_eq!(v.to_vec(), [0, 10, 20, 30, 40]);
    assert_eq!(a.clone().into_matrix().unwrap().shape(), &[1, 5]);
    assert_eq!(a.clone().into_cube().unwrap().shape(), &[1, 5, 1]);
    let e = grid(2, 2).into_vector().unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn assign_requires_conformance() {
    let mut a = Array::<usize>::zeros((2, 2));
    let b = grid(4, 4);
    let e = a.assign(&b).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
    a.assign(&b.subset((0, 0), (2, 2), (2, 2)).unwrap()).unwrap();
    assert_eq!(a.to_vec(), [0, 2, 20, 22]);
}

#[test]
fn strided_iter_mut() {
    let mut a = Array::from_elem((4, 3), 0);
    {
        let mut s = a.subset_mut((1, 0), (3, 2), (2, 2)).unwrap();
        for (i, x) in s.iter_mut().enumerate() {
            *x = i + 1;
        }
    }
    assert_eq!(a.to_vec(), [0, 1, 0, 2, 0, 0, 0, 0, 0, 3, 0, 4]);
}

#[test]
fn storage_mut_writes_through_strided_subset() {
    let mut a = grid(4, 3);
    {
        let mut s = a.subset_mut((1, 0), (3, 2), (2, 2)).unwrap();
        let mut storage = s.storage_mut();
        assert!(storage.is_copy());
        assert_eq!(&storage[..], &[1, 3, 21, 23]);
        for x in storage.iter_mut() {
            *x += 100;
        }
        storage.put();
        assert_eq!(s.to_vec(), [101, 103, 121, 123]);
    }
    assert_eq!(a[(3, 2)], 123);
    assert_eq!(a[(2, 2)], 22);

    let mut row = a.clone().into_subset((0, 0), (3, 0), (1, 1)).unwrap();
    let mut storage = row.storage_mut();
    assert!(!storage.is_copy());
    storage.copy_from_slice(&[5, 6, 7, 8]);
    drop(storage);
    assert_eq!(row.to_vec(), [5, 6, 7, 8]);
    assert_eq!(a[(0, 0)], 0);
}

#[test]
fn put_storage_checks_length() {
    let mut a = grid(3, 3);
    let mut s = a.subset_mut((0, 0), (2, 2), (2, 2)).unwrap();
    let e = s.put_storage(vec![1, 2, 3]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
    s.put_storage(vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a.to_vec(), [1, 1, 2, 10, 11, 12, 3, 21, 4]);
}

#[test]
fn iterators_exact_size() {
    let a = grid(5, 4);
    let s = a.subset((0, 1), (4, 3), (2, 1)).unwrap();
    let it = s.iter();
    assert_eq!(it.len(), 9);
    assert_equal(s.iter().copied(), s.to_vec());
    assert_equal(&a, a.as_slice().unwrap());
}

#[test]
fn views_from_slices() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    let v = ArrayView::from_shape((2, 3), &data).unwrap();
    assert_eq!(v[(1, 2)], 6);
    assert_eq!(v.to_slice(), Some(&data[..6]));
    let e = ArrayView::from_shape((2, 4), &data).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);

    let mut data = [0; 4];
    {
        let mut v = ArrayViewMut::from_shape((2, 2), &mut data).unwrap();
        v[(1, 1)] = 5;
        let mut d = v.diagonal_mut(Axis(0), 0).unwrap();
        d[0] = 3;
    }
    assert_eq!(data, [3, 0, 0, 5]);

    let v = ArrayView::from(&data[..]);
    assert_eq!(v.shape(), &[4]);
    assert_eq!(v.into_at(3).unwrap(), &5);
}

#[test]
fn to_owned_is_contiguous() {
    let a = grid(4, 4);
    let s = a.subset((1, 1), (3, 3), (2, 2)).unwrap().to_owned();
    assert!(s.is_contiguous());
    assert_eq!(s.as_slice(), Some(&[11, 13, 31, 33][..]));
    assert_eq!(s.n_references(), 1);
}

#[test]
fn equality_and_debug() {
    let a = grid(2, 2);
    let b = Array::from_shape_vec((2, 2), vec![0usize, 1, 10, 11]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, b.reform(4).unwrap());
    let text = format!("{:?}", a);
    assert!(text.contains("shape=[2, 2]"), "{}", text);
    assert!(text.contains("contiguous=true"), "{}", text);
}

#[test]
fn default_array_is_empty() {
    let a: Array<f32> = Default::default();
    assert_eq!(a.ndim(), 0);
    assert!(a.is_empty());
    assert_eq!(a.to_vec(), Vec::<f32>::new());
}

#[test]
fn take_with_shape_keeps_rank() {
    let mut a = grid(3, 3);
    let taken = a.take_with_shape((0, 0));
    assert_eq!(taken.len(), 9);
    assert_eq!(a.ndim(), 2);
    assert!(a.is_empty());
}

#[test]
fn into_vec_round_trip() {
    let a = Array::from_vec(vec![1, 2, 3, 4, 5, 6]);
    let m = a.into_reform((3, 2)).unwrap();
    assert_eq!(m.into_vec(), vec![1, 2, 3, 4, 5, 6]);
}

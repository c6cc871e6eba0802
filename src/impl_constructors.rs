// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndlayout
//!
use alloc::vec;
use alloc::vec::Vec;

use num_traits::{One, Zero};

use crate::dimension::{self, IntoPosition};
use crate::error::{self, ShapeError};
use crate::{ArrayBase, ArrayLayout, DataOwned, Position};

/// Constructor methods for one-dimensional arrays.
///
/// Note that the constructor methods apply to `Array`, the array type that
/// has owned storage.
impl<S> ArrayBase<S>
where
    S: DataOwned,
{
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```rust
    /// use ndlayout::Array;
    ///
    /// let array = Array::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<S::Elem>) -> Self {
        let layout = ArrayLayout::new(v.len());
        ArrayBase::from_data_parts(S::new(v), 0, layout)
    }

    /// Create a one-dimensional array from an iterable.
    ///
    /// ```rust
    /// use ndlayout::Array;
    ///
    /// let array = Array::from_iter((0..5).map(|x| x * x));
    /// assert_eq!(array.to_vec(), vec![0, 1, 4, 9, 16]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = S::Elem>,
    {
        Self::from_vec(iterable.into_iter().collect())
    }
}

/// ## Constructor methods for n-dimensional arrays.
///
/// The `shape` argument is anything converting into a [`Position`]: a
/// `usize`, a tuple or array of `usize`, or a `Position`.
///
/// Elements are laid out with axis 0 varying fastest.
impl<A, S> ArrayBase<S>
where
    S: DataOwned<Elem = A>,
{
    /// Create an array of the given shape taking over the vector `v` as its
    /// storage (no copying needed).
    ///
    /// **Errors** with `IncompatibleShapes` if the length of `v` is not the
    /// number of elements of the shape, and with `Overflow` if that number
    /// does not fit `usize`.
    ///
    /// ```
    /// use ndlayout::Array;
    ///
    /// let a = Array::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a[(1, 0)], 2.);
    /// assert!(Array::from_shape_vec((2, 3), vec![1., 2.]).is_err());
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ShapeError>
    where
        Sh: IntoPosition,
    {
        let shape = shape.into_position();
        let size = dimension::size_of_shape_checked(&shape)?;
        if size != v.len() {
            return Err(error::incompatible_shapes(&shape, &Position::from([v.len()])));
        }
        Ok(ArrayBase::from_data_parts(S::new(v), 0, ArrayLayout::new(shape)))
    }

    /// Create an array of the given shape with a copy of the elements of
    /// `v` as its storage.
    ///
    /// **Errors** as [`from_shape_vec`](Self::from_shape_vec).
    pub fn from_shape_copy<Sh>(shape: Sh, v: &[A]) -> Result<Self, ShapeError>
    where
        A: Clone,
        Sh: IntoPosition,
    {
        Self::from_shape_vec(shape, v.to_vec())
    }

    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    ///
    /// ```
    /// use ndlayout::Array;
    ///
    /// let a = Array::from_elem((2, 2, 2), 1.);
    /// assert_eq!(a.len(), 8);
    /// assert!(a.iter().all(|&x| x == 1.));
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        A: Clone,
        Sh: IntoPosition,
    {
        let shape = shape.into_position();
        let size = size_of_shape_checked_unwrap!(&shape);
        let v = vec![elem; size];
        ArrayBase::from_data_parts(S::new(v), 0, ArrayLayout::new(shape))
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        A: Clone + Zero,
        Sh: IntoPosition,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with ones, shape `shape`.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    pub fn ones<Sh>(shape: Sh) -> Self
    where
        A: Clone + One,
        Sh: IntoPosition,
    {
        Self::from_elem(shape, A::one())
    }

    /// Create an array with default values, shape `shape`
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    pub fn default<Sh>(shape: Sh) -> Self
    where
        A: Default,
        Sh: IntoPosition,
    {
        Self::from_shape_simple_fn(shape, A::default)
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with no argument, and it should return the element to
    /// create. If the precise index of the element to create is needed,
    /// use [`from_shape_fn`](ArrayBase::from_shape_fn) instead.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    pub fn from_shape_simple_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: IntoPosition,
        F: FnMut() -> A,
    {
        let shape = shape.into_position();
        let size = size_of_shape_checked_unwrap!(&shape);
        let v = (0..size).map(|_| f()).collect();
        ArrayBase::from_data_parts(S::new(v), 0, ArrayLayout::new(shape))
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create; the elements
    /// are visited in storage order.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    ///
    /// ```
    /// use ndlayout::Array;
    ///
    /// let a = Array::from_shape_fn((2, 3), |ix| 10 * ix[0] + ix[1]);
    /// assert_eq!(a.to_vec(), vec![0, 10, 1, 11, 2, 12]);
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, f: F) -> Self
    where
        Sh: IntoPosition,
        F: FnMut(Position) -> A,
    {
        let shape = shape.into_position();
        let _ = size_of_shape_checked_unwrap!(&shape);
        let layout = ArrayLayout::new(shape);
        let v = layout.positions().map(f).collect();
        ArrayBase::from_data_parts(S::new(v), 0, layout)
    }
}

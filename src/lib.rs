// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndlayout"]
#![doc(html_root_url = "https://docs.rs/ndlayout/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
)]
#![doc(test(attr(allow(unused_variables))))]
#![cfg_attr(not(feature = "std"), no_std)]

//! The `ndlayout` crate provides the shape and stride model of an
//! *n*-dimensional array, [`ArrayLayout`], and a thin generic array type
//! [`ArrayBase`] addressing element storage through it.
//!
//! - [`ArrayBase`]: An *n*-dimensional array over some storage
//!    - [`Array`]: An array that owns its storage; views taken from it by
//!      value share the storage by reference count.
//!    - [`ArrayView`] and [`ArrayViewMut`]: Read-only and read-write views
//!      of storage borrowed from elsewhere.
//! - [`ArrayLayout`]: lengths, increments and original lengths of every
//!   axis, with the derived physical steps, element count and contiguity.
//!
//! ## Highlights
//!
//! - Axis 0 varies fastest in storage (column major order).
//! - Strided subsets, diagonals, reforms and added or removed axes of
//!   length one are views: they only produce a new layout and an offset
//!   into the same storage.
//! - Shapes are canonicalized to vectors, matrices and cubes without ever
//!   dropping an axis longer than one.
//! - [`AnyArray`] exposes the typed storage operations behind a trait
//!   object, so arrays of different element types can be held together.
//!
//! ## Crate Feature Flags
//!
//! The following crate feature flags are available. They are configured in your
//! `Cargo.toml`.
//!
//! - `std`: Rust standard library (enabled by default)
//!   - This crate can be used without the standard library by disabling the
//!     default `std` feature. To do so, use `default-features = false` in
//!     your `Cargo.toml`.
//! - `serde`
//!   - Enables serialization support for [`Position`], [`ArrayLayout`] and
//!     arrays with owned storage.
//! - `approx`
//!   - Enables implementations of traits from the [`approx`] crate.
//!
//! ## Example
//!
//! ```
//! use ndlayout::{Array, Axis};
//!
//! let a = Array::from_shape_fn((3, 3), |ix| ix[0] + 3 * ix[1]);
//! let d = a.diagonal(Axis(0), 0).unwrap();
//! assert_eq!(d.to_vec(), vec![0, 4, 8]);
//!
//! let m = a.subset((0, 1), (2, 2), (2, 1)).unwrap();
//! assert_eq!(m.shape(), &[2, 2]);
//! assert_eq!(m[(1, 0)], 5);
//! ```

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;
#[cfg(feature = "std")]
extern crate std;

pub use crate::any_array::AnyArray;
pub use crate::dimension::position::Position;
pub use crate::dimension::{Axis, IntoPosition};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::iterators::{Iter, IterMut, Positions};
pub use crate::layout::{check_array_shapes, ArrayLayout, ReformOutcome};
pub use crate::slice::{check_slices, Slice, Slicer};
pub use crate::storage::StorageMut;

pub use crate::data_repr::{SharedRepr, ViewRepr};
pub use crate::data_traits::{Data, DataMut, DataOwned};

#[macro_use]
mod macro_utils;
#[macro_use]
mod private;
mod any_array;
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod arraytraits;
mod data_repr;
mod data_traits;
mod dimension;
mod error;
mod impl_constructors;
mod impl_methods;
mod impl_owned_array;
mod impl_views;
mod iterators;
mod layout;
pub mod prelude;
mod slice;
mod storage;

/// Array index type
pub type Ix = usize;

/// An *n*-dimensional array.
///
/// The array is a general container of elements. It holds its storage `S`,
/// the storage offset of its first element and the [`ArrayLayout`]
/// addressing the elements from there.
///
/// The storage determines the kind of array:
///
/// - [`Array`]: owned storage, shared by reference count between the
///   array and views taken from it by value. Writing through an array
///   whose storage is shared first copies the storage.
/// - [`ArrayView`]: storage borrowed read-only from elsewhere.
/// - [`ArrayViewMut`]: storage borrowed mutably from elsewhere.
///
/// ## Indexing and Layout
///
/// An index is a [`Position`] or anything converting into one through
/// [`IntoPosition`]: a `usize` for one axis, a tuple or an array of `usize`
/// otherwise. Axis 0 varies fastest in storage, so the element at
/// `(i, j)` of a fresh 3 × 4 array is stored at `i + 3 * j`.
///
/// ```
/// use ndlayout::Array;
///
/// let a = Array::from_shape_vec((3, 4), (0..12).collect()).unwrap();
/// assert_eq!(a[(1, 2)], 7);
/// assert_eq!(a.get((3, 0)), None);
/// ```
///
/// ## Views
///
/// Subsets, slices, diagonals and reforms never copy elements; they return
/// an array over the same storage. The `into_*` forms consume the array,
/// the others borrow it and return an [`ArrayView`], and the `*_mut` forms
/// return an [`ArrayViewMut`].
///
/// ```
/// use ndlayout::{Array, Slicer};
///
/// let mut a = Array::<i32>::zeros((4, 4));
/// a.slice_mut(&Slicer::with_stride((0, 0), (3, 3), (2, 2)))
///     .unwrap()
///     .fill(1);
/// assert_eq!(a.iter().sum::<i32>(), 4);
/// ```
pub struct ArrayBase<S>
where
    S: Data,
{
    /// Data buffer / ownership information.
    data: S,
    /// Storage offset of the first element.
    offset: usize,
    /// The lengths, increments and steps of the axes.
    layout: ArrayLayout,
}

/// An array that owns its storage, shared by reference count with the
/// arrays and views taken from it by value.
///
/// The `Array<A>` is parameterized by `A` for the element type.
pub type Array<A> = ArrayBase<SharedRepr<A>>;

/// A read-only array view.
///
/// An array view represents an array or a part of it, created from
/// an iterator, subview or slice of an array.
///
/// The `ArrayView<'a, A>` is parameterized by `'a` for the scope of the
/// borrow and `A` for the element type.
pub type ArrayView<'a, A> = ArrayBase<ViewRepr<&'a [A]>>;

/// A read-write array view.
///
/// An array view represents an array or a part of it, created from
/// an iterator, subview or slice of an array.
///
/// The `ArrayViewMut<'a, A>` is parameterized by `'a` for the scope of the
/// borrow and `A` for the element type.
pub type ArrayViewMut<'a, A> = ArrayBase<ViewRepr<&'a mut [A]>>;

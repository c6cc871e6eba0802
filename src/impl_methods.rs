// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::data_repr::ViewRepr;
use crate::dimension::IntoPosition;
use crate::error::{self, ErrorKind, ShapeError};
use crate::iterators::{Iter, IterMut};
use crate::storage::StorageMut;
use crate::{
    Array, ArrayBase, ArrayLayout, ArrayView, ArrayViewMut, Axis, Data, DataMut, Position,
    SharedRepr, Slicer,
};

impl<A, S> ArrayBase<S>
where
    S: Data<Elem = A>,
{
    pub(crate) fn from_data_parts(data: S, offset: usize, layout: ArrayLayout) -> Self {
        ndassert!(
            offset + layout.required_storage() <= data._data_slice().len(),
            "layout {:?} at offset {} runs past storage of length {}",
            layout.shape(),
            offset,
            data._data_slice().len()
        );
        ArrayBase { data, offset, layout }
    }

    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Return the shape of the array.
    pub fn shape(&self) -> &Position {
        self.layout.shape()
    }

    /// Return the physical step of each axis in the storage.
    pub fn steps(&self) -> &Position {
        self.layout.steps()
    }

    /// Return the layout of the array.
    pub fn layout(&self) -> &ArrayLayout {
        &self.layout
    }

    /// Return `true` if the elements occupy one gap-free block of the
    /// storage.
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Return the index of the last element.
    pub fn end_position(&self) -> Position {
        self.layout.end_position()
    }

    /// Return the storage offset of the first element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return `true` if the two arrays have the same shape.
    pub fn conforms<S2>(&self, other: &ArrayBase<S2>) -> bool
    where
        S2: Data,
    {
        self.layout.conforms(&other.layout)
    }

    /// Return a read-only view of the array
    pub fn view(&self) -> ArrayView<'_, A> {
        ArrayBase {
            data: ViewRepr::new(self.data._data_slice()),
            offset: self.offset,
            layout: self.layout.clone(),
        }
    }

    /// Return an array owning a contiguous copy of the elements.
    pub fn to_owned(&self) -> Array<A>
    where
        A: Clone,
    {
        ArrayBase {
            data: SharedRepr::from(self.to_vec()),
            offset: 0,
            layout: ArrayLayout::new(self.shape()),
        }
    }

    /// Return the array’s elements as a slice if they are contiguous.
    pub fn as_slice(&self) -> Option<&[A]> {
        if self.is_contiguous() {
            Some(&self.data._data_slice()[self.offset..self.offset + self.len()])
        } else {
            None
        }
    }

    /// Return an iterator of references to the elements of the array.
    ///
    /// Elements are visited in storage order: axis 0 varies fastest.
    ///
    /// Iterator element type is `&A`.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter::new(self.data._data_slice(), self.offset, &self.layout)
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// ```
    /// use ndlayout::Array;
    ///
    /// let a = Array::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    ///
    /// assert!(
    ///     a.get((0, 1)) == Some(&3.) &&
    ///     a.get((0, 2)) == None &&
    ///     a.get(0) == None
    /// );
    /// ```
    pub fn get<I>(&self, index: I) -> Option<&A>
    where
        I: IntoPosition,
    {
        self.at(index).ok()
    }

    /// Return a reference to the element at `index`.
    ///
    /// **Errors** with `RankMismatch` or `OutOfBounds` if `index` does not
    /// address an element.
    pub fn at<I>(&self, index: I) -> Result<&A, ShapeError>
    where
        I: IntoPosition,
    {
        let offset = self.offset + self.layout.offset_of_checked(&index.into_position())?;
        self.data
            ._data_slice()
            .get(offset)
            .ok_or_else(|| error::with_message(ErrorKind::OutOfBounds, "element outside storage"))
    }

    /// Return the elements as one contiguous slice: borrowed if they are
    /// contiguous in the storage, otherwise copied.
    pub fn storage(&self) -> Cow<'_, [A]>
    where
        A: Clone,
    {
        match self.as_slice() {
            Some(slc) => Cow::Borrowed(slc),
            None => Cow::Owned(self.iter().cloned().collect()),
        }
    }

    /// Return the elements in storage order as a vector.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.storage().into_owned()
    }

    fn with_layout(self, layout: ArrayLayout, offset: usize) -> Self {
        ArrayBase::from_data_parts(self.data, self.offset + offset, layout)
    }

    /// Return a view of the section selected by `slicer`.
    ///
    /// **Errors** as [`ArrayLayout::make_section`].
    pub fn slice(&self, slicer: &Slicer) -> Result<ArrayView<'_, A>, ShapeError> {
        self.view().slice_move(slicer)
    }

    /// Select the section `slicer` of the array, consuming it.
    ///
    /// **Errors** as [`ArrayLayout::make_section`].
    pub fn slice_move(self, slicer: &Slicer) -> Result<Self, ShapeError> {
        let (layout, offset) = self.layout.make_section(slicer)?;
        Ok(self.with_layout(layout, offset))
    }

    /// Return a view of the subset from `begin` to `end` (inclusive), taking
    /// every `inc`-th element along each axis.
    ///
    /// **Errors** as [`ArrayLayout::make_subset`].
    pub fn subset<B, E, I>(
        &self,
        begin: B,
        end: E,
        inc: I,
    ) -> Result<ArrayView<'_, A>, ShapeError>
    where
        B: IntoPosition,
        E: IntoPosition,
        I: IntoPosition,
    {
        self.view().into_subset(begin, end, inc)
    }

    /// Select a subset of the array, consuming it; see
    /// [`subset`](Self::subset).
    pub fn into_subset<B, E, I>(self, begin: B, end: E, inc: I) -> Result<Self, ShapeError>
    where
        B: IntoPosition,
        E: IntoPosition,
        I: IntoPosition,
    {
        let (layout, offset) = self.layout.make_subset(begin, end, inc)?;
        Ok(self.with_layout(layout, offset))
    }

    /// Return a view of a diagonal of the slab formed by `axis` and the
    /// axis after it.
    ///
    /// **Errors** as [`ArrayLayout::make_diagonal`].
    pub fn diagonal(&self, axis: Axis, diag: isize) -> Result<ArrayView<'_, A>, ShapeError> {
        self.view().into_diagonal(axis, diag)
    }

    /// Select a diagonal of the array, consuming it; see
    /// [`diagonal`](Self::diagonal).
    pub fn into_diagonal(self, axis: Axis, diag: isize) -> Result<Self, ShapeError> {
        let (layout, offset) = self.layout.make_diagonal(axis, diag)?;
        Ok(self.with_layout(layout, offset))
    }

    /// Return a view of the array under a new shape with the same number
    /// of elements.
    ///
    /// **Errors** as [`ArrayLayout::reform`].
    ///
    /// ```
    /// use ndlayout::Array;
    ///
    /// let a = Array::from_shape_vec(6, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let m = a.reform((2, 3)).unwrap();
    /// assert_eq!(m[(1, 2)], 6);
    /// ```
    pub fn reform<Sh>(&self, shape: Sh) -> Result<ArrayView<'_, A>, ShapeError>
    where
        Sh: IntoPosition,
    {
        self.view().into_reform(shape)
    }

    /// Give the array a new shape with the same number of elements,
    /// consuming it; see [`reform`](Self::reform).
    pub fn into_reform<Sh>(self, shape: Sh) -> Result<Self, ShapeError>
    where
        Sh: IntoPosition,
    {
        let layout = self.layout.reform(shape)?;
        Ok(self.with_layout(layout, 0))
    }

    /// Give a contiguous array a new shape, which may have a different
    /// number of elements than the current one.
    ///
    /// **Errors** as [`ArrayLayout::reform_unchecked`], and with
    /// `OutOfBounds` if the storage does not hold all elements of the new
    /// shape.
    pub fn reform_unchecked<Sh>(self, shape: Sh) -> Result<Self, ShapeError>
    where
        Sh: IntoPosition,
    {
        let layout = self.layout.reform_unchecked(shape)?;
        let needed = self.offset + layout.required_storage();
        let available = self.data._data_slice().len();
        if needed > available {
            return Err(error::index_out_of_bounds(needed, 0, available + 1));
        }
        Ok(self.with_layout(layout, 0))
    }

    /// Return a view with `n` axes of length one appended.
    pub fn add_degenerate(&self, n: usize) -> ArrayView<'_, A> {
        self.view().into_add_degenerate(n)
    }

    /// Append `n` axes of length one, consuming the array.
    pub fn into_add_degenerate(self, n: usize) -> Self {
        let layout = self.layout.add_degenerate(n);
        self.with_layout(layout, 0)
    }

    /// Return a view with the axes of length one removed, except those in
    /// `ignore_axes`.
    ///
    /// **Errors** as [`ArrayLayout::non_degenerate`].
    pub fn non_degenerate(&self, ignore_axes: &[usize]) -> Result<ArrayView<'_, A>, ShapeError> {
        self.view().into_non_degenerate(ignore_axes)
    }

    /// Remove the axes of length one, except those in `ignore_axes`,
    /// consuming the array.
    pub fn into_non_degenerate(self, ignore_axes: &[usize]) -> Result<Self, ShapeError> {
        let layout = self.layout.non_degenerate(ignore_axes)?;
        Ok(self.with_layout(layout, 0))
    }

    /// Remove the axes of length one from `start_axis` on, consuming the
    /// array.
    pub fn into_non_degenerate_from(self, start_axis: usize) -> Self {
        let layout = self.layout.non_degenerate_from(start_axis);
        self.with_layout(layout, 0)
    }

    /// Turn the array into one of rank one.
    ///
    /// **Errors** as [`ArrayLayout::check_vector_shape`].
    pub fn into_vector(mut self) -> Result<Self, ShapeError> {
        self.layout.check_vector_shape()?;
        Ok(self)
    }

    /// Turn the array into one of rank two.
    ///
    /// **Errors** as [`ArrayLayout::check_matrix_shape`].
    pub fn into_matrix(mut self) -> Result<Self, ShapeError> {
        self.layout.check_matrix_shape()?;
        Ok(self)
    }

    /// Turn the array into one of rank three.
    ///
    /// **Errors** as [`ArrayLayout::check_cube_shape`].
    pub fn into_cube(mut self) -> Result<Self, ShapeError> {
        self.layout.check_cube_shape()?;
        Ok(self)
    }
}

impl<A, S> ArrayBase<S>
where
    S: DataMut<Elem = A>,
{
    /// Make the storage unique, copying it if it is shared.
    pub(crate) fn ensure_unique(&mut self) {
        S::ensure_unique(self);
    }

    /// Return a read-write view of the array
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, A> {
        self.ensure_unique();
        ArrayBase {
            data: ViewRepr::new(self.data._data_slice_mut()),
            offset: self.offset,
            layout: self.layout.clone(),
        }
    }

    /// Return the array’s elements as a mutable slice if they are
    /// contiguous.
    pub fn as_slice_mut(&mut self) -> Option<&mut [A]> {
        if self.is_contiguous() {
            Some(self.contiguous_slice_mut())
        } else {
            None
        }
    }

    /// The elements of a contiguous array; unique first.
    pub(crate) fn contiguous_slice_mut(&mut self) -> &mut [A] {
        debug_assert!(self.is_contiguous());
        self.ensure_unique();
        let (offset, len) = (self.offset, self.len());
        &mut self.data._data_slice_mut()[offset..offset + len]
    }

    /// Return the elements as one contiguous mutable slice, in storage
    /// order.
    ///
    /// A contiguous array lends its own elements. A strided array is copied
    /// into a buffer, and [`StorageMut::put`] writes the buffer back.
    ///
    /// ```
    /// use ndlayout::Array;
    ///
    /// let mut a = Array::from_shape_fn((4, 4), |ix| ix[0] + 4 * ix[1]);
    /// let mut corners = a.subset_mut((0, 0), (3, 3), (3, 3)).unwrap();
    /// let mut storage = corners.storage_mut();
    /// assert_eq!(&storage[..], &[0, 3, 12, 15]);
    /// storage.reverse();
    /// storage.put();
    /// assert_eq!(a[(0, 0)], 15);
    /// assert_eq!(a[(3, 3)], 0);
    /// ```
    pub fn storage_mut(&mut self) -> StorageMut<'_, S>
    where
        A: Clone,
    {
        StorageMut::new(self)
    }

    /// Move the elements of `storage` into the array, in storage order.
    ///
    /// **Errors** with `IncompatibleShapes` if `storage` does not hold
    /// exactly one value per element.
    pub fn put_storage(&mut self, storage: Vec<A>) -> Result<(), ShapeError> {
        if storage.len() != self.len() {
            return Err(error::incompatible_shapes(
                self.shape(),
                &Position::from([storage.len()]),
            ));
        }
        self.write_storage(storage);
        Ok(())
    }

    pub(crate) fn write_storage(&mut self, storage: Vec<A>) {
        debug_assert_eq!(storage.len(), self.len());
        for (elt, value) in self.iter_mut().zip(storage) {
            *elt = value;
        }
    }

    /// Return an iterator of mutable references to the elements of the
    /// array, in storage order.
    ///
    /// Iterator element type is `&mut A`.
    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        self.ensure_unique();
        IterMut::new(self.data._data_slice_mut(), self.offset, &self.layout)
    }

    /// Return a mutable reference to the element at `index`, or return
    /// `None` if the index is out of bounds.
    pub fn get_mut<I>(&mut self, index: I) -> Option<&mut A>
    where
        I: IntoPosition,
    {
        self.at_mut(index).ok()
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// **Errors** with `RankMismatch` or `OutOfBounds` if `index` does not
    /// address an element.
    pub fn at_mut<I>(&mut self, index: I) -> Result<&mut A, ShapeError>
    where
        I: IntoPosition,
    {
        let index = index.into_position();
        self.layout.validate_index(&index)?;
        self.ensure_unique();
        let offset = self.offset + self.layout.offset_of(&index);
        self.data
            ._data_slice_mut()
            .get_mut(offset)
            .ok_or_else(|| error::with_message(ErrorKind::OutOfBounds, "element outside storage"))
    }

    /// Return a read-write view of the section selected by `slicer`.
    pub fn slice_mut(&mut self, slicer: &Slicer) -> Result<ArrayViewMut<'_, A>, ShapeError> {
        self.view_mut().slice_move(slicer)
    }

    /// Return a read-write view of a subset; see [`subset`](Self::subset).
    pub fn subset_mut<B, E, I>(
        &mut self,
        begin: B,
        end: E,
        inc: I,
    ) -> Result<ArrayViewMut<'_, A>, ShapeError>
    where
        B: IntoPosition,
        E: IntoPosition,
        I: IntoPosition,
    {
        self.view_mut().into_subset(begin, end, inc)
    }

    /// Return a read-write view of a diagonal; see
    /// [`diagonal`](Self::diagonal).
    ///
    /// ```
    /// use ndlayout::{Array, Axis};
    ///
    /// let mut a = Array::<f64>::zeros((3, 3));
    /// a.diagonal_mut(Axis(0), 0).unwrap().fill(1.);
    /// assert_eq!(a, Array::from_shape_fn((3, 3), |ix| if ix[0] == ix[1] { 1. } else { 0. }));
    /// ```
    pub fn diagonal_mut(
        &mut self,
        axis: Axis,
        diag: isize,
    ) -> Result<ArrayViewMut<'_, A>, ShapeError> {
        self.view_mut().into_diagonal(axis, diag)
    }

    /// Copy the elements of `rhs` into the array.
    ///
    /// **Errors** with `IncompatibleShapes` if the shapes differ.
    pub fn assign<S2>(&mut self, rhs: &ArrayBase<S2>) -> Result<(), ShapeError>
    where
        A: Clone,
        S2: Data<Elem = A>,
    {
        self.layout.validate_conformance(&rhs.layout)?;
        for (x, y) in self.iter_mut().zip(rhs.iter()) {
            x.clone_from(y);
        }
        Ok(())
    }

    /// Set all elements of the array to `x`.
    pub fn fill(&mut self, x: A)
    where
        A: Clone,
    {
        for elt in self.iter_mut() {
            elt.clone_from(&x);
        }
    }
}

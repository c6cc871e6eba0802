// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use std::fmt;
use std::hash;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use crate::dimension::IntoPosition;
use crate::iterators::{Iter, IterMut};
use crate::{
    Array, ArrayBase, ArrayLayout, ArrayView, ArrayViewMut, Data, DataMut, DataOwned, ShapeError,
    ViewRepr,
};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds(err: ShapeError) -> ! {
    panic!("ndlayout: index out of bounds: {}", err);
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<S, I> Index<I> for ArrayBase<S>
where
    S: Data,
    I: IntoPosition,
{
    type Output = S::Elem;
    #[inline]
    fn index(&self, index: I) -> &S::Elem {
        match self.at(index) {
            Ok(elt) => elt,
            Err(err) => array_out_of_bounds(err),
        }
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<S, I> IndexMut<I> for ArrayBase<S>
where
    S: DataMut,
    I: IntoPosition,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut S::Elem {
        match self.at_mut(index) {
            Ok(elt) => elt,
            Err(err) => array_out_of_bounds(err),
        }
    }
}

/// Return `true` if the array shapes and all elements of `self` and
/// `rhs` are equal. Return `false` otherwise.
impl<A, B, S, S2> PartialEq<ArrayBase<S2>> for ArrayBase<S>
where
    A: PartialEq<B>,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
{
    fn eq(&self, rhs: &ArrayBase<S2>) -> bool {
        self.shape() == rhs.shape() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<S> Eq for ArrayBase<S>
where
    S: Data,
    S::Elem: Eq,
{
}

impl<S> hash::Hash for ArrayBase<S>
where
    S: Data,
    S::Elem: hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<S> Clone for ArrayBase<S>
where
    S: Data + Clone,
{
    fn clone(&self) -> ArrayBase<S> {
        ArrayBase {
            data: self.data.clone(),
            offset: self.offset,
            layout: self.layout.clone(),
        }
    }
}

impl<A, S> fmt::Debug for ArrayBase<S>
where
    A: fmt::Debug,
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()?;
        write!(
            f,
            ", shape={}, steps={}, offset={}, contiguous={}",
            self.shape(),
            self.steps(),
            self.offset,
            self.is_contiguous()
        )
    }
}

/// Create an owned array with a default state.
///
/// The array is created with rank zero and no elements.
impl<A, S> Default for ArrayBase<S>
where
    S: DataOwned<Elem = A>,
{
    fn default() -> Self {
        ArrayBase::from_data_parts(S::new(Vec::new()), 0, ArrayLayout::default())
    }
}

impl<A> FromIterator<A> for Array<A> {
    fn from_iter<I>(iterable: I) -> Array<A>
    where
        I: IntoIterator<Item = A>,
    {
        Array::from_iter(iterable)
    }
}

impl<A> From<Vec<A>> for Array<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    fn from(v: Vec<A>) -> Self {
        Array::from_vec(v)
    }
}

impl<'a, S> IntoIterator for &'a ArrayBase<S>
where
    S: Data,
{
    type Item = &'a S::Elem;
    type IntoIter = Iter<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S> IntoIterator for &'a mut ArrayBase<S>
where
    S: DataMut,
{
    type Item = &'a mut S::Elem;
    type IntoIter = IterMut<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, A> IntoIterator for ArrayView<'a, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_()
    }
}

impl<'a, A> IntoIterator for ArrayViewMut<'a, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_()
    }
}

impl<'a, A> From<&'a [A]> for ArrayView<'a, A> {
    /// Create a one-dimensional read-only array view of the slice.
    fn from(slice: &'a [A]) -> Self {
        ArrayBase::from_data_parts(
            ViewRepr::new(slice),
            0,
            ArrayLayout::new(slice.len()),
        )
    }
}

impl<'a, A> From<&'a mut [A]> for ArrayViewMut<'a, A> {
    /// Create a one-dimensional read-write array view of the slice.
    fn from(slice: &'a mut [A]) -> Self {
        let layout = ArrayLayout::new(slice.len());
        ArrayBase::from_data_parts(ViewRepr::new(slice), 0, layout)
    }
}

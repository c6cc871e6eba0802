// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The data (inner representation) traits for ndlayout

use alloc::vec::Vec;

use crate::{ArrayBase, ArrayLayout, SharedRepr, ViewRepr};

/// Array representation trait.
///
/// ***Note:*** `Data` is not an extension interface at this point.
/// Traits in Rust can serve many different roles. This trait is public because
/// it is used as a bound on public methods.
pub trait Data: Sized {
    /// The array element type.
    type Elem;
    #[doc(hidden)]
    /// The whole storage block, of which an array addresses a part.
    fn _data_slice(&self) -> &[Self::Elem];
    private_decl! {}
}

/// Array representation trait.
///
/// For an array with writable elements.
///
/// ***Internal trait, see `Data`.***
pub trait DataMut: Data {
    #[doc(hidden)]
    #[inline]
    fn ensure_unique(_self_: &mut ArrayBase<Self>) {}

    #[doc(hidden)]
    fn _data_slice_mut(&mut self) -> &mut [Self::Elem];

    #[doc(hidden)]
    #[inline]
    fn is_unique(&mut self) -> bool {
        true
    }
}

/// Array representation trait.
///
/// A representation that owns (possibly shared) its storage block.
///
/// ***Internal trait, see `Data`.***
pub trait DataOwned: Data {
    #[doc(hidden)]
    fn new(elements: Vec<Self::Elem>) -> Self;
}

impl<A> Data for SharedRepr<A> {
    type Elem = A;
    fn _data_slice(&self) -> &[A] {
        self.as_slice()
    }
    private_impl! {}
}

// NOTE: Copy on write
impl<A> DataMut for SharedRepr<A>
where
    A: Clone,
{
    fn ensure_unique(self_: &mut ArrayBase<Self>) {
        if self_.data.is_unique() {
            return;
        }
        if self_.len() <= self_.data.len() / 2 {
            // Copy only the elements in view if they are less than half of
            // the block.
            let elements: Vec<A> = self_.iter().cloned().collect();
            self_.data = SharedRepr::from(elements);
            self_.offset = 0;
            self_.layout = ArrayLayout::new(self_.layout.shape());
            return;
        }
        self_.data.make_mut();
    }

    fn _data_slice_mut(&mut self) -> &mut [A] {
        self.make_mut()
    }

    fn is_unique(&mut self) -> bool {
        SharedRepr::is_unique(self)
    }
}

impl<A> DataOwned for SharedRepr<A> {
    fn new(elements: Vec<A>) -> Self {
        SharedRepr::from(elements)
    }
}

impl<'a, A> Data for ViewRepr<&'a [A]> {
    type Elem = A;
    fn _data_slice(&self) -> &[A] {
        self.storage
    }
    private_impl! {}
}

impl<'a, A> Data for ViewRepr<&'a mut [A]> {
    type Elem = A;
    fn _data_slice(&self) -> &[A] {
        &*self.storage
    }
    private_impl! {}
}

impl<'a, A> DataMut for ViewRepr<&'a mut [A]> {
    fn _data_slice_mut(&mut self) -> &mut [A] {
        &mut *self.storage
    }
}

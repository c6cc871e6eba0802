// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::IntoPosition;
use crate::error::{self, ErrorKind, ShapeError};
use crate::iterators::{Iter, IterMut};
use crate::{ArrayView, ArrayViewMut};

/// Methods for read-only array views.
impl<'a, A> ArrayView<'a, A> {
    /// Convert the view into an `ArrayView<'b, A>` where `'b` is a lifetime
    /// outlived by `'a'`.
    pub fn reborrow<'b>(self) -> ArrayView<'b, A>
    where
        'a: 'b,
    {
        self
    }

    /// Return the array’s elements as a slice, if they are contiguous.
    ///
    /// Note that while the method is similar to [`ArrayBase::as_slice()`](crate::ArrayBase::as_slice),
    /// this method transfers the view's lifetime to the slice.
    pub fn to_slice(&self) -> Option<&'a [A]> {
        if self.is_contiguous() {
            let storage: &'a [A] = self.data.storage;
            Some(&storage[self.offset..self.offset + self.len()])
        } else {
            None
        }
    }

    /// Return a reference to the element at `index` with the lifetime of
    /// the storage.
    ///
    /// **Errors** as [`ArrayBase::at`](crate::ArrayBase::at).
    pub fn into_at<I>(self, index: I) -> Result<&'a A, ShapeError>
    where
        I: IntoPosition,
    {
        let offset = self.offset + self.layout.offset_of_checked(&index.into_position())?;
        let storage: &'a [A] = self.data.storage;
        storage
            .get(offset)
            .ok_or_else(|| error::with_message(ErrorKind::OutOfBounds, "element outside storage"))
    }

    pub(crate) fn into_iter_(self) -> Iter<'a, A> {
        Iter::new(self.data.storage, self.offset, &self.layout)
    }
}

/// Methods for read-write array views.
impl<'a, A> ArrayViewMut<'a, A> {
    /// Return the array’s elements as a mutable slice, if they are
    /// contiguous, with the lifetime of the storage.
    pub fn into_slice(self) -> Option<&'a mut [A]> {
        if self.is_contiguous() {
            let (offset, len) = (self.offset, self.len());
            let storage = self.data.storage;
            Some(&mut storage[offset..offset + len])
        } else {
            None
        }
    }

    /// Return a mutable reference to the element at `index` with the
    /// lifetime of the storage.
    ///
    /// **Errors** as [`ArrayBase::at`](crate::ArrayBase::at).
    pub fn into_at_mut<I>(self, index: I) -> Result<&'a mut A, ShapeError>
    where
        I: IntoPosition,
    {
        let offset = self.offset + self.layout.offset_of_checked(&index.into_position())?;
        let storage = self.data.storage;
        storage
            .get_mut(offset)
            .ok_or_else(|| error::with_message(ErrorKind::OutOfBounds, "element outside storage"))
    }

    pub(crate) fn into_iter_(self) -> IterMut<'a, A> {
        IterMut::new(self.data.storage, self.offset, &self.layout)
    }
}

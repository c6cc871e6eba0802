// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::data_repr::ViewRepr;
use crate::dimension::{self, IntoPosition};
use crate::error::{self, ErrorKind, ShapeError};
use crate::{ArrayBase, ArrayLayout, ArrayView, ArrayViewMut};

fn layout_for_slice(shape: impl IntoPosition, len: usize) -> Result<ArrayLayout, ShapeError> {
    let shape = shape.into_position();
    let size = dimension::size_of_shape_checked(&shape)?;
    if size > len {
        return Err(error::with_message(
            ErrorKind::OutOfBounds,
            "slice is too short for the shape",
        ));
    }
    Ok(ArrayLayout::new(shape))
}

/// Methods for read-only array views.
impl<'a, A> ArrayView<'a, A> {
    /// Create a read-only array view sharing the storage of `xs`, without
    /// copying it.
    ///
    /// The view is laid out with axis 0 varying fastest, starting at the
    /// first element of `xs`; `xs` may be longer than needed.
    ///
    /// **Errors** with `OutOfBounds` if `xs` is too short for `shape`, and
    /// with `Overflow` if the number of elements does not fit `usize`.
    ///
    /// ```
    /// use ndlayout::ArrayView;
    ///
    /// let s = [0, 1, 2, 3, 4, 5];
    /// let a = ArrayView::from_shape((2, 3), &s).unwrap();
    /// assert_eq!(a[(1, 1)], 3);
    /// ```
    pub fn from_shape<Sh>(shape: Sh, xs: &'a [A]) -> Result<Self, ShapeError>
    where
        Sh: IntoPosition,
    {
        let layout = layout_for_slice(shape, xs.len())?;
        Ok(ArrayBase::from_data_parts(ViewRepr::new(xs), 0, layout))
    }
}

/// Methods for read-write array views.
impl<'a, A> ArrayViewMut<'a, A> {
    /// Create a read-write array view sharing the storage of `xs`, without
    /// copying it.
    ///
    /// **Errors** as [`ArrayView::from_shape`].
    ///
    /// ```
    /// use ndlayout::ArrayViewMut;
    ///
    /// let mut s = [0; 6];
    /// ArrayViewMut::from_shape((2, 3), &mut s).unwrap()[(1, 2)] = 9;
    /// assert_eq!(s[5], 9);
    /// ```
    pub fn from_shape<Sh>(shape: Sh, xs: &'a mut [A]) -> Result<Self, ShapeError>
    where
        Sh: IntoPosition,
    {
        let layout = layout_for_slice(shape, xs.len())?;
        Ok(ArrayBase::from_data_parts(ViewRepr::new(xs), 0, layout))
    }
}

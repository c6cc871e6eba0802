// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{self, ShapeError};
use crate::{Ix, Position};

pub use self::axis::Axis;
pub use self::conversion::IntoPosition;

mod axis;
mod conversion;
pub(crate) mod position;

/// Calculate the flat storage offset of `index` given physical `steps`.
#[inline]
pub(crate) fn stride_offset(index: &[Ix], steps: &[Ix]) -> usize {
    index.iter().zip(steps).map(|(&i, &s)| i * s).sum()
}

/// Return the number of elements of `shape`, checking for overflow.
///
/// An empty shape (rank zero) has no elements.
pub(crate) fn size_of_shape_checked(shape: &Position) -> Result<usize, ShapeError> {
    shape
        .product_checked()
        .ok_or_else(|| error::from_kind(error::ErrorKind::Overflow))
}

/// Physical steps for `original_length` and `inc`: axis 0 varies fastest,
/// and the step of axis *i* is `inc[i]` times the product of the original
/// lengths before it.
///
/// Return `None` if a step or the product of all original lengths
/// overflows `usize`.
pub(crate) fn physical_steps(original_length: &[Ix], inc: &[Ix]) -> Option<Position> {
    let mut prod: usize = 1;
    original_length
        .iter()
        .zip(inc)
        .map(|(&orig, &inc)| {
            let step = inc.checked_mul(prod)?;
            prod = prod.checked_mul(orig)?;
            Some(step)
        })
        .collect()
}

/// Return the index of the last axis with length greater than one, if any.
pub(crate) fn last_nondegenerate_axis(length: &[Ix]) -> Option<usize> {
    length.iter().rposition(|&len| len != 1)
}

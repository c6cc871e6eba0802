// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::ArrayLayout;
use crate::dimension::{self, IntoPosition};
use crate::error::{self, ShapeError};

/// What [`ArrayLayout::reform_or_resize`] decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReformOutcome {
    /// The shape was already the requested one.
    Unchanged,
    /// The element count is unchanged; the same elements are seen under the
    /// new shape.
    Reformed,
    /// The storage must be reallocated to hold at least `capacity`
    /// elements.
    Reallocate {
        capacity: usize,
    },
    /// The new elements fit in the existing allocation; the storage keeps
    /// its size and only the first `len()` slots are in use.
    Reinterpreted,
}

impl ReformOutcome {
    /// Return `true` if the storage has to be reallocated.
    pub fn needs_allocation(&self) -> bool {
        matches!(*self, ReformOutcome::Reallocate { .. })
    }
}

impl ArrayLayout {
    /// Give `self` the shape `new_shape`, reusing the storage where possible.
    ///
    /// The decision is made in this order:
    ///
    /// 1. The same shape gives `Unchanged`.
    /// 2. The same element count reforms the layout, whatever the number of
    ///    references or the allocation, and gives `Reformed`.
    /// 3. Otherwise, if `resize_if_needed` is false, the call fails.
    /// 4. A strided layout, or storage referenced more than once, cannot be
    ///    resized.
    /// 5. More elements than `n_allocated` give `Reallocate`, with room for
    ///    `resize_percentage` percent more elements than needed.
    /// 6. Otherwise the new shape fits the existing allocation and the
    ///    result is `Reinterpreted`.
    ///
    /// In cases 5 and 6 `self` becomes a fresh layout of `new_shape`; the
    /// caller moves or reallocates the elements.
    ///
    /// **Errors** with `IncompatibleShapes` (case 3), `IncompatibleLayout`
    /// (a strided layout that cannot be reformed), `Unsupported` (case 4)
    /// or `Overflow` (the capacity does not fit `usize`). On error `self`
    /// is unchanged.
    pub fn reform_or_resize<Sh>(
        &mut self,
        new_shape: Sh,
        resize_if_needed: bool,
        n_references: usize,
        n_allocated: usize,
        resize_percentage: usize,
    ) -> Result<ReformOutcome, ShapeError>
    where
        Sh: IntoPosition,
    {
        let new_shape = new_shape.into_position();
        if new_shape == self.length {
            return Ok(ReformOutcome::Unchanged);
        }
        let new_len = dimension::size_of_shape_checked(&new_shape)?;
        if new_len == self.len() {
            *self = self.reform(new_shape)?;
            return Ok(ReformOutcome::Reformed);
        }
        if !resize_if_needed {
            return Err(error::incompatible_shapes(&self.length, &new_shape));
        }
        if !self.is_contiguous() {
            return Err(error::unsupported("resize of a strided array"));
        }
        if n_references > 1 {
            return Err(error::unsupported("resize of shared storage"));
        }
        let outcome = if new_len > n_allocated {
            let capacity = new_len
                .checked_mul(resize_percentage)
                .map(|extra| extra / 100)
                .and_then(|extra| extra.checked_add(new_len))
                .ok_or_else(|| error::from_kind(error::ErrorKind::Overflow))?;
            ReformOutcome::Reallocate { capacity }
        } else {
            ReformOutcome::Reinterpreted
        };
        *self = ArrayLayout::new(new_shape);
        Ok(outcome)
    }
}

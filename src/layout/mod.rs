// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride bookkeeping of an array, independent of its element
//! type and storage.

use crate::dimension::{self, IntoPosition};
use crate::error::{self, ErrorKind, ShapeError};
use crate::iterators::Positions;
use crate::{Ix, Position};

mod conform;
mod resize;
mod views;

pub use self::conform::check_array_shapes;
pub use self::resize::ReformOutcome;

/// The shape of an array and its addressing into a block of storage.
///
/// An `ArrayLayout` holds the length of every axis together with the
/// increment and original length used when it describes a strided subset
/// of a larger block. From those it derives the physical step of every
/// axis, the number of elements and whether the elements are contiguous.
///
/// Axis 0 varies fastest in storage: the physical step of axis *i* is
/// `inc[i]` times the product of the original lengths of the axes before
/// it.
///
/// A layout never owns element storage. View operations (subsets,
/// diagonals, reforms, degenerate axes) return a new layout together with
/// the flat offset of its first element; the storage stays where it is.
///
/// ```
/// use ndlayout::ArrayLayout;
///
/// let layout = ArrayLayout::new((3, 4));
/// assert_eq!(layout.len(), 12);
/// assert_eq!(layout.steps(), &[1, 3]);
/// assert!(layout.is_contiguous());
///
/// let (sub, offset) = layout.make_subset((1, 0), (2, 3), (1, 2)).unwrap();
/// assert_eq!(sub.shape(), &[2, 2]);
/// assert_eq!(sub.steps(), &[1, 6]);
/// assert_eq!(offset, 1);
/// assert!(!sub.is_contiguous());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayLayout {
    length: Position,
    inc: Position,
    original_length: Position,
    steps: Position,
    nelements: usize,
    contiguous: bool,
}

impl ArrayLayout {
    /// Create the layout of a fresh array with the given shape.
    ///
    /// All increments are one and the original lengths equal the shape, so
    /// the layout is contiguous. Any shape is valid, including shapes with
    /// zero-length axes.
    ///
    /// **Panics** if a running product of the axis lengths overflows
    /// `usize`.
    pub fn new<Sh>(shape: Sh) -> Self
    where
        Sh: IntoPosition,
    {
        let length = shape.into_position();
        let ndim = length.ndim();
        Self::from_parts_unchecked(length.clone(), Position::ones(ndim), length)
    }

    /// Create a layout from its lengths, increments and original lengths.
    ///
    /// The increment of an axis of length zero or one selects nothing and
    /// is stored as one.
    ///
    /// **Errors** with `RankMismatch` if the three do not have the same
    /// number of axes, with `OutOfBounds` if an increment is zero or an
    /// axis would reach past its original length, and with `Overflow` if a
    /// running product of the original lengths overflows `usize`.
    pub fn from_parts(
        length: Position,
        mut inc: Position,
        original_length: Position,
    ) -> Result<Self, ShapeError> {
        let ndim = length.ndim();
        if inc.ndim() != ndim {
            return Err(error::rank_mismatch(ndim, inc.ndim()));
        }
        if original_length.ndim() != ndim {
            return Err(error::rank_mismatch(ndim, original_length.ndim()));
        }
        for axis in 0..ndim {
            if inc[axis] == 0 {
                return Err(error::index_out_of_bounds(0, axis, 1));
            }
            if length[axis] <= 1 {
                inc[axis] = 1;
            }
            let fits = match length[axis] {
                0 => true,
                len => (len - 1)
                    .checked_mul(inc[axis])
                    .map_or(false, |span| span < original_length[axis]),
            };
            if !fits {
                return Err(error::index_out_of_bounds(
                    length[axis],
                    axis,
                    original_length[axis],
                ));
            }
        }
        if dimension::physical_steps(&original_length, &inc).is_none() {
            return Err(error::from_kind(ErrorKind::Overflow));
        }
        Ok(Self::from_parts_unchecked(length, inc, original_length))
    }

    pub(crate) fn from_parts_unchecked(
        length: Position,
        inc: Position,
        original_length: Position,
    ) -> Self {
        let mut layout = ArrayLayout {
            length,
            inc,
            original_length,
            steps: Position::default(),
            nelements: 0,
            contiguous: true,
        };
        layout.make_steps();
        layout
    }

    /// Return the number of dimensions (axes).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.length.ndim()
    }

    /// Return the number of elements: the product of all axis lengths.
    ///
    /// A layout of rank zero has no elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nelements
    }

    /// Return `true` if the layout describes no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nelements == 0
    }

    /// Return the length of each axis.
    #[inline]
    pub fn shape(&self) -> &Position {
        &self.length
    }

    /// Return the increment of each axis into the original storage block.
    #[inline]
    pub fn increments(&self) -> &Position {
        &self.inc
    }

    /// Return the lengths of the storage block this layout is a view into.
    #[inline]
    pub fn original_shape(&self) -> &Position {
        &self.original_length
    }

    /// Return the physical step of each axis: the number of storage slots
    /// to advance to move one element along that axis.
    ///
    /// This is the physical step, thus it also works correctly for
    /// non-contiguous layouts.
    #[inline]
    pub fn steps(&self) -> &Position {
        &self.steps
    }

    /// Return `true` if the elements occupy one gap-free block of storage.
    ///
    /// The value is cached; see [`is_storage_contiguous`](Self::is_storage_contiguous)
    /// for the rule.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    /// Return the index of the last element: `shape[i] - 1` for every axis.
    ///
    /// Zero-length axes give 0.
    pub fn end_position(&self) -> Position {
        self.length.iter().map(|&len| len.saturating_sub(1)).collect()
    }

    /// Determine if the elements occupy one gap-free block of storage.
    ///
    /// That is the case when every axis longer than one has increment one,
    /// and every axis before the last such axis has its full original
    /// length. A fresh layout, or one of rank zero, is always contiguous.
    pub fn is_storage_contiguous(&self) -> bool {
        let last = match dimension::last_nondegenerate_axis(&self.length) {
            Some(last) => last,
            None => return true,
        };
        for axis in 0..=last {
            let len = self.length[axis];
            if len != 1 && self.inc[axis] != 1 {
                return false;
            }
            if axis < last && len != self.original_length[axis] {
                return false;
            }
        }
        true
    }

    /// Recompute the physical steps, the element count and the contiguity
    /// flag from the lengths, increments and original lengths.
    ///
    /// Every operation that changes the shape calls this.
    ///
    /// **Panics** if a step overflows `usize`, which no layout built by
    /// [`from_parts`](Self::from_parts) or a view operation can cause.
    pub fn make_steps(&mut self) {
        self.steps = match dimension::physical_steps(&self.original_length, &self.inc) {
            Some(steps) => steps,
            None => panic!("ndlayout: Shape too large, product of axis lengths overflows usize"),
        };
        self.nelements = self.length.product();
        self.contiguous = self.is_storage_contiguous();
        debug_assert!(self.is_consistent(), "inconsistent layout {:?}", self);
    }

    /// Check if the layout is consistent: equal ranks, nonzero increments,
    /// axes within their original lengths and cached values up to date.
    pub fn is_consistent(&self) -> bool {
        let ndim = self.ndim();
        ndim == self.inc.ndim()
            && ndim == self.original_length.ndim()
            && ndim == self.steps.ndim()
            && self.nelements == self.length.product()
            && self.contiguous == self.is_storage_contiguous()
            && dimension::physical_steps(&self.original_length, &self.inc).as_ref()
                == Some(&self.steps)
            && (0..ndim).all(|axis| {
                let len = self.length[axis];
                self.inc[axis] > 0
                    && (len == 0
                        || (len - 1)
                            .checked_mul(self.inc[axis])
                            .map_or(false, |span| span < self.original_length[axis]))
            })
    }

    /// Return the flat storage offset of `index`, relative to the first
    /// element.
    ///
    /// The index is not checked; see [`offset_of_checked`](Self::offset_of_checked).
    #[inline]
    pub fn offset_of(&self, index: &[Ix]) -> usize {
        debug_assert_eq!(index.len(), self.ndim());
        dimension::stride_offset(index, &self.steps)
    }

    /// Return the flat storage offset of `index` after validating it.
    ///
    /// **Errors** with `RankMismatch` or `OutOfBounds` as
    /// [`validate_index`](Self::validate_index).
    pub fn offset_of_checked(&self, index: &[Ix]) -> Result<usize, ShapeError> {
        self.validate_index(index)?;
        Ok(self.offset_of(index))
    }

    /// Return the number of storage slots spanned from the first to the last
    /// element, inclusive; 0 if the layout is empty.
    pub fn required_storage(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.offset_of(&self.end_position()) + 1
        }
    }

    /// Return an iterator over all indices, axis 0 varying fastest.
    pub fn positions(&self) -> Positions {
        Positions::new(self)
    }

    /// Return the current layout and reset `self` to a fresh layout of
    /// `shape`.
    ///
    /// This is how an adapter with a fixed rank keeps its rank after its
    /// storage has been moved away.
    pub fn take_with_shape<Sh>(&mut self, shape: Sh) -> ArrayLayout
    where
        Sh: IntoPosition,
    {
        std::mem::replace(self, ArrayLayout::new(shape))
    }
}

impl Default for ArrayLayout {
    /// The empty layout of rank zero.
    fn default() -> Self {
        ArrayLayout::new(Position::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_layouts_are_contiguous() {
        let shapes: [&[Ix]; 5] = [&[], &[0], &[5], &[3, 4], &[2, 0, 3]];
        for shape in shapes {
            let layout = ArrayLayout::new(shape);
            assert!(layout.is_contiguous());
            assert_eq!(layout.len(), Position::from(shape).product());
            assert!(layout.is_consistent());
        }
        let layout = ArrayLayout::default();
        assert_eq!(layout.ndim(), 0);
        assert!(layout.is_empty());
    }

    #[test]
    fn contiguous_partial_last_axis() {
        let layout = ArrayLayout::from_parts(
            Position::from([4, 2]),
            Position::from([1, 1]),
            Position::from([4, 5]),
        )
        .unwrap();
        assert!(layout.is_contiguous());
        let layout = ArrayLayout::from_parts(
            Position::from([3, 2]),
            Position::from([1, 1]),
            Position::from([4, 5]),
        )
        .unwrap();
        assert!(!layout.is_contiguous());
    }

    #[test]
    fn from_parts_rejects_bad_parts() {
        let e = ArrayLayout::from_parts(
            Position::from([3]),
            Position::from([1, 1]),
            Position::from([3]),
        );
        assert_eq!(e.unwrap_err().kind(), crate::ErrorKind::RankMismatch);
        let e = ArrayLayout::from_parts(
            Position::from([3]),
            Position::from([2]),
            Position::from([4]),
        );
        assert_eq!(e.unwrap_err().kind(), crate::ErrorKind::OutOfBounds);
        let e = ArrayLayout::from_parts(
            Position::from([3]),
            Position::from([0]),
            Position::from([4]),
        );
        assert_eq!(e.unwrap_err().kind(), crate::ErrorKind::OutOfBounds);
        let e = ArrayLayout::from_parts(
            Position::from([1, 1]),
            Position::from([1, 1]),
            Position::from([usize::MAX, 2]),
        );
        assert_eq!(e.unwrap_err().kind(), crate::ErrorKind::Overflow);
    }

    #[test]
    fn from_parts_resets_unused_increments() {
        let layout = ArrayLayout::from_parts(
            Position::from([1, 3, 0]),
            Position::from([7, 2, usize::MAX]),
            Position::from([4, 5, 2]),
        )
        .unwrap();
        assert_eq!(layout.increments(), &[1, 2, 1]);
        assert_eq!(layout.steps(), &[1, 8, 20]);
        assert!(layout.is_consistent());
    }

    #[test]
    fn take_with_shape_resets_source() {
        let mut layout = ArrayLayout::new((3, 4));
        let taken = layout.take_with_shape((0, 0));
        assert_eq!(taken.shape(), &[3, 4]);
        assert_eq!(layout.shape(), &[0, 0]);
        assert_eq!(layout.ndim(), 2);
    }

    #[test]
    fn required_storage() {
        assert_eq!(ArrayLayout::new((3, 4)).required_storage(), 12);
        assert_eq!(ArrayLayout::new((3, 0)).required_storage(), 0);
    }
}

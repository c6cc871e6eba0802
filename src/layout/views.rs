// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Layout transformations producing views over the same storage.

use alloc::vec::Vec;

use super::ArrayLayout;
use crate::dimension::{Axis, IntoPosition};
use crate::error::{self, ErrorKind, ShapeError};
use crate::{Ix, Position, Slicer};

impl ArrayLayout {
    /// Describe the strided subset from `begin` to `end` (both inclusive)
    /// taking every `inc`-th element along each axis.
    ///
    /// Return the layout of the subset and the storage offset of its first
    /// element relative to the first element of `self`.
    ///
    /// An axis holding a single element gets increment one, whatever `inc`
    /// says for it.
    ///
    /// **Errors** with `RankMismatch` if a bound has the wrong number of
    /// axes, with `OutOfBounds` unless `begin <= end < len` and `inc >= 1`
    /// on every axis, and with `Overflow` if a combined increment overflows
    /// `usize`.
    pub fn make_subset<B, E, I>(
        &self,
        begin: B,
        end: E,
        inc: I,
    ) -> Result<(ArrayLayout, usize), ShapeError>
    where
        B: IntoPosition,
        E: IntoPosition,
        I: IntoPosition,
    {
        let begin = begin.into_position();
        let end = end.into_position();
        let inc = inc.into_position();
        let ndim = self.ndim();
        for bound in [&begin, &end, &inc] {
            if bound.ndim() != ndim {
                return Err(error::rank_mismatch(ndim, bound.ndim()));
            }
        }
        for axis in 0..ndim {
            if end[axis] >= self.length[axis] {
                return Err(error::index_out_of_bounds(end[axis], axis, self.length[axis]));
            }
            if begin[axis] > end[axis] {
                return Err(error::index_out_of_bounds(begin[axis], axis, end[axis] + 1));
            }
            if inc[axis] == 0 {
                return Err(error::with_message(
                    ErrorKind::OutOfBounds,
                    "subset increment must be positive",
                ));
            }
        }
        let length: Position = (0..ndim)
            .map(|axis| (end[axis] - begin[axis]) / inc[axis] + 1)
            .collect();
        let mut new_inc = Position::ones(ndim);
        for axis in 0..ndim {
            // A single element along an axis does not depend on the increment.
            if length[axis] > 1 {
                new_inc[axis] = self.inc[axis]
                    .checked_mul(inc[axis])
                    .ok_or_else(|| error::from_kind(ErrorKind::Overflow))?;
            }
        }
        let offset = self.offset_of(&begin);
        let sub = ArrayLayout::from_parts_unchecked(length, new_inc, self.original_length.clone());
        Ok((sub, offset))
    }

    /// Describe the section of `self` selected by `slicer`, as
    /// [`make_subset`](Self::make_subset) does for explicit bounds.
    pub fn make_section(&self, slicer: &Slicer) -> Result<(ArrayLayout, usize), ShapeError> {
        let (begin, end, inc) = slicer.resolve(&self.length)?;
        self.make_subset(begin, end, inc)
    }

    /// Describe the diagonal of the two-dimensional slab formed by `axis`
    /// and the axis after it.
    ///
    /// `diag == 0` selects the main diagonal, a positive value a diagonal
    /// above it (shifted along the second axis) and a negative value one
    /// below it. The two axes merge into one, so the result has one axis
    /// less. A diagonal running outside the slab has length zero.
    ///
    /// Return the layout of the diagonal and the storage offset of its
    /// first element.
    ///
    /// **Errors** with `OutOfBounds` if `axis` is the last axis or beyond,
    /// and with `Overflow` if the merged increment overflows `usize`.
    pub fn make_diagonal(
        &self,
        axis: Axis,
        diag: isize,
    ) -> Result<(ArrayLayout, usize), ShapeError> {
        let a = axis.index();
        let ndim = self.ndim();
        if a + 1 >= ndim {
            return Err(error::index_out_of_bounds(a + 1, a, ndim));
        }
        let shift = diag.unsigned_abs();
        let (skip_first, skip_second) = if diag >= 0 { (0, shift) } else { (shift, 0) };
        let n = Ix::min(
            self.length[a].saturating_sub(skip_first),
            self.length[a + 1].saturating_sub(skip_second),
        );
        let offset = if n == 0 {
            0
        } else {
            skip_second * self.steps[a + 1] + skip_first * self.steps[a]
        };

        let mut length = Vec::with_capacity(ndim - 1);
        let mut inc = Vec::with_capacity(ndim - 1);
        let mut original_length = Vec::with_capacity(ndim - 1);
        for i in 0..ndim {
            if i == a {
                let merged = self.original_length[a]
                    .checked_mul(self.inc[a + 1])
                    .and_then(|step| step.checked_add(self.inc[a]))
                    .ok_or_else(|| error::from_kind(ErrorKind::Overflow))?;
                length.push(n);
                inc.push(if n > 1 { merged } else { 1 });
                original_length.push(self.original_length[a] * self.original_length[a + 1]);
            } else if i != a + 1 {
                length.push(self.length[i]);
                inc.push(self.inc[i]);
                original_length.push(self.original_length[i]);
            }
        }
        let diagonal = ArrayLayout::from_parts_unchecked(
            Position::from(length),
            Position::from(inc),
            Position::from(original_length),
        );
        Ok((diagonal, offset))
    }

    /// Describe the same elements under `shape`, which must have the same
    /// number of elements.
    ///
    /// A contiguous layout can take any such shape. A strided layout can
    /// only gain or lose axes of length one; its remaining axes keep their
    /// steps. Reforming to the current shape gives an equal layout.
    ///
    /// **Errors** with `IncompatibleShapes` if the element counts differ,
    /// and with `IncompatibleLayout` if a strided layout cannot be
    /// described under `shape`.
    pub fn reform<Sh>(&self, shape: Sh) -> Result<ArrayLayout, ShapeError>
    where
        Sh: IntoPosition,
    {
        let shape = shape.into_position();
        if shape.product() != self.len() {
            return Err(error::incompatible_shapes(&self.length, &shape));
        }
        self.reform_same_count(shape)
    }

    /// Like [`reform`](Self::reform), but the element count may change if
    /// `self` is contiguous.
    ///
    /// The caller is responsible for the storage holding every element of
    /// the new layout; [`ArrayBase::reform_unchecked`](crate::ArrayBase::reform_unchecked)
    /// checks that against the storage it holds.
    ///
    /// **Errors** with `IncompatibleLayout` if the element count changes
    /// and `self` is not contiguous.
    pub fn reform_unchecked<Sh>(&self, shape: Sh) -> Result<ArrayLayout, ShapeError>
    where
        Sh: IntoPosition,
    {
        let shape = shape.into_position();
        if shape.product() == self.len() {
            self.reform_same_count(shape)
        } else if self.is_contiguous() {
            Ok(ArrayLayout::new(shape))
        } else {
            Err(error::incompatible_layout(&self.length, &shape))
        }
    }

    fn reform_same_count(&self, shape: Position) -> Result<ArrayLayout, ShapeError> {
        if shape == self.length {
            return Ok(self.clone());
        }
        if self.is_contiguous() || self.len() <= 1 {
            return Ok(ArrayLayout::new(shape));
        }
        // Strip length one axes on both sides; the remaining axes must match.
        let stripped = self.remove_axes(|axis| self.length[axis] != 1);
        let wanted = shape.iter().filter(|&&len| len != 1);
        if !stripped.length.iter().eq(wanted) {
            return Err(error::incompatible_layout(&self.length, &shape));
        }
        let mut length = Vec::with_capacity(shape.ndim());
        let mut inc = Vec::with_capacity(shape.ndim());
        let mut original_length = Vec::with_capacity(shape.ndim());
        let mut source = 0;
        for &len in &shape {
            if len == 1 {
                length.push(1);
                inc.push(1);
                original_length.push(1);
            } else {
                length.push(stripped.length[source]);
                inc.push(stripped.inc[source]);
                original_length.push(stripped.original_length[source]);
                source += 1;
            }
        }
        Ok(ArrayLayout::from_parts_unchecked(
            Position::from(length),
            Position::from(inc),
            Position::from(original_length),
        ))
    }

    /// Append `n` axes of length one.
    pub fn add_degenerate(&self, n: usize) -> ArrayLayout {
        ArrayLayout::from_parts_unchecked(
            self.length.appended(n, 1),
            self.inc.appended(n, 1),
            self.original_length.appended(n, 1),
        )
    }

    /// Remove all axes of length one, except the axes in `ignore_axes`.
    ///
    /// When every axis would be removed, axis 0 stays, so only a layout of
    /// rank zero gives a layout of rank zero. Only that one axis is kept
    /// unconditionally: a `(1, 1, 5)` layout becomes `(5)`. Use
    /// [`non_degenerate_from(2)`](Self::non_degenerate_from) to keep the
    /// first two axes whatever their length.
    ///
    /// **Errors** with `OutOfBounds` if an axis in `ignore_axes` does not
    /// exist.
    pub fn non_degenerate(&self, ignore_axes: &[usize]) -> Result<ArrayLayout, ShapeError> {
        let ndim = self.ndim();
        if let Some(&axis) = ignore_axes.iter().find(|&&axis| axis >= ndim) {
            return Err(error::index_out_of_bounds(axis, 0, ndim));
        }
        Ok(self.non_degenerate_where(|axis| ignore_axes.contains(&axis)))
    }

    /// Remove the axes of length one from `start_axis` on; the axes before
    /// it are kept whatever their length.
    ///
    /// `non_degenerate_from(2)` keeps at least two axes on any layout of
    /// rank two or more.
    pub fn non_degenerate_from(&self, start_axis: usize) -> ArrayLayout {
        self.non_degenerate_where(|axis| axis < start_axis)
    }

    fn non_degenerate_where<F>(&self, keep: F) -> ArrayLayout
    where
        F: Fn(usize) -> bool,
    {
        let ndim = self.ndim();
        let any_kept = (0..ndim).any(|axis| keep(axis) || self.length[axis] != 1);
        self.remove_axes(|axis| keep(axis) || self.length[axis] != 1 || (!any_kept && axis == 0))
    }

    /// Remove the single axis `axis`, which must have length one.
    ///
    /// **Errors** with `OutOfBounds` if the axis does not exist, and with
    /// `IncompatibleShapes` if it is longer than one.
    pub fn remove_axis(&self, axis: Axis) -> Result<ArrayLayout, ShapeError> {
        let ndim = self.ndim();
        let a = axis.index();
        if a >= ndim {
            return Err(error::index_out_of_bounds(a, 0, ndim));
        }
        if self.length[a] != 1 {
            return Err(error::incompatible_shapes(&self.length, &self.length.remove(a)));
        }
        Ok(self.remove_axes(|i| i != a))
    }

    /// Drop the axes for which `keep` is false; those must have length one.
    ///
    /// The original length of a dropped axis folds into the kept axis before
    /// it, or into the first kept axis when none precedes it, so every kept
    /// axis keeps its physical step.
    pub(crate) fn remove_axes<F>(&self, keep: F) -> ArrayLayout
    where
        F: Fn(usize) -> bool,
    {
        let ndim = self.ndim();
        let mut length = Vec::with_capacity(ndim);
        let mut inc = Vec::with_capacity(ndim);
        let mut original_length: Vec<Ix> = Vec::with_capacity(ndim);
        let mut lead = 1;
        for axis in 0..ndim {
            if keep(axis) {
                length.push(self.length[axis]);
                inc.push(self.inc[axis] * lead);
                original_length.push(self.original_length[axis] * lead);
                lead = 1;
            } else {
                debug_assert_eq!(self.length[axis], 1);
                match original_length.last_mut() {
                    Some(orig) => *orig *= self.original_length[axis],
                    None => lead *= self.original_length[axis],
                }
            }
        }
        ArrayLayout::from_parts_unchecked(
            Position::from(length),
            Position::from(inc),
            Position::from(original_length),
        )
    }

    /// Make `self` a layout of rank one.
    ///
    /// This succeeds when at most one axis is longer than one; that axis
    /// becomes the only axis and keeps its step. A layout of rank zero
    /// becomes `[0]`. On error `self` is unchanged.
    ///
    /// **Errors** with `IncompatibleShapes` if two or more axes are longer
    /// than one.
    pub fn check_vector_shape(&mut self) -> Result<(), ShapeError> {
        let ndim = self.ndim();
        if ndim == 0 {
            *self = ArrayLayout::new(Position::zeros(1));
            return Ok(());
        }
        if ndim == 1 {
            return Ok(());
        }
        let mut real = (0..ndim).filter(|&axis| self.length[axis] != 1);
        let axis = real.next().unwrap_or(0);
        if real.next().is_some() {
            return Err(error::with_message(
                ErrorKind::IncompatibleShapes,
                "a vector can have only one axis longer than one",
            ));
        }
        *self = self.remove_axes(|i| i == axis);
        Ok(())
    }

    /// Make `self` a layout of rank two.
    ///
    /// A smaller rank grows with trailing axes of length one; a larger rank
    /// shrinks by dropping trailing axes of length one. A layout of rank
    /// zero becomes `[0, 0]`. On error `self` is unchanged.
    ///
    /// **Errors** with `IncompatibleShapes` if a dropped axis is longer than
    /// one.
    pub fn check_matrix_shape(&mut self) -> Result<(), ShapeError> {
        self.check_fixed_rank(2)
    }

    /// Make `self` a layout of rank three, as
    /// [`check_matrix_shape`](Self::check_matrix_shape) does for rank two.
    pub fn check_cube_shape(&mut self) -> Result<(), ShapeError> {
        self.check_fixed_rank(3)
    }

    fn check_fixed_rank(&mut self, rank: usize) -> Result<(), ShapeError> {
        let ndim = self.ndim();
        if ndim == 0 {
            *self = ArrayLayout::new(Position::zeros(rank));
        } else if ndim < rank {
            *self = self.add_degenerate(rank - ndim);
        } else if ndim > rank {
            if self.length[rank..].iter().any(|&len| len != 1) {
                return Err(error::incompatible_shapes(
                    &self.length,
                    &self.length.leading(rank),
                ));
            }
            *self = self.remove_axes(|axis| axis < rank);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_steps_and_offset() {
        let layout = ArrayLayout::new((4, 5));
        let (sub, offset) = layout.make_subset((1, 1), (3, 4), (2, 3)).unwrap();
        assert_eq!(sub.shape(), &[2, 2]);
        assert_eq!(sub.increments(), &[2, 3]);
        assert_eq!(sub.original_shape(), &[4, 5]);
        assert_eq!(sub.steps(), &[2, 12]);
        assert_eq!(offset, 5);
    }

    #[test]
    fn subset_of_subset() {
        let layout = ArrayLayout::new(10);
        let (sub, off1) = layout.make_subset(2, 9, 2).unwrap();
        assert_eq!(sub.shape(), &[4]);
        let (sub2, off2) = sub.make_subset(1, 3, 2).unwrap();
        assert_eq!(sub2.shape(), &[2]);
        assert_eq!(sub2.steps(), &[4]);
        assert_eq!(off1 + off2, 4);
    }

    #[test]
    fn diagonal_of_subset() {
        let layout = ArrayLayout::new((6, 6));
        let (sub, _) = layout.make_subset((0, 0), (5, 5), (2, 2)).unwrap();
        let (diag, offset) = sub.make_diagonal(Axis(0), 0).unwrap();
        assert_eq!(diag.shape(), &[3]);
        assert_eq!(diag.steps(), &[14]);
        assert_eq!(offset, 0);
    }

    #[test]
    fn remove_leading_axis_keeps_steps() {
        let layout = ArrayLayout::new((1, 3, 1, 4));
        let stripped = layout.non_degenerate(&[]).unwrap();
        assert_eq!(stripped.shape(), &[3, 4]);
        assert_eq!(stripped.steps(), &[1, 3]);
        assert!(stripped.is_contiguous());
    }

    #[test]
    fn reform_strided_with_unit_axes() {
        let layout = ArrayLayout::new((4, 6));
        let (sub, _) = layout.make_subset((0, 0), (3, 4), (2, 2)).unwrap();
        let reformed = sub.reform((2, 1, 3)).unwrap();
        assert_eq!(reformed.steps()[0], sub.steps()[0]);
        assert_eq!(reformed.steps()[2], sub.steps()[1]);
        assert_eq!(sub.reform(3 * 2).unwrap_err().kind(), ErrorKind::IncompatibleLayout);
    }

    #[test]
    fn fixed_rank_failure_leaves_layout() {
        let mut layout = ArrayLayout::new((2, 3, 4));
        assert!(layout.check_matrix_shape().is_err());
        assert_eq!(layout.shape(), &[2, 3, 4]);
        assert!(layout.check_vector_shape().is_err());
        assert_eq!(layout.shape(), &[2, 3, 4]);
    }
}

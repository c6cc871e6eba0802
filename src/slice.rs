// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;
use std::ops::{Range, RangeFull};

use num_integer::Integer;

use crate::dimension::IntoPosition;
use crate::error::{self, ErrorKind, ShapeError};
use crate::{ArrayLayout, Ix, Position};

/// A slice along one axis: `length` elements from `start`, taking every
/// `inc`-th element.
///
/// ## Examples
///
/// `Slice::new(2, 3, 1)` is elements 2, 3 and 4. It can also be created
/// with `Slice::from(2..5)`.
///
/// `Slice::new(1, 3, 2)` is elements 1, 3 and 5. It can also be created
/// with `Slice::from(1..6).step_by(2)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Ix,
    pub length: Ix,
    pub inc: Ix,
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// `inc` must be nonzero.
    /// (This method checks with a debug assertion that `inc` is not zero.)
    pub fn new(start: Ix, length: Ix, inc: Ix) -> Slice {
        debug_assert_ne!(inc, 0, "Slice::new: inc must be nonzero");
        Slice { start, length, inc }
    }

    /// Take every `step`-th element of this slice.
    ///
    /// `step` must be nonzero. The increment saturates at `usize::MAX`,
    /// which no axis can reach.
    #[inline]
    pub fn step_by(self, step: Ix) -> Self {
        debug_assert_ne!(step, 0, "Slice::step_by: step must be nonzero");
        let length = Integer::div_ceil(&self.length, &step);
        let inc = if length > 1 {
            self.inc.saturating_mul(step)
        } else {
            self.inc
        };
        Slice {
            start: self.start,
            length,
            inc,
        }
    }

    /// Return the index of the last element, or `None` for an empty slice
    /// or one whose last element lies beyond `usize::MAX`.
    #[inline]
    pub fn end(&self) -> Option<Ix> {
        let last = self.length.checked_sub(1)?;
        last.checked_mul(self.inc).and_then(|span| self.start.checked_add(span))
    }
}

impl From<Range<Ix>> for Slice {
    #[inline]
    fn from(r: Range<Ix>) -> Slice {
        Slice {
            start: r.start,
            length: r.end.saturating_sub(r.start),
            inc: 1,
        }
    }
}

/// The slice of a whole axis of length `len`.
impl From<(RangeFull, Ix)> for Slice {
    #[inline]
    fn from((_, len): (RangeFull, Ix)) -> Slice {
        Slice::new(0, len, 1)
    }
}

/// A strided section of an array: for every axis a start, an inclusive end
/// and an increment.
///
/// A `Slicer` without ends (see [`Slicer::full`] and [`Slicer::from_start`])
/// runs to the end of every axis of the array it is applied to.
///
/// ```
/// use ndlayout::{Array, Slicer};
///
/// let a = Array::from_shape_fn((4, 4), |ix| ix[0] + 10 * ix[1]);
/// let s = a.slice(&Slicer::with_stride((1, 0), (3, 2), (2, 2))).unwrap();
/// assert_eq!(s.shape(), &[2, 2]);
/// assert_eq!(s.to_vec(), vec![1, 3, 21, 23]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slicer {
    start: Position,
    end: Option<Position>,
    inc: Position,
}

impl Slicer {
    /// Create a `Slicer` from `start` to `end`, both inclusive.
    pub fn new<B, E>(start: B, end: E) -> Self
    where
        B: IntoPosition,
        E: IntoPosition,
    {
        let start = start.into_position();
        let inc = Position::ones(start.ndim());
        Slicer {
            start,
            end: Some(end.into_position()),
            inc,
        }
    }

    /// Create a `Slicer` from `start` to `end` (inclusive) taking every
    /// `inc`-th element.
    pub fn with_stride<B, E, I>(start: B, end: E, inc: I) -> Self
    where
        B: IntoPosition,
        E: IntoPosition,
        I: IntoPosition,
    {
        Slicer {
            start: start.into_position(),
            end: Some(end.into_position()),
            inc: inc.into_position(),
        }
    }

    /// Create a `Slicer` of `length` elements from `start` taking every
    /// `inc`-th element.
    ///
    /// **Errors** with `RankMismatch` if the arguments differ in rank, and
    /// with `OutOfBounds` for an axis of zero length or zero increment.
    pub fn from_lengths<B, L, I>(start: B, length: L, inc: I) -> Result<Self, ShapeError>
    where
        B: IntoPosition,
        L: IntoPosition,
        I: IntoPosition,
    {
        let start = start.into_position();
        let length = length.into_position();
        let inc = inc.into_position();
        let ndim = start.ndim();
        for part in [&length, &inc] {
            if part.ndim() != ndim {
                return Err(error::rank_mismatch(ndim, part.ndim()));
            }
        }
        let mut end = Position::zeros(ndim);
        for axis in 0..ndim {
            let slice = Slice {
                start: start[axis],
                length: length[axis],
                inc: inc[axis],
            };
            end[axis] = match slice.end() {
                Some(last) if slice.inc > 0 => last,
                _ => return Err(error::index_out_of_bounds(length[axis], axis, 0)),
            };
        }
        Ok(Slicer {
            start,
            end: Some(end),
            inc,
        })
    }

    /// A `Slicer` of every element of an array of rank `ndim`.
    pub fn full(ndim: usize) -> Self {
        Self::from_start(Position::zeros(ndim), Position::ones(ndim))
    }

    /// A `Slicer` from `start` to the end of every axis, taking every
    /// `inc`-th element.
    pub fn from_start<B, I>(start: B, inc: I) -> Self
    where
        B: IntoPosition,
        I: IntoPosition,
    {
        Slicer {
            start: start.into_position(),
            end: None,
            inc: inc.into_position(),
        }
    }

    /// Return the number of axes.
    pub fn ndim(&self) -> usize {
        self.start.ndim()
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    /// Return the inclusive end, `None` if the slicer runs to the end of
    /// every axis.
    pub fn end(&self) -> Option<&Position> {
        self.end.as_ref()
    }

    pub fn increments(&self) -> &Position {
        &self.inc
    }

    /// Return the start, inclusive end and increment of this section of an
    /// array of `shape`.
    ///
    /// **Errors** with `RankMismatch` if the slicer and the shape differ in
    /// rank.
    pub fn resolve(&self, shape: &Position) -> Result<(Position, Position, Position), ShapeError> {
        let ndim = shape.ndim();
        if self.ndim() != ndim {
            return Err(error::rank_mismatch(ndim, self.ndim()));
        }
        let end = match self.end {
            Some(ref end) => end.clone(),
            None => shape.iter().map(|&len| len.saturating_sub(1)).collect(),
        };
        Ok((self.start.clone(), end, self.inc.clone()))
    }

    /// Return the shape of this section of an array of `shape`.
    ///
    /// **Errors** as [`ArrayLayout::make_subset`].
    pub fn result_shape(&self, shape: &Position) -> Result<Position, ShapeError> {
        let layout = ArrayLayout::new(shape);
        let (section, _) = layout.make_section(self)?;
        Ok(section.shape().clone())
    }
}

/// Check a list of slices per axis against `shape`.
///
/// Axes for which no slices are given, including axes beyond the end of
/// `slices`, get one slice covering the whole axis; `slices` is extended
/// accordingly. Return the `Slicer` of the first slice of every axis and
/// the shape formed by all slices together (per axis, the sum of the slice
/// lengths).
///
/// **Errors** with `RankMismatch` if there are more axes of slices than
/// axes in `shape`, and with `OutOfBounds` if a slice is empty or runs past
/// the end of its axis.
pub fn check_slices(
    slices: &mut Vec<Vec<Slice>>,
    shape: &Position,
) -> Result<(Slicer, Position), ShapeError> {
    let ndim = shape.ndim();
    if slices.len() > ndim {
        return Err(error::rank_mismatch(ndim, slices.len()));
    }
    for (axis, axis_slices) in slices.iter().enumerate() {
        for slice in axis_slices {
            match slice.end() {
                Some(last) if last < shape[axis] && slice.inc > 0 => {}
                Some(last) => return Err(error::index_out_of_bounds(last, axis, shape[axis])),
                None => {
                    return Err(error::with_message(
                        ErrorKind::OutOfBounds,
                        "empty or unbounded slice in slice list",
                    ))
                }
            }
        }
    }
    if shape.iter().enumerate().any(|(axis, &len)| {
        len == 0 && slices.get(axis).map_or(true, |axis_slices| axis_slices.is_empty())
    }) {
        return Err(error::with_message(
            ErrorKind::OutOfBounds,
            "cannot slice an axis of length zero",
        ));
    }

    slices.resize_with(ndim, Vec::new);
    let mut result = Position::zeros(ndim);
    let mut start = Position::zeros(ndim);
    let mut length = Position::zeros(ndim);
    let mut inc = Position::zeros(ndim);
    for (axis, axis_slices) in slices.iter_mut().enumerate() {
        if axis_slices.is_empty() {
            axis_slices.push(Slice::from((.., shape[axis])));
        }
        result[axis] = axis_slices.iter().map(|s| s.length).sum();
        start[axis] = axis_slices[0].start;
        length[axis] = axis_slices[0].length;
        inc[axis] = axis_slices[0].inc;
    }
    let first = Slicer::from_lengths(start, length, inc)?;
    Ok((first, result))
}

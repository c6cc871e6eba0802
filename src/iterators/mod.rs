// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::iter::FusedIterator;
use std::slice::{Iter as SliceIter, IterMut as SliceIterMut};

use crate::{ArrayLayout, Position};

/// Base for array iterators
///
/// Walks the indices of a layout in storage order (axis 0 fastest) and
/// yields the storage offset of each.
#[derive(Clone, Debug)]
pub(crate) struct Baseiter {
    // Can have pub fields because it is not itself pub.
    pub shape: Position,
    pub steps: Position,
    pub index: Option<Position>,
    pub offset: usize,
    pub remaining: usize,
}

impl Baseiter {
    /// Iterate `layout` with its first element at storage offset `base`.
    pub fn new(layout: &ArrayLayout, base: usize) -> Baseiter {
        let remaining = layout.len();
        Baseiter {
            shape: layout.shape().clone(),
            steps: layout.steps().clone(),
            index: if remaining == 0 {
                None
            } else {
                Some(Position::zeros(layout.ndim()))
            },
            offset: base,
            remaining,
        }
    }

    #[inline]
    pub fn next(&mut self) -> Option<usize> {
        let offset = self.offset;
        self.step()?;
        Some(offset)
    }

    #[inline]
    pub fn next_with_index(&mut self) -> Option<(Position, usize)> {
        let index = self.index.clone()?;
        let offset = self.offset;
        self.step()?;
        Some((index, offset))
    }

    fn step(&mut self) -> Option<()> {
        let index = self.index.as_mut()?;
        let mut done = true;
        for axis in 0..index.ndim() {
            index[axis] += 1;
            self.offset += self.steps[axis];
            if index[axis] < self.shape[axis] {
                done = false;
                break;
            }
            self.offset -= self.steps[axis] * self.shape[axis];
            index[axis] = 0;
        }
        if done {
            self.index = None;
        }
        self.remaining -= 1;
        Some(())
    }
}

#[derive(Clone, Debug)]
enum ElementsRepr<S, C> {
    Slice(S),
    Counted(C),
}

/// An iterator over the elements of an array.
///
/// Iterator element type is `&'a A`.
///
/// See [`.iter()`](crate::ArrayBase::iter) for more information.
#[derive(Clone, Debug)]
pub struct Iter<'a, A> {
    inner: ElementsRepr<SliceIter<'a, A>, (&'a [A], Baseiter)>,
}

impl<'a, A> Iter<'a, A> {
    pub(crate) fn new(data: &'a [A], offset: usize, layout: &ArrayLayout) -> Self {
        let inner = if layout.is_contiguous() {
            ElementsRepr::Slice(data[offset..offset + layout.len()].iter())
        } else {
            ElementsRepr::Counted((data, Baseiter::new(layout, offset)))
        };
        Iter { inner }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A> {
        match self.inner {
            ElementsRepr::Slice(ref mut iter) => iter.next(),
            ElementsRepr::Counted((data, ref mut base)) => base.next().map(|offset| &data[offset]),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {
    fn len(&self) -> usize {
        match self.inner {
            ElementsRepr::Slice(ref iter) => iter.len(),
            ElementsRepr::Counted((_, ref base)) => base.remaining,
        }
    }
}

impl<'a, A> FusedIterator for Iter<'a, A> {}

/// Strided walk over mutable storage.
///
/// The offsets of a consistent layout strictly increase in storage order,
/// so every element is reached by skipping forward in the slice iterator.
#[derive(Debug)]
struct CountedMut<'a, A> {
    data: SliceIterMut<'a, A>,
    consumed: usize,
    base: Baseiter,
}

/// An iterator over the elements of an array (mutable).
///
/// Iterator element type is `&'a mut A`.
///
/// See [`.iter_mut()`](crate::ArrayBase::iter_mut) for more information.
#[derive(Debug)]
pub struct IterMut<'a, A> {
    inner: ElementsRepr<SliceIterMut<'a, A>, CountedMut<'a, A>>,
}

impl<'a, A> IterMut<'a, A> {
    pub(crate) fn new(data: &'a mut [A], offset: usize, layout: &ArrayLayout) -> Self {
        let inner = if layout.is_contiguous() {
            ElementsRepr::Slice(data[offset..offset + layout.len()].iter_mut())
        } else {
            ElementsRepr::Counted(CountedMut {
                data: data.iter_mut(),
                consumed: 0,
                base: Baseiter::new(layout, offset),
            })
        };
        IterMut { inner }
    }
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    #[inline]
    fn next(&mut self) -> Option<&'a mut A> {
        match self.inner {
            ElementsRepr::Slice(ref mut iter) => iter.next(),
            ElementsRepr::Counted(ref mut counted) => {
                let offset = counted.base.next()?;
                debug_assert!(offset >= counted.consumed);
                let elt = counted.data.nth(offset - counted.consumed);
                counted.consumed = offset + 1;
                elt
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, A> ExactSizeIterator for IterMut<'a, A> {
    fn len(&self) -> usize {
        match self.inner {
            ElementsRepr::Slice(ref iter) => iter.len(),
            ElementsRepr::Counted(ref counted) => counted.base.remaining,
        }
    }
}

impl<'a, A> FusedIterator for IterMut<'a, A> {}

/// An iterator over the indices of a layout, axis 0 varying fastest.
///
/// Iterator element type is `Position`.
///
/// See [`ArrayLayout::positions`] for more information.
#[derive(Clone, Debug)]
pub struct Positions {
    base: Baseiter,
}

impl Positions {
    pub(crate) fn new(layout: &ArrayLayout) -> Self {
        Positions {
            base: Baseiter::new(layout, 0),
        }
    }
}

impl Iterator for Positions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        self.base.next_with_index().map(|(index, _)| index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.base.remaining, Some(self.base.remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}

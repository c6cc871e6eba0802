// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::boxed::Box;
use alloc::vec::Vec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

use num_traits::{One, Zero};

use crate::Ix;

const CAP: usize = 4;

#[derive(Debug)]
enum PositionRepr<T> {
    Inline(u32, [T; CAP]),
    Alloc(Box<[T]>),
}

impl<T> Deref for PositionRepr<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        match *self {
            PositionRepr::Inline(len, ref ar) => &ar[..len as usize],
            PositionRepr::Alloc(ref ar) => ar,
        }
    }
}

impl<T> DerefMut for PositionRepr<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match *self {
            PositionRepr::Inline(len, ref mut ar) => &mut ar[..len as usize],
            PositionRepr::Alloc(ref mut ar) => ar,
        }
    }
}

impl<T: Copy + Zero> PositionRepr<T> {
    fn copy_from(x: &[T]) -> Self {
        if x.len() <= CAP {
            let mut arr = [T::zero(); CAP];
            arr[..x.len()].copy_from_slice(x);
            PositionRepr::Inline(x.len() as _, arr)
        } else {
            PositionRepr::Alloc(x.to_vec().into_boxed_slice())
        }
    }

    // make an Inline or Alloc version as appropriate
    fn from_vec_auto(v: Vec<T>) -> Self {
        if v.len() <= CAP {
            Self::copy_from(&v)
        } else {
            PositionRepr::Alloc(v.into_boxed_slice())
        }
    }
}

impl<T: Copy> Clone for PositionRepr<T> {
    fn clone(&self) -> Self {
        match *self {
            PositionRepr::Inline(len, arr) => PositionRepr::Inline(len, arr),
            PositionRepr::Alloc(ref ar) => PositionRepr::Alloc(ar.clone()),
        }
    }
}

/// An ordered, small vector of axis lengths or indices.
///
/// `Position` is used for shapes, indices and the begin/end/increment
/// triples of subsets. Up to four axes are stored inline and don't need any
/// dynamic memory allocation.
///
/// ```
/// use ndlayout::Position;
///
/// let shape = Position::from(&[3, 4][..]);
/// assert_eq!(shape.ndim(), 2);
/// assert_eq!(shape.product(), 12);
/// assert_eq!(shape, [3, 4]);
/// ```
#[derive(Clone)]
pub struct Position(PositionRepr<Ix>);

impl Position {
    /// Create a position with `n` axes, all zero.
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, Ix::zero())
    }

    /// Create a position with `n` axes, all one.
    pub fn ones(n: usize) -> Self {
        Self::filled(n, Ix::one())
    }

    /// Create a position with `n` axes, all equal to `value`.
    pub fn filled(n: usize, value: Ix) -> Self {
        if n <= CAP {
            let mut arr = [0; CAP];
            arr[..n].iter_mut().for_each(|x| *x = value);
            Position(PositionRepr::Inline(n as u32, arr))
        } else {
            Position(PositionRepr::Alloc(alloc::vec![value; n].into_boxed_slice()))
        }
    }

    /// Return the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.len()
    }

    /// Return the product of all values.
    ///
    /// The product of a position without axes is **0**: an array of rank
    /// zero holds no elements.
    pub fn product(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.iter().product()
        }
    }

    /// Return the product of all values, or `None` if it overflows.
    pub fn product_checked(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        self.iter().try_fold(1usize, |acc, &x| acc.checked_mul(x))
    }

    /// Return the last value, if any.
    pub fn last_value(&self) -> Option<Ix> {
        self.last().copied()
    }

    /// Return a copy with the axis at `index` removed.
    ///
    /// **Panics** if `index` is out of range.
    pub fn remove(&self, index: usize) -> Self {
        assert!(index < self.ndim(), "Position::remove: axis {} out of range", index);
        self.iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, &x)| x)
            .collect()
    }

    /// Return a copy with `n` more axes, each equal to `value`, appended.
    pub fn appended(&self, n: usize, value: Ix) -> Self {
        self.iter()
            .copied()
            .chain(std::iter::repeat(value).take(n))
            .collect()
    }

    /// Return a copy of the leading `n` axes.
    pub fn leading(&self, n: usize) -> Self {
        Position::from(&self[..n.min(self.ndim())])
    }
}

impl Default for Position {
    /// The default position has no axes.
    fn default() -> Self {
        Position::zeros(0)
    }
}

impl PartialEq for Position {
    fn eq(&self, rhs: &Self) -> bool {
        self[..] == rhs[..]
    }
}

impl Eq for Position {}

impl PartialEq<[Ix]> for Position {
    fn eq(&self, rhs: &[Ix]) -> bool {
        self[..] == *rhs
    }
}

impl<const N: usize> PartialEq<[Ix; N]> for Position {
    fn eq(&self, rhs: &[Ix; N]) -> bool {
        self[..] == rhs[..]
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self[..], state)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self[..], f)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}

impl<'a> From<&'a [Ix]> for Position {
    #[inline]
    fn from(ix: &'a [Ix]) -> Self {
        Position(PositionRepr::copy_from(ix))
    }
}

impl From<Vec<Ix>> for Position {
    #[inline]
    fn from(ix: Vec<Ix>) -> Self {
        Position(PositionRepr::from_vec_auto(ix))
    }
}

impl<const N: usize> From<[Ix; N]> for Position {
    #[inline]
    fn from(ix: [Ix; N]) -> Self {
        Position::from(&ix[..])
    }
}

impl FromIterator<Ix> for Position {
    fn from_iter<I: IntoIterator<Item = Ix>>(iter: I) -> Self {
        Position::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Deref for Position {
    type Target = [Ix];
    #[inline]
    fn deref(&self) -> &[Ix] {
        &self.0
    }
}

impl DerefMut for Position {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Ix] {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a Position {
    type Item = &'a Ix;
    type IntoIter = <&'a [Ix] as IntoIterator>::IntoIter;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self[..].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use alloc::vec;

    #[test]
    fn inline_and_alloc() {
        let p = Position::from(&[1, 2, 3][..]);
        assert_eq!(p.ndim(), 3);
        assert_eq!(p, [1, 2, 3]);
        let q = Position::from(vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(q.ndim(), 6);
        assert_eq!(q.product(), 720);
        assert_eq!(q.remove(5), [1, 2, 3, 4, 5]);
        assert_eq!(p.appended(3, 1), [1, 2, 3, 1, 1, 1]);
    }

    #[test]
    fn empty_product_is_zero() {
        assert_eq!(Position::default().product(), 0);
        assert_eq!(Position::default().product_checked(), Some(0));
        assert_eq!(Position::from([7, 0]).product(), 0);
        assert_eq!(Position::from([usize::MAX, 2]).product_checked(), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Position::from([3, 4])), "[3, 4]");
        assert_eq!(format!("{}", Position::default()), "[]");
        assert_eq!(format!("{:?}", Position::ones(2)), "[1, 1]");
    }
}

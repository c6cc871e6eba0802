// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple to position conversion, IntoPosition, and related things

use alloc::vec::Vec;

use crate::{Ix, Position};

/// Argument conversion into a `Position`.
///
/// Implemented for `usize` (one axis), tuples of up to six `usize`,
/// fixed size arrays, slices and vectors of `usize`, and `Position`
/// itself.
pub trait IntoPosition {
    fn into_position(self) -> Position;
}

impl IntoPosition for Position {
    #[inline(always)]
    fn into_position(self) -> Position {
        self
    }
}

impl<'a> IntoPosition for &'a Position {
    #[inline]
    fn into_position(self) -> Position {
        self.clone()
    }
}

impl IntoPosition for Ix {
    #[inline]
    fn into_position(self) -> Position {
        Position::from(&[self][..])
    }
}

impl IntoPosition for () {
    #[inline]
    fn into_position(self) -> Position {
        Position::default()
    }
}

impl<'a> IntoPosition for &'a [Ix] {
    #[inline]
    fn into_position(self) -> Position {
        Position::from(self)
    }
}

impl IntoPosition for Vec<Ix> {
    #[inline]
    fn into_position(self) -> Position {
        Position::from(self)
    }
}

impl<const N: usize> IntoPosition for [Ix; N] {
    #[inline]
    fn into_position(self) -> Position {
        Position::from(&self[..])
    }
}

impl<'a, const N: usize> IntoPosition for &'a [Ix; N] {
    #[inline]
    fn into_position(self) -> Position {
        Position::from(&self[..])
    }
}

macro_rules! sub {
    ($_x:tt $y:tt) => {
        $y
    };
}

macro_rules! tuple_to_position {
    ($($index:tt)*) => {
        impl IntoPosition for ( $(sub!($index Ix), )* ) {
            #[inline]
            fn into_position(self) -> Position {
                Position::from(&[$(self.$index, )*][..])
            }
        }
    };
}

tuple_to_position!(0 1);
tuple_to_position!(0 1 2);
tuple_to_position!(0 1 2 3);
tuple_to_position!(0 1 2 3 4);
tuple_to_position!(0 1 2 3 4 5);

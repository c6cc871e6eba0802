// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{Ix, Position};

/// An error related to array shape, indexing or storage.
#[derive(Clone, Debug)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    context: Context,
}

#[derive(Clone, Debug)]
enum Context {
    None,
    Shapes(Position, Position),
    Index { index: Ix, axis: usize, bound: Ix },
    Ranks { expected: usize, found: usize },
    Message(&'static str),
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to array shape, indexing or storage.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// incompatible shapes
    IncompatibleShapes,
    /// index, axis or subset bound out of range
    OutOfBounds,
    /// position has a different number of axes than the shape
    RankMismatch,
    /// operation not supported by this array (shape-only layouts, shared
    /// storage)
    Unsupported,
    /// incompatible layout: not contiguous
    IncompatibleLayout,
    /// element types differ
    TypeMismatch,
    /// overflow when computing offset or length
    Overflow,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError {
        repr: k,
        context: Context::None,
    }
}

impl PartialEq for ShapeError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::IncompatibleShapes => "incompatible shapes",
            ErrorKind::OutOfBounds => "out of bounds indexing",
            ErrorKind::RankMismatch => "rank mismatch",
            ErrorKind::Unsupported => "unsupported operation",
            ErrorKind::IncompatibleLayout => "incompatible memory layout",
            ErrorKind::TypeMismatch => "element types differ",
            ErrorKind::Overflow => "arithmetic overflow",
        };
        match self.context {
            Context::None => write!(f, "ShapeError/{:?}: {}", self.kind(), description),
            Context::Shapes(ref a, ref b) => write!(
                f,
                "ShapeError/{:?}: {}, {} vs {}",
                self.kind(),
                description,
                a,
                b
            ),
            Context::Index { index, axis, bound } => write!(
                f,
                "ShapeError/{:?}: {}, index {} on axis {} with bound {}",
                self.kind(),
                description,
                index,
                axis,
                bound
            ),
            Context::Ranks { expected, found } => write!(
                f,
                "ShapeError/{:?}: {}, expected {} axes, found {}",
                self.kind(),
                description,
                expected,
                found
            ),
            Context::Message(msg) => {
                write!(f, "ShapeError/{:?}: {}: {}", self.kind(), description, msg)
            }
        }
    }
}

pub(crate) fn incompatible_shapes(a: &Position, b: &Position) -> ShapeError {
    ShapeError {
        repr: ErrorKind::IncompatibleShapes,
        context: Context::Shapes(a.clone(), b.clone()),
    }
}

pub(crate) fn incompatible_layout(from: &Position, to: &Position) -> ShapeError {
    ShapeError {
        repr: ErrorKind::IncompatibleLayout,
        context: Context::Shapes(from.clone(), to.clone()),
    }
}

pub(crate) fn index_out_of_bounds(index: Ix, axis: usize, bound: Ix) -> ShapeError {
    ShapeError {
        repr: ErrorKind::OutOfBounds,
        context: Context::Index { index, axis, bound },
    }
}

pub(crate) fn rank_mismatch(expected: usize, found: usize) -> ShapeError {
    ShapeError {
        repr: ErrorKind::RankMismatch,
        context: Context::Ranks { expected, found },
    }
}

pub(crate) fn with_message(kind: ErrorKind, msg: &'static str) -> ShapeError {
    ShapeError {
        repr: kind,
        context: Context::Message(msg),
    }
}

pub(crate) fn unsupported(operation: &'static str) -> ShapeError {
    with_message(ErrorKind::Unsupported, operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = index_out_of_bounds(3, 0, 3);
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        assert_eq!(
            e.to_string(),
            "ShapeError/OutOfBounds: out of bounds indexing, index 3 on axis 0 with bound 3"
        );
        let e = incompatible_shapes(&Position::from([3, 4]), &Position::from([4, 3]));
        assert_eq!(
            e.to_string(),
            "ShapeError/IncompatibleShapes: incompatible shapes, [3, 4] vs [4, 3]"
        );
        assert_eq!(rank_mismatch(2, 3), from_kind(ErrorKind::RankMismatch));
        assert!(unsupported("resize").to_string().ends_with("unsupported operation: resize"));
    }
}

// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndlayout prelude.
//!
//! This module contains the most used types, type aliases and traits that
//! you can import easily as a group.
//!
//! ```
//! use ndlayout::prelude::*;
//!
//! let a = Array::from_elem((2, 2), 0.);
//! assert_eq!(a.shape(), &[2, 2]);
//! ```

#[doc(no_inline)]
pub use crate::{ArrayBase, Array, ArrayView, ArrayViewMut};

#[doc(no_inline)]
pub use crate::{ArrayLayout, Axis, IntoPosition, Position, ReformOutcome};

#[doc(no_inline)]
pub use crate::{Slice, Slicer};

#[doc(no_inline)]
pub use crate::{AnyArray, ErrorKind, ShapeError};

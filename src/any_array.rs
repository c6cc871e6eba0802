//! Typed storage operations behind a trait object.

use alloc::boxed::Box;
use std::any::Any;
use std::fmt;

use crate::error::{self, ErrorKind, ShapeError};
use crate::{Array, ArrayLayout, Position, Slicer};

/// An array of any element type.
///
/// Every array has a layout; only arrays with typed storage support the
/// storage operations. Those default to failing with
/// `ErrorKind::Unsupported`, which is what a bare [`ArrayLayout`] does.
///
/// The trait is object safe, so arrays of different element types can be
/// held together as `Box<dyn AnyArray>`.
///
/// ```
/// use ndlayout::{AnyArray, Array, ArrayLayout, ErrorKind, Position};
///
/// let mut arrays: Vec<Box<dyn AnyArray>> = vec![
///     Box::new(Array::<f64>::zeros((2, 3))),
///     Box::new(Array::<i32>::zeros(4)),
///     Box::new(ArrayLayout::new((5, 5))),
/// ];
/// arrays[1].resize(&Position::from([2, 2]), false).unwrap();
/// assert_eq!(arrays[1].shape(), &[2, 2]);
/// let e = arrays[2].resize(&Position::from([2, 2]), false).unwrap_err();
/// assert_eq!(e.kind(), ErrorKind::Unsupported);
/// ```
pub trait AnyArray {
    /// Return the layout of the array.
    fn layout(&self) -> &ArrayLayout;

    /// Return `self` for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Return the number of dimensions (axes).
    fn ndim(&self) -> usize {
        self.layout().ndim()
    }

    /// Return the number of elements.
    fn len(&self) -> usize {
        self.layout().len()
    }

    /// Return `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.layout().is_empty()
    }

    /// Return the shape.
    fn shape(&self) -> &Position {
        self.layout().shape()
    }

    /// Create an empty array of the same element type.
    fn make_array(&self) -> Result<Box<dyn AnyArray>, ShapeError> {
        Err(error::unsupported("make_array"))
    }

    /// Give the array the shape `shape`, keeping the elements the old and
    /// new shapes have in common if `copy_values` is set.
    fn resize(&mut self, shape: &Position, copy_values: bool) -> Result<(), ShapeError> {
        let _ = (shape, copy_values);
        Err(error::unsupported("resize"))
    }

    /// Return the section `slicer` as an array sharing this array's
    /// storage.
    fn get_section(&self, slicer: &Slicer) -> Result<Box<dyn AnyArray>, ShapeError> {
        let _ = slicer;
        Err(error::unsupported("get_section"))
    }

    /// Copy the elements of `other` into this array. An empty array takes
    /// the shape of `other` first.
    fn assign_base(&mut self, other: &dyn AnyArray) -> Result<(), ShapeError> {
        let _ = other;
        Err(error::unsupported("assign_base"))
    }
}

impl fmt::Debug for dyn AnyArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyArray")
            .field("shape", self.shape())
            .field("contiguous", &self.layout().is_contiguous())
            .finish()
    }
}

impl AnyArray for ArrayLayout {
    fn layout(&self) -> &ArrayLayout {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<A> AnyArray for Array<A>
where
    A: Clone + Default + 'static,
{
    fn layout(&self) -> &ArrayLayout {
        &self.layout
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn make_array(&self) -> Result<Box<dyn AnyArray>, ShapeError> {
        Ok(Box::new(<Array<A> as Default>::default()))
    }

    fn resize(&mut self, shape: &Position, copy_values: bool) -> Result<(), ShapeError> {
        Array::resize(self, shape, copy_values);
        Ok(())
    }

    fn get_section(&self, slicer: &Slicer) -> Result<Box<dyn AnyArray>, ShapeError> {
        let section = self.clone().slice_move(slicer)?;
        Ok(Box::new(section))
    }

    fn assign_base(&mut self, other: &dyn AnyArray) -> Result<(), ShapeError> {
        let other = match other.as_any().downcast_ref::<Array<A>>() {
            Some(other) => other,
            None => return Err(error::with_message(ErrorKind::TypeMismatch, "assign_base")),
        };
        if self.is_empty() && !self.conforms(other) {
            Array::resize(self, other.shape(), false);
        }
        self.assign(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_base_type_mismatch() {
        let mut a = Array::<f32>::zeros(3);
        let b = Array::<f64>::ones(3);
        let e = a.assign_base(&b).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn assign_base_resizes_empty() {
        let mut a: Array<i64> = Default::default();
        let b = Array::from_shape_fn((2, 2), |ix| (ix[0] + 2 * ix[1]) as i64);
        a.assign_base(&b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.n_references(), 1);
    }

    #[test]
    fn sections_share_storage() {
        let a = Array::from_shape_fn((3, 3), |ix| ix[0] + 3 * ix[1]);
        let section = a.get_section(&Slicer::new((1, 1), (2, 2))).unwrap();
        assert_eq!(section.shape(), &[2, 2]);
        assert_eq!(a.n_references(), 2);
        let section = section.as_any().downcast_ref::<Array<usize>>().unwrap();
        assert_eq!(section.to_vec(), [4, 5, 7, 8]);
        assert_eq!(a.make_array().unwrap().ndim(), 0);
    }

    #[test]
    fn debug_trait_object() {
        let boxed: Box<dyn AnyArray> = Box::new(ArrayLayout::new((2, 3)));
        assert_eq!(
            format!("{:?}", boxed),
            "AnyArray { shape: [2, 3], contiguous: true }"
        );
    }
}

use super::ArrayLayout;
use crate::error::{self, ShapeError};
use crate::Ix;

impl ArrayLayout {
    /// Return `true` if `self` and `other` have the same shape.
    #[inline]
    pub fn conforms(&self, other: &ArrayLayout) -> bool {
        self.length == other.length
    }

    /// **Errors** with `IncompatibleShapes` unless `self` and `other` have
    /// the same shape.
    pub fn validate_conformance(&self, other: &ArrayLayout) -> Result<(), ShapeError> {
        if self.conforms(other) {
            Ok(())
        } else {
            Err(error::incompatible_shapes(&self.length, &other.length))
        }
    }

    /// Check that `index` addresses an element.
    ///
    /// **Errors** with `RankMismatch` if `index` has the wrong number of
    /// axes, and with `OutOfBounds` naming the first axis where it is not
    /// below the axis length.
    pub fn validate_index(&self, index: &[Ix]) -> Result<(), ShapeError> {
        if index.len() != self.ndim() {
            return Err(error::rank_mismatch(self.ndim(), index.len()));
        }
        match index
            .iter()
            .zip(&self.length)
            .position(|(&i, &len)| i >= len)
        {
            Some(axis) => Err(error::index_out_of_bounds(index[axis], axis, self.length[axis])),
            None => Ok(()),
        }
    }

    /// Check a one-dimensional index.
    #[inline]
    pub fn validate_index1(&self, i: Ix) -> Result<(), ShapeError> {
        self.validate_index(&[i])
    }

    /// Check a two-dimensional index.
    #[inline]
    pub fn validate_index2(&self, i: Ix, j: Ix) -> Result<(), ShapeError> {
        self.validate_index(&[i, j])
    }

    /// Check a three-dimensional index.
    #[inline]
    pub fn validate_index3(&self, i: Ix, j: Ix, k: Ix) -> Result<(), ShapeError> {
        self.validate_index(&[i, j, k])
    }
}

/// Check that two layouts have the same shape, naming the operation in the
/// error.
///
/// **Errors** with `IncompatibleShapes`.
pub fn check_array_shapes(
    left: &ArrayLayout,
    right: &ArrayLayout,
    operation: &'static str,
) -> Result<(), ShapeError> {
    if left.conforms(right) {
        Ok(())
    } else {
        Err(error::with_message(error::ErrorKind::IncompatibleShapes, operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn index_validation() {
        let layout = ArrayLayout::new((3, 4));
        assert!(layout.validate_index2(2, 3).is_ok());
        let e = layout.validate_index2(3, 0).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        assert_eq!(
            e.to_string(),
            "ShapeError/OutOfBounds: out of bounds indexing, index 3 on axis 0 with bound 3"
        );
        assert_eq!(layout.validate_index1(0).unwrap_err().kind(), ErrorKind::RankMismatch);
        assert_eq!(layout.validate_index3(0, 0, 0).unwrap_err().kind(), ErrorKind::RankMismatch);
    }

    #[test]
    fn conformance() {
        let a = ArrayLayout::new((3, 4));
        let b = ArrayLayout::new((4, 3));
        assert!(a.validate_conformance(&a.clone()).is_ok());
        assert_eq!(a.validate_conformance(&b).unwrap_err().kind(), ErrorKind::IncompatibleShapes);
        let e = check_array_shapes(&a, &b, "assign").unwrap_err();
        assert!(e.to_string().ends_with(": assign"));
    }
}

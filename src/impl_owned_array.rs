use alloc::vec::Vec;
use std::mem;

use crate::dimension::IntoPosition;
use crate::error::ShapeError;
use crate::{
    Array, ArrayBase, ArrayLayout, ArrayView, ArrayViewMut, Position, ReformOutcome, SharedRepr,
};

/// Methods specific to `Array`.
///
/// ***See also all methods for [`ArrayBase`]***
impl<A> Array<A> {
    /// Return the number of arrays sharing this array's storage, this one
    /// included.
    pub fn n_references(&self) -> usize {
        self.data.n_references()
    }

    /// Return the number of elements the storage holds from this array's
    /// first element on.
    pub fn n_allocated(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Return a vector of the elements in the array, in storage order.
    ///
    /// If the array is the only reference to its storage and addresses all
    /// of it contiguously, the storage is returned without copying.
    pub fn into_vec(self) -> Vec<A>
    where
        A: Clone,
    {
        if self.offset == 0 && self.is_contiguous() && self.len() == self.data.len() {
            match self.data.try_into_vec() {
                Ok(v) => v,
                Err(data) => data.as_slice().to_vec(),
            }
        } else {
            self.to_vec()
        }
    }

    /// Move the array out, leaving a default filled array of `shape` in its
    /// place.
    ///
    /// A fixed rank owner keeps its rank this way after its elements are
    /// moved elsewhere.
    ///
    /// ```
    /// use ndlayout::Array;
    ///
    /// let mut a = Array::from_elem((3, 3), 1);
    /// let b = a.take_with_shape((0, 0));
    /// assert_eq!(b.shape(), &[3, 3]);
    /// assert_eq!(a.shape(), &[0, 0]);
    /// ```
    pub fn take_with_shape<Sh>(&mut self, shape: Sh) -> Self
    where
        A: Default,
        Sh: IntoPosition,
    {
        mem::replace(self, Array::default(shape))
    }

    /// Give the array the shape `shape`, with new storage filled with
    /// default values.
    ///
    /// If `copy_values` is set and the rank is unchanged, the elements in
    /// the region the old and new shapes have in common are copied over.
    pub fn resize<Sh>(&mut self, shape: Sh, copy_values: bool)
    where
        A: Clone + Default,
        Sh: IntoPosition,
    {
        let shape = shape.into_position();
        let mut resized = Array::default(&shape);
        if copy_values {
            copy_overlap(self.view(), resized.view_mut());
        }
        *self = resized;
    }

    /// Give the array the shape `new_shape`, reusing its storage where
    /// possible.
    ///
    /// The same number of elements reforms the array. Otherwise, with
    /// `resize_if_needed` set, a shape that fits the storage reinterprets
    /// it, and a larger shape reallocates the storage with room for
    /// `resize_percentage` percent more elements. The new storage holds
    /// default values, except that with `copy_data_if_needed` set the
    /// region the old and new shapes have in common is copied over.
    ///
    /// **Errors** as [`ArrayLayout::reform_or_resize`]; the storage must
    /// not be shared with other arrays to be resized.
    ///
    /// ```
    /// use ndlayout::{Array, ReformOutcome};
    ///
    /// let mut a = Array::from_elem((2, 3), 7);
    /// assert_eq!(a.reform_or_resize((3, 2), false, false, 0), Ok(ReformOutcome::Reformed));
    ///
    /// let outcome = a.reform_or_resize((4, 4), true, false, 25).unwrap();
    /// assert_eq!(outcome, ReformOutcome::Reallocate { capacity: 20 });
    /// assert_eq!(a.n_allocated(), 20);
    /// assert_eq!(a.reform_or_resize((4, 5), true, false, 25), Ok(ReformOutcome::Reinterpreted));
    /// ```
    pub fn reform_or_resize<Sh>(
        &mut self,
        shape: Sh,
        resize_if_needed: bool,
        copy_data_if_needed: bool,
        resize_percentage: usize,
    ) -> Result<ReformOutcome, ShapeError>
    where
        A: Clone + Default,
        Sh: IntoPosition,
    {
        let n_references = self.n_references();
        let n_allocated = self.n_allocated();
        let mut layout = self.layout.clone();
        let outcome = layout.reform_or_resize(
            shape,
            resize_if_needed,
            n_references,
            n_allocated,
            resize_percentage,
        )?;
        if let ReformOutcome::Reallocate { capacity } = outcome {
            let mut storage = Vec::with_capacity(capacity);
            storage.resize_with(capacity, A::default);
            let mut resized = ArrayBase::from_data_parts(SharedRepr::from(storage), 0, layout);
            if copy_data_if_needed {
                copy_overlap(self.view(), resized.view_mut());
            }
            *self = resized;
        } else {
            self.layout = layout;
        }
        Ok(outcome)
    }
}

/// Copy the elements in the region `src` and `dst` have in common; nothing
/// if their ranks differ.
fn copy_overlap<A: Clone>(src: ArrayView<'_, A>, mut dst: ArrayViewMut<'_, A>) {
    if src.ndim() != dst.ndim() {
        return;
    }
    let common: Position = src
        .shape()
        .iter()
        .zip(dst.shape().iter())
        .map(|(&a, &b)| a.min(b))
        .collect();
    if common.iter().any(|&len| len == 0) || common.ndim() == 0 {
        return;
    }
    let begin = Position::zeros(common.ndim());
    let end = ArrayLayout::new(&common).end_position();
    let inc = Position::ones(common.ndim());
    let copied = src
        .into_subset(&begin, &end, &inc)
        .and_then(|from| dst.subset_mut(&begin, &end, &inc)?.assign(&from));
    debug_assert!(copied.is_ok(), "copying overlap {:?}: {:?}", common, copied);
}

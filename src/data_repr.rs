use alloc::rc::Rc;
use alloc::vec::Vec;

/// Array's representation.
///
/// *Don’t use this type directly; use the type alias
/// [`Array`](crate::Array) for the array type!*
// Like a Vec, but with non-unique ownership semantics: views of an owned
// array share the same reference counted block, and writing through one
// of them first makes its block unique.
#[derive(Debug)]
pub struct SharedRepr<A>(Rc<Vec<A>>);

impl<A> SharedRepr<A> {
    pub(crate) fn from(v: Vec<A>) -> Self {
        SharedRepr(Rc::new(v))
    }

    pub(crate) fn as_slice(&self) -> &[A] {
        &self.0
    }

    /// Return the number of storage slots (allocated elements).
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Return the number of arrays referencing this block.
    pub(crate) fn n_references(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub(crate) fn is_unique(&mut self) -> bool {
        Rc::get_mut(&mut self.0).is_some()
    }

    /// Return the block as a vector, if this is its only reference.
    pub(crate) fn try_into_vec(self) -> Result<Vec<A>, Self> {
        Rc::try_unwrap(self.0).map_err(SharedRepr)
    }
}

impl<A: Clone> SharedRepr<A> {
    /// Return the elements mutably, copying the block first if it is shared.
    pub(crate) fn make_mut(&mut self) -> &mut [A] {
        Rc::make_mut(&mut self.0).as_mut_slice()
    }
}

impl<A> Clone for SharedRepr<A> {
    fn clone(&self) -> Self {
        SharedRepr(Rc::clone(&self.0))
    }
}

/// Array view’s representation.
///
/// *Don’t use this type directly; use the type aliases
/// [`ArrayView`](crate::ArrayView) / [`ArrayViewMut`](crate::ArrayViewMut)
/// for the array type!*
#[derive(Copy, Clone, Debug)]
// This is just a marker type around the borrowed storage.
pub struct ViewRepr<A> {
    pub(crate) storage: A,
}

impl<A> ViewRepr<A> {
    #[inline(always)]
    pub(crate) fn new(storage: A) -> Self {
        ViewRepr { storage }
    }
}

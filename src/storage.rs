//! Contiguous access to the elements of a possibly strided array.

use alloc::vec::Vec;
use std::ops::{Deref, DerefMut};

use crate::{ArrayBase, DataMut};

/// The elements of an array as one contiguous mutable slice, in storage
/// order.
///
/// Created by [`ArrayBase::storage_mut`]. A contiguous array lends its own
/// elements. The elements of a strided array are copied into a buffer;
/// [`put`](Self::put) writes them back, and dropping the buffer without
/// `put` discards the changes.
#[must_use = "changes to copied elements are lost unless `put` is called"]
pub struct StorageMut<'a, S>
where
    S: DataMut,
{
    repr: StorageRepr<'a, S>,
}

enum StorageRepr<'a, S>
where
    S: DataMut,
{
    Lent(&'a mut [S::Elem]),
    Copied(&'a mut ArrayBase<S>, Vec<S::Elem>),
}

impl<'a, A, S> StorageMut<'a, S>
where
    S: DataMut<Elem = A>,
{
    pub(crate) fn new(array: &'a mut ArrayBase<S>) -> Self
    where
        A: Clone,
    {
        let repr = if array.is_contiguous() {
            StorageRepr::Lent(array.contiguous_slice_mut())
        } else {
            let buf = array.iter().cloned().collect();
            StorageRepr::Copied(array, buf)
        };
        StorageMut { repr }
    }

    /// Return `true` if the elements were copied out of the array.
    pub fn is_copy(&self) -> bool {
        matches!(self.repr, StorageRepr::Copied(..))
    }

    /// Write copied elements back into the array. Lent elements are
    /// already in place.
    pub fn put(self) {
        if let StorageRepr::Copied(array, buf) = self.repr {
            array.write_storage(buf);
        }
    }
}

impl<'a, S> Deref for StorageMut<'a, S>
where
    S: DataMut,
{
    type Target = [S::Elem];

    fn deref(&self) -> &[S::Elem] {
        match self.repr {
            StorageRepr::Lent(ref slc) => &slc[..],
            StorageRepr::Copied(_, ref buf) => &buf[..],
        }
    }
}

impl<'a, S> DerefMut for StorageMut<'a, S>
where
    S: DataMut,
{
    fn deref_mut(&mut self) -> &mut [S::Elem] {
        match self.repr {
            StorageRepr::Lent(ref mut slc) => &mut slc[..],
            StorageRepr::Copied(_, ref mut buf) => &mut buf[..],
        }
    }
}

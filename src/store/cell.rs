use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::foundation::error::TraceResult;
use crate::store::Store;

/// Typed handle to a cell of a [`Store`].
///
/// A handle carries no value; it only identifies a slot in the store that created it.
pub struct CellId<T> {
    pub(crate) index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CellId<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Position of the cell in its store, in creation order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for CellId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellId<T> {}

impl<T> PartialEq for CellId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for CellId<T> {}

impl<T> fmt::Debug for CellId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({})", self.index)
    }
}

/// The cells a derived cell is computed from.
///
/// Implemented for a single [`CellId`] and for tuples of them; the derive function receives the
/// matching [`Rc`] value or tuple of values.
pub trait Upstream: 'static {
    /// What the derive function receives.
    type Values;

    /// Store indices of the upstream cells.
    fn indices(&self) -> Vec<usize>;

    /// Current values of the upstream cells.
    fn read(&self, store: &Store) -> TraceResult<Self::Values>;
}

impl<T: 'static> Upstream for CellId<T> {
    type Values = Rc<T>;

    fn indices(&self) -> Vec<usize> {
        vec![self.index]
    }

    fn read(&self, store: &Store) -> TraceResult<Self::Values> {
        store.read(*self)
    }
}

macro_rules! impl_upstream_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: 'static),+> Upstream for ($(CellId<$name>,)+) {
            type Values = ($(Rc<$name>,)+);

            fn indices(&self) -> Vec<usize> {
                vec![$(self.$idx.index),+]
            }

            fn read(&self, store: &Store) -> TraceResult<Self::Values> {
                Ok(($(store.read(self.$idx)?,)+))
            }
        }
    };
}

impl_upstream_tuple!(A.0);
impl_upstream_tuple!(A.0, B.1);
impl_upstream_tuple!(A.0, B.1, C.2);
impl_upstream_tuple!(A.0, B.1, C.2, D.3);
impl_upstream_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_upstream_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);

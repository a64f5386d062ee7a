//! Reactive cell store.
//!
//! A [`Store`] owns an arena of cells. Mutable cells hold a value set with [`Store::write`];
//! derived cells compute their value from a fixed set of upstream cells and memoize it until an
//! ancestor changes. The dependency graph is fixed at creation time and must be acyclic, which
//! holds by construction because a derived cell can only name cells that already exist.
//!
//! A write runs one complete, synchronous propagation: every descendant's memo is cleared first,
//! then subscribers fire once each in depth-first preorder, so a callback never sees a stale
//! value anywhere downstream of the written cell.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::foundation::error::{TraceError, TraceResult};

/// Typed cell handles and upstream tuples.
pub mod cell;

pub use cell::{CellId, Upstream};

type Value = Rc<dyn Any>;
type Compute = Box<dyn Fn(&Store) -> TraceResult<Value>>;
type Callback = Box<dyn Fn(&Store) -> TraceResult<()>>;

enum Slot {
    Mutable {
        value: Value,
    },
    Derived {
        compute: Compute,
        memo: RefCell<Option<Value>>,
    },
}

struct Node {
    slot: Slot,
    children: Vec<usize>,
    callbacks: Vec<Callback>,
}

/// Arena of reactive cells. Cells live as long as the store.
#[derive(Default)]
pub struct Store {
    nodes: Vec<Node>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("cells", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no cell was created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a mutable cell holding `initial`.
    pub fn create_mutable<T: 'static>(&mut self, initial: T) -> CellId<T> {
        self.push(Slot::Mutable {
            value: Rc::new(initial),
        })
    }

    /// Add a cell computed by `derive` from the values of `upstream`.
    ///
    /// `derive` runs lazily on the first [`read`](Self::read) after creation or after an
    /// ancestor was written, never more than once in between. Errors it returns are propagated to
    /// the caller of `read` (or of the `write` whose callbacks triggered the read) and nothing is
    /// memoized for that attempt.
    pub fn derived<U, T, F>(&mut self, upstream: U, derive: F) -> TraceResult<CellId<T>>
    where
        U: Upstream,
        T: 'static,
        F: Fn(U::Values) -> TraceResult<T> + 'static,
    {
        let parents = upstream.indices();
        if let Some(&bad) = parents.iter().find(|&&p| p >= self.nodes.len()) {
            return Err(TraceError::store(format!(
                "upstream cell {bad} does not belong to this store"
            )));
        }
        let compute: Compute = Box::new(move |store: &Store| {
            let values = upstream.read(store)?;
            Ok(Rc::new(derive(values)?) as Value)
        });
        let id = self.push(Slot::Derived {
            compute,
            memo: RefCell::new(None),
        });
        for p in parents {
            let children = &mut self.nodes[p].children;
            if !children.contains(&id.index) {
                children.push(id.index);
            }
        }
        Ok(id)
    }

    /// Current value of `cell`, computing and memoizing it first for a stale derived cell.
    pub fn read<T: 'static>(&self, cell: CellId<T>) -> TraceResult<Rc<T>> {
        let value = match &self.node(cell.index)?.slot {
            Slot::Mutable { value } => value.clone(),
            Slot::Derived { compute, memo } => {
                let cached = memo.borrow().clone();
                match cached {
                    Some(value) => value,
                    None => {
                        let value = compute(self)?;
                        *memo.borrow_mut() = Some(value.clone());
                        value
                    }
                }
            }
        };
        value.downcast::<T>().map_err(|_| {
            TraceError::store(format!(
                "cell {} holds a value of a different type",
                cell.index
            ))
        })
    }

    /// Replace the value of a mutable cell and propagate the change.
    ///
    /// Writing a derived cell is a [`TraceError::Store`] error and changes nothing. The new
    /// value is committed before any callback runs; if a callback fails, the remaining callbacks
    /// are skipped and the error is returned.
    pub fn write<T: 'static>(&mut self, cell: CellId<T>, value: T) -> TraceResult<()> {
        match &mut self.node_mut(cell.index)?.slot {
            Slot::Mutable { value: slot } => {
                if !(**slot).is::<T>() {
                    return Err(TraceError::store(format!(
                        "cell {} holds a value of a different type",
                        cell.index
                    )));
                }
                *slot = Rc::new(value);
            }
            Slot::Derived { .. } => {
                return Err(TraceError::store(format!(
                    "cell {} is derived and cannot be written",
                    cell.index
                )));
            }
        }

        let order = self.descendants(cell.index);
        for &i in &order[1..] {
            if let Slot::Derived { memo, .. } = &self.nodes[i].slot {
                memo.borrow_mut().take();
            }
        }

        let this: &Store = self;
        let mut notified = 0usize;
        for &i in &order {
            for callback in &this.nodes[i].callbacks {
                callback(this)?;
                notified += 1;
            }
        }
        tracing::debug!(
            cell = cell.index,
            invalidated = order.len() - 1,
            notified,
            "store write propagated"
        );
        Ok(())
    }

    /// Call `callback` with the fresh value of `cell` after every write to it or to any of its
    /// ancestors.
    ///
    /// The callback also receives the store, so it may read other cells; all of them are
    /// already invalidated when it runs.
    pub fn subscribe<T, F>(&mut self, cell: CellId<T>, callback: F) -> TraceResult<()>
    where
        T: 'static,
        F: Fn(&Store, &T) + 'static,
    {
        let wrapped: Callback = Box::new(move |store: &Store| {
            let value = store.read(cell)?;
            callback(store, &value);
            Ok(())
        });
        self.node_mut(cell.index)?.callbacks.push(wrapped);
        Ok(())
    }

    fn push<T>(&mut self, slot: Slot) -> CellId<T> {
        self.nodes.push(Node {
            slot,
            children: Vec::new(),
            callbacks: Vec::new(),
        });
        CellId::new(self.nodes.len() - 1)
    }

    fn node(&self, index: usize) -> TraceResult<&Node> {
        self.nodes
            .get(index)
            .ok_or_else(|| TraceError::store(format!("cell {index} does not belong to this store")))
    }

    fn node_mut(&mut self, index: usize) -> TraceResult<&mut Node> {
        self.nodes
            .get_mut(index)
            .ok_or_else(|| TraceError::store(format!("cell {index} does not belong to this store")))
    }

    /// `start` followed by every cell reachable from it, depth-first preorder, each once.
    fn descendants(&self, start: usize) -> Vec<usize> {
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            order.push(i);
            stack.extend(self.nodes[i].children.iter().rev());
        }
        order
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/store.rs"]
mod tests;

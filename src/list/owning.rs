// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::cmp::Ordering;
use core::fmt;
use core::mem;

use alloc::boxed::Box;

use super::arena::{Arena, Iter, IterMut, SENTINEL};
use super::hooks::{CompareFn, DestroyFn};
use crate::error::ListError;

/// A circular doubly linked list with a sentinel node and owned hooks.
///
/// The list owns all node storage and, once [`add`] succeeds, the inserted
/// element as well. Ownership of an element moves back to the caller through
/// [`remove_at`]; everything still in the list when it is cleared, destroyed,
/// or dropped is consumed by the destroy hook. Insertion always happens at
/// the front, so the element at index 0 is the most recently added one.
///
/// The list is not internally synchronized. Accesses from multiple threads
/// have to be serialized by the caller.
///
/// # Examples
///
/// ```
/// use sentinel_list::list::SentinelList;
///
/// let mut list = SentinelList::builder()
///     .destroy_with(drop)
///     .compare_with(|a: &i32, b: &i32| a.cmp(b))
///     .build()?;
///
/// list.add(10)?;
/// list.add(20)?;
/// list.add(30)?;
///
/// assert_eq!(list.find_index(&20)?, Some(1));
/// assert_eq!(list.remove_at(1)?, 20);
/// assert_eq!(list.len(), 2);
/// # Ok::<(), sentinel_list::ListError>(())
/// ```
///
/// [`add`]: SentinelList::add
/// [`remove_at`]: SentinelList::remove_at
pub struct SentinelList<T> {
    arena: Arena<T>,
    len: usize,
    destroy_data: DestroyFn<T>,
    compare: CompareFn<T>,
    destroyed: bool,
}

impl<T> SentinelList<T> {
    /// Returns a builder collecting the hooks required to create a list.
    pub fn builder() -> Builder<T> {
        Builder::default()
    }

    /// Inserts `data` immediately after the sentinel, making it the new
    /// first element.
    ///
    /// The node is acquired before any link is rewired, so a failed
    /// allocation leaves the list unmodified.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn add(&mut self, data: T) -> Result<(), ListError> {
        self.ensure_live()?;

        let index = self.arena.acquire(data)?;
        self.arena.link_after(SENTINEL, index);
        self.len += 1;

        Ok(())
    }

    /// Provides a reference to the last element, or `None` if the list is
    /// empty or destroyed.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back(&self) -> Option<&T> {
        (!self.is_empty()).then(|| self.arena.data(self.arena.prev(SENTINEL)))
    }

    /// Provides a mutable reference to the last element, or `None` if the
    /// list is empty or destroyed.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        let index = self.arena.prev(SENTINEL);
        Some(self.arena.data_mut(index))
    }

    /// Removes all elements, passing each one to the destroy hook, and keeps
    /// the list usable.
    ///
    /// The chain is detached from the sentinel before the first hook runs.
    /// Should a hook panic, the elements released so far cannot be handed to
    /// a second teardown; the remaining ones are dropped without the hook
    /// when the list goes out of scope.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) -> Result<(), ListError> {
        self.ensure_live()?;

        let mut current = self.arena.detach();
        self.len = 0;

        while current != SENTINEL {
            let next = self.arena.next(current);
            let data = self.arena.release(current);
            (self.destroy_data)(data);
            current = next;
        }

        Ok(())
    }

    /// Returns `true` if the comparator reports equality for any element.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn contains(&self, data: &T) -> Result<bool, ListError> {
        Ok(self.find_index(data)?.is_some())
    }

    /// Tears the list down: every remaining element is passed to the destroy
    /// hook, the node storage including the sentinel is released, and the
    /// list transitions into its terminal destroyed state.
    ///
    /// Calling `destroy` again is a no-op, and dropping a destroyed list
    /// releases nothing twice. Each element is consumed by the hook exactly
    /// once across any combination of `destroy` and drop.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        // Flip the state and take the storage out before running any hook.
        // If a hook panics, the drop handler finds the list already
        // destroyed and does not tear it down a second time.
        self.destroyed = true;
        self.len = 0;

        let mut arena = mem::replace(&mut self.arena, Arena::empty());
        let mut current = arena.next(SENTINEL);

        while current != SENTINEL {
            let next = arena.next(current);
            let data = arena.release(current);
            (self.destroy_data)(data);
            current = next;
        }
    }

    fn ensure_live(&self) -> Result<(), ListError> {
        if self.destroyed {
            Err(ListError::InvalidState)
        } else {
            Ok(())
        }
    }

    /// Walks from the front and returns the index of the first element for
    /// which the comparator reports [`Ordering::Equal`], or `Ok(None)` if
    /// there is no match.
    ///
    /// Index 0 is the most recently added element. A missing match is not an
    /// error; only calling this on a destroyed list is.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn find_index(&self, data: &T) -> Result<Option<usize>, ListError> {
        self.ensure_live()?;

        let mut current = self.arena.next(SENTINEL);
        let mut index = 0;

        while current != SENTINEL {
            if (self.compare)(self.arena.data(current), data) == Ordering::Equal {
                return Ok(Some(index));
            }

            current = self.arena.next(current);
            index += 1;
        }

        Ok(None)
    }

    /// Provides a reference to the first element, or `None` if the list is
    /// empty or destroyed.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        (!self.is_empty()).then(|| self.arena.data(self.arena.next(SENTINEL)))
    }

    /// Provides a mutable reference to the first element, or `None` if the
    /// list is empty or destroyed.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        let index = self.arena.next(SENTINEL);
        Some(self.arena.data_mut(index))
    }

    /// Returns `true` if the list holds no elements.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator yielding references to each element of the list,
    /// front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        if self.destroyed {
            return Iter::new(&self.arena, SENTINEL, SENTINEL);
        }

        Iter::new(
            &self.arena,
            self.arena.next(SENTINEL),
            self.arena.prev(SENTINEL),
        )
    }

    /// Returns an iterator yielding mutable references to each element of
    /// the list, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        if self.destroyed {
            return IterMut::new(&mut self.arena, SENTINEL, SENTINEL);
        }

        let front = self.arena.next(SENTINEL);
        let back = self.arena.prev(SENTINEL);
        IterMut::new(&mut self.arena, front, back)
    }

    /// Returns the number of elements in the list, excluding the sentinel.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes the element at `index` and returns its data.
    ///
    /// The walk starts at the sentinel's successor and takes `index` steps,
    /// so this computes in *O*(`index`) time. Ownership of the data moves
    /// back to the caller; the destroy hook is not invoked. The freed node
    /// slot is kept for reuse by a later [`add`].
    ///
    /// [`add`]: SentinelList::add
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.ensure_live()?;

        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let mut current = self.arena.next(SENTINEL);
        for _ in 0..index {
            current = self.arena.next(current);
        }

        self.len -= 1;
        Ok(self.arena.unlink(current))
    }
}

impl<T: Ord + 'static> SentinelList<T> {
    /// Creates a list for an ordered type, comparing with [`Ord::cmp`] and
    /// simply dropping elements on teardown.
    pub fn ordered() -> Result<Self, ListError> {
        Self::builder()
            .destroy_with(drop)
            .compare_with(T::cmp)
            .build()
    }
}

impl<T: fmt::Debug> fmt::Debug for SentinelList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for SentinelList<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Builder collecting the hooks required by [`SentinelList`].
///
/// Both hooks are mandatory; [`build`] validates them before any storage is
/// reserved.
///
/// [`build`]: Builder::build
pub struct Builder<T> {
    destroy_data: Option<DestroyFn<T>>,
    compare: Option<CompareFn<T>>,
}

impl<T> Builder<T> {
    /// Sets the hook that consumes elements on teardown.
    pub fn destroy_with<F>(mut self, hook: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        self.destroy_data = Some(Box::new(hook));
        self
    }

    /// Sets the three-way comparator used by the search operations.
    pub fn compare_with<F>(mut self, hook: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.compare = Some(Box::new(hook));
        self
    }

    /// Validates the hooks and creates the list with its sentinel.
    ///
    /// Fails with [`ListError::InvalidArgument`] if either hook is missing.
    /// The check precedes the storage reservation, so nothing has been
    /// allocated for the list when it fails. An exhausted allocator is
    /// reported as [`ListError::AllocationError`], likewise without leaving
    /// a partially constructed list behind.
    pub fn build(self) -> Result<SentinelList<T>, ListError> {
        let destroy_data = self.destroy_data.ok_or(ListError::InvalidArgument)?;
        let compare = self.compare.ok_or(ListError::InvalidArgument)?;
        let arena = Arena::new()?;

        Ok(SentinelList {
            arena,
            len: 0,
            destroy_data,
            compare,
            destroyed: false,
        })
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self {
            destroy_data: None,
            compare: None,
        }
    }
}

use core::cmp::Ordering;
use core::marker::PhantomData;

use compare::Compare;

use super::arena::Arena;
use super::entry::Entry;
use super::handle::Handle;
use super::link::{LinkStore, LinkStoreMut, Links, Slot};
use crate::side::Side;

/// Read-only view of the tree of side `S`: its header plus the `S` links of every entry.
pub(crate) struct Tree<'a, L, R, S> {
    header: &'a Links,
    entries: &'a Arena<Entry<L, R>>,
    side: PhantomData<S>,
}

/// Mutable view of the tree of side `S`.
///
/// Only the `S` links of entries are touched; keys are read to order insertions.
pub(crate) struct TreeMut<'a, L, R, S> {
    header: &'a mut Links,
    entries: &'a mut Arena<Entry<L, R>>,
    side: PhantomData<S>,
}

impl<L, R, S> Clone for Tree<'_, L, R, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, R, S> Copy for Tree<'_, L, R, S> {}

impl<'a, L, R, S: Side> Tree<'a, L, R, S> {
    pub(crate) const fn new(header: &'a Links, entries: &'a Arena<Entry<L, R>>) -> Self {
        Self {
            header,
            entries,
            side: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn key(&self, handle: Handle) -> &'a S::Key<L, R> {
        self.entries.get(handle).key::<S>()
    }

    /// Standard descent; the header when no resident key is equivalent to `key`.
    pub(crate) fn find<C>(&self, cmp: &C, key: &S::Key<L, R>) -> Slot
    where
        C: Compare<S::Key<L, R>>,
    {
        let mut current = self.root();
        while let Some(node) = current {
            let links = self.links(Slot::Entry(node));
            current = match cmp.compare(key, self.key(node)) {
                Ordering::Less => links.left,
                Ordering::Greater => links.right,
                Ordering::Equal => return Slot::Entry(node),
            };
        }
        Slot::Header
    }

    /// The first entry whose key is not less than `key`.
    pub(crate) fn lower_bound<C>(&self, cmp: &C, key: &S::Key<L, R>) -> Slot
    where
        C: Compare<S::Key<L, R>>,
    {
        let mut candidate = Slot::Header;
        let mut current = self.root();
        while let Some(node) = current {
            let links = self.links(Slot::Entry(node));
            if cmp.compares_lt(self.key(node), key) {
                current = links.right;
            } else {
                candidate = Slot::Entry(node);
                current = links.left;
            }
        }
        candidate
    }

    /// The first entry whose key is greater than `key`.
    pub(crate) fn upper_bound<C>(&self, cmp: &C, key: &S::Key<L, R>) -> Slot
    where
        C: Compare<S::Key<L, R>>,
    {
        let mut candidate = Slot::Header;
        let mut current = self.root();
        while let Some(node) = current {
            let links = self.links(Slot::Entry(node));
            if cmp.compares_lt(key, self.key(node)) {
                candidate = Slot::Entry(node);
                current = links.left;
            } else {
                current = links.right;
            }
        }
        candidate
    }
}

impl<L, R, S: Side> LinkStore for Tree<'_, L, R, S> {
    #[inline]
    fn links(&self, slot: Slot) -> &Links {
        match slot {
            Slot::Header => self.header,
            Slot::Entry(handle) => self.entries.get(handle).links::<S>(),
        }
    }
}

impl<'a, L, R, S: Side> TreeMut<'a, L, R, S> {
    pub(crate) fn new(header: &'a mut Links, entries: &'a mut Arena<Entry<L, R>>) -> Self {
        Self {
            header,
            entries,
            side: PhantomData,
        }
    }

    /// Attaches a detached entry where its key belongs.
    ///
    /// Returns `false` and leaves the tree untouched if an equivalent key is already
    /// resident; callers check uniqueness beforehand.
    pub(crate) fn insert<C>(&mut self, cmp: &C, handle: Handle) -> bool
    where
        C: Compare<S::Key<L, R>>,
    {
        let Some(mut current) = self.root() else {
            self.link_left(Slot::Header, Some(handle));
            return true;
        };

        loop {
            let ordering = cmp.compare(self.entries.get(handle).key::<S>(), self.entries.get(current).key::<S>());
            let links = *self.links(Slot::Entry(current));
            match ordering {
                Ordering::Less => match links.left {
                    Some(left) => current = left,
                    None => {
                        self.link_left(Slot::Entry(current), Some(handle));
                        return true;
                    }
                },
                Ordering::Greater => match links.right {
                    Some(right) => current = right,
                    None => {
                        self.link_right(Slot::Entry(current), Some(handle));
                        return true;
                    }
                },
                Ordering::Equal => return false,
            }
        }
    }

    /// Unlinks an entry and returns the position that followed it.
    pub(crate) fn erase(&mut self, handle: Handle) -> Slot {
        let next = self.next(Slot::Entry(handle));
        self.unlink(handle);
        next
    }
}

impl<L, R, S: Side> LinkStore for TreeMut<'_, L, R, S> {
    #[inline]
    fn links(&self, slot: Slot) -> &Links {
        match slot {
            Slot::Header => &*self.header,
            Slot::Entry(handle) => self.entries.get(handle).links::<S>(),
        }
    }
}

impl<L, R, S: Side> LinkStoreMut for TreeMut<'_, L, R, S> {
    #[inline]
    fn links_mut(&mut self, slot: Slot) -> &mut Links {
        match slot {
            Slot::Header => &mut *self.header,
            Slot::Entry(handle) => self.entries.get_mut(handle).links_mut::<S>(),
        }
    }
}

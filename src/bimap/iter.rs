use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::raw::{LinkStore, RawBiMap, Slot};
use crate::side::Side;

/// An iterator over the pairs of a `BiMap`, in the order of side `S`.
///
/// Items are `(key, value)` where `key` is the `S` side of the pair and `value` the
/// opposite side.
///
/// This `struct` is created by the [`iter_left`] and [`iter_right`] methods on
/// [`BiMap`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use twin_tree::BiMap;
///
/// let map = BiMap::from([(1, 'b'), (2, 'a')]);
/// let mut iter = map.iter_right();
/// assert_eq!(iter.next(), Some((&'a', &2)));
/// assert_eq!(iter.next_back(), Some((&'b', &1)));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`BiMap`]: super::BiMap
/// [`iter_left`]: super::BiMap::iter_left
/// [`iter_right`]: super::BiMap::iter_right
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, L, R, S> {
    raw: &'a RawBiMap<L, R>,
    front: Slot,
    back: Slot,
    remaining: usize,
    side: PhantomData<S>,
}

impl<'a, L, R, S: Side> Iter<'a, L, R, S> {
    pub(crate) fn new(raw: &'a RawBiMap<L, R>) -> Self {
        let tree = raw.tree::<S>();
        Self {
            raw,
            front: tree.first(),
            back: tree.last(),
            remaining: raw.len(),
            side: PhantomData,
        }
    }
}

impl<'a, L, R, S: Side> Iterator for Iter<'a, L, R, S> {
    type Item = (&'a S::Key<L, R>, &'a <S::Other as Side>::Key<L, R>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.entry()?;
        let raw = self.raw;
        self.front = raw.tree::<S>().next(self.front);
        self.remaining -= 1;

        let entry = raw.entry(handle);
        Some((entry.key::<S>(), entry.value::<S>()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R, S: Side> DoubleEndedIterator for Iter<'_, L, R, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.entry()?;
        let raw = self.raw;
        self.back = raw.tree::<S>().prev(self.back);
        self.remaining -= 1;

        let entry = raw.entry(handle);
        Some((entry.key::<S>(), entry.value::<S>()))
    }
}

impl<L, R, S: Side> ExactSizeIterator for Iter<'_, L, R, S> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<L, R, S: Side> FusedIterator for Iter<'_, L, R, S> {}

impl<L, R, S> Clone for Iter<'_, L, R, S> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            side: PhantomData,
        }
    }
}

impl<L, R, S: Side> fmt::Debug for Iter<'_, L, R, S>
where
    S::Key<L, R>: fmt::Debug,
    <S::Other as Side>::Key<L, R>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the pairs of a `BiMap`, in left order.
///
/// This `struct` is created by the [`into_iter`] method on [`BiMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
///
/// ```
/// use twin_tree::BiMap;
///
/// let map = BiMap::from([(2, "b"), (1, "a")]);
/// let mut iter = map.into_iter();
/// assert_eq!(iter.next(), Some((1, "a")));
/// assert_eq!(iter.next_back(), Some((2, "b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`BiMap`]: super::BiMap
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<L, R> {
    inner: alloc::vec::IntoIter<(L, R)>,
}

impl<L, R> IntoIter<L, R> {
    pub(crate) fn new(pairs: alloc::vec::Vec<(L, R)>) -> Self {
        Self {
            inner: pairs.into_iter(),
        }
    }
}

impl<L, R> Iterator for IntoIter<L, R> {
    type Item = (L, R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for IntoIter<L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<L, R> ExactSizeIterator for IntoIter<L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<L, R> FusedIterator for IntoIter<L, R> {}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for IntoIter<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<L, R> Default for IntoIter<L, R> {
    /// Creates an empty `bimap::IntoIter`.
    ///
    /// ```
    /// # use twin_tree::bimap;
    /// let iter: bimap::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

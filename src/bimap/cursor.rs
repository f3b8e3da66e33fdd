use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::raw::{LinkStore, RawBiMap, Slot};
use crate::side::{Left, Right, Side};

/// A detached position in the `S`-ordered tree of a [`BiMap`](super::BiMap).
///
/// A position does not borrow the map, so it can be kept across mutations and handed to
/// the `erase_*_at` methods. It stays valid until the pair it points at is erased; the end
/// position is always valid. Using a position with a map it was not obtained from, or
/// after its pair was erased, is a logic error: the results are unspecified (and may panic)
/// but are never undefined behavior.
///
/// # Examples
///
/// ```
/// use twin_tree::BiMap;
///
/// let mut map = BiMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
/// let two = map.find_left(&2).position();
///
/// // Positions survive unrelated mutations.
/// map.erase_left(&1);
/// map.insert(0, 'z').unwrap();
/// assert_eq!(map.cursor_left(two).value(), Some(&'b'));
///
/// // And flip to the right side without touching the map.
/// assert_eq!(map.cursor_right(two.flip()).key(), Some(&'b'));
/// ```
pub struct Position<S> {
    slot: Slot,
    side: PhantomData<S>,
}

/// A [`Position`] in the left-ordered tree.
pub type LeftPosition = Position<Left>;

/// A [`Position`] in the right-ordered tree.
pub type RightPosition = Position<Right>;

impl<S: Side> Position<S> {
    pub(crate) const fn new(slot: Slot) -> Self {
        Self { slot, side: PhantomData }
    }

    pub(crate) const fn slot(self) -> Slot {
        self.slot
    }

    /// Returns `true` if this is the end position (one past the last pair).
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self.slot, Slot::Header)
    }

    /// Returns the position of the same pair in the opposite tree.
    ///
    /// The end position flips to the opposite end position.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn flip(self) -> Position<S::Other> {
        Position::new(self.slot)
    }
}

impl<S> Clone for Position<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Position<S> {}

impl<S> PartialEq for Position<S> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<S> Eq for Position<S> {}

impl<S> Hash for Position<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<S: Side> fmt::Debug for Position<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Slot::Header => write!(f, "Position<{:?}>(end)", S::default()),
            Slot::Entry(handle) => write!(f, "Position<{:?}>({})", S::default(), handle.to_index()),
        }
    }
}

/// A read-only cursor over the `S`-ordered tree of a [`BiMap`](super::BiMap).
///
/// A cursor points either at a pair or at the end position ("ghost" element) that sits
/// between the last pair and the first one. Moving forward from the end wraps to the first
/// pair and moving backward from it wraps to the last one.
///
/// This `struct` is created by methods such as [`find_left`](super::BiMap::find_left),
/// [`lower_bound_right`](super::BiMap::lower_bound_right) or
/// [`begin_left`](super::BiMap::begin_left).
///
/// # Examples
///
/// ```
/// use twin_tree::BiMap;
///
/// let map = BiMap::from([(1, "one"), (2, "two"), (3, "three")]);
///
/// let mut cursor = map.begin_right();
/// assert_eq!(cursor.key(), Some(&"one"));
/// cursor.move_next();
/// assert_eq!(cursor.key(), Some(&"three"));
/// assert_eq!(cursor.value(), Some(&3));
///
/// // Same pair, left side: its neighbour is ordered by the left key.
/// let mut flipped = cursor.flip();
/// flipped.move_prev();
/// assert_eq!(flipped.key(), Some(&2));
/// ```
pub struct Cursor<'a, L, R, S> {
    raw: &'a RawBiMap<L, R>,
    slot: Slot,
    side: PhantomData<S>,
}

impl<'a, L, R, S: Side> Cursor<'a, L, R, S> {
    pub(crate) const fn new(raw: &'a RawBiMap<L, R>, slot: Slot) -> Self {
        Self {
            raw,
            slot,
            side: PhantomData,
        }
    }

    /// Returns the detached [`Position`] of this cursor.
    #[must_use]
    pub const fn position(&self) -> Position<S> {
        Position::new(self.slot)
    }

    /// Returns `true` if the cursor is at the end position.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.slot, Slot::Header)
    }

    /// Returns the key on side `S` of the current pair, or `None` at the end position.
    #[must_use]
    pub fn key(&self) -> Option<&'a S::Key<L, R>> {
        let raw = self.raw;
        self.slot.entry().map(|handle| raw.entry(handle).key::<S>())
    }

    /// Returns the key on the opposite side of the current pair, i.e. the value `key`
    /// maps to, or `None` at the end position.
    #[must_use]
    pub fn value(&self) -> Option<&'a <S::Other as Side>::Key<L, R>> {
        let raw = self.raw;
        self.slot.entry().map(|handle| raw.entry(handle).value::<S>())
    }

    /// Returns the current pair in `(left, right)` order, or `None` at the end position.
    #[must_use]
    pub fn pair(&self) -> Option<(&'a L, &'a R)> {
        let raw = self.raw;
        self.slot.entry().map(|handle| raw.entry(handle).pair())
    }

    /// Moves to the next pair in `S` order.
    ///
    /// # Complexity
    ///
    /// O(h), amortized O(1) over a full traversal.
    pub fn move_next(&mut self) {
        self.slot = self.raw.tree::<S>().next(self.slot);
    }

    /// Moves to the previous pair in `S` order.
    ///
    /// # Complexity
    ///
    /// O(h), amortized O(1) over a full traversal.
    pub fn move_prev(&mut self) {
        self.slot = self.raw.tree::<S>().prev(self.slot);
    }

    /// Returns a cursor at the same pair in the opposite tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn flip(&self) -> Cursor<'a, L, R, S::Other> {
        Cursor::new(self.raw, self.slot)
    }
}

impl<L, R, S> Clone for Cursor<'_, L, R, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, R, S> Copy for Cursor<'_, L, R, S> {}

impl<L, R, S> PartialEq for Cursor<'_, L, R, S> {
    /// Cursors are equal when they point at the same position of the same map.
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.raw, other.raw) && self.slot == other.slot
    }
}

impl<L, R, S> Eq for Cursor<'_, L, R, S> {}

impl<L: fmt::Debug, R: fmt::Debug, S: Side> fmt::Debug for Cursor<'_, L, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("side", &S::default()).field("pair", &self.pair()).finish()
    }
}

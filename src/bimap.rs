//! An ordered one-to-one map, navigable from either side.

use core::fmt;
use core::hash::{Hash, Hasher};

use compare::{Compare, Natural};

use crate::error::{InsertError, NotFound};
use crate::raw::{LinkStore, RawBiMap, Slot};
use crate::side::{Left, Right};

mod capacity;
mod cursor;
mod iter;
mod or_default;

pub use cursor::{Cursor, LeftPosition, Position, RightPosition};
pub use iter::{IntoIter, Iter};

/// An ordered one-to-one map between a left domain `L` and a right domain `R`.
///
/// Every pair `(l, r)` is stored once and can be reached from either side: the map keeps
/// one binary search tree ordered by the left values and another ordered by the right
/// values, and both trees share the same entries. A left value appears in at most one pair,
/// and so does a right value, so [`at_left`] and [`at_right`] are inverse functions.
///
/// Each side is ordered by its own comparator (`CL` for left values, `CR` for right values),
/// any [`compare::Compare`] implementation. [`BiMap::new`] uses the natural [`Ord`] order of
/// both sides; [`BiMap::with_cmp`] takes custom comparators such as closures or
/// `compare::natural().rev()`.
///
/// Positions are addressed through [`Cursor`]s, which borrow the map, and [`Position`]s,
/// which do not. A position keeps pointing at its pair across every mutation other than the
/// erasure of that pair, and [`Position::flip`] moves it to the same pair in the other tree
/// in constant time.
///
/// It is a logic error for a value to be modified in such a way that its ordering relative
/// to any other value on the same side, as determined by the side's comparator, changes
/// while it is in the map. This is normally only possible through [`Cell`], [`RefCell`],
/// global state, I/O, or unsafe code. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `BiMap` that observed the logic error and not
/// result in undefined behavior.
///
/// # Examples
///
/// ```
/// use twin_tree::{BiMap, Conflict};
///
/// // type inference lets us omit an explicit type signature (which
/// // would be `BiMap<&str, char>` in this example).
/// let mut symbols = BiMap::new();
///
/// symbols.insert("alpha", 'α').unwrap();
/// symbols.insert("beta", 'β').unwrap();
/// symbols.insert("gamma", 'γ').unwrap();
///
/// // look up either direction.
/// assert_eq!(symbols.at_left(&"beta"), Ok(&'β'));
/// assert_eq!(symbols.at_right(&'γ'), Ok(&"gamma"));
///
/// // a value can only be used once on its side.
/// let err = symbols.insert("delta", 'α').unwrap_err();
/// assert_eq!(err.conflict, Conflict::Right);
///
/// // erase through the right side.
/// assert!(symbols.erase_right(&'α'));
/// assert!(!symbols.contains_left(&"alpha"));
///
/// // iterate in left order, or in right order.
/// for (name, symbol) in &symbols {
///     println!("{name}: {symbol}");
/// }
/// for (symbol, name) in symbols.iter_right() {
///     println!("{symbol}: {name}");
/// }
/// ```
///
/// A `BiMap` with a known list of pairs can be initialized from an array:
///
/// ```
/// use twin_tree::BiMap;
///
/// let codes = BiMap::from([
///     ("Austria", 43),
///     ("Belgium", 32),
///     ("Canada", 1),
/// ]);
/// assert_eq!(codes.begin_right().value(), Some(&"Canada"));
/// ```
///
/// # Background
///
/// Both trees are plain binary search trees without rebalancing. Lookups, insertions and
/// erasures take O(h) where h is the height of the tree being searched: O(log n) on average
/// for keys arriving in random order, O(n) when keys arrive sorted. Entries live in a single
/// arena and each one carries two independent sets of tree links, so the map needs no
/// storage beyond one entry per pair.
///
/// [`at_left`]: BiMap::at_left
/// [`at_right`]: BiMap::at_right
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct BiMap<L, R, CL = Natural<L>, CR = Natural<R>> {
    raw: RawBiMap<L, R>,
    cmp_left: CL,
    cmp_right: CR,
}

impl<L: Ord, R: Ord> BiMap<L, R> {
    /// Makes a new, empty `BiMap` ordered by the natural order of both sides.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut map = BiMap::new();
    ///
    /// // pairs can now be inserted into the empty map
    /// map.insert(1, "a").unwrap();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        BiMap::with_cmp(compare::natural(), compare::natural())
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Makes a new, empty `BiMap` ordered by the given comparators.
    ///
    /// Each comparator must define a total order over its side.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::Compare;
    /// use twin_tree::BiMap;
    ///
    /// // left values in descending order, right values case-insensitively.
    /// let mut map = BiMap::with_cmp(
    ///     compare::natural().rev(),
    ///     |a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase()),
    /// );
    /// map.insert(1, "Apple").unwrap();
    /// map.insert(2, "banana").unwrap();
    ///
    /// assert_eq!(map.begin_left().key(), Some(&2));
    /// assert!(map.insert(3, "APPLE").is_err());
    /// ```
    pub const fn with_cmp(cmp_left: CL, cmp_right: CR) -> Self {
        BiMap {
            raw: RawBiMap::new(),
            cmp_left,
            cmp_right,
        }
    }

    /// Returns a reference to the comparator ordering the left side.
    #[must_use]
    pub const fn left_cmp(&self) -> &CL {
        &self.cmp_left
    }

    /// Returns a reference to the comparator ordering the right side.
    #[must_use]
    pub const fn right_cmp(&self) -> &CR {
        &self.cmp_right
    }

    /// Returns the number of pairs in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut a = BiMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a").unwrap();
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no pairs.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, dropping every pair.
    ///
    /// Positions obtained before the call are invalidated.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut a = BiMap::new();
    /// a.insert(1, "a").unwrap();
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert!(a.begin_left().is_end());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Exchanges the contents (and comparators) of two maps.
    ///
    /// Positions keep referring to their pairs, which now live in the other map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut a = BiMap::from([(1, 'a')]);
    /// let mut b = BiMap::from([(2, 'b'), (3, 'c')]);
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(b.at_left(&1), Ok(&'a'));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns a cursor at the pair with the smallest left value, or at the left end if the
    /// map is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn begin_left(&self) -> Cursor<'_, L, R, Left> {
        Cursor::new(&self.raw, self.raw.tree::<Left>().first())
    }

    /// Returns a cursor at the pair with the smallest right value, or at the right end if
    /// the map is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn begin_right(&self) -> Cursor<'_, L, R, Right> {
        Cursor::new(&self.raw, self.raw.tree::<Right>().first())
    }

    /// Returns a cursor at the end position of the left tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn end_left(&self) -> Cursor<'_, L, R, Left> {
        Cursor::new(&self.raw, Slot::Header)
    }

    /// Returns a cursor at the end position of the right tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn end_right(&self) -> Cursor<'_, L, R, Right> {
        Cursor::new(&self.raw, Slot::Header)
    }

    /// Turns a detached left position back into a cursor over this map.
    ///
    /// # Panics
    ///
    /// May panic if `position` was not obtained from this map or its pair has been erased.
    #[must_use]
    pub const fn cursor_left(&self, position: LeftPosition) -> Cursor<'_, L, R, Left> {
        Cursor::new(&self.raw, position.slot())
    }

    /// Turns a detached right position back into a cursor over this map.
    ///
    /// # Panics
    ///
    /// May panic if `position` was not obtained from this map or its pair has been erased.
    #[must_use]
    pub const fn cursor_right(&self, position: RightPosition) -> Cursor<'_, L, R, Right> {
        Cursor::new(&self.raw, position.slot())
    }

    /// Gets an iterator over the pairs of the map in left order.
    ///
    /// Same as [`iter_left`](BiMap::iter_left); this is the iterator `&BiMap` turns into.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(2, 'x'), (1, 'y')]);
    /// assert_eq!(map.iter().next(), Some((&1, &'y')));
    /// ```
    pub fn iter(&self) -> Iter<'_, L, R, Left> {
        self.iter_left()
    }

    /// Gets an iterator over the pairs of the map in left order, as `(left, right)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(3, 'a'), (1, 'c'), (2, 'b')]);
    /// let lefts: Vec<_> = map.iter_left().map(|(l, _)| *l).collect();
    /// assert_eq!(lefts, [1, 2, 3]);
    /// ```
    pub fn iter_left(&self) -> Iter<'_, L, R, Left> {
        Iter::new(&self.raw)
    }

    /// Gets an iterator over the pairs of the map in right order, as `(right, left)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(3, 'a'), (1, 'c'), (2, 'b')]);
    /// let pairs: Vec<_> = map.iter_right().collect();
    /// assert_eq!(pairs, [(&'a', &3), (&'b', &2), (&'c', &1)]);
    /// ```
    pub fn iter_right(&self) -> Iter<'_, L, R, Right> {
        Iter::new(&self.raw)
    }

    /// Erases the pair at a left position and returns the left position that followed it.
    ///
    /// Erasing the end position does nothing and returns the end position. Only positions
    /// of the erased pair are invalidated.
    ///
    /// # Panics
    ///
    /// May panic if `position` was not obtained from this map or its pair has been erased.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut map = BiMap::from([(1, "a"), (2, "b")]);
    /// let one = map.find_left(&1).position();
    /// let next = map.erase_left_at(one);
    /// assert_eq!(map.cursor_left(next).key(), Some(&2));
    /// assert!(map.find_right(&"a").is_end());
    /// ```
    pub fn erase_left_at(&mut self, position: LeftPosition) -> LeftPosition {
        Position::new(self.raw.erase_at::<Left>(position.slot()))
    }

    /// Erases the pair at a right position and returns the right position that followed it.
    ///
    /// See [`erase_left_at`](BiMap::erase_left_at).
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn erase_right_at(&mut self, position: RightPosition) -> RightPosition {
        Position::new(self.raw.erase_at::<Right>(position.slot()))
    }

    /// Erases the pairs in the left range `[first, last)`.
    ///
    /// Erasure walks forward in left order from `first` and stops at `last` or at the end
    /// position, whichever comes first. Returns where it stopped: `last` when it was
    /// reachable from `first`, the end position otherwise (for instance when `last`
    /// precedes `first`, in which case everything from `first` onwards is erased).
    ///
    /// # Complexity
    ///
    /// O(k * h) for k erased pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut map: BiMap<i32, i32> = (0..6).map(|i| (i, -i)).collect();
    /// let first = map.find_left(&1).position();
    /// let last = map.find_left(&4).position();
    /// map.erase_left_range(first, last);
    /// assert_eq!(map.iter_left().map(|(l, _)| *l).collect::<Vec<_>>(), [0, 4, 5]);
    /// ```
    pub fn erase_left_range(&mut self, first: LeftPosition, last: LeftPosition) -> LeftPosition {
        Position::new(self.raw.erase_range::<Left>(first.slot(), last.slot()))
    }

    /// Erases the pairs in the right range `[first, last)`.
    ///
    /// Stops at `last` or at the end position, whichever comes first, and returns where it
    /// stopped. See [`erase_left_range`](BiMap::erase_left_range).
    pub fn erase_right_range(&mut self, first: RightPosition, last: RightPosition) -> RightPosition {
        Position::new(self.raw.erase_range::<Right>(first.slot(), last.slot()))
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Inserts a pair into the map.
    ///
    /// The pair is rejected if `left` is already a left value or `right` is already a right
    /// value; the error reports which side(s) conflicted and hands both values back.
    /// Otherwise returns the left position of the new pair.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError`] when either value is already present on its side.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::{BiMap, Conflict};
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, "a").unwrap();
    /// map.insert(2, "b").unwrap();
    ///
    /// let err = map.insert(1, "c").unwrap_err();
    /// assert_eq!(err.conflict, Conflict::Left);
    /// assert_eq!(err.into_pair(), (1, "c"));
    /// assert_eq!(map.len(), 2);
    ///
    /// let position = map.insert(3, "c").unwrap();
    /// assert_eq!(map.cursor_left(position).value(), Some(&"c"));
    /// ```
    pub fn insert(&mut self, left: L, right: R) -> Result<LeftPosition, InsertError<L, R>> {
        let handle = self.raw.insert(left, right, &self.cmp_left, &self.cmp_right)?;
        Ok(Position::new(Slot::Entry(handle)))
    }

    /// Erases the pair with the given left value. Returns whether a pair was erased.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut map = BiMap::from([(1, "a")]);
    /// assert!(map.erase_left(&1));
    /// assert!(!map.erase_left(&1));
    /// assert!(map.is_empty());
    /// ```
    pub fn erase_left(&mut self, left: &L) -> bool {
        self.remove_left(left).is_some()
    }

    /// Erases the pair with the given right value. Returns whether a pair was erased.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn erase_right(&mut self, right: &R) -> bool {
        self.remove_right(right).is_some()
    }

    /// Removes the pair with the given left value and returns it.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let mut map = BiMap::from([(1, "a")]);
    /// assert_eq!(map.remove_left(&1), Some((1, "a")));
    /// assert_eq!(map.remove_left(&1), None);
    /// ```
    pub fn remove_left(&mut self, left: &L) -> Option<(L, R)> {
        let handle = self.raw.tree::<Left>().find(&self.cmp_left, left).entry()?;
        Some(self.raw.remove(handle))
    }

    /// Removes the pair with the given right value and returns it as `(left, right)`.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove_right(&mut self, right: &R) -> Option<(L, R)> {
        let handle = self.raw.tree::<Right>().find(&self.cmp_right, right).entry()?;
        Some(self.raw.remove(handle))
    }

    /// Returns a cursor at the pair with the given left value, or the left end if there is
    /// none.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.find_left(&2).value(), Some(&"b"));
    /// assert!(map.find_left(&3).is_end());
    /// ```
    #[must_use]
    pub fn find_left(&self, left: &L) -> Cursor<'_, L, R, Left> {
        Cursor::new(&self.raw, self.raw.tree::<Left>().find(&self.cmp_left, left))
    }

    /// Returns a cursor at the pair with the given right value, or the right end if there
    /// is none.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn find_right(&self, right: &R) -> Cursor<'_, L, R, Right> {
        Cursor::new(&self.raw, self.raw.tree::<Right>().find(&self.cmp_right, right))
    }

    /// Returns `true` if some pair has the given left value.
    #[must_use]
    pub fn contains_left(&self, left: &L) -> bool {
        !self.find_left(left).is_end()
    }

    /// Returns `true` if some pair has the given right value.
    #[must_use]
    pub fn contains_right(&self, right: &R) -> bool {
        !self.find_right(right).is_end()
    }

    /// Returns the right value paired with `left`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(1, "a")]);
    /// assert_eq!(map.get_left(&1), Some(&"a"));
    /// assert_eq!(map.get_left(&2), None);
    /// ```
    #[must_use]
    pub fn get_left(&self, left: &L) -> Option<&R> {
        self.find_left(left).value()
    }

    /// Returns the left value paired with `right`, if any.
    #[must_use]
    pub fn get_right(&self, right: &R) -> Option<&L> {
        self.find_right(right).value()
    }

    /// Returns the right value paired with `left`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Left`] if no pair has the given left value.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::{BiMap, NotFound};
    ///
    /// let map = BiMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.at_left(&1), Ok(&"a"));
    /// assert_eq!(map.at_left(&3), Err(NotFound::Left));
    /// ```
    pub fn at_left(&self, left: &L) -> Result<&R, NotFound> {
        self.get_left(left).ok_or(NotFound::Left)
    }

    /// Returns the left value paired with `right`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Right`] if no pair has the given right value.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn at_right(&self, right: &R) -> Result<&L, NotFound> {
        self.get_right(right).ok_or(NotFound::Right)
    }

    /// Returns a cursor at the first pair whose left value is not less than `left`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(map.lower_bound_left(&20).key(), Some(&20));
    /// assert_eq!(map.lower_bound_left(&21).key(), Some(&30));
    /// assert!(map.lower_bound_left(&31).is_end());
    /// ```
    #[must_use]
    pub fn lower_bound_left(&self, left: &L) -> Cursor<'_, L, R, Left> {
        Cursor::new(&self.raw, self.raw.tree::<Left>().lower_bound(&self.cmp_left, left))
    }

    /// Returns a cursor at the first pair whose right value is not less than `right`.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn lower_bound_right(&self, right: &R) -> Cursor<'_, L, R, Right> {
        Cursor::new(&self.raw, self.raw.tree::<Right>().lower_bound(&self.cmp_right, right))
    }

    /// Returns a cursor at the first pair whose left value is greater than `left`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(map.upper_bound_left(&20).key(), Some(&30));
    /// assert!(map.upper_bound_left(&30).is_end());
    /// ```
    #[must_use]
    pub fn upper_bound_left(&self, left: &L) -> Cursor<'_, L, R, Left> {
        Cursor::new(&self.raw, self.raw.tree::<Left>().upper_bound(&self.cmp_left, left))
    }

    /// Returns a cursor at the first pair whose right value is greater than `right`.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn upper_bound_right(&self, right: &R) -> Cursor<'_, L, R, Right> {
        Cursor::new(&self.raw, self.raw.tree::<Right>().upper_bound(&self.cmp_right, right))
    }
}

impl<L: Clone, R: Clone, CL: Clone, CR: Clone> Clone for BiMap<L, R, CL, CR> {
    /// Deep-copies the map, keeping the shape of both trees.
    ///
    /// Positions of the source map are valid positions of the copy and point at the
    /// copies of the same pairs.
    fn clone(&self) -> Self {
        BiMap {
            raw: self.raw.clone(),
            cmp_left: self.cmp_left.clone(),
            cmp_right: self.cmp_right.clone(),
        }
    }
}

impl<L: Hash, R: Hash, CL, CR> Hash for BiMap<L, R, CL, CR> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (l, r) in self {
            l.hash(state);
            r.hash(state);
        }
    }
}

impl<L: PartialEq, R: PartialEq, CL, CR> PartialEq for BiMap<L, R, CL, CR> {
    /// Maps are equal when they hold equal pairs in the same left order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_left().zip(other.iter_left()).all(|(a, b)| a == b)
    }
}

impl<L: Eq, R: Eq, CL, CR> Eq for BiMap<L, R, CL, CR> {}

impl<L: fmt::Debug, R: fmt::Debug, CL, CR> fmt::Debug for BiMap<L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<L, R, CL: Default, CR: Default> Default for BiMap<L, R, CL, CR> {
    fn default() -> Self {
        BiMap::with_cmp(CL::default(), CR::default())
    }
}

impl<L, R, CL, CR> FromIterator<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    /// Collects pairs into a map. A pair conflicting with an earlier one is dropped.
    fn from_iter<T: IntoIterator<Item = (L, R)>>(iter: T) -> Self {
        let mut map = BiMap::default();
        map.extend(iter);
        map
    }
}

impl<L, R, CL, CR> Extend<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Inserts every pair that does not conflict with the map's contents.
    fn extend<T: IntoIterator<Item = (L, R)>>(&mut self, iter: T) {
        for (l, r) in iter {
            if let Err(rejected) = self.insert(l, r) {
                tracing::trace!(conflict = ?rejected.conflict, "extend skipped a pair");
            }
        }
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a BiMap<L, R, CL, CR> {
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R, Left>;

    fn into_iter(self) -> Iter<'a, L, R, Left> {
        self.iter()
    }
}

impl<L, R, CL, CR> IntoIterator for BiMap<L, R, CL, CR> {
    type Item = (L, R);
    type IntoIter = IntoIter<L, R>;

    /// Gets an owning iterator over the pairs of the map, in left order.
    fn into_iter(mut self) -> IntoIter<L, R> {
        IntoIter::new(self.raw.drain_to_vec())
    }
}

impl<L: Ord, R: Ord, const N: usize> From<[(L, R); N]> for BiMap<L, R> {
    /// Converts a `[(L, R); N]` into a `BiMap<L, R>`.
    ///
    /// A pair conflicting with an earlier one is dropped.
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map = BiMap::from([(1, 'a'), (2, 'b'), (3, 'a')]);
    /// assert_eq!(map.len(), 2);
    /// ```
    fn from(arr: [(L, R); N]) -> Self {
        arr.into_iter().collect()
    }
}

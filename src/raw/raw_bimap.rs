use alloc::vec::Vec;

use compare::Compare;

use super::arena::Arena;
use super::entry::Entry;
use super::handle::Handle;
use super::link::{LinkStore, LinkStoreMut, Links, Slot};
use super::tree::{Tree, TreeMut};
use crate::error::{Conflict, InsertError};
use crate::side::{Left, Right, Side};

/// The core dual-tree structure backing `BiMap`.
///
/// Comparators are not stored here; every ordered operation takes the comparator of the
/// side(s) it touches.
#[derive(Clone)]
pub(crate) struct RawBiMap<L, R> {
    /// Arena owning every entry.
    entries: Arena<Entry<L, R>>,
    /// Header of the left tree at `Left::INDEX`, of the right tree at `Right::INDEX`.
    headers: [Links; 2],
    /// Number of entries linked into both trees.
    len: usize,
}

impl<L, R> RawBiMap<L, R> {
    /// Creates a new, empty map.
    pub(crate) const fn new() -> Self {
        Self {
            entries: Arena::new(),
            headers: [Links::DETACHED; 2],
            len: 0,
        }
    }

    /// Creates a new map with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arena::with_capacity(capacity),
            headers: [Links::DETACHED; 2],
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Releases every entry and detaches both headers in one step.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.headers = [Links::DETACHED; 2];
        self.len = 0;
    }

    #[inline]
    pub(crate) fn tree<S: Side>(&self) -> Tree<'_, L, R, S> {
        Tree::new(&self.headers[S::INDEX], &self.entries)
    }

    #[inline]
    pub(crate) fn tree_mut<S: Side>(&mut self) -> TreeMut<'_, L, R, S> {
        TreeMut::new(&mut self.headers[S::INDEX], &mut self.entries)
    }

    #[inline]
    pub(crate) fn entry(&self, handle: Handle) -> &Entry<L, R> {
        self.entries.get(handle)
    }

    /// Allocates an entry and threads it into both trees.
    ///
    /// Both keys must be absent from their trees.
    fn link_new<S, CS, CO>(&mut self, pair: (L, R), cmp_side: &CS, cmp_other: &CO) -> Handle
    where
        S: Side,
        CS: Compare<S::Key<L, R>>,
        CO: Compare<<S::Other as Side>::Key<L, R>>,
    {
        let (left, right) = pair;
        let handle = self.entries.alloc(Entry::new(left, right));
        let linked_side = self.tree_mut::<S>().insert(cmp_side, handle);
        let linked_other = self.tree_mut::<S::Other>().insert(cmp_other, handle);
        debug_assert!(linked_side && linked_other, "`RawBiMap::link_new()` - key already present");
        self.len += 1;
        handle
    }

    /// Inserts a pair unless either key is already taken.
    pub(crate) fn insert<CL, CR>(
        &mut self,
        left: L,
        right: R,
        cmp_left: &CL,
        cmp_right: &CR,
    ) -> Result<Handle, InsertError<L, R>>
    where
        CL: Compare<L>,
        CR: Compare<R>,
    {
        let left_taken = self.tree::<Left>().find(cmp_left, &left) != Slot::Header;
        let right_taken = self.tree::<Right>().find(cmp_right, &right) != Slot::Header;
        if let Some(conflict) = Conflict::from_hits(left_taken, right_taken) {
            tracing::trace!(?conflict, "rejected insert");
            return Err(InsertError { conflict, left, right });
        }
        Ok(self.link_new::<Left, _, _>((left, right), cmp_left, cmp_right))
    }

    /// Unlinks an entry from both trees and hands back its pair.
    pub(crate) fn remove(&mut self, handle: Handle) -> (L, R) {
        self.tree_mut::<Left>().unlink(handle);
        self.tree_mut::<Right>().unlink(handle);
        debug_assert!(self.entries.get(handle).is_detached(), "`RawBiMap::remove()` - entry still linked");
        self.len -= 1;
        let pair = self.entries.take(handle).into_pair();
        debug_assert_eq!(self.entries.len(), self.len, "`RawBiMap::remove()` - arena and trees disagree");
        pair
    }

    /// Erases the entry at `slot` and returns the slot after it on side `S`.
    /// Erasing the header does nothing and returns the header.
    pub(crate) fn erase_at<S: Side>(&mut self, slot: Slot) -> Slot {
        let Slot::Entry(handle) = slot else {
            return Slot::Header;
        };
        let next = self.tree_mut::<S>().erase(handle);
        drop(self.remove(handle));
        next
    }

    /// Erases `[first, last)` on side `S`.
    pub(crate) fn erase_range<S: Side>(&mut self, first: Slot, last: Slot) -> Slot {
        let mut current = first;
        while current != last && current != Slot::Header {
            current = self.erase_at::<S>(current);
        }
        current
    }

    /// Looks `key` up on side `S`, and if it is missing reuses or creates the pair whose
    /// opposite value is the default.
    ///
    /// A pair already holding the default opposite value gets its `S` key rewritten to
    /// `key` (and is moved to the matching spot in the `S` tree), so at most one such
    /// placeholder exists.
    pub(crate) fn at_or_default<S, CS, CO>(&mut self, key: S::Key<L, R>, cmp_side: &CS, cmp_other: &CO) -> Handle
    where
        S: Side,
        CS: Compare<S::Key<L, R>>,
        CO: Compare<<S::Other as Side>::Key<L, R>>,
        <S::Other as Side>::Key<L, R>: Default,
    {
        if let Slot::Entry(handle) = self.tree::<S>().find(cmp_side, &key) {
            return handle;
        }

        let default = <<S::Other as Side>::Key<L, R> as Default>::default();
        if let Slot::Entry(handle) = self.tree::<S::Other>().find(cmp_other, &default) {
            tracing::trace!(?handle, "rewriting default-valued placeholder");
            self.tree_mut::<S>().unlink(handle);
            *self.entries.get_mut(handle).key_mut::<S>() = key;
            let relinked = self.tree_mut::<S>().insert(cmp_side, handle);
            debug_assert!(relinked, "`RawBiMap::at_or_default()` - key appeared during repair");
            return handle;
        }

        self.link_new::<S, _, _>(S::into_pair(key, default), cmp_side, cmp_other)
    }

    /// Removes every entry, returning the pairs in left order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(L, R)> {
        let tree = self.tree::<Left>();
        let mut handles = Vec::with_capacity(self.len);
        let mut slot = tree.first();
        while let Slot::Entry(handle) = slot {
            handles.push(handle);
            slot = tree.next(slot);
        }

        let pairs = handles.into_iter().map(|handle| self.entries.take(handle).into_pair()).collect();
        self.clear();
        pairs
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use compare::Natural;
    use proptest::prelude::*;

    impl<L, R> RawBiMap<L, R> {
        /// Validates the dual-tree invariants. Panics with a descriptive message if any are
        /// violated. Intended for use in tests to catch corruption.
        pub(crate) fn validate_invariants<CL, CR>(&self, cmp_left: &CL, cmp_right: &CR)
        where
            CL: Compare<L>,
            CR: Compare<R>,
        {
            let mut errors: Vec<String> = Vec::new();

            let left = self.validate_side::<Left, _>(cmp_left, &mut errors);
            let right = self.validate_side::<Right, _>(cmp_right, &mut errors);

            if left.len() != self.len {
                errors.push(format!("left tree holds {} entries, len is {}", left.len(), self.len));
            }
            if right.len() != self.len {
                errors.push(format!("right tree holds {} entries, len is {}", right.len(), self.len));
            }
            if self.entries.len() != self.len {
                errors.push(format!("arena holds {} entries, len is {}", self.entries.len(), self.len));
            }

            let mut left_sorted = left;
            left_sorted.sort_by_key(|h| h.to_index());
            let mut right_sorted = right;
            right_sorted.sort_by_key(|h| h.to_index());
            if left_sorted != right_sorted {
                errors.push(String::from("left and right trees link different entries"));
            }

            assert!(errors.is_empty(), "RawBiMap invariant violations:\n{}", errors.join("\n"));
        }

        /// Walks the tree of side `S` in order, checking back links and strict ordering.
        /// Returns the handles visited.
        fn validate_side<S: Side, C: Compare<S::Key<L, R>>>(&self, cmp: &C, errors: &mut Vec<String>) -> Vec<Handle> {
            let tree = self.tree::<S>();
            let header = tree.links(Slot::Header);
            if header.parent.is_some() || header.right.is_some() {
                errors.push(format!("side {}: header has parent or right link", S::INDEX));
            }

            let mut visited = Vec::new();
            let mut stack = Vec::from([Slot::Header]);
            while let Some(slot) = stack.pop() {
                let links = *tree.links(slot);
                for child in [links.left, links.right].into_iter().flatten() {
                    if tree.links(Slot::Entry(child)).parent != Some(slot) {
                        errors.push(format!("side {}: {child:?} does not point back at {slot:?}", S::INDEX));
                    }
                    stack.push(Slot::Entry(child));
                }
            }

            let mut slot = tree.first();
            let mut previous: Option<Handle> = None;
            while let Slot::Entry(handle) = slot {
                if let Some(previous) = previous {
                    if !cmp.compares_lt(tree.key(previous), tree.key(handle)) {
                        errors.push(format!("side {}: {previous:?} is not less than {handle:?}", S::INDEX));
                    }
                }
                if visited.len() > self.len {
                    errors.push(format!("side {}: traversal does not terminate", S::INDEX));
                    break;
                }
                visited.push(handle);
                previous = Some(handle);
                slot = tree.next(slot);
            }
            visited
        }
    }

    fn natural<T: Ord>() -> Natural<T> {
        compare::natural()
    }

    fn left_keys(raw: &RawBiMap<i32, i32>) -> Vec<i32> {
        let tree = raw.tree::<Left>();
        let mut keys = Vec::new();
        let mut slot = tree.first();
        while let Slot::Entry(handle) = slot {
            keys.push(*tree.key(handle));
            slot = tree.next(slot);
        }
        keys
    }

    #[test]
    fn insert_reports_conflicting_sides() {
        let mut raw: RawBiMap<i32, i32> = RawBiMap::new();
        raw.insert(1, 10, &natural(), &natural()).unwrap();
        raw.insert(2, 20, &natural(), &natural()).unwrap();

        let err = raw.insert(1, 30, &natural(), &natural()).unwrap_err();
        assert_eq!(err.conflict, Conflict::Left);
        let err = raw.insert(3, 10, &natural(), &natural()).unwrap_err();
        assert_eq!(err.conflict, Conflict::Right);
        let err = raw.insert(1, 20, &natural(), &natural()).unwrap_err();
        assert_eq!(err.conflict, Conflict::Both);

        assert_eq!(raw.len(), 2);
        raw.validate_invariants(&natural(), &natural());
    }

    #[test]
    fn remove_frees_the_arena_slot() {
        let mut raw: RawBiMap<i32, i32> = RawBiMap::new();
        let first = raw.insert(1, 10, &natural(), &natural()).unwrap();
        raw.insert(2, 20, &natural(), &natural()).unwrap();
        assert_eq!(raw.remove(first), (1, 10));
        assert_eq!(raw.entries.len(), 1);
        assert_eq!(raw.entries.len(), raw.len());
        let reused = raw.insert(3, 30, &natural(), &natural()).unwrap();
        assert_eq!(reused, first);
        raw.validate_invariants(&natural(), &natural());
    }

    #[test]
    fn erase_at_header_is_noop() {
        let mut raw: RawBiMap<i32, i32> = RawBiMap::new();
        raw.insert(1, 1, &natural(), &natural()).unwrap();
        assert_eq!(raw.erase_at::<Left>(Slot::Header), Slot::Header);
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn erase_range_stops_at_last() {
        let mut raw: RawBiMap<i32, i32> = RawBiMap::new();
        for i in [5, 3, 8, 1, 4, 7, 9] {
            raw.insert(i, -i, &natural(), &natural()).unwrap();
        }
        let first = raw.tree::<Left>().find(&natural(), &3);
        let last = raw.tree::<Left>().find(&natural(), &8);
        let end = raw.erase_range::<Left>(first, last);
        assert_eq!(end, last);
        assert_eq!(left_keys(&raw), [1, 8, 9]);
        raw.validate_invariants(&natural(), &natural());
    }

    #[test]
    fn placeholder_is_reused_and_reordered() {
        let mut raw: RawBiMap<i32, i32> = RawBiMap::new();
        for i in [10, 20, 30] {
            raw.insert(i, i, &natural(), &natural()).unwrap();
        }
        let placeholder = raw.at_or_default::<Left, _, _>(25, &natural(), &natural());
        assert_eq!(raw.entry(placeholder).pair(), (&25, &0));
        assert_eq!(left_keys(&raw), [10, 20, 25, 30]);

        let again = raw.at_or_default::<Left, _, _>(5, &natural(), &natural());
        assert_eq!(again, placeholder);
        assert_eq!(raw.entry(again).pair(), (&5, &0));
        assert_eq!(left_keys(&raw), [5, 10, 20, 30]);
        assert_eq!(raw.len(), 4);
        raw.validate_invariants(&natural(), &natural());

        let present = raw.at_or_default::<Right, _, _>(20, &natural(), &natural());
        assert_eq!(raw.entry(present).pair(), (&20, &20));
    }

    #[test]
    fn drain_returns_left_order_and_empties() {
        let mut raw: RawBiMap<i32, i32> = RawBiMap::new();
        for i in [3, 1, 2] {
            raw.insert(i, 10 - i, &natural(), &natural()).unwrap();
        }
        assert_eq!(raw.drain_to_vec(), [(1, 9), (2, 8), (3, 7)]);
        assert!(raw.is_empty());
        raw.validate_invariants(&natural(), &natural());
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32, i32),
        EraseLeft(i32),
        EraseRight(i32),
        LeftOrDefault(i32),
        RightOrDefault(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0i32..300, 0i32..300).prop_map(|(l, r)| Op::Insert(l, r)),
            2 => (0i32..300).prop_map(Op::EraseLeft),
            2 => (0i32..300).prop_map(Op::EraseRight),
            1 => (0i32..300).prop_map(Op::LeftOrDefault),
            1 => (0i32..300).prop_map(Op::RightOrDefault),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_maintained_after_operations(ops in prop::collection::vec(op_strategy(), 0..400)) {
            let mut raw: RawBiMap<i32, i32> = RawBiMap::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(l, r) => {
                        let accepted = raw.insert(l, r, &natural(), &natural()).is_ok();
                        let expected = !model.contains_key(&l) && !model.values().any(|&v| v == r);
                        prop_assert_eq!(accepted, expected);
                        if accepted {
                            model.insert(l, r);
                        }
                    }
                    Op::EraseLeft(l) => {
                        let slot = raw.tree::<Left>().find(&natural(), &l);
                        raw.erase_at::<Left>(slot);
                        model.remove(&l);
                    }
                    Op::EraseRight(r) => {
                        let slot = raw.tree::<Right>().find(&natural(), &r);
                        raw.erase_at::<Right>(slot);
                        model.retain(|_, v| *v != r);
                    }
                    Op::LeftOrDefault(l) => {
                        let handle = raw.at_or_default::<Left, _, _>(l, &natural(), &natural());
                        let (&left, &right) = raw.entry(handle).pair();
                        prop_assert_eq!(left, l);
                        if !model.contains_key(&l) {
                            model.retain(|_, v| *v != 0);
                            model.insert(l, 0);
                        }
                        prop_assert_eq!(model.get(&l), Some(&right));
                    }
                    Op::RightOrDefault(r) => {
                        let handle = raw.at_or_default::<Right, _, _>(r, &natural(), &natural());
                        let (&left, &right) = raw.entry(handle).pair();
                        prop_assert_eq!(right, r);
                        if !model.values().any(|&v| v == r) {
                            // Either rewrites the pair keyed by the default left value or adds it.
                            model.insert(0, r);
                        }
                        prop_assert_eq!(model.get(&left), Some(&r));
                    }
                }
                raw.validate_invariants(&natural(), &natural());
                prop_assert_eq!(raw.len(), model.len());
            }

            let pairs: Vec<(i32, i32)> = model.into_iter().collect();
            prop_assert_eq!(raw.drain_to_vec(), pairs);
        }
    }
}

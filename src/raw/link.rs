use super::handle::Handle;

/// A position in one tree: the tree's own header, or an entry.
///
/// The header is the parent of the root and doubles as the end position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Slot {
    Header,
    Entry(Handle),
}

impl Slot {
    #[inline]
    pub(crate) const fn entry(self) -> Option<Handle> {
        match self {
            Slot::Header => None,
            Slot::Entry(handle) => Some(handle),
        }
    }
}

/// Parent and child links of one tree position.
///
/// Children are always entries; only the root has the header as its parent.
/// On the header itself `left` is the root and the other two links stay unused.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Links {
    pub(crate) parent: Option<Slot>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl Links {
    pub(crate) const DETACHED: Self = Self {
        parent: None,
        left: None,
        right: None,
    };

    #[inline]
    pub(crate) const fn is_detached(&self) -> bool {
        self.parent.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Read access to the links of every slot of one tree.
///
/// Topology only: nothing here looks at keys.
pub(crate) trait LinkStore {
    fn links(&self, slot: Slot) -> &Links;

    #[inline]
    fn root(&self) -> Option<Handle> {
        self.links(Slot::Header).left
    }

    fn min_in_subtree(&self, mut node: Handle) -> Handle {
        while let Some(left) = self.links(Slot::Entry(node)).left {
            node = left;
        }
        node
    }

    fn max_in_subtree(&self, mut node: Handle) -> Handle {
        while let Some(right) = self.links(Slot::Entry(node)).right {
            node = right;
        }
        node
    }

    /// The smallest entry, or the header when the tree is empty.
    fn first(&self) -> Slot {
        self.root().map_or(Slot::Header, |root| Slot::Entry(self.min_in_subtree(root)))
    }

    /// The largest entry, or the header when the tree is empty.
    fn last(&self) -> Slot {
        self.root().map_or(Slot::Header, |root| Slot::Entry(self.max_in_subtree(root)))
    }

    /// In-order successor. The last entry is followed by the header, and the header by the
    /// first entry. A detached entry has no successor and yields the header.
    fn next(&self, slot: Slot) -> Slot {
        let Slot::Entry(mut node) = slot else {
            return self.first();
        };
        if let Some(right) = self.links(slot).right {
            return Slot::Entry(self.min_in_subtree(right));
        }
        loop {
            match self.links(Slot::Entry(node)).parent {
                Some(parent @ Slot::Entry(handle)) => {
                    if self.links(parent).left == Some(node) {
                        return parent;
                    }
                    node = handle;
                }
                Some(Slot::Header) | None => return Slot::Header,
            }
        }
    }

    /// In-order predecessor, the mirror image of [`LinkStore::next`].
    fn prev(&self, slot: Slot) -> Slot {
        let Slot::Entry(mut node) = slot else {
            return self.last();
        };
        if let Some(left) = self.links(slot).left {
            return Slot::Entry(self.max_in_subtree(left));
        }
        loop {
            match self.links(Slot::Entry(node)).parent {
                Some(parent @ Slot::Entry(handle)) => {
                    if self.links(parent).right == Some(node) {
                        return parent;
                    }
                    node = handle;
                }
                Some(Slot::Header) | None => return Slot::Header,
            }
        }
    }
}

/// Write access to the links of one tree, and the operations that rewire them.
pub(crate) trait LinkStoreMut: LinkStore {
    fn links_mut(&mut self, slot: Slot) -> &mut Links;

    fn link_left(&mut self, parent: Slot, child: Option<Handle>) {
        self.links_mut(parent).left = child;
        if let Some(child) = child {
            self.links_mut(Slot::Entry(child)).parent = Some(parent);
        }
    }

    fn link_right(&mut self, parent: Slot, child: Option<Handle>) {
        self.links_mut(parent).right = child;
        if let Some(child) = child {
            self.links_mut(Slot::Entry(child)).parent = Some(parent);
        }
    }

    /// Puts `child` where `node` hangs off its parent.
    fn replace_in_parent(&mut self, node: Handle, child: Option<Handle>) {
        let Some(parent) = self.links(Slot::Entry(node)).parent else {
            return;
        };
        if self.links(parent).left == Some(node) {
            self.link_left(parent, child);
        } else {
            self.link_right(parent, child);
        }
    }

    /// Removes `node` from the tree and leaves it fully detached. No-op if already detached.
    ///
    /// A node with two children is replaced by its in-order successor, which is first
    /// unlinked from its own spot and then takes over both subtrees. No rebalancing.
    fn unlink(&mut self, node: Handle) {
        let links = *self.links(Slot::Entry(node));
        if links.is_detached() {
            return;
        }

        match (links.left, links.right) {
            (Some(_), Some(right)) => {
                let successor = self.min_in_subtree(right);
                tracing::trace!(?node, ?successor, "promoting in-order successor");
                self.unlink(successor);
                // The successor may have been `node.right`, so read the links again.
                let links = *self.links(Slot::Entry(node));
                self.link_left(Slot::Entry(successor), links.left);
                self.link_right(Slot::Entry(successor), links.right);
                self.replace_in_parent(node, Some(successor));
            }
            (only, None) | (None, only) => self.replace_in_parent(node, only),
        }

        *self.links_mut(Slot::Entry(node)) = Links::DETACHED;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Slot, Handle);

    /// A bare tree over handle indices, with keys equal to the indices.
    struct Bare {
        header: Links,
        nodes: Vec<Links>,
    }

    impl LinkStore for Bare {
        fn links(&self, slot: Slot) -> &Links {
            match slot {
                Slot::Header => &self.header,
                Slot::Entry(handle) => &self.nodes[handle.to_index()],
            }
        }
    }

    impl LinkStoreMut for Bare {
        fn links_mut(&mut self, slot: Slot) -> &mut Links {
            match slot {
                Slot::Header => &mut self.header,
                Slot::Entry(handle) => &mut self.nodes[handle.to_index()],
            }
        }
    }

    fn h(index: usize) -> Handle {
        Handle::from_index(index)
    }

    impl Bare {
        /// Builds a tree by plain BST insertion of `keys` in order.
        fn build(size: usize, keys: &[usize]) -> Self {
            let mut bare = Bare {
                header: Links::DETACHED,
                nodes: alloc::vec![Links::DETACHED; size],
            };
            for &key in keys {
                let Some(mut current) = bare.root() else {
                    bare.link_left(Slot::Header, Some(h(key)));
                    continue;
                };
                loop {
                    let links = *bare.links(Slot::Entry(current));
                    let next = if key < current.to_index() { links.left } else { links.right };
                    match next {
                        Some(next) => current = next,
                        None if key < current.to_index() => {
                            bare.link_left(Slot::Entry(current), Some(h(key)));
                            break;
                        }
                        None => {
                            bare.link_right(Slot::Entry(current), Some(h(key)));
                            break;
                        }
                    }
                }
            }
            bare
        }

        fn in_order(&self) -> Vec<usize> {
            let mut out = Vec::new();
            let mut slot = self.first();
            while let Slot::Entry(handle) = slot {
                out.push(handle.to_index());
                slot = self.next(slot);
            }
            out
        }

        fn in_reverse(&self) -> Vec<usize> {
            let mut out = Vec::new();
            let mut slot = self.last();
            while let Slot::Entry(handle) = slot {
                out.push(handle.to_index());
                slot = self.prev(slot);
            }
            out
        }

        /// Checks that every child points back at its parent.
        fn check_back_links(&self) {
            let mut stack: Vec<Slot> = Vec::from([Slot::Header]);
            while let Some(slot) = stack.pop() {
                let links = *self.links(slot);
                for child in [links.left, links.right].into_iter().flatten() {
                    assert_eq!(self.links(Slot::Entry(child)).parent, Some(slot));
                    stack.push(Slot::Entry(child));
                }
            }
        }
    }

    //         4
    //       /   \
    //      2     6
    //     / \   / \
    //    1   3 5   8
    //             /
    //            7
    const SHAPE: [usize; 8] = [4, 2, 6, 1, 3, 5, 8, 7];

    #[test]
    fn walks_in_order_both_ways() {
        let bare = Bare::build(9, &SHAPE);
        bare.check_back_links();
        assert_eq!(bare.in_order(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(bare.in_reverse(), [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn header_wraps_around() {
        let bare = Bare::build(9, &SHAPE);
        assert_eq!(bare.next(Slot::Header), Slot::Entry(h(1)));
        assert_eq!(bare.prev(Slot::Header), Slot::Entry(h(8)));
        assert_eq!(bare.next(Slot::Entry(h(8))), Slot::Header);
        assert_eq!(bare.prev(Slot::Entry(h(1))), Slot::Header);
    }

    #[test]
    fn empty_tree_is_all_header() {
        let bare = Bare::build(1, &[]);
        assert_eq!(bare.first(), Slot::Header);
        assert_eq!(bare.last(), Slot::Header);
        assert_eq!(bare.next(Slot::Header), Slot::Header);
        assert_eq!(bare.prev(Slot::Header), Slot::Header);
    }

    #[test]
    fn unlink_leaf() {
        let mut bare = Bare::build(9, &SHAPE);
        bare.unlink(h(3));
        bare.check_back_links();
        assert!(bare.links(Slot::Entry(h(3))).is_detached());
        assert_eq!(bare.in_order(), [1, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn unlink_one_child() {
        let mut bare = Bare::build(9, &SHAPE);
        bare.unlink(h(8));
        bare.check_back_links();
        assert_eq!(bare.links(Slot::Entry(h(6))).right, Some(h(7)));
        assert_eq!(bare.in_order(), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn unlink_two_children_promotes_successor() {
        let mut bare = Bare::build(9, &SHAPE);
        bare.unlink(h(6));
        bare.check_back_links();
        // 7 is the leftmost node under 8 and takes 6's place.
        assert_eq!(bare.links(Slot::Entry(h(4))).right, Some(h(7)));
        assert_eq!(bare.links(Slot::Entry(h(7))).left, Some(h(5)));
        assert_eq!(bare.links(Slot::Entry(h(7))).right, Some(h(8)));
        assert_eq!(bare.in_order(), [1, 2, 3, 4, 5, 7, 8]);
    }

    #[test]
    fn unlink_two_children_when_successor_is_right_child() {
        let mut bare = Bare::build(9, &SHAPE);
        bare.unlink(h(2));
        bare.check_back_links();
        assert_eq!(bare.links(Slot::Entry(h(4))).left, Some(h(3)));
        assert_eq!(bare.links(Slot::Entry(h(3))).left, Some(h(1)));
        assert_eq!(bare.links(Slot::Entry(h(3))).right, None);
        assert_eq!(bare.in_order(), [1, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn unlink_root() {
        let mut bare = Bare::build(9, &SHAPE);
        bare.unlink(h(4));
        bare.check_back_links();
        assert_eq!(bare.root(), Some(h(5)));
        assert_eq!(bare.in_order(), [1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn unlink_detached_is_noop() {
        let mut bare = Bare::build(9, &SHAPE);
        bare.unlink(h(0));
        bare.check_back_links();
        assert_eq!(bare.in_order(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(bare.next(Slot::Entry(h(0))), Slot::Header);
    }

    #[test]
    fn unlink_everything_in_any_order() {
        let orders: [[usize; 8]; 3] = [[4, 2, 6, 1, 3, 5, 8, 7], [1, 2, 3, 4, 5, 6, 7, 8], [7, 3, 8, 1, 6, 2, 5, 4]];
        for order in orders {
            let mut bare = Bare::build(9, &SHAPE);
            let mut expected: Vec<usize> = bare.in_order();
            for key in order {
                bare.unlink(h(key));
                expected.retain(|&k| k != key);
                bare.check_back_links();
                assert_eq!(bare.in_order(), expected);
            }
            assert_eq!(bare.root(), None);
        }
    }
}

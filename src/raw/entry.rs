use super::link::Links;
use crate::side::Side;

/// One stored pair, linked into the left tree and the right tree at the same time.
///
/// `links[S::INDEX]` is the entry's position in the tree of side `S`; the two sets of
/// links never share state.
#[derive(Clone, Debug)]
pub(crate) struct Entry<L, R> {
    pair: (L, R),
    links: [Links; 2],
}

impl<L, R> Entry<L, R> {
    pub(crate) const fn new(left: L, right: R) -> Self {
        Self {
            pair: (left, right),
            links: [Links::DETACHED; 2],
        }
    }

    #[inline]
    pub(crate) fn key<S: Side>(&self) -> &S::Key<L, R> {
        S::key(&self.pair)
    }

    /// Gives write access to the key of side `S`. The caller must unlink the entry
    /// from that side's tree first.
    #[inline]
    pub(crate) fn key_mut<S: Side>(&mut self) -> &mut S::Key<L, R> {
        S::key_mut(&mut self.pair)
    }

    /// The key on the opposite side, i.e. the value `S` maps to.
    #[inline]
    pub(crate) fn value<S: Side>(&self) -> &<S::Other as Side>::Key<L, R> {
        <S::Other as Side>::key(&self.pair)
    }

    #[inline]
    pub(crate) fn pair(&self) -> (&L, &R) {
        (&self.pair.0, &self.pair.1)
    }

    pub(crate) fn into_pair(self) -> (L, R) {
        self.pair
    }

    #[inline]
    pub(crate) fn links<S: Side>(&self) -> &Links {
        &self.links[S::INDEX]
    }

    #[inline]
    pub(crate) fn links_mut<S: Side>(&mut self) -> &mut Links {
        &mut self.links[S::INDEX]
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.links.iter().all(Links::is_detached)
    }
}

use core::fmt;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Left {}
    impl Sealed for super::Right {}
}

/// One of the two sides of a [`BiMap`](crate::BiMap): [`Left`] or [`Right`].
///
/// This trait is sealed. It exists so that positions, cursors and iterators can be
/// written once and tagged with the side they walk.
pub trait Side: sealed::Sealed + Copy + Default + Eq + Hash + fmt::Debug + 'static {
    /// The opposite side.
    type Other: Side<Other = Self>;

    /// The key type this side is ordered by, for a map of `(L, R)` pairs.
    type Key<L, R>;

    #[doc(hidden)]
    const INDEX: usize;

    #[doc(hidden)]
    fn key<L, R>(pair: &(L, R)) -> &Self::Key<L, R>;

    #[doc(hidden)]
    fn key_mut<L, R>(pair: &mut (L, R)) -> &mut Self::Key<L, R>;

    #[doc(hidden)]
    fn into_pair<L, R>(key: Self::Key<L, R>, value: <Self::Other as Side>::Key<L, R>) -> (L, R);
}

/// Marker for the left side of a [`BiMap`](crate::BiMap).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Left;

/// Marker for the right side of a [`BiMap`](crate::BiMap).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Right;

impl Side for Left {
    type Other = Right;
    type Key<L, R> = L;

    const INDEX: usize = 0;

    #[inline]
    fn key<L, R>(pair: &(L, R)) -> &Self::Key<L, R> {
        &pair.0
    }

    #[inline]
    fn key_mut<L, R>(pair: &mut (L, R)) -> &mut Self::Key<L, R> {
        &mut pair.0
    }

    #[inline]
    fn into_pair<L, R>(key: Self::Key<L, R>, value: <Self::Other as Side>::Key<L, R>) -> (L, R) {
        (key, value)
    }
}

impl Side for Right {
    type Other = Left;
    type Key<L, R> = R;

    const INDEX: usize = 1;

    #[inline]
    fn key<L, R>(pair: &(L, R)) -> &Self::Key<L, R> {
        &pair.1
    }

    #[inline]
    fn key_mut<L, R>(pair: &mut (L, R)) -> &mut Self::Key<L, R> {
        &mut pair.1
    }

    #[inline]
    fn into_pair<L, R>(key: Self::Key<L, R>, value: <Self::Other as Side>::Key<L, R>) -> (L, R) {
        (value, key)
    }
}

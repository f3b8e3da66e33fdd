use thiserror::Error;

/// Which side of a rejected insertion already held its key.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum Conflict {
    /// The left key is already present.
    #[error("left key is already present")]
    Left,
    /// The right key is already present.
    #[error("right key is already present")]
    Right,
    /// Both keys are already present (possibly in two different pairs).
    #[error("left and right keys are already present")]
    Both,
}

impl Conflict {
    pub(crate) fn from_hits(left: bool, right: bool) -> Option<Self> {
        match (left, right) {
            (false, false) => None,
            (true, false) => Some(Conflict::Left),
            (false, true) => Some(Conflict::Right),
            (true, true) => Some(Conflict::Both),
        }
    }
}

/// A key looked up with [`at_left`](crate::BiMap::at_left) or
/// [`at_right`](crate::BiMap::at_right) is not in the map.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum NotFound {
    /// No pair has the requested left key.
    #[error("no entry found for left key")]
    Left,
    /// No pair has the requested right key.
    #[error("no entry found for right key")]
    Right,
}

/// The error returned by [`BiMap::insert`](crate::BiMap::insert) when a key is already taken.
///
/// Contains the conflicting side(s) and gives the rejected pair back to the caller.
///
/// # Examples
///
/// ```
/// use twin_tree::{BiMap, Conflict};
///
/// let mut map = BiMap::new();
/// map.insert(1, "a").unwrap();
///
/// let err = map.insert(1, "b").unwrap_err();
/// assert_eq!(err.conflict, Conflict::Left);
/// assert_eq!((err.left, err.right), (1, "b"));
/// assert_eq!(err.to_string(), "failed to insert pair: left key is already present");
/// ```
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("failed to insert pair: {conflict}")]
pub struct InsertError<L, R> {
    /// Which side(s) rejected the pair.
    #[source]
    pub conflict: Conflict,
    /// The rejected left value.
    pub left: L,
    /// The rejected right value.
    pub right: R,
}

impl<L, R> InsertError<L, R> {
    /// Returns the rejected pair.
    pub fn into_pair(self) -> (L, R) {
        (self.left, self.right)
    }
}

use compare::Compare;

use super::BiMap;
use crate::side::{Left, Right};

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Returns the right value paired with `left`, inserting a default-valued pair if
    /// there is none.
    ///
    /// When `left` is missing, the map first looks for a pair whose right value is
    /// `R::default()`:
    ///
    /// - if one exists, its left value is replaced by `left` and the pair moves to the
    ///   matching place in left order;
    /// - otherwise the pair `(left, R::default())` is inserted.
    ///
    /// Either way the map holds at most one pair with the default right value, and the
    /// one-to-one property is preserved.
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
    /// let mut map: BiMap<i32, String> = BiMap::new();
    /// assert_eq!(map.at_left_or_default(5), "");
    /// assert_eq!(map.len(), 1);
    ///
    /// // The placeholder pair is taken over instead of inserting a second "".
    /// assert_eq!(map.at_left_or_default(6), "");
    /// assert_eq!(map.len(), 1);
    /// assert!(!map.contains_left(&5));
    /// ```
    pub fn at_left_or_default(&mut self, left: L) -> &R
    where
        R: Default,
    {
        let handle = self.raw.at_or_default::<Left, _, _>(left, &self.cmp_left, &self.cmp_right);
        self.raw.entry(handle).value::<Left>()
    }

    /// Returns the left value paired with `right`, inserting a default-valued pair if
    /// there is none.
    ///
    /// The mirror image of [`at_left_or_default`](BiMap::at_left_or_default): a pair
    /// whose left value is `L::default()` is taken over before a new one is inserted.
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
    /// let mut map = BiMap::from([(0, 'a'), (1, 'b')]);
    /// assert_eq!(*map.at_right_or_default('b'), 1);
    ///
    /// // 'c' is missing and the default left value 0 is taken by 'a'.
    /// assert_eq!(*map.at_right_or_default('c'), 0);
    /// assert_eq!(map.len(), 2);
    /// assert!(!map.contains_right(&'a'));
    /// ```
    pub fn at_right_or_default(&mut self, right: R) -> &L
    where
        L: Default,
    {
        let handle = self.raw.at_or_default::<Right, _, _>(right, &self.cmp_right, &self.cmp_left);
        self.raw.entry(handle).value::<Right>()
    }
}

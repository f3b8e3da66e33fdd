use super::BiMap;
use crate::raw::RawBiMap;

impl<L: Ord, R: Ord> BiMap<L, R> {
    /// Creates an empty map with room for at least `capacity` pairs before it reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tree::BiMap;
    ///
    /// let map: BiMap<i32, char> = BiMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BiMap {
            raw: RawBiMap::with_capacity(capacity),
            cmp_left: compare::natural(),
            cmp_right: compare::natural(),
        }
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Returns the number of pairs the map can hold without reallocating.
    ///
    /// Erased pairs leave their slot behind for reuse, so the capacity never shrinks.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::BiMap;

    #[test]
    fn erased_slots_are_reused() {
        let mut map: BiMap<u32, u32> = BiMap::with_capacity(4);
        for i in 0..4 {
            map.insert(i, i).unwrap();
        }
        let capacity = map.capacity();
        for round in 0..10 {
            assert!(map.erase_left(&(round % 4)));
            map.insert(round % 4, round % 4).unwrap();
        }
        assert_eq!(map.capacity(), capacity);
        assert_eq!(map.len(), 4);
    }
}

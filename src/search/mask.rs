//! Collected-subset bitmask.

use serde::{Deserialize, Serialize};

/// Subset of a [`CollectibleSet`](crate::environment::CollectibleSet), one bit per
/// collectible index.
///
/// Two masks are equal exactly when they describe the same set, regardless of
/// collection order, so the mask can key the visited set directly.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CollectedMask(u64);

impl CollectedMask {
    /// Nothing collected
    pub const EMPTY: CollectedMask = CollectedMask(0);

    /// Mask with the lowest `total` bits set
    #[inline]
    pub fn full(total: usize) -> Self {
        if total >= 64 {
            CollectedMask(u64::MAX)
        } else {
            CollectedMask((1u64 << total) - 1)
        }
    }

    /// Copy of this mask with `index` added
    #[inline]
    pub fn with(self, index: usize) -> Self {
        debug_assert!(index < 64);
        CollectedMask(self.0 | (1u64 << index))
    }

    /// Check whether `index` is collected
    #[inline]
    pub fn contains(self, index: usize) -> bool {
        index < 64 && self.0 & (1u64 << index) != 0
    }

    /// Number of collected items
    #[inline]
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// All `total` items collected
    #[inline]
    pub fn is_complete(self, total: usize) -> bool {
        self == Self::full(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent() {
        let a = CollectedMask::EMPTY.with(0).with(2);
        let b = CollectedMask::EMPTY.with(2).with(0);
        assert_eq!(a, b);
        assert_eq!(a.count(), 2);
    }

    #[test]
    fn test_with_is_idempotent() {
        let a = CollectedMask::EMPTY.with(1);
        assert_eq!(a.with(1), a);
        assert!(a.contains(1));
        assert!(!a.contains(0));
        assert!(!a.contains(64));
    }

    #[test]
    fn test_full() {
        assert_eq!(CollectedMask::full(0), CollectedMask::EMPTY);
        assert_eq!(CollectedMask::full(3).count(), 3);
        assert_eq!(CollectedMask::full(64).count(), 64);
        assert!(CollectedMask::EMPTY.is_complete(0));
        assert!(CollectedMask::EMPTY.with(0).with(1).is_complete(2));
        assert!(!CollectedMask::EMPTY.with(0).is_complete(2));
    }
}

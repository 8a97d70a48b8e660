use std::num::NonZeroUsize;

use crate::catalog;
use crate::models::Profile;

/// Which showcase entry is featured. Only ever moves forward by one,
/// wrapping at the end of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseRotator {
    index: usize,
    len: NonZeroUsize,
}

impl ShowcaseRotator {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn for_catalog() -> Self {
        Self::new(catalog::profile_count())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len.get();
        self.index
    }

    pub fn featured(&self) -> &'static Profile {
        catalog::profile_at(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_after_n_ticks_is_n_mod_len() {
        let len = catalog::profile_count().get();
        for ticks in 0..(len * 3 + 1) {
            let mut rotator = ShowcaseRotator::for_catalog();
            for _ in 0..ticks {
                rotator.advance();
            }
            assert_eq!(rotator.index(), ticks % len);
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let len = NonZeroUsize::new(4).unwrap();
        let mut rotator = ShowcaseRotator::new(len);
        for _ in 0..100 {
            let index = rotator.advance();
            assert!(index < len.get());
        }
    }

    #[test]
    fn single_entry_table_stays_at_zero() {
        let mut rotator = ShowcaseRotator::new(NonZeroUsize::MIN);
        assert_eq!(rotator.advance(), 0);
        assert_eq!(rotator.advance(), 0);
    }

    #[test]
    fn featured_follows_index() {
        let mut rotator = ShowcaseRotator::for_catalog();
        assert_eq!(rotator.featured().name, "Dr. Thomas Weber");
        rotator.advance();
        assert_eq!(rotator.featured().name, "Dr. Petra Schmidt");
    }
}

//! The 99-entry level catalog.
//!
//! Generated once at startup; immutable afterwards except for the
//! `unlocked` flags, which are recomputed whenever the highest reached
//! level advances.

use rustc_hash::FxHashMap;

use super::definition::{LevelDefinition, MAX_LEVEL};

/// All 99 level definitions with fast lookup by number.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
    index: FxHashMap<u32, usize>,
}

impl LevelCatalog {
    /// Generate the full catalog and apply unlock flags for the given
    /// highest reached level.
    #[must_use]
    pub fn new(highest_reached: u32) -> Self {
        let levels: Vec<_> = (1..=MAX_LEVEL).map(LevelDefinition::generate).collect();
        let index = levels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.number, i))
            .collect();

        let mut catalog = Self { levels, index };
        catalog.recompute_unlocks(highest_reached);
        catalog
    }

    /// Get a level definition by number.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<&LevelDefinition> {
        self.index.get(&number).map(|&i| &self.levels[i])
    }

    /// All levels in ascending order.
    #[must_use]
    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Recompute every unlock flag: a level is unlocked iff its number is
    /// at most `highest_reached + 1`.
    pub fn recompute_unlocks(&mut self, highest_reached: u32) {
        for level in &mut self.levels {
            level.unlocked = level.number <= highest_reached + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_99_levels() {
        let catalog = LevelCatalog::new(1);
        assert_eq!(catalog.len(), 99);
        assert!(catalog.get(1).is_some());
        assert!(catalog.get(99).is_some());
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(100).is_none());
    }

    #[test]
    fn test_unlock_invariant() {
        let catalog = LevelCatalog::new(14);
        for level in catalog.levels() {
            assert_eq!(level.unlocked, level.number <= 15, "level {}", level.number);
        }
    }

    #[test]
    fn test_recompute_unlocks_advances() {
        let mut catalog = LevelCatalog::new(1);
        assert!(!catalog.get(5).unwrap().unlocked);

        catalog.recompute_unlocks(10);
        assert!(catalog.get(11).unwrap().unlocked);
        assert!(!catalog.get(12).unwrap().unlocked);
    }
}

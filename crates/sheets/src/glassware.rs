use serde::{Deserialize, Deserializer, Serialize};

use barkeep_core::GlasswareId;

/// Most glass types a product sheet can recommend.
pub const MAX_GLASSWARE: usize = 3;

/// Ordered, duplicate-free set of at most [`MAX_GLASSWARE`] glassware ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GlasswareSelection(Vec<GlasswareId>);

impl GlasswareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a glass. Returns `false` (and changes nothing) when it is already
    /// selected or the selection is full.
    pub fn add(&mut self, id: GlasswareId) -> bool {
        if self.0.contains(&id) || self.0.len() >= MAX_GLASSWARE {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn remove(&mut self, id: GlasswareId) -> bool {
        let before = self.0.len();
        self.0.retain(|g| *g != id);
        self.0.len() != before
    }

    /// Checkbox semantics: remove when selected, otherwise try to add.
    pub fn toggle(&mut self, id: GlasswareId) -> bool {
        if self.contains(id) {
            self.remove(id)
        } else {
            self.add(id)
        }
    }

    pub fn contains(&self, id: GlasswareId) -> bool {
        self.0.contains(&id)
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_GLASSWARE
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[GlasswareId] {
        &self.0
    }
}

impl FromIterator<GlasswareId> for GlasswareSelection {
    /// Keeps the first [`MAX_GLASSWARE`] distinct ids; the rest are dropped.
    fn from_iter<I: IntoIterator<Item = GlasswareId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.add(id);
        }
        selection
    }
}

impl<'de> Deserialize<'de> for GlasswareSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<GlasswareId>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_glass_is_a_no_op() {
        let mut selection = GlasswareSelection::new();
        let ids: Vec<GlasswareId> = (0..4).map(|_| GlasswareId::new()).collect();

        assert!(selection.add(ids[0]));
        assert!(selection.add(ids[1]));
        assert!(selection.add(ids[2]));
        assert!(!selection.add(ids[3]));

        assert_eq!(selection.ids(), &ids[..3]);
        assert!(selection.is_full());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut selection = GlasswareSelection::new();
        let id = GlasswareId::new();
        assert!(selection.add(id));
        assert!(!selection.add(id));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_frees_a_slot() {
        let ids: Vec<GlasswareId> = (0..4).map(|_| GlasswareId::new()).collect();
        let mut selection: GlasswareSelection = ids[..3].iter().copied().collect();

        assert!(!selection.toggle(ids[3]));
        assert!(selection.toggle(ids[0]));
        assert!(selection.toggle(ids[3]));
        assert_eq!(selection.ids(), &[ids[1], ids[2], ids[3]]);
    }

    #[test]
    fn deserializing_an_oversized_list_truncates_to_three() {
        let ids: Vec<GlasswareId> = (0..5).map(|_| GlasswareId::new()).collect();
        let json = serde_json::to_string(&ids).unwrap();
        let selection: GlasswareSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(selection.ids(), &ids[..3]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: no sequence of adds/toggles exceeds the limit.
            #[test]
            fn never_exceeds_limit(ops in proptest::collection::vec((0usize..6, any::<bool>()), 0..40)) {
                let pool: Vec<GlasswareId> = (0..6).map(|_| GlasswareId::new()).collect();
                let mut selection = GlasswareSelection::new();
                for (idx, toggle) in ops {
                    if toggle {
                        selection.toggle(pool[idx]);
                    } else {
                        selection.add(pool[idx]);
                    }
                    prop_assert!(selection.len() <= MAX_GLASSWARE);
                }
            }
        }
    }
}

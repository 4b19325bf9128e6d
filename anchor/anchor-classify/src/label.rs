//! Per-classification entity cache for the rendering collaborator.

use anchor_types::FaceClassification;
use hashbrown::HashMap;

/// Caches one rendering entity per classification label.
///
/// Building a 3D text or marker entity is expensive on the rendering side,
/// and repeated queries keep hitting the same handful of labels. Sinks own
/// one of these and clone the cached entity instead of rebuilding it. This
/// is a convenience for [`LabelSink`](anchor_types::traits::LabelSink)
/// implementors, not state of the query itself.
///
/// # Example
///
/// ```
/// use anchor_classify::LabelCache;
/// use anchor_types::FaceClassification;
///
/// let mut cache: LabelCache<String> = LabelCache::new();
///
/// let label = cache.get_or_insert_with(FaceClassification::Wall, |c| c.to_string());
/// assert_eq!(label, "Wall");
/// assert_eq!(cache.len(), 1);
///
/// // Second lookup reuses the cached entity.
/// cache.get_or_insert_with(FaceClassification::Wall, |_| unreachable!());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelCache<E> {
    entries: HashMap<FaceClassification, E>,
}

impl<E> LabelCache<E> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of cached entities.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entity for a classification.
    #[must_use]
    pub fn get(&self, classification: FaceClassification) -> Option<&E> {
        self.entries.get(&classification)
    }

    /// Returns the cached entity for a classification, building it on first
    /// use.
    pub fn get_or_insert_with(
        &mut self,
        classification: FaceClassification,
        build: impl FnOnce(FaceClassification) -> E,
    ) -> &E {
        self.entries
            .entry(classification)
            .or_insert_with(|| build(classification))
    }

    /// Drops all cached entities.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

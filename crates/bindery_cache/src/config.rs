//! Configuration for memo caches.

/// Configuration for a [`MemoCache`](crate::MemoCache).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries before the oldest are evicted
    /// (`None` = unbounded).
    pub max_entries: Option<usize>,

    /// Whether to count hits and misses.
    pub track_stats: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: Some(1024),
            track_stats: true,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with no entry limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_entries: None,
            ..Self::default()
        }
    }

    /// Builder method to set the entry limit.
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Builder method to enable/disable hit and miss counting.
    #[must_use]
    pub fn with_track_stats(mut self, track: bool) -> Self {
        self.track_stats = track;
        self
    }
}

use crate::domain::NearestVersion;
use crate::error::{ReckonError, Result};
use crate::git::Repository;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock repository for testing without actual git operations
///
/// Returns a fixed nearest-version snapshot and short id, and counts how often
/// each was requested.
pub struct MockRepository {
    nearest: Option<NearestVersion>,
    short_id: Option<String>,
    locate_calls: AtomicUsize,
    short_id_calls: AtomicUsize,
}

impl MockRepository {
    /// Create a mock repository returning `nearest`
    pub fn new(nearest: NearestVersion) -> Self {
        MockRepository {
            nearest: Some(nearest),
            short_id: Some("abc1234".to_string()),
            locate_calls: AtomicUsize::new(0),
            short_id_calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock repository whose reads always fail
    pub fn failing() -> Self {
        MockRepository {
            nearest: None,
            short_id: None,
            locate_calls: AtomicUsize::new(0),
            short_id_calls: AtomicUsize::new(0),
        }
    }

    /// Set the HEAD short id
    pub fn with_short_id(mut self, short_id: impl Into<String>) -> Self {
        self.short_id = Some(short_id.into());
        self
    }

    /// Replace the snapshot returned by later reads
    pub fn set_nearest(&mut self, nearest: NearestVersion) {
        self.nearest = Some(nearest);
    }

    pub fn locate_calls(&self) -> usize {
        self.locate_calls.load(Ordering::SeqCst)
    }

    pub fn short_id_calls(&self) -> usize {
        self.short_id_calls.load(Ordering::SeqCst)
    }
}

impl Repository for MockRepository {
    fn locate_nearest_version(&self) -> Result<NearestVersion> {
        self.locate_calls.fetch_add(1, Ordering::SeqCst);
        self.nearest
            .clone()
            .ok_or_else(|| ReckonError::collaborator("No commits in mock repository"))
    }

    fn head_short_id(&self) -> Result<String> {
        self.short_id_calls.fetch_add(1, Ordering::SeqCst);
        self.short_id
            .clone()
            .ok_or_else(|| ReckonError::collaborator("Mock repository has no HEAD"))
    }
}

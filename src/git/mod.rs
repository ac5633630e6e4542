//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the repository reads
//! version inference needs, allowing for a real Git implementation and a mock
//! implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A fixed snapshot for testing
//!
//! # Usage
//!
//! The inference engine depends on the [Repository] trait rather than a
//! concrete implementation.
//!
//! ```rust
//! # use git_reckon::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let nearest = repo.locate_nearest_version()?;
//! println!("{} commits since {}", nearest.distance_from_normal, nearest.normal);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::NearestVersion;
use crate::error::Result;

/// Read-only repository queries used by version inference
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying failures (like `git2::Error`) to [crate::error::ReckonError::Git]
/// or [crate::error::ReckonError::Collaborator]; the engine surfaces them
/// unchanged.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation returning a fixed snapshot
pub trait Repository: Send {
    /// Locate the version tags nearest to HEAD
    ///
    /// Returns the nearest normal version, the nearest version of any kind,
    /// and the commit distance from HEAD to each. Must not modify the
    /// repository.
    ///
    /// # Returns
    /// * `Ok(NearestVersion)` - The snapshot; `0.0.0` stands in for a missing tag
    /// * `Err` - If HEAD cannot be resolved or the history cannot be walked
    fn locate_nearest_version(&self) -> Result<NearestVersion>;

    /// Get the abbreviated object id of the HEAD commit
    ///
    /// # Example
    /// ```rust
    /// # use git_reckon::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// let short_id = repo.head_short_id()?;
    /// println!("HEAD is at {}", short_id);
    /// # Ok(())
    /// # }
    /// ```
    fn head_short_id(&self) -> Result<String>;
}

//! Domain logic - pure version rules independent of git operations

pub mod nearest;
pub mod scope;
pub mod stage;
pub mod tag;
pub mod version;

pub use nearest::NearestVersion;
pub use scope::ChangeScope;
pub use stage::{Stage, StageSet, FINAL_STAGE};
pub use tag::TagPattern;
pub use version::VersionExt;

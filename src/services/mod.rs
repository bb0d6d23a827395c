// Service exports
pub mod cache;
pub mod directory;

pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use directory::{ProfileDirectory, DirectoryCollections, DirectoryError, normalize_profile};

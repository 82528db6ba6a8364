//! Local persistence for user overrides.

pub mod error;
pub mod medium;
pub mod overrides;

pub use error::{StoreError, StoreResult};
pub use medium::{FileMedium, MemoryMedium, StorageMedium};
pub use overrides::{OverrideStore, PersistedOverrideStore, DELETED_KEY, WEIGHTS_KEY};

/// Override store kept entirely in memory
pub type InMemoryOverrideStore = PersistedOverrideStore<MemoryMedium>;

/// Override store persisted under a data directory
pub type FileOverrideStore = PersistedOverrideStore<FileMedium>;

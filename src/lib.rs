//! Contact-loading core for a minimal contacts client.
//!
//! [`ContactLoader`] turns a permission collaborator and a read-only contact
//! store into the observable state a contact list screen renders: awaiting
//! permission, loading, loaded, or a recoverable error.

pub mod app;
pub mod loader;
pub mod models;
pub mod navigation;
pub mod permissions;
pub mod store;
pub mod utils;

pub use app::AppConfig;
pub use loader::{ContactLoader, LoadState};
pub use models::{Contact, ContactRow, FALLBACK_NAME};
pub use navigation::{Detail, Route};
pub use permissions::{PERMISSION_RATIONALE, PermissionStatus, Permissions, StaticPermissions};
pub use store::{ContactStore, FileStore, MemoryStore, StoreError};

//! inventa-store: read-only view of an inventory tree
//!
//! Provides the `AssetStore` trait used by the query engine, the typed content
//! model assets are parsed into, and a filesystem-backed implementation.

pub mod error;
pub mod fs;
pub mod traits;
pub mod value;

pub use error::StoreError;
pub use fs::FsStore;
pub use traits::AssetStore;
pub use value::{Content, FieldValue, ValueKind};

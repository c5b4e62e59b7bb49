//! FlowBench Data Handles
//!
//! Opaque handles over workflow result data, resolved by the host's
//! data-bundle subsystem:
//! - **DataHandle**: the handle contract (kind, size probe, materialization)
//! - **InMemoryHandle**: inline values
//! - **FileHandle**: references indirected through the filesystem
//! - **ErrorHandle**: ports that resolved to nothing renderable
//!
//! Handles are owned by the caller and read-only to every consumer in this
//! workspace; each materialization is an independent, stateless operation.
//!
//! # Example
//!
//! ```rust
//! use flowbench_data::{DataHandle, HandleKind, InMemoryHandle};
//!
//! let handle = InMemoryHandle::from_text("hello");
//! assert_eq!(handle.kind(), HandleKind::Value);
//! assert_eq!(handle.size_in_bytes().unwrap(), 5);
//! assert_eq!(handle.as_string().unwrap(), "hello");
//! ```

pub mod error;
pub mod file;
pub mod handle;
pub mod memory;

// Re-exports
pub use error::DataError;
pub use file::FileHandle;
pub use handle::{DataHandle, HandleKind};
pub use memory::{ErrorHandle, InMemoryHandle};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with data handles
    pub use crate::{DataError, DataHandle, ErrorHandle, FileHandle, HandleKind, InMemoryHandle};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Userhub Core
//!
//! Shared domain types, the user store abstraction, and error handling for
//! the Userhub services.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, `CreateUser`, `UpdateUser`
//! - **Core Traits**: `UserStore`, the seam the directory service is built on
//! - **Storage**: `InMemoryUserStore`, the process-local store
//! - **Error Handling**: Unified `HubError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use userhub_core::{CreateUser, InMemoryUserStore, UserStore};
//!
//! # tokio_test_block(async {
//! let store = InMemoryUserStore::new();
//! let user = store
//!     .create(CreateUser::new("Ada Lovelace", "ada@example.com").unwrap())
//!     .await
//!     .unwrap();
//! assert_eq!(user.id.as_str(), "1");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{HubError, Result};
pub use memory::InMemoryUserStore;
pub use storage::UserStore;
pub use types::{CreateUser, UpdateUser, User, UserId};
